// Subcommands: score, project, leaderboard, ballot.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use hofcast_core::leaderboard::{ballot_leaderboard_with, rank_with, LeaderboardFilter};
use hofcast_core::projection::{project, tier_timeline, ProjectionInput};
use hofcast_core::season::{latest_season, SeasonValue};
use hofcast_core::score::Tier;
use hofcast_core::SportModel;
use tracing::{debug, info};

use crate::cache::{CachedEvaluator, LookupCache};
use crate::config::{validate_horizon, validate_value_per_season, Config};
use crate::data::{Dataset, PositionCode};
use crate::output::{self, OutputFormat, ProjectionReport};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Score one player: JAWS, composite score, milestones, prediction
    Score(ScoreArgs),
    /// Project a player's score over future seasons
    Project(ProjectArgs),
    /// Rank players by JAWS
    Leaderboard(LeaderboardArgs),
    /// Rank the candidates on a ballot
    Ballot(BallotArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    pub player_id: String,
}

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    pub player_id: String,

    /// Value added per projected season (defaults to config)
    #[arg(long)]
    pub value: Option<f64>,

    /// Seasons to project (defaults to config, at most 40)
    #[arg(long)]
    pub horizon: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct LeaderboardArgs {
    /// Only players at this position (e.g. SS, SP, C, D, G)
    #[arg(long)]
    pub position: Option<String>,

    /// Only these tiers; repeatable (e.g. --tier strong --tier lock)
    #[arg(long = "tier")]
    pub tiers: Vec<String>,

    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct BallotArgs {
    /// Ballot year (defaults to the most recent in the data)
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub limit: Option<usize>,
}

/// Everything a command needs besides its own arguments.
pub struct RunContext<'a, S: SportModel> {
    pub sport: &'a S,
    pub config: &'a Config,
    pub dataset: &'a Dataset<S::Position>,
    pub cache: &'a dyn LookupCache,
    pub current_year: i32,
    pub format: OutputFormat,
}

pub fn run<S>(ctx: &RunContext<'_, S>, command: &Command, out: &mut dyn Write) -> Result<()>
where
    S: SportModel,
    S::Position: PositionCode,
{
    match command {
        Command::Score(args) => score(ctx, args, out),
        Command::Project(args) => project_player(ctx, args, out),
        Command::Leaderboard(args) => leaderboard(ctx, args, out),
        Command::Ballot(args) => ballot(ctx, args, out),
    }
}

fn find_profile<'d, P>(
    dataset: &'d Dataset<P>,
    player_id: &str,
) -> Result<&'d hofcast_core::pipeline::PlayerProfile<P>> {
    match dataset.profile(player_id) {
        Some(profile) => Ok(profile),
        None => bail!("unknown player id `{player_id}`"),
    }
}

fn score<S: SportModel>(ctx: &RunContext<'_, S>, args: &ScoreArgs, out: &mut dyn Write) -> Result<()> {
    let profile = find_profile(ctx.dataset, &args.player_id)?;
    let seasons = ctx.dataset.seasons.get(&profile.player_id);
    let mut evaluator = CachedEvaluator::new(ctx.cache);
    let evaluation = evaluator.evaluate(ctx.sport, profile, seasons)?;
    info!(
        player = %profile.player_id,
        score = evaluation.score.overall,
        tier = %evaluation.score.tier,
        "scored player"
    );

    match ctx.format {
        OutputFormat::Json => output::write_json(out, &evaluation),
        OutputFormat::Text => output::write_evaluation(out, &evaluation),
    }
}

fn project_player<S: SportModel>(
    ctx: &RunContext<'_, S>,
    args: &ProjectArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let value_per_season = args.value.unwrap_or(ctx.config.projection.value_per_season);
    let horizon = args.horizon.unwrap_or(ctx.config.projection.horizon);
    validate_value_per_season(value_per_season).context("invalid --value")?;
    validate_horizon(horizon).context("invalid --horizon")?;

    let profile = find_profile(ctx.dataset, &args.player_id)?;
    let seasons = ctx.dataset.seasons.get(&profile.player_id);
    let points = project(
        ctx.sport,
        &ProjectionInput {
            profile,
            seasons,
            current_year: projection_start_year(profile.is_active, seasons, ctx.current_year),
            current_age: profile.age,
            value_per_season,
            horizon,
        },
    )
    .with_context(|| format!("failed to project {}", profile.player_id))?;

    let report = ProjectionReport {
        player_id: profile.player_id.clone(),
        name: profile.name.clone(),
        value_per_season,
        timeline: tier_timeline(&points),
        points,
    };
    match ctx.format {
        OutputFormat::Json => output::write_json(out, &report),
        OutputFormat::Text => output::write_projection(out, &report),
    }
}

/// Year a projection starts from. A retired player's career ends at their
/// last season, whatever the calendar says.
pub fn projection_start_year(is_active: bool, seasons: &[SeasonValue], current_year: i32) -> i32 {
    if is_active {
        return current_year;
    }
    latest_season(seasons).unwrap_or(current_year)
}

/// Build a filter from command-line position and tier strings.
pub fn parse_filter<P: PositionCode>(
    position: Option<&str>,
    tiers: &[String],
) -> Result<LeaderboardFilter<P>> {
    let position = match position {
        Some(code) => match P::parse_code(code) {
            Some(p) => Some(p),
            None => bail!("unknown position `{code}`"),
        },
        None => None,
    };
    let tiers = tiers
        .iter()
        .map(|t| Tier::from_label(t).with_context(|| format!("unknown tier `{t}`")))
        .collect::<Result<Vec<_>>>()?;
    Ok(LeaderboardFilter { position, tiers })
}

fn leaderboard<S>(ctx: &RunContext<'_, S>, args: &LeaderboardArgs, out: &mut dyn Write) -> Result<()>
where
    S: SportModel,
    S::Position: PositionCode,
{
    let filter = parse_filter::<S::Position>(args.position.as_deref(), &args.tiers)?;
    let limit = args.limit.unwrap_or(ctx.config.leaderboard.limit);

    let mut evaluator = CachedEvaluator::new(ctx.cache);
    let mut ranked = rank_with(
        ctx.sport,
        &ctx.dataset.profiles,
        &ctx.dataset.seasons,
        &filter,
        |profile, seasons| evaluator.evaluate(ctx.sport, profile, seasons),
    )?;
    debug!(
        hits = evaluator.hits(),
        misses = evaluator.misses(),
        "leaderboard evaluations"
    );
    ranked.truncate(limit);

    match ctx.format {
        OutputFormat::Json => output::write_json(out, &ranked),
        OutputFormat::Text => output::write_leaderboard(out, &ranked),
    }
}

fn ballot<S>(ctx: &RunContext<'_, S>, args: &BallotArgs, out: &mut dyn Write) -> Result<()>
where
    S: SportModel,
    S::Position: PositionCode,
{
    let ballots = &ctx.dataset.ballots;
    let Some(year) = args
        .year
        .or_else(|| ballots.iter().map(|b| b.ballot_year).max())
    else {
        bail!("no ballot data loaded");
    };
    let on_ballot: Vec<_> = ballots
        .iter()
        .filter(|b| b.ballot_year == year)
        .cloned()
        .collect();
    if on_ballot.is_empty() {
        bail!("no ballot records for {year}");
    }

    let mut evaluator = CachedEvaluator::new(ctx.cache);
    let mut entries = ballot_leaderboard_with(
        ctx.sport,
        &ctx.dataset.profiles,
        &ctx.dataset.seasons,
        &on_ballot,
        &LeaderboardFilter::default(),
        |profile, seasons| evaluator.evaluate(ctx.sport, profile, seasons),
    )
    .context("failed to rank ballot")?;
    entries.truncate(args.limit.unwrap_or(ctx.config.leaderboard.limit));

    match ctx.format {
        OutputFormat::Json => output::write_json(out, &entries),
        OutputFormat::Text => output::write_ballot(out, &entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hofcast_baseball::BaseballPosition;

    #[test]
    fn filter_parses_position_and_tiers() {
        let filter = parse_filter::<BaseballPosition>(
            Some("ss"),
            &["strong".to_string(), "Hall of Famer".to_string()],
        )
        .unwrap();
        assert_eq!(filter.position, Some(BaseballPosition::ShortStop));
        assert_eq!(filter.tiers, vec![Tier::StrongCandidate, Tier::HallOfFamer]);
    }

    #[test]
    fn filter_rejects_unknown_values() {
        assert!(parse_filter::<BaseballPosition>(Some("QB"), &[]).is_err());
        assert!(parse_filter::<BaseballPosition>(None, &["legendary".to_string()]).is_err());
    }

    #[test]
    fn retired_players_project_from_their_last_season() {
        let seasons: Vec<SeasonValue> = [2001, 2014, 2009]
            .into_iter()
            .map(|y| SeasonValue::new(y, 3.0))
            .collect();
        assert_eq!(projection_start_year(false, &seasons, 2026), 2014);
        assert_eq!(projection_start_year(true, &seasons, 2026), 2026);
        assert_eq!(projection_start_year(false, &[], 2026), 2026);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = parse_filter::<BaseballPosition>(None, &[]).unwrap();
        assert!(filter.position.is_none());
        assert!(filter.tiers.is_empty());
    }
}
