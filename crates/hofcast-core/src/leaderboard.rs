// Leaderboards: evaluate a population, filter, and rank.
//
// Season sequences come from a caller-owned lookup rather than any global
// index. Filtering and sorting return new vectors and never touch the
// evaluated results.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::pipeline::{evaluate, Evaluation, PlayerProfile};
use crate::score::Tier;
use crate::season::SeasonValue;
use crate::sport::SportModel;

// ---------------------------------------------------------------------------
// Season lookup
// ---------------------------------------------------------------------------

/// Source of a player's normalized seasons. Players missing from the lookup
/// are evaluated with no seasons.
pub trait SeasonLookup {
    fn seasons_for(&self, player_id: &str) -> Cow<'_, [SeasonValue]>;
}

impl SeasonLookup for HashMap<String, Vec<SeasonValue>> {
    fn seasons_for(&self, player_id: &str) -> Cow<'_, [SeasonValue]> {
        self.get(player_id)
            .map(|s| Cow::Borrowed(s.as_slice()))
            .unwrap_or(Cow::Borrowed(&[]))
    }
}

impl SeasonLookup for BTreeMap<String, Vec<SeasonValue>> {
    fn seasons_for(&self, player_id: &str) -> Cow<'_, [SeasonValue]> {
        self.get(player_id)
            .map(|s| Cow::Borrowed(s.as_slice()))
            .unwrap_or(Cow::Borrowed(&[]))
    }
}

// ---------------------------------------------------------------------------
// Entries and filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry<P> {
    pub position: P,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardFilter<P> {
    pub position: Option<P>,
    /// Keep only these tiers. Empty keeps all.
    pub tiers: Vec<Tier>,
}

impl<P> Default for LeaderboardFilter<P> {
    fn default() -> Self {
        LeaderboardFilter {
            position: None,
            tiers: Vec::new(),
        }
    }
}

impl<P: PartialEq> LeaderboardFilter<P> {
    pub fn matches(&self, position: &P, tier: Tier) -> bool {
        let position_ok = self.position.as_ref().map_or(true, |p| p == position);
        let tier_ok = self.tiers.is_empty() || self.tiers.contains(&tier);
        position_ok && tier_ok
    }
}

/// Evaluate every profile against its seasons from `lookup`.
pub fn evaluate_population<S: SportModel, L: SeasonLookup + ?Sized>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
) -> Result<Vec<LeaderboardEntry<S::Position>>, CoreError> {
    evaluate_population_with(sport, profiles, lookup, |profile, seasons| {
        evaluate(sport, profile, seasons)
    })
}

/// Like [`evaluate_population`], but each player goes through `eval`, so a
/// caller can put a memo in front of the pipeline.
pub fn evaluate_population_with<S, L, E, F>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
    mut eval: F,
) -> Result<Vec<LeaderboardEntry<S::Position>>, E>
where
    S: SportModel,
    L: SeasonLookup + ?Sized,
    F: FnMut(&PlayerProfile<S::Position>, &[SeasonValue]) -> Result<Evaluation, E>,
{
    profiles
        .iter()
        .map(|profile| {
            let seasons = lookup.seasons_for(&profile.player_id);
            Ok(LeaderboardEntry {
                position: sport.refine_position(profile.position, &profile.career_stats),
                evaluation: eval(profile, &*seasons)?,
            })
        })
        .collect()
}

/// Entries matching `filter`, cloned.
pub fn filter_entries<P: Clone + PartialEq>(
    entries: &[LeaderboardEntry<P>],
    filter: &LeaderboardFilter<P>,
) -> Vec<LeaderboardEntry<P>> {
    entries
        .iter()
        .filter(|e| filter.matches(&e.position, e.evaluation.score.tier))
        .cloned()
        .collect()
}

/// Sort by JAWS descending, then score descending, then name.
pub fn sort_by_jaws<P>(entries: &mut [LeaderboardEntry<P>]) {
    entries.sort_by(|a, b| {
        b.evaluation
            .aggregate
            .jaws
            .partial_cmp(&a.evaluation.aggregate.jaws)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.evaluation.score.overall.cmp(&a.evaluation.score.overall))
            .then_with(|| a.evaluation.name.cmp(&b.evaluation.name))
    });
}

/// General leaderboard: evaluate, filter, sort by JAWS.
pub fn rank<S: SportModel, L: SeasonLookup + ?Sized>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
    filter: &LeaderboardFilter<S::Position>,
) -> Result<Vec<LeaderboardEntry<S::Position>>, CoreError> {
    rank_with(sport, profiles, lookup, filter, |profile, seasons| {
        evaluate(sport, profile, seasons)
    })
}

/// [`rank`] with a caller-supplied evaluator.
pub fn rank_with<S, L, E, F>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
    filter: &LeaderboardFilter<S::Position>,
    eval: F,
) -> Result<Vec<LeaderboardEntry<S::Position>>, E>
where
    S: SportModel,
    L: SeasonLookup + ?Sized,
    F: FnMut(&PlayerProfile<S::Position>, &[SeasonValue]) -> Result<Evaluation, E>,
{
    let evaluated = evaluate_population_with(sport, profiles, lookup, eval)?;
    let mut ranked = filter_entries(&evaluated, filter);
    sort_by_jaws(&mut ranked);
    debug!(
        sport = sport.name(),
        evaluated = evaluated.len(),
        kept = ranked.len(),
        "ranked leaderboard"
    );
    Ok(ranked)
}

// ---------------------------------------------------------------------------
// Ballot leaderboard
// ---------------------------------------------------------------------------

/// One player's appearance on a historical ballot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallotRecord {
    pub player_id: String,
    pub ballot_year: i32,
    pub vote_percentage: Option<f64>,
    pub is_elected: bool,
    pub is_new_to_ballot: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallotLeaderboardEntry<P> {
    pub entry: LeaderboardEntry<P>,
    pub ballot_year: i32,
    pub vote_percentage: Option<f64>,
    pub is_elected: bool,
    pub is_new_to_ballot: bool,
}

impl<P> BallotLeaderboardEntry<P> {
    /// Elected on this ballot or already on the inductee roster.
    pub fn is_confirmed_inductee(&self) -> bool {
        self.is_elected || self.entry.evaluation.score.tier == Tier::HallOfFamer
    }
}

/// Confirmed inductees first, then vote percentage descending with unknown
/// percentages last, then name.
pub fn sort_ballot<P>(entries: &mut [BallotLeaderboardEntry<P>]) {
    entries.sort_by(|a, b| {
        b.is_confirmed_inductee()
            .cmp(&a.is_confirmed_inductee())
            .then_with(|| match (a.vote_percentage, b.vote_percentage) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.entry.evaluation.name.cmp(&b.entry.evaluation.name))
    });
}

/// Ballot-candidate leaderboard for the given ballot records. Records whose
/// player has no profile are skipped.
pub fn ballot_leaderboard<S: SportModel, L: SeasonLookup + ?Sized>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
    ballots: &[BallotRecord],
    filter: &LeaderboardFilter<S::Position>,
) -> Result<Vec<BallotLeaderboardEntry<S::Position>>, CoreError> {
    ballot_leaderboard_with(sport, profiles, lookup, ballots, filter, |profile, seasons| {
        evaluate(sport, profile, seasons)
    })
}

/// [`ballot_leaderboard`] with a caller-supplied evaluator.
pub fn ballot_leaderboard_with<S, L, E, F>(
    sport: &S,
    profiles: &[PlayerProfile<S::Position>],
    lookup: &L,
    ballots: &[BallotRecord],
    filter: &LeaderboardFilter<S::Position>,
    mut eval: F,
) -> Result<Vec<BallotLeaderboardEntry<S::Position>>, E>
where
    S: SportModel,
    L: SeasonLookup + ?Sized,
    F: FnMut(&PlayerProfile<S::Position>, &[SeasonValue]) -> Result<Evaluation, E>,
{
    let by_id: HashMap<&str, &PlayerProfile<S::Position>> = profiles
        .iter()
        .map(|p| (p.player_id.as_str(), p))
        .collect();

    let mut entries = Vec::with_capacity(ballots.len());
    for ballot in ballots {
        let Some(profile) = by_id.get(ballot.player_id.as_str()) else {
            warn!(player = %ballot.player_id, "ballot record without profile, skipping");
            continue;
        };
        let seasons = lookup.seasons_for(&profile.player_id);
        let evaluation = eval(profile, &*seasons)?;
        let position = sport.refine_position(profile.position, &profile.career_stats);
        if !filter.matches(&position, evaluation.score.tier) {
            continue;
        }
        entries.push(BallotLeaderboardEntry {
            entry: LeaderboardEntry {
                position,
                evaluation,
            },
            ballot_year: ballot.ballot_year,
            vote_percentage: ballot.vote_percentage,
            is_elected: ballot.is_elected,
            is_new_to_ballot: ballot.is_new_to_ballot,
        });
    }

    sort_ballot(&mut entries);
    Ok(entries)
}
