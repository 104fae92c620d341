// Full single-player evaluation: aggregate -> compare -> score -> predict.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::awards::{aggregate_awards, award_points, AwardCount, AwardRecord};
use crate::comparison::{compare, Comparison, PositionalBaseline};
use crate::error::CoreError;
use crate::jaws::{aggregate, CareerAggregate};
use crate::milestones::{evaluate_milestones, total_credit, MilestoneResult};
use crate::predict::{predict, Prediction};
use crate::score::{compute_score, CompositeScore, ScoreInputs};
use crate::season::SeasonValue;
use crate::sport::{Induction, SportModel, TrajectoryThresholds};
use crate::stats::CareerStats;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Identity and career-level inputs for one player. Seasons are supplied
/// separately so the same profile can be re-run with projected seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile<P> {
    pub player_id: String,
    pub name: String,
    pub position: P,
    pub is_active: bool,
    pub debut_year: Option<i32>,
    pub age: Option<u32>,
    #[serde(default)]
    pub career_stats: CareerStats,
    #[serde(default)]
    pub awards: Vec<AwardRecord>,
}

impl<P> PlayerProfile<P> {
    pub fn new(player_id: &str, name: &str, position: P) -> Self {
        PlayerProfile {
            player_id: player_id.to_string(),
            name: name.to_string(),
            position,
            is_active: false,
            debut_year: None,
            age: None,
            career_stats: CareerStats::new(),
            awards: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Aggregate, comparison and score for one season sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub aggregate: CareerAggregate,
    pub comparison: Comparison,
    pub score: CompositeScore,
}

/// Everything the engine reports for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub player_id: String,
    pub name: String,
    pub sport: String,
    pub position: String,
    pub player_type: String,
    pub aggregate: CareerAggregate,
    pub comparison: Comparison,
    pub score: CompositeScore,
    pub prediction: Prediction,
    pub milestones: Vec<MilestoneResult>,
    pub awards: Vec<AwardCount>,
    pub achievements: Vec<AwardCount>,
    pub induction: Option<Induction>,
}

impl Evaluation {
    /// Milestones worth displaying (reached or at least 20% of the way).
    pub fn surfaced_milestones(&self) -> impl Iterator<Item = &MilestoneResult> {
        self.milestones.iter().filter(|m| m.is_surfaced())
    }
}

// ---------------------------------------------------------------------------
// Prepared player
// ---------------------------------------------------------------------------

/// The season-independent part of an evaluation, resolved once per player.
///
/// Awards, milestones, the baseline and the inductee lookup do not depend on
/// the season sequence, so projections re-score seasons against one prepared
/// player instead of repeating those lookups every year.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPlayer {
    pub player_id: String,
    pub name: String,
    pub sport: String,
    pub position: String,
    pub position_category: String,
    pub player_type: String,
    pub baseline: PositionalBaseline,
    pub milestones: Vec<MilestoneResult>,
    pub awards: Vec<AwardCount>,
    pub achievements: Vec<AwardCount>,
    pub award_points: f64,
    pub milestone_credit: f64,
    pub thresholds: TrajectoryThresholds,
    pub induction: Option<Induction>,
    pub is_active: bool,
}

/// Resolve the season-independent inputs for a player.
///
/// `seasons` is only consulted to infer a debut year when the profile does not
/// carry one.
pub fn prepare<S: SportModel>(
    sport: &S,
    profile: &PlayerProfile<S::Position>,
    seasons: &[SeasonValue],
) -> Result<PreparedPlayer, CoreError> {
    let career_stats = sport.normalize_career_stats(&profile.career_stats);
    let position = sport.refine_position(profile.position, &career_stats);
    let category = sport.position_category(position);
    let baseline = sport.baseline_for(position)?;
    baseline.validate(&category.to_string())?;

    let player_type = sport.player_type(position, &career_stats);
    let debut_year = profile
        .debut_year
        .or_else(|| seasons.iter().map(|s| s.season).min());

    let milestones = evaluate_milestones(
        sport.milestones(),
        &player_type,
        debut_year,
        &career_stats,
    );
    let awards = aggregate_awards(sport.award_categories(), &profile.awards);
    let award_points = award_points(sport.award_categories(), &awards);
    let milestone_credit = total_credit(&milestones);

    Ok(PreparedPlayer {
        player_id: profile.player_id.clone(),
        name: profile.name.clone(),
        sport: sport.name().to_string(),
        position: position.to_string(),
        position_category: category.to_string(),
        player_type: format!("{player_type:?}"),
        baseline,
        milestones,
        awards,
        achievements: sport.achievements(&profile.player_id),
        award_points,
        milestone_credit,
        thresholds: sport.trajectory_thresholds(),
        induction: sport.inductee(&profile.player_id),
        is_active: profile.is_active,
    })
}

impl PreparedPlayer {
    /// Aggregate, compare and score a season sequence for this player.
    pub fn score_seasons(
        &self,
        seasons: &[SeasonValue],
        is_active: bool,
    ) -> Result<ScoredCareer, CoreError> {
        let aggregate = aggregate(seasons, &self.position_category);
        let comparison = compare(&aggregate, &self.baseline)?;
        let score = compute_score(&ScoreInputs {
            comparison: &comparison,
            seasons,
            award_points: self.award_points,
            milestone_credit: self.milestone_credit,
            thresholds: self.thresholds,
            is_active,
            is_inductee: self.induction.is_some(),
        });
        Ok(ScoredCareer {
            aggregate,
            comparison,
            score,
        })
    }

    /// Score the player's actual seasons and assemble the full evaluation.
    pub fn evaluate(&self, seasons: &[SeasonValue]) -> Result<Evaluation, CoreError> {
        let scored = self.score_seasons(seasons, self.is_active)?;
        let prediction = predict(scored.score.overall);

        debug!(
            player = %self.player_id,
            jaws = scored.aggregate.jaws,
            overall = scored.score.overall,
            tier = %scored.score.tier,
            "evaluated player"
        );

        Ok(Evaluation {
            player_id: self.player_id.clone(),
            name: self.name.clone(),
            sport: self.sport.clone(),
            position: self.position.clone(),
            player_type: self.player_type.clone(),
            aggregate: scored.aggregate,
            comparison: scored.comparison,
            score: scored.score,
            prediction,
            milestones: self.milestones.clone(),
            awards: self.awards.clone(),
            achievements: self.achievements.clone(),
            induction: self.induction,
        })
    }
}

/// Evaluate one player end to end.
pub fn evaluate<S: SportModel>(
    sport: &S,
    profile: &PlayerProfile<S::Position>,
    seasons: &[SeasonValue],
) -> Result<Evaluation, CoreError> {
    prepare(sport, profile, seasons)?.evaluate(seasons)
}
