// The capability set a sport supplies to the shared pipeline.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::awards::{AwardCategory, AwardCount};
use crate::comparison::PositionalBaseline;
use crate::error::CoreError;
use crate::milestones::Milestone;
use crate::season::{merge_stints, RawSeason, SeasonValue};
use crate::stats::CareerStats;

/// How an inductee was elected: on the annual ballot, or by a selection or
/// veterans committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InductionPath {
    Ballot,
    Committee,
}

/// A confirmed historical inductee entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Induction {
    pub year: i32,
    pub path: InductionPath,
}

/// Season-value thresholds for the trajectory component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryThresholds {
    /// A season at or above this value counts as above average.
    pub above_average_value: f64,
    /// Career length (seasons) that earns the full longevity share.
    pub full_longevity_seasons: u32,
}

/// Sport-specific tables and formulas.
///
/// Everything downstream of season normalization (aggregation, comparison,
/// scoring, prediction, projection, ranking) is shared; a sport only
/// describes its positions, reference tables and value metric.
pub trait SportModel {
    type Position: Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + 'static;
    type PlayerType: Copy + Eq + fmt::Debug + 'static;

    fn name(&self) -> &'static str;

    /// Value of one regular-season stat line.
    fn season_value(&self, raw: &RawSeason) -> f64;

    /// Positions that carry a baseline entry.
    fn baseline_positions(&self) -> &'static [Self::Position];

    /// Resolve a listed position that is too generic to pick a baseline
    /// (e.g. a bare "P") using career stats.
    fn refine_position(&self, position: Self::Position, _stats: &CareerStats) -> Self::Position {
        position
    }

    /// The position whose baseline a player at `position` is compared to.
    fn position_category(&self, position: Self::Position) -> Self::Position {
        position
    }

    fn baseline(&self, category: Self::Position) -> Option<PositionalBaseline>;

    /// Bring career totals to the units the milestone table expects, filling
    /// stats that can be derived from others.
    fn normalize_career_stats(&self, stats: &CareerStats) -> CareerStats {
        stats.clone()
    }

    fn player_type(&self, position: Self::Position, stats: &CareerStats) -> Self::PlayerType;

    fn milestones(&self) -> &'static [Milestone<Self::PlayerType>];

    fn award_categories(&self) -> &'static [AwardCategory];

    /// Identity-keyed achievements (no-hitters, championships) shown beside
    /// awards but not scored.
    fn achievements(&self, player_id: &str) -> Vec<AwardCount>;

    fn inductee(&self, player_id: &str) -> Option<Induction>;

    fn trajectory_thresholds(&self) -> TrajectoryThresholds;

    /// Normalize raw lines into one value per season: non-regular-season lines
    /// are dropped, each line is valued, and traded seasons are merged.
    fn normalize_seasons(&self, raw: &[RawSeason]) -> Vec<SeasonValue> {
        let stints = raw
            .iter()
            .filter(|r| r.game_type.is_regular())
            .map(|r| SeasonValue {
                season: r.season,
                value: self.season_value(r),
                team: r.team.clone(),
                age: r.age,
            })
            .collect();
        merge_stints(stints)
    }

    /// Resolve the baseline for a player's position, failing on a table gap.
    fn baseline_for(&self, position: Self::Position) -> Result<PositionalBaseline, CoreError> {
        let category = self.position_category(position);
        self.baseline(category)
            .ok_or_else(|| CoreError::MissingBaseline {
                sport: self.name().to_string(),
                position: category.to_string(),
            })
    }
}

/// Check that every baseline position has a positive baseline. Run once at
/// start-up so a broken table fails before any player is scored.
pub fn validate_sport_model<S: SportModel>(sport: &S) -> Result<(), CoreError> {
    for &position in sport.baseline_positions() {
        let baseline = sport.baseline_for(position)?;
        baseline.validate(&position.to_string())?;
    }
    Ok(())
}
