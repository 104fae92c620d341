// Baseball tables and the WAR season value for the shared pipeline.

pub mod awards;
pub mod baselines;
pub mod inductees;
pub mod milestones;
pub mod positions;
pub mod stat_keys;

use hofcast_core::awards::{AwardCategory, AwardCount};
use hofcast_core::comparison::PositionalBaseline;
use hofcast_core::milestones::Milestone;
use hofcast_core::season::RawSeason;
use hofcast_core::sport::{Induction, TrajectoryThresholds};
use hofcast_core::stats::CareerStats;
use hofcast_core::SportModel;

pub use positions::{BaseballPosition, PlayerType};

/// A season at or above this WAR counts as above average (all-star level).
pub const ABOVE_AVERAGE_WAR: f64 = 4.0;
/// Career length that earns the full longevity share.
pub const FULL_LONGEVITY_SEASONS: u32 = 15;

#[derive(Debug, Clone, Copy, Default)]
pub struct Baseball;

impl SportModel for Baseball {
    type Position = BaseballPosition;
    type PlayerType = PlayerType;

    fn name(&self) -> &'static str {
        "baseball"
    }

    /// WAR is supplied per line and passed through as-is, negative seasons
    /// included. A line with no games has no value.
    fn season_value(&self, raw: &RawSeason) -> f64 {
        if raw.games_played == 0 {
            return 0.0;
        }
        raw.stats.get(stat_keys::WAR).unwrap_or(0.0)
    }

    fn baseline_positions(&self) -> &'static [BaseballPosition] {
        &BaseballPosition::BASELINE
    }

    fn refine_position(&self, position: BaseballPosition, stats: &CareerStats) -> BaseballPosition {
        position.refine(stats)
    }

    fn position_category(&self, position: BaseballPosition) -> BaseballPosition {
        position.category()
    }

    fn baseline(&self, category: BaseballPosition) -> Option<PositionalBaseline> {
        baselines::baseline_for(category)
    }

    fn player_type(&self, position: BaseballPosition, stats: &CareerStats) -> PlayerType {
        PlayerType::for_position(position, stats)
    }

    fn milestones(&self) -> &'static [Milestone<PlayerType>] {
        milestones::MILESTONES
    }

    fn award_categories(&self) -> &'static [AwardCategory] {
        awards::AWARD_CATEGORIES
    }

    fn achievements(&self, player_id: &str) -> Vec<AwardCount> {
        awards::achievements(player_id)
    }

    fn inductee(&self, player_id: &str) -> Option<Induction> {
        inductees::inductee(player_id)
    }

    fn trajectory_thresholds(&self) -> TrajectoryThresholds {
        TrajectoryThresholds {
            above_average_value: ABOVE_AVERAGE_WAR,
            full_longevity_seasons: FULL_LONGEVITY_SEASONS,
        }
    }
}
