// Hockey tables and the estimated point-shares season value for the shared
// pipeline.

pub mod awards;
pub mod baselines;
pub mod inductees;
pub mod milestones;
pub mod point_shares;
pub mod positions;
pub mod stat_keys;

use hofcast_core::awards::{AwardCategory, AwardCount};
use hofcast_core::comparison::PositionalBaseline;
use hofcast_core::milestones::Milestone;
use hofcast_core::season::RawSeason;
use hofcast_core::sport::{Induction, TrajectoryThresholds};
use hofcast_core::stats::CareerStats;
use hofcast_core::SportModel;

pub use positions::{HockeyPosition, PlayerType};

/// A season at or above this many point shares counts as above average.
pub const ABOVE_AVERAGE_POINT_SHARES: f64 = 7.0;
pub const FULL_LONGEVITY_SEASONS: u32 = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct Hockey;

impl SportModel for Hockey {
    type Position = HockeyPosition;
    type PlayerType = PlayerType;

    fn name(&self) -> &'static str {
        "hockey"
    }

    fn season_value(&self, raw: &RawSeason) -> f64 {
        point_shares::season_point_shares(raw)
    }

    fn baseline_positions(&self) -> &'static [HockeyPosition] {
        &HockeyPosition::ALL
    }

    fn baseline(&self, category: HockeyPosition) -> Option<PositionalBaseline> {
        Some(baselines::baseline_for(category))
    }

    /// Save percentage as a fraction, and points from goals plus assists when
    /// the source leaves the total out.
    fn normalize_career_stats(&self, stats: &CareerStats) -> CareerStats {
        let mut out = stats.clone();
        if let Some(sv) = stats.get(stat_keys::SAVE_PCT) {
            out.insert(stat_keys::SAVE_PCT, point_shares::save_fraction(sv));
        }
        if !stats.contains(stat_keys::POINTS) {
            if let (Some(goals), Some(assists)) =
                (stats.get(stat_keys::GOALS), stats.get(stat_keys::ASSISTS))
            {
                out.insert(stat_keys::POINTS, goals + assists);
            }
        }
        out
    }

    fn player_type(&self, position: HockeyPosition, _stats: &CareerStats) -> PlayerType {
        PlayerType::from(position)
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
            above_average_value: ABOVE_AVERAGE_POINT_SHARES,
            full_longevity_seasons: FULL_LONGEVITY_SEASONS,
        }
    }
}
