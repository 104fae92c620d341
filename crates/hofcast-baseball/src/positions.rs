// Baseball positions and the hitter / starter / reliever split.

use serde::{Deserialize, Serialize};
use std::fmt;

use hofcast_core::stats::CareerStats;

use crate::stat_keys;

/// Share of games started at or above which a generic pitcher is treated as a
/// starter.
pub const STARTER_GS_SHARE: f64 = 0.5;

/// Primary fielding position as listed for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseballPosition {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
    StartingPitcher,
    ReliefPitcher,
    /// A pitcher listed without a starter/reliever role.
    Pitcher,
}

impl BaseballPosition {
    /// Every position that carries a baseline of its own.
    pub const BASELINE: [BaseballPosition; 10] = [
        BaseballPosition::Catcher,
        BaseballPosition::FirstBase,
        BaseballPosition::SecondBase,
        BaseballPosition::ThirdBase,
        BaseballPosition::ShortStop,
        BaseballPosition::LeftField,
        BaseballPosition::CenterField,
        BaseballPosition::RightField,
        BaseballPosition::StartingPitcher,
        BaseballPosition::ReliefPitcher,
    ];

    /// Parse a position abbreviation.
    ///
    /// - "OF" -> CenterField (generic outfield)
    /// - "P" -> Pitcher, resolved later from games started
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(BaseballPosition::Catcher),
            "1B" => Some(BaseballPosition::FirstBase),
            "2B" => Some(BaseballPosition::SecondBase),
            "3B" => Some(BaseballPosition::ThirdBase),
            "SS" => Some(BaseballPosition::ShortStop),
            "LF" => Some(BaseballPosition::LeftField),
            "CF" => Some(BaseballPosition::CenterField),
            "RF" => Some(BaseballPosition::RightField),
            "OF" => Some(BaseballPosition::CenterField),
            "DH" => Some(BaseballPosition::DesignatedHitter),
            "SP" => Some(BaseballPosition::StartingPitcher),
            "RP" | "CL" => Some(BaseballPosition::ReliefPitcher),
            "P" => Some(BaseballPosition::Pitcher),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            BaseballPosition::Catcher => "C",
            BaseballPosition::FirstBase => "1B",
            BaseballPosition::SecondBase => "2B",
            BaseballPosition::ThirdBase => "3B",
            BaseballPosition::ShortStop => "SS",
            BaseballPosition::LeftField => "LF",
            BaseballPosition::CenterField => "CF",
            BaseballPosition::RightField => "RF",
            BaseballPosition::DesignatedHitter => "DH",
            BaseballPosition::StartingPitcher => "SP",
            BaseballPosition::ReliefPitcher => "RP",
            BaseballPosition::Pitcher => "P",
        }
    }

    pub fn is_pitcher(&self) -> bool {
        matches!(
            self,
            BaseballPosition::StartingPitcher
                | BaseballPosition::ReliefPitcher
                | BaseballPosition::Pitcher
        )
    }

    /// Baseline category. Designated hitters are measured against first
    /// basemen; an unresolved pitcher against starters.
    pub fn category(&self) -> BaseballPosition {
        match self {
            BaseballPosition::DesignatedHitter => BaseballPosition::FirstBase,
            BaseballPosition::Pitcher => BaseballPosition::StartingPitcher,
            other => *other,
        }
    }

    /// Resolve a generic "P" into starter or reliever from the share of games
    /// started. Other positions are returned unchanged.
    pub fn refine(self, stats: &CareerStats) -> BaseballPosition {
        if self != BaseballPosition::Pitcher {
            return self;
        }
        let games = stats.value(stat_keys::GAMES);
        if games <= 0.0 {
            return BaseballPosition::StartingPitcher;
        }
        if stats.value(stat_keys::GAMES_STARTED) / games >= STARTER_GS_SHARE {
            BaseballPosition::StartingPitcher
        } else {
            BaseballPosition::ReliefPitcher
        }
    }
}

impl fmt::Display for BaseballPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Milestone cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    Hitter,
    StartingPitcher,
    ReliefPitcher,
}

impl PlayerType {
    pub fn for_position(position: BaseballPosition, stats: &CareerStats) -> Self {
        match position.refine(stats) {
            BaseballPosition::ReliefPitcher => PlayerType::ReliefPitcher,
            p if p.is_pitcher() => PlayerType::StartingPitcher,
            _ => PlayerType::Hitter,
        }
    }
}
