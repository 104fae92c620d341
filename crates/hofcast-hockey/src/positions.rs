// Hockey positions.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HockeyPosition {
    Center,
    LeftWing,
    RightWing,
    Defense,
    Goalie,
}

impl HockeyPosition {
    pub const ALL: [HockeyPosition; 5] = [
        HockeyPosition::Center,
        HockeyPosition::LeftWing,
        HockeyPosition::RightWing,
        HockeyPosition::Defense,
        HockeyPosition::Goalie,
    ];

    /// Parse a position abbreviation. A generic forward ("F") is treated as a
    /// center, a generic winger ("W") as a left wing.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" | "F" => Some(HockeyPosition::Center),
            "LW" | "L" | "W" => Some(HockeyPosition::LeftWing),
            "RW" | "R" => Some(HockeyPosition::RightWing),
            "D" | "LD" | "RD" => Some(HockeyPosition::Defense),
            "G" => Some(HockeyPosition::Goalie),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            HockeyPosition::Center => "C",
            HockeyPosition::LeftWing => "LW",
            HockeyPosition::RightWing => "RW",
            HockeyPosition::Defense => "D",
            HockeyPosition::Goalie => "G",
        }
    }

    pub fn is_goalie(&self) -> bool {
        *self == HockeyPosition::Goalie
    }
}

impl fmt::Display for HockeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Milestone cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    Skater,
    Goalie,
}

impl From<HockeyPosition> for PlayerType {
    fn from(position: HockeyPosition) -> Self {
        if position.is_goalie() {
            PlayerType::Goalie
        } else {
            PlayerType::Skater
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_variants() {
        assert_eq!(HockeyPosition::from_str_pos("C"), Some(HockeyPosition::Center));
        assert_eq!(HockeyPosition::from_str_pos("lw"), Some(HockeyPosition::LeftWing));
        assert_eq!(HockeyPosition::from_str_pos("RW"), Some(HockeyPosition::RightWing));
        assert_eq!(HockeyPosition::from_str_pos("D"), Some(HockeyPosition::Defense));
        assert_eq!(HockeyPosition::from_str_pos("G"), Some(HockeyPosition::Goalie));
        assert_eq!(HockeyPosition::from_str_pos("F"), Some(HockeyPosition::Center));
        assert_eq!(HockeyPosition::from_str_pos("SS"), None);
    }

    #[test]
    fn display_round_trips_through_parser() {
        for pos in HockeyPosition::ALL {
            assert_eq!(HockeyPosition::from_str_pos(&pos.to_string()), Some(pos));
        }
    }

    #[test]
    fn player_type_split() {
        assert_eq!(PlayerType::from(HockeyPosition::Goalie), PlayerType::Goalie);
        assert_eq!(PlayerType::from(HockeyPosition::Defense), PlayerType::Skater);
    }
}
