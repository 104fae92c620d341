// Season records: raw per-season input and the normalized value per season.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::round1;
use crate::stats::StatLine;

// ---------------------------------------------------------------------------
// Game type
// ---------------------------------------------------------------------------

/// Kind of games a raw stat line covers. Only regular-season lines feed the
/// value normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Regular,
    Postseason,
    Exhibition,
}

impl GameType {
    /// Parse a provider game-type code. Regular season is `R`; wildcard,
    /// division, league and world-series rounds (`F`, `D`, `L`, `W`) and the
    /// generic `P` are postseason; spring training and all-star games (`S`,
    /// `A`, `E`) are exhibitions.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "R" | "REGULAR" => Some(GameType::Regular),
            "P" | "F" | "D" | "L" | "W" | "POSTSEASON" | "PLAYOFFS" => Some(GameType::Postseason),
            "S" | "A" | "E" | "EXHIBITION" => Some(GameType::Exhibition),
            _ => None,
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, GameType::Regular)
    }
}

// ---------------------------------------------------------------------------
// Raw and normalized seasons
// ---------------------------------------------------------------------------

/// One raw stat line as delivered by the data boundary. A player traded
/// mid-season has one line per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeason {
    pub season: i32,
    pub team: Option<String>,
    pub age: Option<u32>,
    pub games_played: u32,
    pub game_type: GameType,
    pub league: Option<String>,
    pub stats: StatLine,
}

impl RawSeason {
    /// A regular-season line with no team/age/league metadata.
    pub fn regular(season: i32, games_played: u32, stats: StatLine) -> Self {
        RawSeason {
            season,
            team: None,
            age: None,
            games_played,
            game_type: GameType::Regular,
            league: None,
            stats,
        }
    }
}

/// The single normalized value for one season of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonValue {
    pub season: i32,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl SeasonValue {
    pub fn new(season: i32, value: f64) -> Self {
        SeasonValue {
            season,
            value,
            team: None,
            age: None,
        }
    }
}

/// Collapse multi-stint seasons into one entry per season year, ordered by
/// season. Values are summed and rounded; differing teams are joined with `/`
/// in first-seen order.
pub fn merge_stints(stints: Vec<SeasonValue>) -> Vec<SeasonValue> {
    let mut by_season: BTreeMap<i32, SeasonValue> = BTreeMap::new();
    for stint in stints {
        match by_season.get_mut(&stint.season) {
            Some(existing) => {
                existing.value = round1(existing.value + stint.value);
                if let Some(team) = stint.team {
                    existing.team = match existing.team.take() {
                        Some(prev) if prev.split('/').any(|t| t == team) => Some(prev),
                        Some(prev) => Some(format!("{prev}/{team}")),
                        None => Some(team),
                    };
                }
                if existing.age.is_none() {
                    existing.age = stint.age;
                }
            }
            None => {
                by_season.insert(stint.season, stint);
            }
        }
    }
    by_season.into_values().collect()
}

/// Most recent season year in a sequence, if any.
pub fn latest_season(seasons: &[SeasonValue]) -> Option<i32> {
    seasons.iter().map(|s| s.season).max()
}
