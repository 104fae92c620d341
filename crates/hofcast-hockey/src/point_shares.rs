// Estimated point shares for one season line.
//
// Point shares proper need league-wide marginal-goal inputs that box scores
// do not carry, so the season value is a weighted box-score estimate. The
// coefficients are fixed; changing them changes every score.

use hofcast_core::round1;
use hofcast_core::season::RawSeason;
use hofcast_core::stats::StatLine;

use crate::stat_keys;

/// Games in a full modern season.
pub const FULL_SEASON_GAMES: f64 = 82.0;

/// Season values are clamped to this range.
pub const MAX_SEASON_VALUE: f64 = 30.0;

// Skater weights
const GOAL_WEIGHT: f64 = 0.12;
const ASSIST_WEIGHT: f64 = 0.08;
const PLUS_MINUS_WEIGHT: f64 = 0.06;
const POWER_PLAY_WEIGHT: f64 = 0.05;
const SHORT_HANDED_WEIGHT: f64 = 0.10;
const GAME_WINNER_WEIGHT: f64 = 0.15;

// Goalie weights
const WIN_WEIGHT: f64 = 0.12;
const SAVE_PCT_BASELINE: f64 = 0.900;
const SAVE_PCT_WEIGHT: f64 = 300.0;
const GAA_BASELINE: f64 = 3.00;
const GAA_WEIGHT: f64 = 3.0;
const SHUTOUT_WEIGHT: f64 = 0.3;

/// A line is a goaltending line when it carries save percentage or GAA.
pub fn is_goalie_line(stats: &StatLine) -> bool {
    stats.contains(stat_keys::SAVE_PCT) || stats.contains(stat_keys::GAA)
}

/// Save percentage as a fraction; sources that report 91.5 mean .915.
pub fn save_fraction(sv: f64) -> f64 {
    if sv > 1.0 {
        sv / 100.0
    } else {
        sv
    }
}

fn save_pct(stats: &StatLine) -> f64 {
    save_fraction(stats.value(stat_keys::SAVE_PCT))
}

pub fn skater_point_shares(stats: &StatLine, games_played: u32) -> f64 {
    if games_played == 0 {
        return 0.0;
    }
    let scale = games_played as f64 / FULL_SEASON_GAMES;
    let raw = GOAL_WEIGHT * stats.value(stat_keys::GOALS)
        + ASSIST_WEIGHT * stats.value(stat_keys::ASSISTS)
        + PLUS_MINUS_WEIGHT * stats.value(stat_keys::PLUS_MINUS).max(0.0)
        + POWER_PLAY_WEIGHT
            * (stats.value(stat_keys::PP_GOALS) + stats.value(stat_keys::PP_ASSISTS))
        + SHORT_HANDED_WEIGHT * stats.value(stat_keys::SH_GOALS)
        + GAME_WINNER_WEIGHT * stats.value(stat_keys::GW_GOALS);
    round1((raw * scale).clamp(0.0, MAX_SEASON_VALUE))
}

pub fn goalie_point_shares(stats: &StatLine, games_played: u32) -> f64 {
    if games_played == 0 {
        return 0.0;
    }
    let scale = games_played as f64 / FULL_SEASON_GAMES;
    let mut value = WIN_WEIGHT * stats.value(stat_keys::WINS)
        + SHUTOUT_WEIGHT * stats.value(stat_keys::SHUTOUTS);
    if stats.contains(stat_keys::SAVE_PCT) {
        value += (save_pct(stats) - SAVE_PCT_BASELINE).max(0.0) * SAVE_PCT_WEIGHT * scale;
    }
    if let Some(gaa) = stats.get(stat_keys::GAA) {
        value += (GAA_BASELINE - gaa).max(0.0) * GAA_WEIGHT * scale;
    }
    round1(value.clamp(0.0, MAX_SEASON_VALUE))
}

/// Value of one season line, skater or goalie.
pub fn season_point_shares(raw: &RawSeason) -> f64 {
    if is_goalie_line(&raw.stats) {
        goalie_point_shares(&raw.stats, raw.games_played)
    } else {
        skater_point_shares(&raw.stats, raw.games_played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn full_season_skater() {
        let stats = StatLine::new()
            .with("goals", 50.0)
            .with("assists", 60.0)
            .with("plus_minus", 20.0)
            .with("pp_goals", 15.0)
            .with("pp_assists", 21.0)
            .with("sh_goals", 2.0)
            .with("gw_goals", 8.0);
        // 6.0 + 4.8 + 1.2 + 1.8 + 0.2 + 1.2
        assert!(approx_eq(skater_point_shares(&stats, 82), 15.2, 1e-9));
    }

    #[test]
    fn partial_season_is_scaled() {
        let stats = StatLine::new().with("goals", 20.0).with("assists", 20.0);
        // (2.4 + 1.6) * 41/82
        assert_eq!(skater_point_shares(&stats, 41), 2.0);
    }

    #[test]
    fn negative_plus_minus_is_clipped() {
        let base = StatLine::new().with("goals", 10.0);
        let minus = base.clone().with("plus_minus", -30.0);
        assert_eq!(skater_point_shares(&base, 82), skater_point_shares(&minus, 82));
    }

    #[test]
    fn zero_games_is_zero() {
        let stats = StatLine::new().with("goals", 40.0);
        assert_eq!(skater_point_shares(&stats, 0), 0.0);
        let goalie = StatLine::new().with("wins", 40.0).with("gaa", 2.0);
        assert_eq!(goalie_point_shares(&goalie, 0), 0.0);
    }

    #[test]
    fn goalie_season() {
        let stats = StatLine::new()
            .with("wins", 40.0)
            .with("sv_pct", 0.920)
            .with("gaa", 2.20)
            .with("shutouts", 6.0);
        // 4.8 + 0.02*300 + 0.8*3 + 1.8
        assert!(approx_eq(goalie_point_shares(&stats, 82), 15.0, 1e-9));
    }

    #[test]
    fn goalie_below_baselines_gets_no_rate_bonus() {
        let stats = StatLine::new()
            .with("wins", 10.0)
            .with("sv_pct", 0.880)
            .with("gaa", 3.60);
        assert_eq!(goalie_point_shares(&stats, 40), 1.2);
    }

    #[test]
    fn save_pct_as_percentage() {
        let fraction = StatLine::new().with("sv_pct", 0.915);
        let percent = StatLine::new().with("sv_pct", 91.5);
        assert_eq!(goalie_point_shares(&fraction, 82), goalie_point_shares(&percent, 82));
    }

    #[test]
    fn values_clamped_to_thirty() {
        let stats = StatLine::new().with("goals", 300.0);
        assert_eq!(skater_point_shares(&stats, 82), MAX_SEASON_VALUE);
    }

    #[test]
    fn line_kind_detected_from_stats() {
        let goalie = RawSeason::regular(2000, 60, StatLine::new().with("wins", 30.0).with("gaa", 2.5));
        let skater = RawSeason::regular(2000, 82, StatLine::new().with("goals", 30.0));
        assert!(is_goalie_line(&goalie.stats));
        assert!(!is_goalie_line(&skater.stats));
        assert_eq!(season_point_shares(&skater), 3.6);
    }
}
