// Career milestone table.
//
// Weights per player type sum to the milestone component maximum (20), so a
// player who reaches every milestone for their type earns the full component.
// Relievers are checked for saves or holds depending on debut year; the two
// bounds are complementary.

use hofcast_core::milestones::{DebutBound, Milestone};

use crate::positions::PlayerType;
use crate::stat_keys;

/// First season in which holds are the relief milestone instead of saves.
pub const HOLDS_ERA_START: i32 = 2010;

const HITTER: &[PlayerType] = &[PlayerType::Hitter];
const STARTER: &[PlayerType] = &[PlayerType::StartingPitcher];
const RELIEVER: &[PlayerType] = &[PlayerType::ReliefPitcher];

pub static MILESTONES: &[Milestone<PlayerType>] = &[
    // Hitters
    Milestone {
        label: "3,000 Hits",
        stat_key: stat_keys::HITS,
        threshold: 3000.0,
        applies_to: HITTER,
        weight: 6.0,
        hof_average: 2414.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "500 Home Runs",
        stat_key: stat_keys::HOME_RUNS,
        threshold: 500.0,
        applies_to: HITTER,
        weight: 6.0,
        hof_average: 277.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "1,500 RBI",
        stat_key: stat_keys::RBI,
        threshold: 1500.0,
        applies_to: HITTER,
        weight: 3.0,
        hof_average: 1261.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: ".300 Career Average",
        stat_key: stat_keys::BATTING_AVERAGE,
        threshold: 0.300,
        applies_to: HITTER,
        weight: 3.0,
        hof_average: 0.303,
        is_rate: true,
        rate_floor: Some(0.250),
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "400 Stolen Bases",
        stat_key: stat_keys::STOLEN_BASES,
        threshold: 400.0,
        applies_to: HITTER,
        weight: 2.0,
        hof_average: 218.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    // Starting pitchers
    Milestone {
        label: "300 Wins",
        stat_key: stat_keys::WINS,
        threshold: 300.0,
        applies_to: STARTER,
        weight: 7.0,
        hof_average: 253.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "3,000 Strikeouts",
        stat_key: stat_keys::STRIKEOUTS,
        threshold: 3000.0,
        applies_to: STARTER,
        weight: 6.0,
        hof_average: 2203.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "Sub-3.00 ERA",
        stat_key: stat_keys::ERA,
        threshold: 3.00,
        applies_to: STARTER,
        weight: 4.0,
        hof_average: 2.96,
        is_rate: true,
        rate_floor: Some(4.00),
        lower_is_better: true,
        debut_bound: None,
    },
    Milestone {
        label: "3,500 Innings",
        stat_key: stat_keys::INNINGS,
        threshold: 3500.0,
        applies_to: STARTER,
        weight: 3.0,
        hof_average: 3825.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    // Relief pitchers
    Milestone {
        label: "300 Saves",
        stat_key: stat_keys::SAVES,
        threshold: 300.0,
        applies_to: RELIEVER,
        weight: 10.0,
        hof_average: 390.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: Some(DebutBound::Before(HOLDS_ERA_START)),
    },
    Milestone {
        label: "200 Holds",
        stat_key: stat_keys::HOLDS,
        threshold: 200.0,
        applies_to: RELIEVER,
        weight: 10.0,
        hof_average: 150.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: Some(DebutBound::OnOrAfter(HOLDS_ERA_START)),
    },
    Milestone {
        label: "Sub-2.75 ERA",
        stat_key: stat_keys::ERA,
        threshold: 2.75,
        applies_to: RELIEVER,
        weight: 6.0,
        hof_average: 2.71,
        is_rate: true,
        rate_floor: Some(4.00),
        lower_is_better: true,
        debut_bound: None,
    },
    Milestone {
        label: "1,000 Games Pitched",
        stat_key: stat_keys::GAMES,
        threshold: 1000.0,
        applies_to: RELIEVER,
        weight: 4.0,
        hof_average: 894.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use hofcast_core::milestones::evaluate_milestones;
    use hofcast_core::score::MILESTONES_MAX;
    use hofcast_core::stats::StatLine;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn weight_for(player_type: PlayerType, debut: i32) -> f64 {
        MILESTONES
            .iter()
            .filter(|m| m.applies(&player_type, Some(debut)))
            .map(|m| m.weight)
            .sum()
    }

    #[test]
    fn weights_fill_component_for_every_type() {
        for debut in [1980, 2015] {
            assert!(approx_eq(weight_for(PlayerType::Hitter, debut), MILESTONES_MAX, 1e-9));
            assert!(approx_eq(weight_for(PlayerType::StartingPitcher, debut), MILESTONES_MAX, 1e-9));
            assert!(approx_eq(weight_for(PlayerType::ReliefPitcher, debut), MILESTONES_MAX, 1e-9));
        }
    }

    #[test]
    fn saves_and_holds_never_both_apply() {
        for debut in 1950..2030 {
            let labels: Vec<&str> = MILESTONES
                .iter()
                .filter(|m| m.applies(&PlayerType::ReliefPitcher, Some(debut)))
                .map(|m| m.label)
                .collect();
            let saves = labels.contains(&"300 Saves");
            let holds = labels.contains(&"200 Holds");
            assert!(saves != holds, "debut {debut}");
        }
    }

    #[test]
    fn classic_closer_reaches_saves() {
        let stats = StatLine::new()
            .with("sv", 652.0)
            .with("era", 2.21)
            .with("g", 1115.0);
        let results = evaluate_milestones(MILESTONES, &PlayerType::ReliefPitcher, Some(1995), &stats);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.reached));
    }

    #[test]
    fn batting_average_progress_starts_at_floor() {
        let stats = StatLine::new().with("avg", 0.275);
        let results = evaluate_milestones(MILESTONES, &PlayerType::Hitter, None, &stats);
        let avg = results.iter().find(|r| r.stat_key == "avg").unwrap();
        assert!(!avg.reached);
        assert_eq!(avg.progress_pct, 50.0);
    }
}
