// Career milestone table. Skater and goalie weights each sum to 20.

use hofcast_core::milestones::Milestone;

use crate::positions::PlayerType;
use crate::stat_keys;

const SKATER: &[PlayerType] = &[PlayerType::Skater];
const GOALIE: &[PlayerType] = &[PlayerType::Goalie];

pub static MILESTONES: &[Milestone<PlayerType>] = &[
    Milestone {
        label: "500 Goals",
        stat_key: stat_keys::GOALS,
        threshold: 500.0,
        applies_to: SKATER,
        weight: 7.0,
        hof_average: 402.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "1,000 Points",
        stat_key: stat_keys::POINTS,
        threshold: 1000.0,
        applies_to: SKATER,
        weight: 7.0,
        hof_average: 1032.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "700 Assists",
        stat_key: stat_keys::ASSISTS,
        threshold: 700.0,
        applies_to: SKATER,
        weight: 3.0,
        hof_average: 630.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "1,500 Games Played",
        stat_key: stat_keys::GAMES_PLAYED,
        threshold: 1500.0,
        applies_to: SKATER,
        weight: 3.0,
        hof_average: 1180.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "400 Wins",
        stat_key: stat_keys::WINS,
        threshold: 400.0,
        applies_to: GOALIE,
        weight: 7.0,
        hof_average: 388.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "60 Shutouts",
        stat_key: stat_keys::SHUTOUTS,
        threshold: 60.0,
        applies_to: GOALIE,
        weight: 5.0,
        hof_average: 58.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "Sub-2.50 GAA",
        stat_key: stat_keys::GAA,
        threshold: 2.50,
        applies_to: GOALIE,
        weight: 4.0,
        hof_average: 2.52,
        is_rate: true,
        rate_floor: Some(3.20),
        lower_is_better: true,
        debut_bound: None,
    },
    Milestone {
        label: ".915 Save Percentage",
        stat_key: stat_keys::SAVE_PCT,
        threshold: 0.915,
        applies_to: GOALIE,
        weight: 4.0,
        hof_average: 0.912,
        is_rate: true,
        rate_floor: Some(0.895),
        lower_is_better: false,
        debut_bound: None,
    },
];
