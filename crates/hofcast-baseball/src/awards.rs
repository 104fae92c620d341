// Award categories and the no-hitter / perfect-game overlay.

use hofcast_core::awards::{AwardCategory, AwardCount};

pub static AWARD_CATEGORIES: &[AwardCategory] = &[
    AwardCategory {
        label: "MVP",
        ids: &["MVP", "ALMVP", "NLMVP"],
        points: 6.0,
        max_points: 18.0,
    },
    AwardCategory {
        label: "Cy Young",
        ids: &["CYA", "CY", "ALCYA", "NLCYA"],
        points: 6.0,
        max_points: 18.0,
    },
    AwardCategory {
        label: "All-Star",
        ids: &["AS", "ASG", "ALAS", "NLAS"],
        points: 1.0,
        max_points: 10.0,
    },
    AwardCategory {
        label: "Gold Glove",
        ids: &["GG", "ALGG", "NLGG"],
        points: 0.5,
        max_points: 5.0,
    },
    AwardCategory {
        label: "Silver Slugger",
        ids: &["SS", "ALSS", "NLSS"],
        points: 0.5,
        max_points: 4.0,
    },
    AwardCategory {
        label: "Batting Title",
        ids: &["BT", "ALBT", "NLBT"],
        points: 1.0,
        max_points: 4.0,
    },
    AwardCategory {
        label: "Reliever of the Year",
        ids: &["RY", "MRA", "TRA", "ALRY", "NLRY"],
        points: 2.0,
        max_points: 6.0,
    },
    AwardCategory {
        label: "Rookie of the Year",
        ids: &["ROY", "ALROY", "NLROY"],
        points: 2.0,
        max_points: 2.0,
    },
    AwardCategory {
        label: "World Series MVP",
        ids: &["WSMVP"],
        points: 2.0,
        max_points: 4.0,
    },
];

/// (player id, no-hitters, perfect games). A perfect game is also counted as
/// a no-hitter.
const NO_HITTERS: &[(&str, u32, u32)] = &[
    ("ryanno01", 7, 0),
    ("koufasa01", 4, 1),
    ("verlaju01", 3, 0),
    ("youngcy01", 3, 1),
    ("fellebo01", 3, 0),
    ("johnsra05", 2, 1),
    ("hallaro01", 2, 1),
    ("bunniji01", 2, 1),
    ("scherma01", 2, 0),
    ("buehrma01", 2, 1),
    ("larsedo01", 1, 1),
    ("cainma01", 1, 1),
    ("hernafe02", 1, 1),
];

/// No-hitters and perfect games thrown by a pitcher, omitting zero counts.
pub fn achievements(player_id: &str) -> Vec<AwardCount> {
    let Some(&(_, no_hitters, perfect)) = NO_HITTERS.iter().find(|(id, _, _)| *id == player_id)
    else {
        return Vec::new();
    };
    let mut out = Vec::new();
    if no_hitters > 0 {
        out.push(AwardCount::new("No-Hitters", no_hitters));
    }
    if perfect > 0 {
        out.push(AwardCount::new("Perfect Games", perfect));
    }
    out
}
