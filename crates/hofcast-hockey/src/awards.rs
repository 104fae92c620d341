// Trophy categories and the Stanley Cup overlay.

use hofcast_core::awards::{AwardCategory, AwardCount};

pub static AWARD_CATEGORIES: &[AwardCategory] = &[
    AwardCategory {
        label: "Hart Trophy",
        ids: &["HART"],
        points: 6.0,
        max_points: 18.0,
    },
    AwardCategory {
        label: "Norris Trophy",
        ids: &["NORRIS"],
        points: 5.0,
        max_points: 15.0,
    },
    AwardCategory {
        label: "Vezina Trophy",
        ids: &["VEZINA"],
        points: 5.0,
        max_points: 15.0,
    },
    AwardCategory {
        label: "Art Ross Trophy",
        ids: &["ROSS", "ARTROSS"],
        points: 3.0,
        max_points: 9.0,
    },
    AwardCategory {
        label: "Ted Lindsay Award",
        ids: &["LINDSAY", "PEARSON"],
        points: 2.0,
        max_points: 6.0,
    },
    AwardCategory {
        label: "Rocket Richard Trophy",
        ids: &["RICHARD"],
        points: 2.0,
        max_points: 6.0,
    },
    AwardCategory {
        label: "Conn Smythe Trophy",
        ids: &["SMYTHE", "CONNSMYTHE"],
        points: 3.0,
        max_points: 6.0,
    },
    AwardCategory {
        label: "Selke Trophy",
        ids: &["SELKE"],
        points: 1.5,
        max_points: 4.5,
    },
    AwardCategory {
        label: "First-Team All-Star",
        ids: &["AS1", "ALLSTAR1"],
        points: 1.5,
        max_points: 9.0,
    },
    AwardCategory {
        label: "Second-Team All-Star",
        ids: &["AS2", "ALLSTAR2"],
        points: 0.75,
        max_points: 4.5,
    },
    AwardCategory {
        label: "Calder Trophy",
        ids: &["CALDER"],
        points: 2.0,
        max_points: 2.0,
    },
];

/// Stanley Cup championships by player id.
const STANLEY_CUPS: &[(&str, u32)] = &[
    ("richahe01", 11),
    ("beliveje01", 10),
    ("richamo01", 8),
    ("drydeke01", 6),
    ("messima01", 6),
    ("plantja01", 6),
    ("robinla01", 6),
    ("trottbr01", 6),
    ("gretzwa01", 4),
    ("howego01", 4),
    ("lidstni01", 4),
    ("roypa01", 4),
    ("bossymi01", 4),
    ("potvide01", 4),
    ("coffepa01", 4),
    ("hossama01", 4),
    ("niedesc01", 4),
    ("brodema01", 3),
    ("chelich01", 3),
    ("yzermst01", 3),
    ("fedorse01", 3),
    ("recchma01", 3),
    ("crosbsi01", 3),
    ("keithdu01", 3),
    ("kanepa01", 3),
    ("toewsjo01", 3),
    ("lemiema01", 2),
    ("orrbo01", 2),
    ("sakicjo01", 2),
    ("hasekdo01", 2),
    ("ovechal01", 1),
    ("bourqra01", 1),
];

pub fn achievements(player_id: &str) -> Vec<AwardCount> {
    STANLEY_CUPS
        .iter()
        .find(|(id, _)| *id == player_id)
        .map(|&(_, cups)| vec![AwardCount::new("Stanley Cups", cups)])
        .unwrap_or_default()
}
