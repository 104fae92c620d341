// Stat column names read from season and career stat lines (lowercase).

/// Wins Above Replacement for one season line.
pub const WAR: &str = "war";

pub const GAMES: &str = "g";
pub const GAMES_STARTED: &str = "gs";

pub const HITS: &str = "h";
pub const HOME_RUNS: &str = "hr";
pub const RBI: &str = "rbi";
pub const BATTING_AVERAGE: &str = "avg";
pub const STOLEN_BASES: &str = "sb";

pub const WINS: &str = "w";
pub const STRIKEOUTS: &str = "so";
pub const ERA: &str = "era";
pub const INNINGS: &str = "ip";
pub const SAVES: &str = "sv";
pub const HOLDS: &str = "hld";
