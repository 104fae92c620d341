// Stat column names read from season and career stat lines (lowercase).

pub const GOALS: &str = "goals";
pub const ASSISTS: &str = "assists";
pub const POINTS: &str = "points";
pub const PLUS_MINUS: &str = "plus_minus";
pub const PP_GOALS: &str = "pp_goals";
pub const PP_ASSISTS: &str = "pp_assists";
pub const SH_GOALS: &str = "sh_goals";
pub const GW_GOALS: &str = "gw_goals";
pub const GAMES_PLAYED: &str = "games_played";

pub const WINS: &str = "wins";
pub const SAVE_PCT: &str = "sv_pct";
pub const GAA: &str = "gaa";
pub const SHUTOUTS: &str = "shutouts";
