// CSV data loading: player profiles, raw season lines, awards and ballots.
//
// Players and seasons carry a fixed set of identity columns followed by any
// number of stat columns. Stat cells are coerced into typed `StatLine`s here;
// rows that cannot be understood are skipped with a warning.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use hofcast_baseball::BaseballPosition;
use hofcast_core::awards::AwardRecord;
use hofcast_core::leaderboard::{BallotRecord, SeasonLookup};
use hofcast_core::pipeline::PlayerProfile;
use hofcast_core::season::{GameType, RawSeason, SeasonValue};
use hofcast_core::stats::{parse_numeric, StatLine};
use hofcast_core::SportModel;
use hofcast_hockey::HockeyPosition;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ResolvedDataPaths;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: ReadError },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Position codes
// ---------------------------------------------------------------------------

/// Parse a position column cell into a sport's position type.
pub trait PositionCode: Sized {
    fn parse_code(code: &str) -> Option<Self>;
}

impl PositionCode for BaseballPosition {
    fn parse_code(code: &str) -> Option<Self> {
        BaseballPosition::from_str_pos(code)
    }
}

impl PositionCode for HockeyPosition {
    fn parse_code(code: &str) -> Option<Self> {
        HockeyPosition::from_str_pos(code)
    }
}

// ---------------------------------------------------------------------------
// Season table
// ---------------------------------------------------------------------------

/// Normalized seasons by player id, built once after loading and passed to
/// every ranking and projection call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonTable(HashMap<String, Vec<SeasonValue>>);

impl SeasonTable {
    pub fn build<S: SportModel>(sport: &S, raw: &HashMap<String, Vec<RawSeason>>) -> Self {
        SeasonTable(
            raw.iter()
                .map(|(id, lines)| (id.clone(), sport.normalize_seasons(lines)))
                .collect(),
        )
    }

    pub fn get(&self, player_id: &str) -> &[SeasonValue] {
        self.0.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SeasonLookup for SeasonTable {
    fn seasons_for(&self, player_id: &str) -> Cow<'_, [SeasonValue]> {
        Cow::Borrowed(self.get(player_id))
    }
}

/// Everything loaded for one sport.
#[derive(Debug, Clone)]
pub struct Dataset<P> {
    pub profiles: Vec<PlayerProfile<P>>,
    pub seasons: SeasonTable,
    pub ballots: Vec<BallotRecord>,
}

impl<P> Dataset<P> {
    pub fn profile(&self, player_id: &str) -> Option<&PlayerProfile<P>> {
        self.profiles.iter().find(|p| p.player_id == player_id)
    }
}

// ---------------------------------------------------------------------------
// Column handling
// ---------------------------------------------------------------------------

const PLAYER_COLUMNS: &[&str] = &[
    "player_id",
    "name",
    "sport",
    "position",
    "active",
    "debut_year",
    "age",
];

const SEASON_COLUMNS: &[&str] = &[
    "player_id",
    "season",
    "team",
    "age",
    "games_played",
    "game_type",
    "league",
];

/// Header positions for one file. Every header not in the fixed list is a
/// stat column.
struct Columns {
    index: HashMap<String, usize>,
    stats: Vec<(usize, String)>,
}

impl Columns {
    fn new(headers: &StringRecord, fixed: &[&str]) -> Self {
        let mut index = HashMap::new();
        let mut stats = Vec::new();
        for (i, header) in headers.iter().enumerate() {
            let key = header.trim().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            if fixed.contains(&key.as_str()) {
                index.insert(key, i);
            } else {
                stats.push((i, key));
            }
        }
        Columns { index, stats }
    }

    fn require(&self, name: &'static str) -> Result<usize, ReadError> {
        self.index.get(name).copied().ok_or(ReadError::MissingColumn(name))
    }

    /// Trimmed, non-empty cell for a fixed column.
    fn cell<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        let i = *self.index.get(name)?;
        record.get(i).map(str::trim).filter(|s| !s.is_empty())
    }

    fn stat_line(&self, record: &StringRecord, player_id: &str) -> StatLine {
        let mut line = StatLine::new();
        for (i, key) in &self.stats {
            let Some(raw) = record.get(*i).map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            if !line.insert_raw(key, raw) {
                warn!(player = player_id, column = %key, value = raw, "dropping non-numeric stat");
            }
        }
        line
    }
}

/// Accepts the usual spellings of a yes/no cell. Blank is false.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "t" | "yes" | "y" | "x"
    )
}

fn parse_int<T: TryFrom<i64>>(raw: Option<&str>) -> Option<T> {
    let value = parse_numeric(raw?)?;
    T::try_from(value.round() as i64).ok()
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawAward {
    player_id: String,
    category_id: String,
    season: i32,
}

#[derive(Debug, Deserialize)]
struct RawBallot {
    player_id: String,
    ballot_year: i32,
    #[serde(default)]
    vote_pct: Option<f64>,
    #[serde(default)]
    elected: String,
    #[serde(default)]
    new_to_ballot: String,
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

/// Player profiles for `sport`. Rows tagged with another sport are ignored;
/// rows with an unknown position are skipped.
pub fn load_players_from_reader<P: PositionCode, R: Read>(
    rdr: R,
    sport: &str,
) -> Result<Vec<PlayerProfile<P>>, ReadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let columns = Columns::new(reader.headers()?, PLAYER_COLUMNS);
    columns.require("player_id")?;
    columns.require("position")?;

    let mut profiles = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };
        let Some(player_id) = columns.cell(&record, "player_id") else {
            warn!("skipping player row without player_id");
            continue;
        };
        if let Some(row_sport) = columns.cell(&record, "sport") {
            if !row_sport.eq_ignore_ascii_case(sport) {
                continue;
            }
        }
        let Some(position) = columns.cell(&record, "position").and_then(P::parse_code) else {
            warn!(player = player_id, "skipping player with unknown position");
            continue;
        };

        let name = columns.cell(&record, "name").unwrap_or(player_id);
        let mut profile = PlayerProfile::new(player_id, name, position);
        profile.is_active = columns.cell(&record, "active").is_some_and(parse_flag);
        profile.debut_year = parse_int(columns.cell(&record, "debut_year"));
        profile.age = parse_int(columns.cell(&record, "age"));
        profile.career_stats = columns.stat_line(&record, player_id);
        profiles.push(profile);
    }
    Ok(profiles)
}

/// Raw season lines grouped by player id, in file order.
pub fn load_seasons_from_reader<R: Read>(
    rdr: R,
) -> Result<HashMap<String, Vec<RawSeason>>, ReadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let columns = Columns::new(reader.headers()?, SEASON_COLUMNS);
    columns.require("player_id")?;
    columns.require("season")?;

    let mut by_player: HashMap<String, Vec<RawSeason>> = HashMap::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed season row: {}", e);
                continue;
            }
        };
        let Some(player_id) = columns.cell(&record, "player_id") else {
            warn!("skipping season row without player_id");
            continue;
        };
        let Some(season) = parse_int::<i32>(columns.cell(&record, "season")) else {
            warn!(player = player_id, "skipping season row without a valid season");
            continue;
        };
        let game_type = match columns.cell(&record, "game_type") {
            None => GameType::Regular,
            Some(code) => match GameType::from_code(code) {
                Some(game_type) => game_type,
                None => {
                    warn!(player = player_id, season, code, "skipping season row with unknown game type");
                    continue;
                }
            },
        };

        let line = RawSeason {
            season,
            team: columns.cell(&record, "team").map(str::to_string),
            age: parse_int(columns.cell(&record, "age")),
            games_played: parse_int(columns.cell(&record, "games_played")).unwrap_or(0),
            game_type,
            league: columns.cell(&record, "league").map(str::to_string),
            stats: columns.stat_line(&record, player_id),
        };
        by_player.entry(player_id.to_string()).or_default().push(line);
    }
    Ok(by_player)
}

/// Award records grouped by player id.
pub fn load_awards_from_reader<R: Read>(
    rdr: R,
) -> Result<HashMap<String, Vec<AwardRecord>>, ReadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut by_player: HashMap<String, Vec<AwardRecord>> = HashMap::new();
    for result in reader.deserialize::<RawAward>() {
        match result {
            Ok(raw) => {
                let category = raw.category_id.trim();
                if category.is_empty() {
                    warn!(player = raw.player_id.trim(), "skipping award without category");
                    continue;
                }
                by_player
                    .entry(raw.player_id.trim().to_string())
                    .or_default()
                    .push(AwardRecord::new(category, raw.season));
            }
            Err(e) => {
                warn!("skipping malformed award row: {}", e);
            }
        }
    }
    Ok(by_player)
}

/// Ballot appearances. A blank `vote_pct` is kept as unknown.
pub fn load_ballots_from_reader<R: Read>(rdr: R) -> Result<Vec<BallotRecord>, ReadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut ballots = Vec::new();
    for result in reader.deserialize::<RawBallot>() {
        match result {
            Ok(raw) => {
                let vote_percentage = match raw.vote_pct {
                    Some(v) if !v.is_finite() || !(0.0..=100.0).contains(&v) => {
                        warn!(player = raw.player_id.trim(), vote_pct = v, "ignoring out-of-range vote percentage");
                        None
                    }
                    other => other,
                };
                ballots.push(BallotRecord {
                    player_id: raw.player_id.trim().to_string(),
                    ballot_year: raw.ballot_year,
                    vote_percentage,
                    is_elected: parse_flag(&raw.elected),
                    is_new_to_ballot: parse_flag(&raw.new_to_ballot),
                });
            }
            Err(e) => {
                warn!("skipping malformed ballot row: {}", e);
            }
        }
    }
    Ok(ballots)
}

/// Attach award records to their profiles. Awards for unknown players are
/// dropped.
pub fn attach_awards<P>(
    profiles: &mut [PlayerProfile<P>],
    mut awards: HashMap<String, Vec<AwardRecord>>,
) {
    for profile in profiles.iter_mut() {
        if let Some(records) = awards.remove(&profile.player_id) {
            profile.awards.extend(records);
        }
    }
    if !awards.is_empty() {
        debug!(unmatched = awards.len(), "awards for players not in the profile set");
    }
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, DataError> {
    std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn at(path: &Path) -> impl FnOnce(ReadError) -> DataError + '_ {
    move |source| DataError::Csv {
        path: path.display().to_string(),
        source,
    }
}

pub fn load_players<P: PositionCode>(
    path: &Path,
    sport: &str,
) -> Result<Vec<PlayerProfile<P>>, DataError> {
    load_players_from_reader(open(path)?, sport).map_err(at(path))
}

pub fn load_seasons(path: &Path) -> Result<HashMap<String, Vec<RawSeason>>, DataError> {
    load_seasons_from_reader(open(path)?).map_err(at(path))
}

pub fn load_awards(path: &Path) -> Result<HashMap<String, Vec<AwardRecord>>, DataError> {
    load_awards_from_reader(open(path)?).map_err(at(path))
}

pub fn load_ballots(path: &Path) -> Result<Vec<BallotRecord>, DataError> {
    load_ballots_from_reader(open(path)?).map_err(at(path))
}

/// Load players and seasons (required) plus awards and ballots (optional:
/// a missing file means none) and build the season table.
pub fn load_dataset<S>(sport: &S, paths: &ResolvedDataPaths) -> Result<Dataset<S::Position>, DataError>
where
    S: SportModel,
    S::Position: PositionCode,
{
    let mut profiles = load_players::<S::Position>(&paths.players, sport.name())?;
    if profiles.is_empty() {
        return Err(DataError::Validation(format!(
            "{} produced zero {} players",
            paths.players.display(),
            sport.name()
        )));
    }

    let raw = load_seasons(&paths.seasons)?;

    if paths.awards.exists() {
        attach_awards(&mut profiles, load_awards(&paths.awards)?);
    } else {
        warn!(path = %paths.awards.display(), "awards file not found, continuing without awards");
    }

    let ballots = if paths.ballots.exists() {
        load_ballots(&paths.ballots)?
    } else {
        debug!(path = %paths.ballots.display(), "no ballots file");
        Vec::new()
    };

    let seasons = SeasonTable::build(sport, &raw);
    info!(
        sport = sport.name(),
        players = profiles.len(),
        with_seasons = seasons.len(),
        ballots = ballots.len(),
        "loaded dataset"
    );

    Ok(Dataset {
        profiles,
        seasons,
        ballots,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
