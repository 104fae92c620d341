// Configuration loading and validation (hofcast.toml).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_FILE: &str = "hofcast.toml";

/// Largest projection horizon accepted from config or the command line.
pub const MAX_HORIZON: u32 = 40;
/// Upper bound on a per-season projected value; no real season exceeds it.
pub const MAX_VALUE_PER_SEASON: f64 = 30.0;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Baseball,
    Hockey,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Baseball => write!(f, "baseball"),
            Sport::Hockey => write!(f, "hockey"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    pub data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub sport: Sport,
    /// When absent the binary reads the clock.
    #[serde(default)]
    pub current_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    pub horizon: u32,
    pub value_per_season: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            horizon: 15,
            value_per_season: 4.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardConfig {
    pub limit: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        LeaderboardConfig { limit: 25 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    /// SQLite file; `":memory:"` keeps the cache for one run only. When
    /// omitted the platform data directory is used.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            enabled: false,
            path: None,
        }
    }
}

impl CacheConfig {
    /// The configured path, or `hofcast.db` under the platform data directory.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(path),
            None => directories::ProjectDirs::from("", "", "hofcast")
                .map(|dirs| dirs.data_dir().join("hofcast.db"))
                .unwrap_or_else(|| PathBuf::from("hofcast.db")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
    pub seasons: String,
    pub awards: String,
    pub ballots: String,
}

impl DataPaths {
    /// Resolve each path against `base_dir` unless it is already absolute.
    pub fn resolve(&self, base_dir: &Path) -> ResolvedDataPaths {
        let join = |p: &str| {
            let path = Path::new(p);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base_dir.join(path)
            }
        };
        ResolvedDataPaths {
            players: join(&self.players),
            seasons: join(&self.seasons),
            awards: join(&self.awards),
            ballots: join(&self.ballots),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDataPaths {
    pub players: PathBuf,
    pub seasons: PathBuf,
    pub awards: PathBuf,
    pub ballots: PathBuf,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/hofcast.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/hofcast.toml` from `defaults/` on first run. Returns the
/// path written, or `None` when a config file is already in place.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }
    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no {CONFIG_FILE} in {}/config or {}/defaults",
                base_dir.display(),
                base_dir.display()
            ),
        });
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "failed to copy {} to {}: {e}",
            source.display(),
            target.display()
        ),
    })?;
    info!(path = %target.display(), "created config from defaults");
    Ok(Some(target))
}

/// Copy defaults if needed, then load from `base_dir`.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_horizon(horizon: u32) -> Result<(), ConfigError> {
    if horizon > MAX_HORIZON {
        return Err(ConfigError::ValidationError {
            field: "projection.horizon".into(),
            message: format!("must be at most {MAX_HORIZON}, got {horizon}"),
        });
    }
    Ok(())
}

pub fn validate_value_per_season(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=MAX_VALUE_PER_SEASON).contains(&value) {
        return Err(ConfigError::ValidationError {
            field: "projection.value_per_season".into(),
            message: format!("must be between 0 and {MAX_VALUE_PER_SEASON}, got {value}"),
        });
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_horizon(config.projection.horizon)?;
    validate_value_per_season(config.projection.value_per_season)?;

    if config.leaderboard.limit == 0 {
        return Err(ConfigError::ValidationError {
            field: "leaderboard.limit".into(),
            message: "must be greater than 0".into(),
        });
    }

    if let Some(year) = config.engine.current_year {
        if !(1871..=2200).contains(&year) {
            return Err(ConfigError::ValidationError {
                field: "engine.current_year".into(),
                message: format!("implausible year {year}"),
            });
        }
    }

    if config.cache.enabled && config.cache.path.as_deref().is_some_and(str::is_empty) {
        return Err(ConfigError::ValidationError {
            field: "cache.path".into(),
            message: "must not be empty when the cache is enabled".into(),
        });
    }

    let d = &config.data_paths;
    let path_fields: &[(&str, &str)] = &[
        ("data_paths.players", &d.players),
        ("data_paths.seasons", &d.seasons),
        ("data_paths.awards", &d.awards),
        ("data_paths.ballots", &d.ballots),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Returns the hofcast-app crate root (works from the crate or the repo root).
    fn project_root() -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        if cwd.join("defaults").exists() {
            cwd
        } else if cwd.join("crates/hofcast-app/defaults").exists() {
            cwd.join("crates/hofcast-app")
        } else {
            panic!("Cannot locate defaults/ directory from CWD {:?}", cwd);
        }
    }

    const VALID: &str = r#"
[engine]
sport = "hockey"
current_year = 2024

[projection]
horizon = 10
value_per_season = 6.5

[leaderboard]
limit = 5

[cache]
enabled = true
path = ":memory:"

[data_paths]
players = "data/players.csv"
seasons = "data/seasons.csv"
awards = "data/awards.csv"
ballots = "data/ballots.csv"
"#;

    /// Write `text` as config/hofcast.toml under a fresh temp dir.
    fn temp_config(name: &str, text: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), text).unwrap();
        tmp
    }

    fn expect_field(err: ConfigError, expected: &str) {
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn load_default_config_from_project_files() {
        let root = project_root();
        let tmp = std::env::temp_dir().join("hofcast_config_defaults");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::copy(
            root.join("defaults").join(CONFIG_FILE),
            tmp.join("defaults").join(CONFIG_FILE),
        )
        .unwrap();

        let config = load_config(&tmp).expect("defaults should load");
        assert_eq!(config.engine.sport, Sport::Baseball);
        assert_eq!(config.engine.current_year, None);
        assert_eq!(config.projection.horizon, 15);
        assert!(config.leaderboard.limit > 0);
        assert_eq!(config.data_paths.players, "data/players.csv");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn load_explicit_values() {
        let tmp = temp_config("hofcast_config_valid", VALID);
        let config = load_config_from(&tmp).expect("should load");
        assert_eq!(config.engine.sport, Sport::Hockey);
        assert_eq!(config.engine.current_year, Some(2024));
        assert_eq!(config.projection.horizon, 10);
        assert!((config.projection.value_per_season - 6.5).abs() < f64::EPSILON);
        assert_eq!(config.leaderboard.limit, 5);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.resolved_path(), PathBuf::from(":memory:"));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn optional_sections_take_defaults() {
        let text = r#"
[engine]
sport = "baseball"

[data_paths]
players = "p.csv"
seasons = "s.csv"
awards = "a.csv"
ballots = "b.csv"
"#;
        let tmp = temp_config("hofcast_config_minimal", text);
        let config = load_config_from(&tmp).expect("should load");
        assert_eq!(config.projection.horizon, 15);
        assert_eq!(config.leaderboard.limit, 25);
        assert!(!config.cache.enabled);
        assert!(config.cache.resolved_path().ends_with("hofcast.db"));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_horizon_over_forty() {
        let tmp = temp_config(
            "hofcast_config_horizon",
            &VALID.replace("horizon = 10", "horizon = 41"),
        );
        expect_field(load_config_from(&tmp).unwrap_err(), "projection.horizon");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_value_per_season_out_of_range() {
        let tmp = temp_config(
            "hofcast_config_value",
            &VALID.replace("value_per_season = 6.5", "value_per_season = -1.0"),
        );
        expect_field(load_config_from(&tmp).unwrap_err(), "projection.value_per_season");
        let _ = fs::remove_dir_all(&tmp);

        assert!(validate_value_per_season(f64::NAN).is_err());
        assert!(validate_value_per_season(30.0).is_ok());
    }

    #[test]
    fn rejects_zero_limit() {
        let tmp = temp_config("hofcast_config_limit", &VALID.replace("limit = 5", "limit = 0"));
        expect_field(load_config_from(&tmp).unwrap_err(), "leaderboard.limit");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_data_path() {
        let tmp = temp_config(
            "hofcast_config_empty_path",
            &VALID.replace("awards = \"data/awards.csv\"", "awards = \"\""),
        );
        expect_field(load_config_from(&tmp).unwrap_err(), "data_paths.awards");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn unknown_sport_is_parse_error() {
        let tmp = temp_config(
            "hofcast_config_bad_sport",
            &VALID.replace("sport = \"hockey\"", "sport = \"cricket\""),
        );
        assert!(matches!(
            load_config_from(&tmp).unwrap_err(),
            ConfigError::ParseError { .. }
        ));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = std::env::temp_dir().join("hofcast_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        match load_config_from(&tmp).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_file_copies_once() {
        let tmp = std::env::temp_dir().join("hofcast_config_ensure");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::write(tmp.join("defaults").join(CONFIG_FILE), "default").unwrap();

        let copied = ensure_config_file(&tmp).unwrap();
        assert_eq!(copied, Some(tmp.join("config").join(CONFIG_FILE)));

        fs::write(tmp.join("config").join(CONFIG_FILE), "user").unwrap();
        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
        assert_eq!(fs::read_to_string(tmp.join("config").join(CONFIG_FILE)).unwrap(), "user");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_file_errors_without_defaults() {
        let tmp = std::env::temp_dir().join("hofcast_config_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        assert!(matches!(
            ensure_config_file(&tmp).unwrap_err(),
            ConfigError::DefaultsCopyError { .. }
        ));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn data_paths_resolve_relative_to_base() {
        let tmp = temp_config("hofcast_config_resolve", VALID);
        let config = load_config_from(&tmp).unwrap();
        let resolved = config.data_paths.resolve(Path::new("/srv/hof"));
        assert_eq!(resolved.players, PathBuf::from("/srv/hof/data/players.csv"));
        let _ = fs::remove_dir_all(&tmp);
    }
}
