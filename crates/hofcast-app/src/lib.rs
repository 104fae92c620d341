// hofcast application layer: configuration, CSV loading, the evaluation
// cache and the command-line commands built on the engine crates.

pub mod cache;
pub mod commands;
pub mod config;
pub mod data;
pub mod output;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use hofcast_baseball::Baseball;
use hofcast_core::sport::validate_sport_model;
use hofcast_core::SportModel;
use hofcast_hockey::Hockey;
use tracing::info;

use crate::cache::{LookupCache, MemoryCache, SqliteCache};
use crate::commands::{Command, RunContext};
use crate::config::{Config, Sport};
use crate::data::PositionCode;
use crate::output::OutputFormat;

/// Options resolved from the command line on top of the config file.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub sport: Sport,
    pub format: OutputFormat,
    pub current_year: i32,
}

/// The configured season year, or the calendar year when none is set.
pub fn resolve_current_year(config: &Config) -> i32 {
    config
        .engine
        .current_year
        .unwrap_or_else(|| chrono::Local::now().year())
}

/// Open the configured cache: SQLite when enabled, otherwise a cache that
/// lives only for this run.
pub fn open_cache(config: &Config) -> Result<Box<dyn LookupCache>> {
    if !config.cache.enabled {
        return Ok(Box::new(MemoryCache::new()));
    }
    let path = config.cache.resolved_path();
    let cache = SqliteCache::open(&path.to_string_lossy())
        .with_context(|| format!("failed to open cache at {}", path.display()))?;
    Ok(Box::new(cache))
}

/// Load the dataset for `invocation.sport` from paths under `base_dir` and
/// run `command`, writing its output to `out`.
pub fn execute(
    config: &Config,
    base_dir: &Path,
    invocation: &Invocation,
    command: &Command,
    out: &mut dyn Write,
) -> Result<()> {
    let cache = open_cache(config)?;
    match invocation.sport {
        Sport::Baseball => execute_with(&Baseball, config, base_dir, invocation, cache.as_ref(), command, out),
        Sport::Hockey => execute_with(&Hockey, config, base_dir, invocation, cache.as_ref(), command, out),
    }
}

fn execute_with<S>(
    sport: &S,
    config: &Config,
    base_dir: &Path,
    invocation: &Invocation,
    cache: &dyn LookupCache,
    command: &Command,
    out: &mut dyn Write,
) -> Result<()>
where
    S: SportModel,
    S::Position: PositionCode,
{
    validate_sport_model(sport)
        .with_context(|| format!("{} reference tables are invalid", sport.name()))?;

    let paths = config.data_paths.resolve(base_dir);
    let dataset = data::load_dataset(sport, &paths).context("failed to load data")?;
    info!(
        sport = sport.name(),
        current_year = invocation.current_year,
        "running command"
    );

    let ctx = RunContext {
        sport,
        config,
        dataset: &dataset,
        cache,
        current_year: invocation.current_year,
        format: invocation.format,
    };
    commands::run(&ctx, command, out)
}
