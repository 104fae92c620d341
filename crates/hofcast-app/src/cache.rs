// Memoized player evaluations behind a key/value store.
//
// The engine itself never caches. The app stores each evaluation together
// with the inputs that produced it, so changed inputs read as a miss.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use hofcast_core::pipeline::{evaluate, Evaluation, PlayerProfile};
use hofcast_core::season::SeasonValue;
use hofcast_core::SportModel;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A string key/value store.
pub trait LookupCache {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory cache mutex poisoned"))
    }
}

impl LookupCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SQLite
// ---------------------------------------------------------------------------

/// SQLite-backed cache. The connection is behind a `Mutex` so the cache can
/// be shared by reference.
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Open (or create) the cache database at `path` and ensure the table
    /// exists. Pass `":memory:"` for a throwaway cache.
    pub fn open(path: &str) -> Result<Self> {
        if path != ":memory:" {
            if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create cache directory {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open cache database at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )
        .context("failed to set cache pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS evaluations (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .context("failed to create cache schema")?;

        info!(path, "opened evaluation cache");
        Ok(SqliteCache {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("cache database mutex poisoned"))
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM evaluations", [], |row| row.get(0))
            .context("failed to count cache entries")?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl LookupCache for SqliteCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn()?
            .query_row(
                "SELECT value FROM evaluations WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .context("failed to read cache entry")
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn()?
            .execute(
                "INSERT OR REPLACE INTO evaluations (key, value, updated_at)
                 VALUES (?1, ?2, datetime('now'))",
                params![key, value],
            )
            .context("failed to write cache entry")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Cached evaluator
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct InputsRef<'a, P> {
    profile: &'a PlayerProfile<P>,
    seasons: &'a [SeasonValue],
}

/// Inputs are kept as their serialized text and compared as text, so a
/// float that does not survive a parse never turns a hit into a miss.
#[derive(Serialize, Deserialize)]
struct StoredEvaluation {
    inputs: String,
    evaluation: Evaluation,
}

/// Evaluates players through a `LookupCache`, keyed by `sport/player_id`.
pub struct CachedEvaluator<'c, C: ?Sized> {
    cache: &'c C,
    hits: usize,
    misses: usize,
}

impl<'c, C: LookupCache + ?Sized> CachedEvaluator<'c, C> {
    pub fn new(cache: &'c C) -> Self {
        CachedEvaluator {
            cache,
            hits: 0,
            misses: 0,
        }
    }

    pub fn key(sport: &str, player_id: &str) -> String {
        format!("{sport}/{player_id}")
    }

    /// Return the stored evaluation when its inputs match, otherwise evaluate
    /// and store.
    pub fn evaluate<S: SportModel>(
        &mut self,
        sport: &S,
        profile: &PlayerProfile<S::Position>,
        seasons: &[SeasonValue],
    ) -> Result<Evaluation> {
        let key = Self::key(sport.name(), &profile.player_id);
        let inputs = serde_json::to_string(&InputsRef { profile, seasons })
            .context("failed to serialize evaluation inputs")?;

        if let Some(text) = self.cache.get(&key)? {
            match serde_json::from_str::<StoredEvaluation>(&text) {
                Ok(stored) if stored.inputs == inputs => {
                    self.hits += 1;
                    debug!(key = %key, "cache hit");
                    return Ok(stored.evaluation);
                }
                Ok(_) => debug!(key = %key, "cache entry stale"),
                Err(e) => debug!(key = %key, error = %e, "unreadable cache entry"),
            }
        }

        self.misses += 1;
        let evaluation = evaluate(sport, profile, seasons)
            .with_context(|| format!("failed to evaluate {}", profile.player_id))?;
        let stored = StoredEvaluation {
            inputs,
            evaluation,
        };
        let text = serde_json::to_string(&stored).context("failed to serialize evaluation")?;
        self.cache.put(&key, &text)?;
        Ok(stored.evaluation)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
