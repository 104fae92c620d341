// Typed stat mapping shared by raw season lines and career totals.
//
// Raw provider records arrive as loosely typed key/value pairs. They are
// coerced into `StatLine` once at the data boundary so the rest of the engine
// only ever sees finite `f64` values keyed by lowercase stat names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A mapping from lowercase stat key to a finite numeric value.
///
/// Unknown keys read as absent; `value()` reports absent keys as 0.0 so that
/// malformed or missing stats contribute nothing instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatLine(BTreeMap<String, f64>);

/// Career totals use the same representation as a single season line.
pub type CareerStats = StatLine;

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, normalizing the key to lowercase. Non-finite values
    /// are dropped.
    pub fn insert(&mut self, key: &str, value: f64) {
        if value.is_finite() {
            self.0.insert(key.trim().to_ascii_lowercase(), value);
        }
    }

    /// Builder-style insert, mostly for tests and static fixtures.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a raw textual cell. Numeric-looking strings are parsed;
    /// anything else is ignored. Returns whether the cell was accepted.
    pub fn insert_raw(&mut self, key: &str, raw: &str) -> bool {
        match parse_numeric(raw) {
            Some(value) => {
                self.insert(key, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(&key.to_ascii_lowercase()).copied()
    }

    /// Value for `key`, or 0.0 when the stat is absent.
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for StatLine {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut line = StatLine::new();
        for (key, value) in iter {
            line.insert(key.as_ref(), value);
        }
        line
    }
}

/// Parse a numeric-looking string: surrounding whitespace, thousands
/// separators and a leading `+` are tolerated; a bare leading decimal point
/// (".312") is accepted. Returns `None` for empty or non-numeric text.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
