// Error types for the analytics core.
//
// None of these represent "no data": empty inputs produce zero-valued
// results. Every variant here is a misconfigured reference table.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("no positional baseline configured for {sport} position {position}")]
    MissingBaseline { sport: String, position: String },

    #[error("baseline {metric} for position {position} must be > 0, got {value}")]
    InvalidBaseline {
        position: String,
        metric: &'static str,
        value: f64,
    },

    #[error("invalid anchor table: {0}")]
    InvalidAnchors(String),
}
