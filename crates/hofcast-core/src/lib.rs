// Hall-of-Fame analytics engine: season values, JAWS, composite scoring,
// induction prediction, projections and leaderboards.
//
// Every operation is a pure function of its inputs. Sport-specific tables and
// formulas are supplied through the `SportModel` trait.

pub mod awards;
pub mod comparison;
pub mod error;
pub mod jaws;
pub mod leaderboard;
pub mod milestones;
pub mod pipeline;
pub mod predict;
pub mod projection;
pub mod score;
pub mod season;
pub mod sport;
pub mod stats;

pub use error::CoreError;
pub use sport::{validate_sport_model, SportModel};

/// Round to one decimal place, halves rounding up.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
