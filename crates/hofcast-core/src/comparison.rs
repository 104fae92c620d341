// Positional baseline comparison.
//
// Divides a player's career, peak and JAWS by the Hall-of-Fame average at the
// player's position. Ratios are not clamped here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::jaws::CareerAggregate;

/// Historical Hall-of-Fame averages for one position category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionalBaseline {
    pub career_value: f64,
    pub peak_value: f64,
    pub jaws: f64,
}

impl PositionalBaseline {
    pub const fn new(career_value: f64, peak_value: f64, jaws: f64) -> Self {
        PositionalBaseline {
            career_value,
            peak_value,
            jaws,
        }
    }

    /// Check every metric is finite and strictly positive.
    pub fn validate(&self, position: &str) -> Result<(), CoreError> {
        let metrics: [(&'static str, f64); 3] = [
            ("career_value", self.career_value),
            ("peak_value", self.peak_value),
            ("jaws", self.jaws),
        ];
        for (metric, value) in metrics {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidBaseline {
                    position: position.to_string(),
                    metric,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A player's aggregate measured against their positional baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub player: CareerAggregate,
    pub baseline: PositionalBaseline,
    pub career_ratio: f64,
    pub peak_ratio: f64,
    pub jaws_ratio: f64,
}

/// Compare an aggregate to its baseline.
///
/// A zero, negative or non-finite baseline is a broken reference table and is
/// rejected rather than producing `inf`/`NaN` ratios.
pub fn compare(
    player: &CareerAggregate,
    baseline: &PositionalBaseline,
) -> Result<Comparison, CoreError> {
    baseline.validate(&player.position_category)?;

    Ok(Comparison {
        player: player.clone(),
        baseline: *baseline,
        career_ratio: player.career_value / baseline.career_value,
        peak_ratio: player.peak_value / baseline.peak_value,
        jaws_ratio: player.jaws / baseline.jaws,
    })
}
