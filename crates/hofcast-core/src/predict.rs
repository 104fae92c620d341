// Induction probability and ballot prediction.
//
// Both outputs are piecewise-linear interpolations over hand-picked
// (score, percent) anchor points.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::round1;

/// Score -> induction probability (%).
pub const INDUCTION_PROBABILITY_ANCHORS: &[(f64, f64)] = &[
    (0.0, 0.0),
    (25.0, 1.0),
    (45.0, 8.0),
    (60.0, 30.0),
    (75.0, 65.0),
    (90.0, 92.0),
    (100.0, 99.0),
];

/// Score -> predicted peak vote share (%).
pub const PEAK_VOTE_ANCHORS: &[(f64, f64)] = &[
    (0.0, 0.0),
    (25.0, 3.0),
    (45.0, 15.0),
    (60.0, 40.0),
    (75.0, 70.0),
    (90.0, 88.0),
    (100.0, 98.0),
];

/// Ordered ballot outcomes: (minimum score, label, description). The last
/// entry is the fallback.
const BALLOT_OUTCOMES: &[(u8, &str, &str)] = &[
    (95, "First Ballot", "Elected in the first year of eligibility with overwhelming support"),
    (90, "First Ballot (Likely)", "Favored to clear 75% in the first year of eligibility"),
    (80, "Early Ballot", "Elected within the first few years on the ballot"),
    (70, "Multiple Ballots", "Builds support over several ballots before election"),
    (60, "Late Ballot", "Election possible late in the eligibility window"),
    (50, "Long Shot", "Remains on the ballot but unlikely to reach 75%"),
    (0, "Veterans Committee", "Falls off the writers' ballot; an era committee is the likeliest path"),
];

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

/// Interpolate `x` over sorted anchors, clamping outside the first and last
/// anchor, rounded to one decimal. An empty table yields 0.0.
pub fn interpolate(anchors: &[(f64, f64)], x: f64) -> f64 {
    let (Some(&(x_first, y_first)), Some(&(x_last, y_last))) = (anchors.first(), anchors.last())
    else {
        return 0.0;
    };
    if x <= x_first {
        return round1(y_first);
    }
    if x >= x_last {
        return round1(y_last);
    }
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x >= x0 && x <= x1 {
            if x1 == x0 {
                return round1(y1);
            }
            return round1(y0 + (x - x0) / (x1 - x0) * (y1 - y0));
        }
    }
    round1(y_last)
}

/// A validated anchor table: non-empty with strictly increasing scores.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTable {
    anchors: Vec<(f64, f64)>,
}

impl AnchorTable {
    pub fn new(anchors: Vec<(f64, f64)>) -> Result<Self, CoreError> {
        if anchors.is_empty() {
            return Err(CoreError::InvalidAnchors("table is empty".into()));
        }
        if anchors.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(CoreError::InvalidAnchors("non-finite anchor".into()));
        }
        if anchors.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(CoreError::InvalidAnchors(
                "scores must be strictly increasing".into(),
            ));
        }
        Ok(AnchorTable { anchors })
    }

    pub fn interpolate(&self, x: f64) -> f64 {
        interpolate(&self.anchors, x)
    }

    pub fn anchors(&self) -> &[(f64, f64)] {
        &self.anchors
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotOutcome {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub induction_probability: f64,
    pub predicted_vote_pct: f64,
    pub outcome: BallotOutcome,
}

pub fn induction_probability(overall: u8) -> f64 {
    interpolate(INDUCTION_PROBABILITY_ANCHORS, overall as f64)
}

pub fn predicted_vote_pct(overall: u8) -> f64 {
    interpolate(PEAK_VOTE_ANCHORS, overall as f64)
}

pub fn ballot_outcome(overall: u8) -> BallotOutcome {
    let (_, label, description) = BALLOT_OUTCOMES
        .iter()
        .find(|(min, _, _)| overall >= *min)
        .copied()
        .unwrap_or(BALLOT_OUTCOMES[BALLOT_OUTCOMES.len() - 1]);
    BallotOutcome {
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Full prediction for a composite score.
pub fn predict(overall: u8) -> Prediction {
    Prediction {
        induction_probability: induction_probability(overall),
        predicted_vote_pct: predicted_vote_pct(overall),
        outcome: ballot_outcome(overall),
    }
}
