// Milestone matching against a static threshold table.
//
// Each sport supplies a table of named thresholds ("3,000 Hits", "400 Wins").
// A player is checked against the milestones that apply to their player type
// and debut cohort; results carry display progress and score credit.

use serde::{Deserialize, Serialize};

use crate::round1;
use crate::stats::CareerStats;

/// Progress below this share of a milestone is not surfaced for display.
pub const SURFACE_PROGRESS_PCT: f64 = 20.0;

/// Progress below this share earns no partial credit.
const PARTIAL_CREDIT_START: f64 = 0.5;

/// Share of a milestone's weight available to a near miss.
const PARTIAL_CREDIT_SHARE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Restricts a milestone to players whose career started before, or on/after,
/// a given year. Two milestones on the same stat with complementary bounds
/// never both apply to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebutBound {
    Before(i32),
    OnOrAfter(i32),
}

impl DebutBound {
    pub fn admits(&self, debut_year: i32) -> bool {
        match *self {
            DebutBound::Before(year) => debut_year < year,
            DebutBound::OnOrAfter(year) => debut_year >= year,
        }
    }
}

/// A static milestone definition. `T` is the sport's player-type enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone<T: 'static> {
    pub label: &'static str,
    pub stat_key: &'static str,
    pub threshold: f64,
    pub applies_to: &'static [T],
    /// Score credit for reaching the milestone.
    pub weight: f64,
    /// Career average of this stat among Hall-of-Famers of the same type.
    pub hof_average: f64,
    pub is_rate: bool,
    /// For rate milestones, the value at which progress starts counting.
    pub rate_floor: Option<f64>,
    pub lower_is_better: bool,
    pub debut_bound: Option<DebutBound>,
}

impl<T: PartialEq> Milestone<T> {
    /// Whether this milestone is checked for a player of `player_type` who
    /// debuted in `debut_year`. Bounded milestones are skipped when the debut
    /// year is unknown.
    pub fn applies(&self, player_type: &T, debut_year: Option<i32>) -> bool {
        if !self.applies_to.contains(player_type) {
            return false;
        }
        match (self.debut_bound, debut_year) {
            (None, _) => true,
            (Some(bound), Some(year)) => bound.admits(year),
            (Some(_), None) => false,
        }
    }

    /// Fraction of the way to the threshold, in `[0, 1]`.
    pub fn progress(&self, value: f64) -> f64 {
        let p = if self.lower_is_better {
            if value <= self.threshold {
                1.0
            } else {
                match self.rate_floor {
                    Some(floor) if floor > self.threshold => {
                        (floor - value) / (floor - self.threshold)
                    }
                    _ => self.threshold / value,
                }
            }
        } else {
            match self.rate_floor {
                Some(floor) if floor < self.threshold => {
                    (value - floor) / (self.threshold - floor)
                }
                _ => value / self.threshold,
            }
        };
        p.clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of checking one milestone for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneResult {
    pub label: String,
    pub stat_key: String,
    pub value: f64,
    pub threshold: f64,
    pub hof_average: f64,
    pub is_rate: bool,
    pub lower_is_better: bool,
    pub reached: bool,
    /// Progress toward the threshold, 0-100, one decimal.
    pub progress_pct: f64,
    pub weight: f64,
    pub credit: f64,
}

impl MilestoneResult {
    /// Whether this result is worth showing (reached, or at least 20% of the
    /// way there).
    pub fn is_surfaced(&self) -> bool {
        self.reached || self.progress_pct >= SURFACE_PROGRESS_PCT
    }
}

/// Score credit for a milestone: full weight when reached, a quadratic ramp
/// up to half the weight between 50% and 100% progress, nothing below.
pub fn milestone_credit(weight: f64, progress: f64, reached: bool) -> f64 {
    if reached {
        return weight;
    }
    if progress < PARTIAL_CREDIT_START {
        return 0.0;
    }
    let t = ((progress - PARTIAL_CREDIT_START) / (1.0 - PARTIAL_CREDIT_START)).min(1.0);
    weight * PARTIAL_CREDIT_SHARE * t * t
}

/// Check every applicable milestone in `table` against `stats`.
///
/// A stat the player does not have is never reached and earns no credit,
/// including for lower-is-better rates where 0.0 would otherwise pass.
pub fn evaluate_milestones<T: PartialEq>(
    table: &[Milestone<T>],
    player_type: &T,
    debut_year: Option<i32>,
    stats: &CareerStats,
) -> Vec<MilestoneResult> {
    table
        .iter()
        .filter(|m| m.applies(player_type, debut_year))
        .map(|m| {
            let present = stats.get(m.stat_key);
            let value = present.unwrap_or(0.0);
            let reached = present.is_some()
                && if m.lower_is_better {
                    value <= m.threshold
                } else {
                    value >= m.threshold
                };
            let progress = if present.is_some() { m.progress(value) } else { 0.0 };
            MilestoneResult {
                label: m.label.to_string(),
                stat_key: m.stat_key.to_string(),
                value,
                threshold: m.threshold,
                hof_average: m.hof_average,
                is_rate: m.is_rate,
                lower_is_better: m.lower_is_better,
                reached,
                progress_pct: round1(progress * 100.0),
                weight: m.weight,
                credit: milestone_credit(m.weight, progress, reached),
            }
        })
        .collect()
}

/// Total credit across results. Not capped; the scorer applies the cap.
pub fn total_credit(results: &[MilestoneResult]) -> f64 {
    results.iter().map(|r| r.credit).sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
