// Composite Hall-of-Fame score and tier assignment.
//
// Four components with fixed maxima (JAWS 40, awards 25, milestones 20,
// trajectory 15) sum to a 0-100 score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comparison::Comparison;
use crate::round1;
use crate::season::{latest_season, SeasonValue};
use crate::sport::TrajectoryThresholds;

pub const JAWS_MAX: f64 = 40.0;
pub const AWARDS_MAX: f64 = 25.0;
pub const MILESTONES_MAX: f64 = 20.0;
pub const TRAJECTORY_MAX: f64 = 15.0;

/// Trajectory points per above-average season, and the cap on that share.
const EXCELLENCE_POINTS_PER_SEASON: f64 = 1.25;
const EXCELLENCE_MAX: f64 = 10.0;
/// Longevity share of the trajectory component.
const LONGEVITY_MAX: f64 = 5.0;
/// An active player's latest season qualifies at this fraction of the
/// above-average threshold, since it may still be in progress.
const ACTIVE_LATEST_SEASON_FACTOR: f64 = 0.5;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Induction-likelihood tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    NotHofCaliber,
    Unlikely,
    Borderline,
    SolidCandidate,
    StrongCandidate,
    FirstBallotLock,
    HallOfFamer,
}

impl Tier {
    /// All tiers, highest first.
    pub const ALL: [Tier; 7] = [
        Tier::HallOfFamer,
        Tier::FirstBallotLock,
        Tier::StrongCandidate,
        Tier::SolidCandidate,
        Tier::Borderline,
        Tier::Unlikely,
        Tier::NotHofCaliber,
    ];

    /// Tier for a computed score. Never returns `HallOfFamer`; that tier is
    /// only assigned through the inductee roster.
    pub fn from_score(overall: u8) -> Self {
        match overall {
            90..=u8::MAX => Tier::FirstBallotLock,
            75..=89 => Tier::StrongCandidate,
            60..=74 => Tier::SolidCandidate,
            45..=59 => Tier::Borderline,
            25..=44 => Tier::Unlikely,
            _ => Tier::NotHofCaliber,
        }
    }

    /// Minimum score for a score-derived tier.
    pub fn min_score(&self) -> Option<u8> {
        match self {
            Tier::HallOfFamer => None,
            Tier::FirstBallotLock => Some(90),
            Tier::StrongCandidate => Some(75),
            Tier::SolidCandidate => Some(60),
            Tier::Borderline => Some(45),
            Tier::Unlikely => Some(25),
            Tier::NotHofCaliber => Some(0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::HallOfFamer => "Hall of Famer",
            Tier::FirstBallotLock => "First Ballot Lock",
            Tier::StrongCandidate => "Strong Candidate",
            Tier::SolidCandidate => "Solid Candidate",
            Tier::Borderline => "Borderline",
            Tier::Unlikely => "Unlikely",
            Tier::NotHofCaliber => "Not HOF Caliber",
        }
    }

    /// Parse a label or a compact form ("strong", "first-ballot", "hof").
    pub fn from_label(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "halloffamer" | "hof" | "inducted" => Some(Tier::HallOfFamer),
            "firstballotlock" | "firstballot" | "lock" => Some(Tier::FirstBallotLock),
            "strongcandidate" | "strong" => Some(Tier::StrongCandidate),
            "solidcandidate" | "solid" => Some(Tier::SolidCandidate),
            "borderline" => Some(Tier::Borderline),
            "unlikely" => Some(Tier::Unlikely),
            "nothofcaliber" | "not" | "none" => Some(Tier::NotHofCaliber),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// The inputs behind each component, kept for display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub jaws_ratio: f64,
    pub award_points: f64,
    pub milestone_credit: f64,
    pub above_average_seasons: u32,
    pub seasons_played: u32,
    pub is_active: bool,
    pub is_inductee: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub overall: u8,
    pub jaws_component: f64,
    pub awards_component: f64,
    pub milestones_component: f64,
    pub trajectory_component: f64,
    pub tier: Tier,
    pub breakdown: ScoreBreakdown,
}

/// Everything the scorer needs besides the comparison.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub comparison: &'a Comparison,
    pub seasons: &'a [SeasonValue],
    pub award_points: f64,
    pub milestone_credit: f64,
    pub thresholds: TrajectoryThresholds,
    pub is_active: bool,
    pub is_inductee: bool,
}

/// JAWS component: linear in the JAWS ratio, reaching 40 at the positional
/// Hall-of-Fame average.
pub fn jaws_component(jaws_ratio: f64) -> f64 {
    if !jaws_ratio.is_finite() {
        return 0.0;
    }
    JAWS_MAX * jaws_ratio.clamp(0.0, 1.0)
}

pub fn awards_component(award_points: f64) -> f64 {
    award_points.clamp(0.0, AWARDS_MAX)
}

pub fn milestones_component(milestone_credit: f64) -> f64 {
    milestone_credit.clamp(0.0, MILESTONES_MAX)
}

/// Count seasons at or above the above-average threshold. For an active
/// player the most recent season qualifies at a reduced bar.
pub fn above_average_seasons(
    seasons: &[SeasonValue],
    thresholds: &TrajectoryThresholds,
    is_active: bool,
) -> u32 {
    let latest = latest_season(seasons);
    seasons
        .iter()
        .filter(|s| {
            let bar = if is_active && Some(s.season) == latest {
                thresholds.above_average_value * ACTIVE_LATEST_SEASON_FACTOR
            } else {
                thresholds.above_average_value
            };
            s.value >= bar
        })
        .count() as u32
}

/// Trajectory component: up to 10 points for above-average seasons plus up to
/// 5 for career length.
pub fn trajectory_component(above_average: u32, seasons_played: u32, thresholds: &TrajectoryThresholds) -> f64 {
    let excellence = (above_average as f64 * EXCELLENCE_POINTS_PER_SEASON).min(EXCELLENCE_MAX);
    let full = thresholds.full_longevity_seasons.max(1) as f64;
    let longevity = (seasons_played as f64 / full).min(1.0) * LONGEVITY_MAX;
    (excellence + longevity).min(TRAJECTORY_MAX)
}

/// Combine the four components into a composite score.
pub fn compute_score(inputs: &ScoreInputs<'_>) -> CompositeScore {
    let jaws_ratio = inputs.comparison.jaws_ratio;
    let seasons_played = inputs.seasons.len() as u32;
    let above_average = above_average_seasons(inputs.seasons, &inputs.thresholds, inputs.is_active);

    let jaws_c = jaws_component(jaws_ratio);
    let awards_c = awards_component(inputs.award_points);
    let milestones_c = milestones_component(inputs.milestone_credit);
    let trajectory_c = trajectory_component(above_average, seasons_played, &inputs.thresholds);

    let overall = (jaws_c + awards_c + milestones_c + trajectory_c)
        .round()
        .clamp(0.0, 100.0) as u8;

    let tier = if inputs.is_inductee {
        Tier::HallOfFamer
    } else {
        Tier::from_score(overall)
    };

    CompositeScore {
        overall,
        jaws_component: round1(jaws_c),
        awards_component: round1(awards_c),
        milestones_component: round1(milestones_c),
        trajectory_component: round1(trajectory_c),
        tier,
        breakdown: ScoreBreakdown {
            jaws_ratio,
            award_points: inputs.award_points,
            milestone_credit: inputs.milestone_credit,
            above_average_seasons: above_average,
            seasons_played,
            is_active: inputs.is_active,
            is_inductee: inputs.is_inductee,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
