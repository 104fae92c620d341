// Forward projection of a career at a constant value per season.
//
// Each projected year appends one synthetic season to a growing copy of the
// player's seasons and re-scores the whole career as an active player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::pipeline::{prepare, PlayerProfile};
use crate::score::Tier;
use crate::season::SeasonValue;
use crate::sport::SportModel;

pub const DEFAULT_HORIZON: u32 = 15;

/// Score thresholds reported by `tier_timeline`, with the tier each unlocks.
pub const TIER_THRESHOLDS: [(u8, Tier); 4] = [
    (45, Tier::Borderline),
    (60, Tier::SolidCandidate),
    (75, Tier::StrongCandidate),
    (90, Tier::FirstBallotLock),
];

/// What to project and how far.
#[derive(Debug, Clone)]
pub struct ProjectionInput<'a, P> {
    pub profile: &'a PlayerProfile<P>,
    pub seasons: &'a [SeasonValue],
    /// Season year of offset 0; synthetic seasons start the year after.
    pub current_year: i32,
    pub current_age: Option<u32>,
    pub value_per_season: f64,
    pub horizon: u32,
}

/// One year of a projection. Offset 0 is the player's current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year_offset: u32,
    pub season: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub projected_career_value: f64,
    pub projected_jaws: f64,
    pub projected_score: u8,
    pub tier: Tier,
}

/// Project a player's score forward.
///
/// Offset 0 scores the supplied seasons unchanged. Later offsets treat the
/// player as active. The projection stops early at the first point whose score
/// reaches 100.
pub fn project<S: SportModel>(
    sport: &S,
    input: &ProjectionInput<'_, S::Position>,
) -> Result<Vec<ProjectionPoint>, CoreError> {
    let prepared = prepare(sport, input.profile, input.seasons)?;
    let mut seasons: Vec<SeasonValue> = input.seasons.to_vec();
    let mut points = Vec::with_capacity(input.horizon as usize + 1);

    let current = prepared.score_seasons(&seasons, input.profile.is_active)?;
    points.push(ProjectionPoint {
        year_offset: 0,
        season: input.current_year,
        age: input.current_age,
        projected_career_value: current.aggregate.career_value,
        projected_jaws: current.aggregate.jaws,
        projected_score: current.score.overall,
        tier: current.score.tier,
    });

    for year in 1..=input.horizon {
        if points.last().is_some_and(|p| p.projected_score >= 100) {
            break;
        }
        let season = input.current_year + year as i32;
        let age = input.current_age.map(|a| a + year);
        seasons.push(SeasonValue {
            season,
            value: input.value_per_season,
            team: None,
            age,
        });

        let scored = prepared.score_seasons(&seasons, true)?;
        points.push(ProjectionPoint {
            year_offset: year,
            season,
            age,
            projected_career_value: scored.aggregate.career_value,
            projected_jaws: scored.aggregate.jaws,
            projected_score: scored.score.overall,
            tier: scored.score.tier,
        });
    }

    debug!(
        player = %input.profile.player_id,
        years = points.len() - 1,
        value_per_season = input.value_per_season,
        "projected career"
    );

    Ok(points)
}

/// First year offset whose score is at or above `threshold`, or `None` when
/// the threshold is not reached within the projection.
pub fn seasons_until(points: &[ProjectionPoint], threshold: u8) -> Option<u32> {
    points
        .iter()
        .find(|p| p.projected_score >= threshold)
        .map(|p| p.year_offset)
}

/// Seasons until each fixed tier threshold (45/60/75/90).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierMilestone {
    pub threshold: u8,
    pub tier: Tier,
    pub seasons_until: Option<u32>,
}

pub fn tier_timeline(points: &[ProjectionPoint]) -> Vec<TierMilestone> {
    TIER_THRESHOLDS
        .iter()
        .map(|&(threshold, tier)| TierMilestone {
            threshold,
            tier,
            seasons_until: seasons_until(points, threshold),
        })
        .collect()
}
