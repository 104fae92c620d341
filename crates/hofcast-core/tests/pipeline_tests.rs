// End-to-end tests of the shared pipeline through a small fixed sport.

use std::fmt;

use serde::{Deserialize, Serialize};

use hofcast_core::awards::{AwardCategory, AwardCount, AwardRecord};
use hofcast_core::comparison::PositionalBaseline;
use hofcast_core::jaws::{aggregate, PEAK_SEASONS};
use hofcast_core::milestones::Milestone;
use hofcast_core::pipeline::{evaluate, PlayerProfile};
use hofcast_core::predict::{interpolate, AnchorTable};
use hofcast_core::projection::{project, tier_timeline, ProjectionInput};
use hofcast_core::score::{Tier, AWARDS_MAX, JAWS_MAX, MILESTONES_MAX, TRAJECTORY_MAX};
use hofcast_core::season::{RawSeason, SeasonValue};
use hofcast_core::sport::{Induction, InductionPath, TrajectoryThresholds};
use hofcast_core::stats::{CareerStats, StatLine};
use hofcast_core::{validate_sport_model, CoreError, SportModel};

// ---------------------------------------------------------------------------
// Test sport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Spot {
    Field,
    Mound,
    Bench,
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

static MILESTONES: &[Milestone<Spot>] = &[
    Milestone {
        label: "100 Runs",
        stat_key: "runs",
        threshold: 100.0,
        applies_to: &[Spot::Field],
        weight: 6.0,
        hof_average: 150.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "1,000 Runs",
        stat_key: "runs",
        threshold: 1000.0,
        applies_to: &[Spot::Field],
        weight: 14.0,
        hof_average: 1100.0,
        is_rate: false,
        rate_floor: None,
        lower_is_better: false,
        debut_bound: None,
    },
    Milestone {
        label: "Low Rate",
        stat_key: "rate",
        threshold: 2.0,
        applies_to: &[Spot::Mound],
        weight: 4.0,
        hof_average: 2.5,
        is_rate: true,
        rate_floor: Some(4.0),
        lower_is_better: true,
        debut_bound: None,
    },
];

static AWARDS: &[AwardCategory] = &[
    AwardCategory {
        label: "Top Player",
        ids: &["TOP"],
        points: 5.0,
        max_points: 15.0,
    },
    AwardCategory {
        label: "Legend",
        ids: &["LEG"],
        points: 10.0,
        max_points: 10.0,
    },
];

/// A sport with a tiny JAWS baseline, so ordinary careers saturate it.
struct Toy {
    broken: bool,
}

impl Toy {
    fn new() -> Self {
        Toy { broken: false }
    }
}

impl SportModel for Toy {
    type Position = Spot;
    type PlayerType = Spot;

    fn name(&self) -> &'static str {
        "toy"
    }

    fn season_value(&self, raw: &RawSeason) -> f64 {
        if raw.games_played == 0 {
            return 0.0;
        }
        raw.stats.value("value")
    }

    fn baseline_positions(&self) -> &'static [Spot] {
        &[Spot::Field, Spot::Mound]
    }

    fn baseline(&self, category: Spot) -> Option<PositionalBaseline> {
        match category {
            Spot::Field if self.broken => Some(PositionalBaseline::new(20.0, 10.0, 0.0)),
            Spot::Field => Some(PositionalBaseline::new(20.0, 10.0, 5.0)),
            Spot::Mound => Some(PositionalBaseline::new(60.0, 40.0, 50.0)),
            Spot::Bench => None,
        }
    }

    fn player_type(&self, position: Spot, _stats: &CareerStats) -> Spot {
        position
    }

    fn milestones(&self) -> &'static [Milestone<Spot>] {
        MILESTONES
    }

    fn award_categories(&self) -> &'static [AwardCategory] {
        AWARDS
    }

    fn achievements(&self, player_id: &str) -> Vec<AwardCount> {
        if player_id == "ace01" {
            vec![AwardCount::new("Perfect Game", 1)]
        } else {
            Vec::new()
        }
    }

    fn inductee(&self, player_id: &str) -> Option<Induction> {
        (player_id == "elder01").then_some(Induction {
            year: 1975,
            path: InductionPath::Committee,
        })
    }

    fn trajectory_thresholds(&self) -> TrajectoryThresholds {
        TrajectoryThresholds {
            above_average_value: 5.0,
            full_longevity_seasons: 15,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

fn seasons(pairs: &[(i32, f64)]) -> Vec<SeasonValue> {
    pairs.iter().map(|&(y, v)| SeasonValue::new(y, v)).collect()
}

fn scenario_seasons() -> Vec<SeasonValue> {
    seasons(&[(2010, 8.0), (2011, 6.0), (2012, 9.0), (2013, 2.0)])
}

/// Deterministic pseudo-random values for property checks.
fn wobble(n: usize, seed: u64) -> Vec<SeasonValue> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let value = ((state >> 33) % 120) as f64 / 10.0;
            SeasonValue::new(1990 + i as i32, value)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation properties
// ---------------------------------------------------------------------------

#[test]
fn peak_never_exceeds_career_for_non_negative_values() {
    for n in 0..20 {
        let s = wobble(n, n as u64 + 7);
        let agg = aggregate(&s, "Field");
        assert!(agg.peak_value <= agg.career_value, "n = {n}");
        assert_eq!(agg.peak_seasons.len(), n.min(PEAK_SEASONS));
    }
}

#[test]
fn jaws_is_mean_of_career_and_peak() {
    for n in 1..20 {
        let agg = aggregate(&wobble(n, 99 + n as u64), "Field");
        let expected = ((agg.career_value + agg.peak_value) / 2.0 * 10.0 + 0.5).floor() / 10.0;
        assert_eq!(agg.jaws, expected);
    }
}

#[test]
fn aggregation_ignores_input_order() {
    let forward = wobble(14, 3);
    let mut backward = forward.clone();
    backward.reverse();
    let mut shuffled = forward.clone();
    shuffled.rotate_left(5);

    let a = aggregate(&forward, "Field");
    for other in [&backward, &shuffled] {
        let b = aggregate(other, "Field");
        assert_eq!(a.career_value, b.career_value);
        assert_eq!(a.peak_value, b.peak_value);
        let mut sa: Vec<i32> = a.peak_seasons.iter().map(|p| p.season).collect();
        let mut sb: Vec<i32> = b.peak_seasons.iter().map(|p| p.season).collect();
        sa.sort_unstable();
        sb.sort_unstable();
        assert_eq!(sa, sb);
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn four_season_scenario_doubles_as_peak() {
    let profile = PlayerProfile::new("short01", "Short Career", Spot::Field);
    let eval = evaluate(&Toy::new(), &profile, &scenario_seasons()).unwrap();
    assert_eq!(eval.aggregate.career_value, 25.0);
    assert_eq!(eval.aggregate.peak_value, 25.0);
    assert_eq!(eval.aggregate.jaws, 25.0);
    assert!(approx_eq(eval.comparison.jaws_ratio, 5.0, 1e-9));
    assert_eq!(eval.score.jaws_component, JAWS_MAX);
}

#[test]
fn empty_career_scores_from_awards_and_milestones_only() {
    let mut profile = PlayerProfile::new("empty01", "No Seasons", Spot::Field);
    profile.career_stats = StatLine::new().with("runs", 120.0);
    profile.awards = vec![AwardRecord::new("TOP", 2001), AwardRecord::new("top", 2002)];

    let eval = evaluate(&Toy::new(), &profile, &[]).unwrap();
    assert_eq!(eval.aggregate.career_value, 0.0);
    assert_eq!(eval.aggregate.peak_value, 0.0);
    assert_eq!(eval.aggregate.jaws, 0.0);
    assert_eq!(eval.score.jaws_component, 0.0);
    assert_eq!(eval.score.trajectory_component, 0.0);
    assert_eq!(eval.score.awards_component, 10.0);
    assert_eq!(eval.score.milestones_component, 6.0);
    assert_eq!(eval.score.overall, 16);
}

#[test]
fn evaluation_serializes_with_stable_field_names() {
    let profile = PlayerProfile::new("short01", "Short Career", Spot::Field);
    let eval = evaluate(&Toy::new(), &profile, &scenario_seasons()).unwrap();
    let json = serde_json::to_value(&eval).unwrap();

    assert_eq!(json["player_id"], "short01");
    assert_eq!(json["aggregate"]["jaws"], 25.0);
    assert_eq!(json["score"]["tier"], serde_json::to_value(eval.score.tier).unwrap());
    assert!(json["induction"].is_null());

    let back: hofcast_core::pipeline::Evaluation = serde_json::from_value(json).unwrap();
    assert_eq!(back, eval);
}

#[test]
fn interpolation_scenario() {
    let table = AnchorTable::new(vec![(0.0, 0.0), (50.0, 15.0), (100.0, 99.0)]).unwrap();
    assert_eq!(table.interpolate(75.0), 57.0);
}

#[test]
fn interpolation_is_monotonic_for_monotonic_tables() {
    let anchors = [(0.0, 0.0), (30.0, 2.0), (60.0, 2.0), (80.0, 50.0), (100.0, 100.0)];
    let mut last = f64::MIN;
    for step in 0..=1000 {
        let x = step as f64 / 10.0;
        let y = interpolate(&anchors, x);
        assert!(y >= last, "dropped at {x}");
        last = y;
    }
}

#[test]
fn inductee_with_low_score_is_hall_of_famer() {
    let profile = PlayerProfile::new("elder01", "Old Timer", Spot::Mound);
    let eval = evaluate(&Toy::new(), &profile, &seasons(&[(1950, 3.0), (1951, 4.0)])).unwrap();
    assert!(eval.score.overall < 45, "overall {}", eval.score.overall);
    assert_eq!(eval.score.tier, Tier::HallOfFamer);
    assert_eq!(eval.induction.map(|i| i.path), Some(InductionPath::Committee));
}

// ---------------------------------------------------------------------------
// Score bounds
// ---------------------------------------------------------------------------

#[test]
fn components_stay_within_maxima() {
    let mut profile = PlayerProfile::new("big01", "Big Numbers", Spot::Field);
    profile.career_stats = StatLine::new().with("runs", 900.0);
    profile.awards = (1990..2010).map(|y| AwardRecord::new("TOP", y)).collect();

    for n in [0, 1, 5, 12, 30] {
        let eval = evaluate(&Toy::new(), &profile, &wobble(n, 42)).unwrap();
        let s = &eval.score;
        assert!(s.overall <= 100);
        assert!(s.jaws_component >= 0.0 && s.jaws_component <= JAWS_MAX);
        assert!(s.awards_component >= 0.0 && s.awards_component <= AWARDS_MAX);
        assert!(s.milestones_component >= 0.0 && s.milestones_component <= MILESTONES_MAX);
        assert!(s.trajectory_component >= 0.0 && s.trajectory_component <= TRAJECTORY_MAX);
    }
}

// ---------------------------------------------------------------------------
// Milestones and overlays
// ---------------------------------------------------------------------------

#[test]
fn missing_rate_stat_is_not_a_reached_milestone() {
    let profile = PlayerProfile::new("arm01", "No Rate", Spot::Mound);
    let eval = evaluate(&Toy::new(), &profile, &[]).unwrap();
    assert_eq!(eval.milestones.len(), 1);
    assert!(!eval.milestones[0].reached);
    assert_eq!(eval.milestones[0].credit, 0.0);
}

#[test]
fn achievements_are_reported_but_not_scored() {
    let profile = PlayerProfile::new("ace01", "Ace", Spot::Mound);
    let plain = PlayerProfile::new("arm02", "Plain", Spot::Mound);
    let s = seasons(&[(2000, 5.0), (2001, 6.0)]);

    let ace = evaluate(&Toy::new(), &profile, &s).unwrap();
    let other = evaluate(&Toy::new(), &plain, &s).unwrap();
    assert_eq!(ace.achievements, vec![AwardCount::new("Perfect Game", 1)]);
    assert_eq!(ace.score, other.score);
}

#[test]
fn surfaced_milestones_hide_small_progress() {
    let mut profile = PlayerProfile::new("runs01", "Few Runs", Spot::Field);
    profile.career_stats = StatLine::new().with("runs", 10.0);
    let eval = evaluate(&Toy::new(), &profile, &[]).unwrap();
    assert_eq!(eval.milestones.len(), 2);
    assert_eq!(eval.surfaced_milestones().count(), 0);
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn projection_at_year_zero_matches_evaluation() {
    let mut profile = PlayerProfile::new("live01", "Active Player", Spot::Mound);
    profile.is_active = true;
    profile.awards = vec![AwardRecord::new("TOP", 2020)];
    let s = seasons(&[(2019, 4.0), (2020, 6.5), (2021, 5.5), (2022, 2.0)]);

    let eval = evaluate(&Toy::new(), &profile, &s).unwrap();
    let points = project(
        &Toy::new(),
        &ProjectionInput {
            profile: &profile,
            seasons: &s,
            current_year: 2022,
            current_age: Some(28),
            value_per_season: 5.0,
            horizon: 0,
        },
    )
    .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].projected_score, eval.score.overall);
    assert_eq!(points[0].projected_jaws, eval.aggregate.jaws);
    assert_eq!(points[0].projected_career_value, eval.aggregate.career_value);
    assert_eq!(points[0].tier, eval.score.tier);
}

#[test]
fn projection_grows_career_and_never_lowers_score() {
    let profile = PlayerProfile::new("grow01", "Grower", Spot::Mound);
    let s = seasons(&[(2020, 3.0), (2021, 4.0)]);
    let points = project(
        &Toy::new(),
        &ProjectionInput {
            profile: &profile,
            seasons: &s,
            current_year: 2021,
            current_age: Some(25),
            value_per_season: 6.0,
            horizon: 10,
        },
    )
    .unwrap();

    assert_eq!(points.len(), 11);
    assert_eq!(points[10].season, 2031);
    assert_eq!(points[10].age, Some(35));
    assert!(approx_eq(points[10].projected_career_value, 67.0, 1e-9));
    for pair in points.windows(2) {
        assert!(pair[1].projected_score >= pair[0].projected_score);
    }

    let timeline = tier_timeline(&points);
    assert_eq!(timeline.len(), 4);
    assert!(timeline[0].seasons_until.is_some());
}

#[test]
fn projection_stops_once_score_reaches_100() {
    let mut profile = PlayerProfile::new("max01", "Maxed", Spot::Field);
    profile.career_stats = StatLine::new().with("runs", 1500.0);
    profile.awards = (2000..2004).map(|y| AwardRecord::new("TOP", y)).collect();
    profile.awards.push(AwardRecord::new("LEG", 2005));
    let s: Vec<SeasonValue> = (2000..2010).map(|y| SeasonValue::new(y, 9.0)).collect();

    let points = project(
        &Toy::new(),
        &ProjectionInput {
            profile: &profile,
            seasons: &s,
            current_year: 2009,
            current_age: None,
            value_per_season: 9.0,
            horizon: 15,
        },
    )
    .unwrap();

    // Only longevity is left to earn: 98 now, 100 once the career hits 14 seasons.
    assert_eq!(points[0].projected_score, 98);
    assert_eq!(points.len(), 5);
    assert_eq!(points.last().map(|p| p.projected_score), Some(100));
    assert_eq!(points.iter().filter(|p| p.projected_score >= 100).count(), 1);
}

// ---------------------------------------------------------------------------
// Normalization and configuration defects
// ---------------------------------------------------------------------------

#[test]
fn normalize_drops_postseason_and_merges_stints() {
    let mut post = RawSeason::regular(2001, 10, StatLine::new().with("value", 9.0));
    post.game_type = hofcast_core::season::GameType::Postseason;
    let mut first = RawSeason::regular(2001, 60, StatLine::new().with("value", 2.0));
    first.team = Some("AAA".into());
    let mut second = RawSeason::regular(2001, 80, StatLine::new().with("value", 1.5));
    second.team = Some("BBB".into());
    let idle = RawSeason::regular(2002, 0, StatLine::new().with("value", 3.0));

    let normalized = Toy::new().normalize_seasons(&[first, post, second, idle]);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].season, 2001);
    assert_eq!(normalized[0].value, 3.5);
    assert_eq!(normalized[0].team.as_deref(), Some("AAA/BBB"));
    assert_eq!(normalized[1].value, 0.0);
}

#[test]
fn missing_baseline_is_an_error() {
    let profile = PlayerProfile::new("bench01", "Bench", Spot::Bench);
    let err = evaluate(&Toy::new(), &profile, &[]).unwrap_err();
    assert!(matches!(err, CoreError::MissingBaseline { .. }));
}

#[test]
fn zero_baseline_fails_validation() {
    assert!(validate_sport_model(&Toy::new()).is_ok());
    let broken = Toy { broken: true };
    let err = validate_sport_model(&broken).unwrap_err();
    assert!(matches!(err, CoreError::InvalidBaseline { metric: "jaws", .. }));

    let profile = PlayerProfile::new("f01", "Fielder", Spot::Field);
    assert!(evaluate(&broken, &profile, &scenario_seasons()).is_err());
}
