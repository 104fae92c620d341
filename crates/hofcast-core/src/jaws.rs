// Career / peak aggregation (JAWS).
//
// JAWS is the average of a player's career value and the sum of their best
// seven seasons.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::round1;
use crate::season::SeasonValue;

/// Number of seasons that make up a player's peak.
pub const PEAK_SEASONS: usize = 7;

/// One of the top seasons by value. `rank` 1 is the best season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakSeason {
    pub season: i32,
    pub value: f64,
    pub rank: usize,
}

/// Career, peak and JAWS totals for one season sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAggregate {
    pub career_value: f64,
    pub peak_value: f64,
    pub jaws: f64,
    pub peak_seasons: Vec<PeakSeason>,
    pub position_category: String,
}

impl CareerAggregate {
    /// The all-zero aggregate reported for a player with no seasons.
    pub fn empty(position_category: &str) -> Self {
        CareerAggregate {
            career_value: 0.0,
            peak_value: 0.0,
            jaws: 0.0,
            peak_seasons: Vec::new(),
            position_category: position_category.to_string(),
        }
    }
}

/// Select the best `n` seasons by value.
///
/// Seasons are first put in chronological order, then stably sorted by value
/// descending, so ties resolve to the earlier season regardless of the order
/// the caller supplied them in.
pub fn select_peak(seasons: &[SeasonValue], n: usize) -> Vec<PeakSeason> {
    let mut ordered: Vec<&SeasonValue> = seasons.iter().collect();
    ordered.sort_by_key(|s| s.season);
    ordered.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    ordered
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, s)| PeakSeason {
            season: s.season,
            value: s.value,
            rank: i + 1,
        })
        .collect()
}

/// Reduce a season sequence to career value, peak-7 value and JAWS.
///
/// Negative seasons are kept: they lower the career total and can appear in
/// the peak when fewer than seven better seasons exist.
pub fn aggregate(seasons: &[SeasonValue], position_category: &str) -> CareerAggregate {
    if seasons.is_empty() {
        return CareerAggregate::empty(position_category);
    }

    let career_value = round1(seasons.iter().map(|s| s.value).sum());
    let peak_seasons = select_peak(seasons, PEAK_SEASONS);
    let peak_value = round1(peak_seasons.iter().map(|s| s.value).sum());
    let jaws = round1((career_value + peak_value) / 2.0);

    CareerAggregate {
        career_value,
        peak_value,
        jaws,
        peak_seasons,
        position_category: position_category.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn seasons(values: &[(i32, f64)]) -> Vec<SeasonValue> {
        values.iter().map(|&(y, v)| SeasonValue::new(y, v)).collect()
    }

    #[test]
    fn short_career_uses_all_seasons_as_peak() {
        let s = seasons(&[(2010, 8.0), (2011, 6.0), (2012, 9.0), (2013, 2.0)]);
        let agg = aggregate(&s, "SS");
        assert_eq!(agg.career_value, 25.0);
        assert_eq!(agg.peak_value, 25.0);
        assert_eq!(agg.jaws, 25.0);
        assert_eq!(agg.peak_seasons.len(), 4);
        assert_eq!(agg.peak_seasons[0].season, 2012);
        assert_eq!(agg.peak_seasons[0].rank, 1);
        assert_eq!(agg.peak_seasons[3].season, 2013);
    }

    #[test]
    fn peak_takes_best_seven() {
        let s = seasons(&[
            (2000, 1.0),
            (2001, 7.0),
            (2002, 6.0),
            (2003, 5.0),
            (2004, 4.0),
            (2005, 3.0),
            (2006, 2.0),
            (2007, 8.0),
            (2008, 0.5),
        ]);
        let agg = aggregate(&s, "CF");
        assert_eq!(agg.career_value, 36.5);
        assert_eq!(agg.peak_value, 35.0);
        assert_eq!(agg.jaws, 35.8);
        assert_eq!(agg.peak_seasons.len(), PEAK_SEASONS);
        assert!(agg.peak_seasons.iter().all(|p| p.season != 2000 && p.season != 2008));
    }

    #[test]
    fn empty_sequence_is_all_zero() {
        let agg = aggregate(&[], "C");
        assert_eq!(agg.career_value, 0.0);
        assert_eq!(agg.peak_value, 0.0);
        assert_eq!(agg.jaws, 0.0);
        assert!(agg.peak_seasons.is_empty());
        assert_eq!(agg.position_category, "C");
    }

    #[test]
    fn negative_seasons_are_not_floored() {
        let s = seasons(&[(1990, -1.5), (1991, -0.5)]);
        let agg = aggregate(&s, "RF");
        assert_eq!(agg.career_value, -2.0);
        assert_eq!(agg.peak_value, -2.0);
        assert_eq!(agg.jaws, -2.0);
        assert_eq!(agg.peak_seasons[0].value, -0.5);
    }

    #[test]
    fn ties_resolve_to_earlier_season_in_any_input_order() {
        let forward = seasons(&[
            (2001, 3.0),
            (2002, 3.0),
            (2003, 3.0),
            (2004, 3.0),
            (2005, 3.0),
            (2006, 3.0),
            (2007, 3.0),
            (2008, 3.0),
        ]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a: Vec<i32> = select_peak(&forward, PEAK_SEASONS).iter().map(|p| p.season).collect();
        let b: Vec<i32> = select_peak(&reversed, PEAK_SEASONS).iter().map(|p| p.season).collect();
        assert_eq!(a, b);
        assert!(!a.contains(&2008));
    }

    #[test]
    fn jaws_is_rounded_mean_of_career_and_peak() {
        let s = seasons(&[(2010, 3.3), (2011, 4.4), (2012, 0.1)]);
        let agg = aggregate(&s, "2B");
        assert_eq!(agg.jaws, round1((agg.career_value + agg.peak_value) / 2.0));
    }
}
