// Award aggregation.
//
// Raw award records carry provider-specific IDs ("ALMVP", "NLMVP"). A static
// per-sport table groups those IDs under a canonical label and assigns score
// points per occurrence.

use serde::{Deserialize, Serialize};

/// One raw award record for a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub category_id: String,
    pub season: i32,
}

impl AwardRecord {
    pub fn new(category_id: &str, season: i32) -> Self {
        AwardRecord {
            category_id: category_id.to_string(),
            season,
        }
    }
}

/// A canonical award category and the raw IDs that count toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwardCategory {
    pub label: &'static str,
    pub ids: &'static [&'static str],
    /// Score points per occurrence.
    pub points: f64,
    /// Cap on points from this category.
    pub max_points: f64,
}

impl AwardCategory {
    pub fn matches(&self, category_id: &str) -> bool {
        let id = category_id.trim();
        self.ids.iter().any(|known| known.eq_ignore_ascii_case(id))
    }
}

/// Count of occurrences for one labeled category (or achievement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardCount {
    pub label: String,
    pub count: u32,
}

impl AwardCount {
    pub fn new(label: &str, count: u32) -> Self {
        AwardCount {
            label: label.to_string(),
            count,
        }
    }
}

/// Group award records into the table's categories, in table order,
/// omitting categories with no occurrences. Unknown IDs are ignored.
pub fn aggregate_awards(table: &[AwardCategory], records: &[AwardRecord]) -> Vec<AwardCount> {
    table
        .iter()
        .filter_map(|category| {
            let count = records
                .iter()
                .filter(|r| category.matches(&r.category_id))
                .count() as u32;
            (count > 0).then(|| AwardCount::new(category.label, count))
        })
        .collect()
}

/// Sum of capped per-category points for aggregated counts. Labels not in the
/// table contribute nothing.
pub fn award_points(table: &[AwardCategory], counts: &[AwardCount]) -> f64 {
    counts
        .iter()
        .filter_map(|c| {
            table
                .iter()
                .find(|cat| cat.label == c.label)
                .map(|cat| (c.count as f64 * cat.points).min(cat.max_points))
        })
        .sum()
}
