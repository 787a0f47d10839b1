//! Category filter and top-5 ranking.

use std::cmp::Ordering;

use ahash::AHashSet;
use tracing::debug;

use crate::dataset::{MetricRow, RankedRow};

/// Number of neighborhoods recommended per category.
pub const TOP_N: usize = 5;

/// Rank the rows of `category` (exact, case-sensitive match) by descending
/// performance index and keep the first [`TOP_N`]. Ties keep table order.
/// An unknown category yields an empty ranking.
pub fn rank(rows: &[MetricRow], category: &str) -> Vec<RankedRow> {
    let mut matches: Vec<&MetricRow> = rows.iter()
        .filter(|row| row.category == category)
        .collect();

    // stable: equal indices keep their original order
    matches.sort_by(|a, b| descending(a.performance_index, b.performance_index));

    let ranked: Vec<RankedRow> = matches.into_iter()
        .take(TOP_N)
        .zip(1..)
        .map(|(row, rank)| RankedRow { rank, metrics: row.clone() })
        .collect();

    debug!(category, ranked = ranked.len(), "ranked category");
    ranked
}

/// Distinct categories in order of first appearance.
pub fn categories(rows: &[MetricRow]) -> Vec<&str> {
    let mut seen = AHashSet::new();
    rows.iter()
        .map(|row| row.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Descending order for indices, with NaN after every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
