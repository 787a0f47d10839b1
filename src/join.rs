//! Geometry join: attach ranked rows to boundary regions by name.

use ahash::AHashMap;
use tracing::debug;

use crate::dataset::{Annotation, RankedRow, Region};

/// Annotate a copy of `regions` with the ranked rows.
///
/// A region matches a row when the last token of its admin name equals the
/// row's region name. Matched regions become [`Annotation::Top5`] with sales
/// truncated to whole units; all others become [`Annotation::Background`].
/// Several regions sharing a trailing token all receive the same annotation.
pub fn join(regions: &[Region], ranked: &[RankedRow]) -> Vec<Region> {
    let mut lookup: AHashMap<&str, &RankedRow> = AHashMap::with_capacity(ranked.len());
    for row in ranked {
        // first entry wins: it carries the better rank
        lookup.entry(row.region_name()).or_insert(row);
    }

    let joined: Vec<Region> = regions.iter()
        .map(|region| {
            let annotation = match lookup.get(region.short_name()) {
                Some(row) => Annotation::Top5 {
                    rank: row.rank,
                    sales: row.metrics.expected_sales_per_store.trunc() as i64,
                    stores: row.metrics.store_count,
                },
                None => Annotation::Background,
            };
            Region { annotation, ..region.clone() }
        })
        .collect();

    debug!(
        regions = joined.len(),
        matched = joined.iter().filter(|r| r.annotation.is_top5()).count(),
        "joined ranking onto regions"
    );
    joined
}
