use serde::Serialize;

/// One precomputed (category, neighborhood) row of the metric table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub category: String,
    pub region_name: String,
    /// Per-store sales relative to the citywide average for the category.
    pub performance_index: f64,
    pub expected_sales_per_store: f64,
    pub store_count: i64,
    pub worker_population: i64,
    pub floating_population: i64,
}

/// A `MetricRow` placed in the top-5 of its category for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub rank: u32,
    #[serde(flatten)]
    pub metrics: MetricRow,
}

impl RankedRow {
    #[inline]
    pub fn region_name(&self) -> &str { &self.metrics.region_name }
}
