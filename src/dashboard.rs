//! One render pass: rank → join → map + report → page.

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::dataset::{Dataset, RankedRow, Region};
use crate::io::geojson::regions_to_geojson;
use crate::join::join;
use crate::map::render_map;
use crate::page::{render_page, PageContext};
use crate::report::render_report;

/// Ranking and annotated regions for one selected category.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub category: String,
    pub ranked: Vec<RankedRow>,
    pub regions: Vec<Region>,
}

impl DashboardView {
    /// Build the view for `category`, or the dataset's first category when
    /// `None`. The dataset itself is never modified.
    pub fn new(dataset: &Dataset, category: Option<&str>) -> Self {
        let category = category
            .or_else(|| dataset.default_category())
            .unwrap_or_default()
            .to_string();
        let ranked = dataset.rank(&category);
        let regions = join(&dataset.regions, &ranked);
        Self { category, ranked, regions }
    }

    pub fn map_svg(&self) -> Result<String> {
        render_map(&self.regions)
    }

    pub fn report_html(&self) -> String {
        render_report(&self.ranked, &self.category)
    }

    /// Annotated regions as a GeoJSON FeatureCollection.
    pub fn to_geojson(&self) -> Value {
        regions_to_geojson(&self.regions)
    }
}

/// Render the full dashboard page for `category`.
pub fn render_dashboard(dataset: &Dataset, category: Option<&str>) -> Result<String> {
    let view = DashboardView::new(dataset, category);
    info!(category = %view.category, top5 = view.ranked.len(), "rendering dashboard");

    let categories = dataset.categories();
    let regions = view.to_geojson();
    let report_html = view.report_html();

    Ok(render_page(&PageContext {
        categories: &categories,
        selected: &view.category,
        regions: &regions,
        report_html: &report_html,
    }))
}
