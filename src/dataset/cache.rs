use std::path::Path;

use once_cell::sync::OnceCell;
use tracing::info;

use crate::error::Result;
use crate::io::{csv::read_metric_rows, geojson::read_regions};
use crate::rank::{categories, rank};

use super::{MetricRow, RankedRow, Region};

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Metric table and boundary collection, loaded together.
///
/// The process-wide instance is read-only; every render pass works on
/// copies of `regions` produced by the geometry join.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<MetricRow>,
    pub regions: Vec<Region>,
}

impl Dataset {
    pub fn new(rows: Vec<MetricRow>, regions: Vec<Region>) -> Self {
        Self { rows, regions }
    }

    /// Read both input files without touching the process-wide cache.
    pub fn load(csv_path: &Path, geojson_path: &Path) -> Result<Self> {
        let rows = read_metric_rows(csv_path)?;
        let regions = read_regions(geojson_path)?;
        info!(
            rows = rows.len(),
            regions = regions.len(),
            csv = %csv_path.display(),
            geojson = %geojson_path.display(),
            "loaded dataset"
        );
        Ok(Self { rows, regions })
    }

    /// Load into the process-wide cache on first call and return the cached
    /// dataset. Later calls return the first dataset regardless of the paths
    /// given; the cache lives until the process exits.
    pub fn init(csv_path: &Path, geojson_path: &Path) -> Result<&'static Dataset> {
        DATASET.get_or_try_init(|| Self::load(csv_path, geojson_path))
    }

    /// The cached dataset, if `init` has succeeded.
    pub fn get() -> Option<&'static Dataset> {
        DATASET.get()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        categories(&self.rows)
    }

    /// The category shown when none is selected.
    pub fn default_category(&self) -> Option<&str> {
        self.rows.first().map(|row| row.category.as_str())
    }

    pub fn rank(&self, category: &str) -> Vec<RankedRow> {
        rank(&self.rows, category)
    }
}
