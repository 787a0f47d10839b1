mod cache;
mod metric;
mod region;

pub use cache::Dataset;
pub use metric::{MetricRow, RankedRow};
pub use region::{Annotation, Region};
