#![doc = "Top-5 startup location recommendations per business category"]
mod common;
mod io;

pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod join;
pub mod map;
pub mod page;
pub mod rank;
pub mod report;
pub mod server;

#[doc(inline)]
pub use dashboard::{render_dashboard, DashboardView};

#[doc(inline)]
pub use dataset::{Annotation, Dataset, MetricRow, RankedRow, Region};

#[doc(inline)]
pub use error::{AtlasError, Result};

#[doc(inline)]
pub use join::join;

#[doc(inline)]
pub use rank::{categories, rank, TOP_N};
