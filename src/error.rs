//! Errors raised while loading the metric table and the boundary collection.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T, E = AtlasError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: PolarsError,
    },

    #[error("malformed GeoJSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("missing required column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("column {column:?} has an unexpected type: {source}")]
    ColumnType {
        column: &'static str,
        source: PolarsError,
    },

    /// `row` is 1-based and does not count the header line.
    #[error("row {row}: missing or invalid value in column {column:?}")]
    InvalidValue { row: usize, column: &'static str },

    #[error("feature {feature}: {reason}")]
    InvalidGeometry { feature: usize, reason: String },
}

impl AtlasError {
    /// Classify an I/O failure on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => AtlasError::NotFound { path },
            _ => AtlasError::Io { path, source },
        }
    }
}
