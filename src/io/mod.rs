//! File format handling for the metric table, boundaries and the rendered map.

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod svg;
