//! Choropleth map rendering for annotated regions.

mod style;
mod svg;

pub use style::{style_for, RegionStyle};
pub use svg::{render_map, render_map_with_size};
