//! SVG format writing operations for map export.

mod writer;

pub(crate) use writer::*;
