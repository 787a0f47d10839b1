//! GeoJSON reading and writing for the boundary collection.

mod read;
mod write;

pub(crate) use read::*;
pub(crate) use write::*;

/// Feature property carrying the full administrative name.
pub(crate) const ADMIN_NAME_PROPERTY: &str = "adm_nm";
