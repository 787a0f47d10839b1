use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use tracing::debug;

use crate::dataset::{Annotation, Region};
use crate::error::{AtlasError, Result};

use super::ADMIN_NAME_PROPERTY;

/// Read the boundary collection at `path`.
pub(crate) fn read_regions(path: &Path) -> Result<Vec<Region>> {
    let bytes = std::fs::read(path).map_err(|e| AtlasError::from_io(path, e))?;
    let regions = read_regions_bytes(&bytes, path)?;
    debug!(path = %path.display(), features = regions.len(), "read boundary collection");
    Ok(regions)
}

/// Read a boundary collection from an in-memory GeoJSON string.
#[cfg(test)]
pub(crate) fn read_regions_str(geojson: &str) -> Result<Vec<Region>> {
    read_regions_bytes(geojson.as_bytes(), Path::new("<string>"))
}

fn read_regions_bytes(bytes: &[u8], path: &Path) -> Result<Vec<Region>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|source| AtlasError::Json { path: path.to_path_buf(), source })?;

    let features = value["features"].as_array()
        .ok_or_else(|| AtlasError::Malformed {
            path: path.to_path_buf(),
            reason: "expected a FeatureCollection with a \"features\" array".to_string(),
        })?;

    features.iter()
        .enumerate()
        .map(|(idx, feature)| {
            parse_feature(feature)
                .map_err(|reason| AtlasError::InvalidGeometry { feature: idx, reason })
        })
        .collect()
}

/// Parse one feature into a region. A missing admin name becomes "".
fn parse_feature(feature: &Value) -> Result<Region, String> {
    let properties = match &feature["properties"] {
        Value::Object(map) => map.clone(),
        Value::Null => Default::default(),
        _ => return Err("\"properties\" must be an object".to_string()),
    };

    let full_admin_name = properties.get(ADMIN_NAME_PROPERTY)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let geometry = match &feature["geometry"] {
        Value::Null => MultiPolygon(vec![]),
        geometry => parse_geometry(geometry)?,
    };

    Ok(Region { full_admin_name, geometry, properties, annotation: Annotation::Background })
}

/// Parse a `Polygon` or `MultiPolygon` geometry object.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>, String> {
    let coords = geometry["coordinates"].as_array()
        .ok_or("geometry has no \"coordinates\" array")?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| -> Result<Polygon<f64>, String> {
                let rings = polygon.as_array().ok_or("MultiPolygon member must be an array")?;
                parse_polygon_coords(rings)
            })
            .collect::<Result<Vec<_>, String>>()
            .map(MultiPolygon),
        Some(other) => Err(format!("unsupported geometry type {other:?}")),
        None => Err("geometry has no \"type\"".to_string()),
    }
}

/// Parse polygon rings: the first is the exterior, the rest are holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>, String> {
    let mut rings = rings.iter().map(|ring| -> Result<LineString<f64>, String> {
        let points = ring.as_array().ok_or("ring must be an array of positions")?;
        parse_ring_coords(points)
    });

    let exterior = rings.next().ok_or("polygon has no exterior ring")??;
    let interiors = rings.collect::<Result<Vec<_>, String>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring of `[x, y]` positions, closing it if necessary.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>, String> {
    let mut points = coords.iter()
        .map(|position| -> Result<Coord<f64>, String> {
            let xy = position.as_array().filter(|xy| xy.len() >= 2)
                .ok_or("position must have at least two numbers")?;
            let x = xy[0].as_f64().ok_or("coordinate x must be a number")?;
            let y = xy[1].as_f64().ok_or("coordinate y must be a number")?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>, String>>()?;

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}
