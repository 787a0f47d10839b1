use geo::{LineString, MultiPolygon};
use serde_json::{json, Value};

use crate::dataset::Region;

use super::ADMIN_NAME_PROPERTY;

/// Export regions as a GeoJSON FeatureCollection.
/// Each feature keeps its source properties plus `is_top5`, `rank`, `sales`
/// and `stores`; the last three are `null` for background regions.
pub(crate) fn regions_to_geojson(regions: &[Region]) -> Value {
    let features: Vec<Value> = regions.iter()
        .map(|region| {
            let mut properties = region.properties.clone();
            properties.insert(ADMIN_NAME_PROPERTY.to_string(), json!(region.full_admin_name));
            properties.insert("is_top5".to_string(), json!(region.annotation.is_top5()));
            properties.insert("rank".to_string(), json!(region.annotation.rank()));
            properties.insert("sales".to_string(), json!(region.annotation.sales()));
            properties.insert("stores".to_string(), json!(region.annotation.stores()));

            json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(&region.geometry),
                "properties": properties,
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Helper to convert a MultiPolygon to a GeoJSON geometry (`null` when empty).
fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    if mp.0.is_empty() { return Value::Null }

    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(ring_positions)
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

fn ring_positions(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    ring.coords().map(|c| [c.x, c.y]).collect()
}
