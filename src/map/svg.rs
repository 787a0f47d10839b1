use std::cmp::Reverse;
use std::io::Write;

use anyhow::Result;
use geo::{BoundingRect, Coord, CoordsIter, LineString, MultiPolygon, Rect};
use tracing::debug;

use crate::common::{fmt_int, html_escape};
use crate::dataset::Region;
use crate::io::svg::SvgStringWriter;

use super::style::style_for;

/// Projection function: lon/lat -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

const DEFAULT_WIDTH: f64 = 900.0;
const DEFAULT_HEIGHT: f64 = 650.0;
const DEFAULT_MARGIN: f64 = 10.0;

/// Render annotated regions as an inline SVG map with default size.
pub fn render_map(regions: &[Region]) -> Result<String> {
    render_map_with_size(regions, DEFAULT_WIDTH, DEFAULT_MARGIN)
}

/// Render annotated regions as an inline SVG map.
///
/// Every region carries a `<title>` (shown on hover) and `data-*` attributes
/// holding name, rank, sales and store count for scripts embedding the map. Background
/// regions are drawn first, top-5 regions on top with rank 1 last.
pub fn render_map_with_size(regions: &[Region], width: f64, margin: f64) -> Result<String> {
    let mut writer = SvgStringWriter::new();

    let Some(bounds) = collection_bounds(regions) else {
        writer.write_header(width, DEFAULT_HEIGHT, None)?;
        writer.write_footer()?;
        return writer.into_string();
    };

    // Shrink longitude by cos(latitude) so the map keeps its shape.
    let mid_lat = (bounds.min().y + bounds.max().y) / 2.0;
    let kx = if mid_lat.abs() <= 90.0 { mid_lat.to_radians().cos() } else { 1.0 };
    let span_x = bounds.width() * kx;
    let scale = if span_x > 0.0 { (width - 2.0 * margin) / span_x } else { 1.0 };
    let height = bounds.height() * scale + 2.0 * margin;

    // --- Map lon/lat -> SVG coords (Y down) ---
    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - bounds.min().x) * kx * scale;
        let y = margin + (bounds.max().y - coord.y) * scale; // invert vertically
        (x, y)
    };

    writer.write_header(width, height, Some(&bounds))?;
    writer.write_styles()?;

    let mut order: Vec<&Region> = regions.iter().collect();
    order.sort_by_key(|r| (r.annotation.is_top5(), Reverse(r.annotation.rank().unwrap_or(0))));

    for region in order {
        draw_region(&mut writer, region, &project)?;
    }

    writer.write_footer()?;
    debug!(regions = regions.len(), width, height, "rendered map");
    writer.into_string()
}

/// Bounding box over every non-empty region.
fn collection_bounds(regions: &[Region]) -> Option<Rect<f64>> {
    regions.iter()
        .filter_map(|region| region.geometry.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        ))
}

fn draw_region(writer: &mut impl Write, region: &Region, project: &Projection) -> Result<()> {
    if region.geometry.0.is_empty() { return Ok(()) }

    let style = style_for(&region.annotation);
    let name = html_escape(&region.full_admin_name);
    let blank_or = |value: Option<i64>| value.map(fmt_int).unwrap_or_default();

    writeln!(writer,
        r#"<path class="region{top}" d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{weight}" fill-opacity="{opacity}" data-name="{name}" data-rank="{rank}" data-sales="{sales}" data-stores="{stores}"><title>{name}</title></path>"#,
        top = if region.annotation.is_top5() { " top5" } else { "" },
        d = multipolygon_to_path(&region.geometry, project),
        fill = style.fill,
        stroke = style.stroke,
        weight = style.weight,
        opacity = style.fill_opacity,
        rank = region.annotation.rank().map(|r| r.to_string()).unwrap_or_default(),
        sales = blank_or(region.annotation.sales()),
        stores = blank_or(region.annotation.stores()),
    )?;
    Ok(())
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out.trim_start().to_string()
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.2},{y:.2}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.2},{y:.2}"));
        }
        out.push('Z');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Annotation;
    use geo::polygon;

    fn square(name: &str, x0: f64, annotation: Annotation) -> Region {
        let mut region = Region::new(name, MultiPolygon(vec![polygon![
            (x: x0, y: 37.0),
            (x: x0 + 0.1, y: 37.0),
            (x: x0 + 0.1, y: 37.1),
            (x: x0, y: 37.1),
        ]]));
        region.annotation = annotation;
        region
    }

    #[test]
    fn top5_regions_carry_style_and_panel_data() {
        let regions = vec![
            square("서울 강남구 삼성1동", 127.0, Annotation::Top5 { rank: 1, sales: 175_670_000, stores: 271 }),
            square("서울 중구 소공동", 127.1, Annotation::Background),
        ];
        let svg = render_map(&regions).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r##"fill="#CC0000" stroke="black" stroke-width="1.5" fill-opacity="0.7""##));
        assert!(svg.contains(r#"data-rank="1" data-sales="175,670,000" data-stores="271""#));
        assert!(svg.contains("<title>서울 강남구 삼성1동</title>"));
    }

    #[test]
    fn background_regions_have_blank_panel_values() {
        let svg = render_map(&[square("서울 중구 소공동", 127.0, Annotation::Background)]).unwrap();

        assert!(svg.contains(r##"fill="#f0f0f0" stroke="gray" stroke-width="0.5" fill-opacity="0.2""##));
        assert!(svg.contains(r#"data-rank="" data-sales="" data-stores="""#));
        assert!(!svg.contains("None"));
    }

    #[test]
    fn top_ranks_are_drawn_last() {
        let regions = vec![
            square("r1", 127.0, Annotation::Top5 { rank: 1, sales: 1, stores: 1 }),
            square("bg", 127.1, Annotation::Background),
            square("r3", 127.2, Annotation::Top5 { rank: 3, sales: 1, stores: 1 }),
        ];
        let svg = render_map(&regions).unwrap();

        let at = |name: &str| svg.find(&format!("<title>{name}</title>")).unwrap();
        assert!(at("bg") < at("r3"));
        assert!(at("r3") < at("r1"));
    }

    #[test]
    fn names_are_escaped() {
        let svg = render_map(&[square("<b>&</b>", 127.0, Annotation::Background)]).unwrap();
        assert!(svg.contains("<title>&lt;b&gt;&amp;&lt;/b&gt;</title>"));
    }

    #[test]
    fn projection_fits_width() {
        let svg = render_map_with_size(&[square("a", 127.0, Annotation::Background)], 200.0, 10.0).unwrap();
        assert!(svg.contains(r#"width="200""#));
        // the western edge sits on the margin
        assert!(svg.contains("M10.00,"));
    }

    #[test]
    fn empty_collection_renders_blank_map() {
        let svg = render_map(&[]).unwrap();
        assert!(svg.contains(r#"height="650""#));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn rendering_is_pure() {
        let regions = vec![square("a", 127.0, Annotation::Top5 { rank: 2, sales: 3, stores: 4 })];
        assert_eq!(render_map(&regions).unwrap(), render_map(&regions).unwrap());
    }
}
