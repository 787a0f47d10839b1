//! Full dashboard page: category picker, map column and report column.
//!
//! The map is a Leaflet widget over OpenStreetMap tiles. The annotated
//! regions are inlined as GeoJSON so a rendered page works without the
//! server; styling follows [`style_for`].

use serde_json::{json, Map, Value};

use crate::common::html_escape;
use crate::dataset::Annotation;
use crate::map::{style_for, RegionStyle};
use crate::rank::TOP_N;

/// Inputs for one page render.
pub struct PageContext<'a> {
    pub categories: &'a [&'a str],
    pub selected: &'a str,
    /// Annotated regions as a GeoJSON FeatureCollection.
    pub regions: &'a Value,
    pub report_html: &'a str,
}

/// Initial view: central Seoul.
const MAP_CENTER: [f64; 2] = [37.55, 126.98];
const MAP_ZOOM: u8 = 11;

const STYLE: &str = r#"
body { font-family: -apple-system, "Apple SD Gothic Neo", "Malgun Gothic", sans-serif; margin: 0 auto; max-width: 1400px; padding: 24px; color: #222; }
.columns { display: flex; gap: 24px; align-items: flex-start; }
.map-col { flex: 2; }
.report-col { flex: 1; }
#map { height: 650px; border: 1px solid #ddd; }
.card { padding: 10px; border-radius: 5px; margin-bottom: 10px; border: 2px solid black; }
.card ul { margin: 4px 0 0; padding-left: 18px; }
.card-title { font-size: 16px; }
.empty { color: #888; }
.leaflet-popup-content dt { font-weight: 600; float: left; clear: left; margin-right: 6px; }
.leaflet-popup-content dd { margin: 0 0 2px; }
footer { margin-top: 24px; color: #666; }
"#;

/// Expects `REGIONS` and `STYLES` to be defined before it runs.
const MAP_SCRIPT: &str = r#"
const map = L.map('map').setView([CENTER_LAT, CENTER_LON], ZOOM);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors',
    maxZoom: 18,
}).addTo(map);

function esc(v) {
    return String(v).replace(/[&<>"']/g, c => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]));
}
function field(v) { return v === null || v === undefined ? '' : esc(v); }

// background first, rank 1 drawn last
const order = f => f.properties.is_top5 ? STYLES.top_n + 1 - f.properties.rank : 0;
const features = REGIONS.features.slice().sort((a, b) => order(a) - order(b));

L.geoJSON({ type: 'FeatureCollection', features: features }, {
    style: f => f.properties.is_top5
        ? (STYLES.ranks[f.properties.rank] || STYLES.ranks['1'])
        : STYLES.background,
    onEachFeature: (f, layer) => {
        const p = f.properties;
        layer.bindTooltip(field(p.adm_nm));
        layer.bindPopup(
            '<dl><dt>행정동:</dt><dd>' + field(p.adm_nm) + '</dd>' +
            '<dt>순위:</dt><dd>' + field(p.rank) + '</dd>' +
            '<dt>예상매출:</dt><dd>' + field(p.sales) + '</dd>' +
            '<dt>점포수:</dt><dd>' + field(p.stores) + '</dd></dl>');
    },
}).addTo(map);
"#;

fn leaflet_style(style: RegionStyle) -> Value {
    json!({
        "fillColor": style.fill,
        "color": style.stroke,
        "weight": style.weight,
        "fillOpacity": style.fill_opacity,
    })
}

/// Leaflet path options per rank plus the background style.
fn map_styles() -> Value {
    let ranks: Map<String, Value> = (1..=TOP_N as u32)
        .map(|rank| {
            let style = style_for(&Annotation::Top5 { rank, sales: 0, stores: 0 });
            (rank.to_string(), leaflet_style(style))
        })
        .collect();

    json!({
        "top_n": TOP_N,
        "ranks": ranks,
        "background": leaflet_style(style_for(&Annotation::Background)),
    })
}

/// Serialize `value` for a `<script>` body. `</` is escaped so region
/// names cannot close the element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", r"<\/")
}

/// Render the complete HTML document.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let options: String = ctx.categories.iter()
        .map(|category| {
            let value = html_escape(category);
            let selected = if *category == ctx.selected { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{value}</option>"#)
        })
        .collect();

    let script = MAP_SCRIPT
        .replace("CENTER_LAT", &MAP_CENTER[0].to_string())
        .replace("CENTER_LON", &MAP_CENTER[1].to_string())
        .replace("ZOOM", &MAP_ZOOM.to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>서울시 창업 입지 추천 시스템</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<style>{STYLE}</style>
</head>
<body>
<h1>서울시 창업 입지 추천 시스템</h1>
<h3>머신러닝 기반 업종별 행정동 추천 서비스</h3>
<form method="get" action="/">
<label for="category">창업할 업종을 선택하세요</label>
<select id="category" name="category" onchange="this.form.submit()">{options}</select>
<noscript><button type="submit">보기</button></noscript>
</form>
<div class="columns">
<div class="map-col">
<h2>서울시 추천 행정동 TOP5</h2>
<div id="map"></div>
</div>
<div class="report-col">
<h2>업종 분석 리포트</h2>
{report}
</div>
</div>
<hr>
<footer>모델 기반: XGBoost + Lag Feature 활용 매출 예측</footer>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
const REGIONS = {regions};
const STYLES = {styles};
{script}
</script>
</body>
</html>
"#,
        report = ctx.report_html,
        regions = script_json(ctx.regions),
        styles = script_json(&map_styles()),
    )
}
