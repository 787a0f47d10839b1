// Process-wide dataset cache. Kept in its own test binary so no other test
// can initialize the cache first.

use std::fs;

use startup_atlas::{Dataset, DashboardView};

const HEADER: &str = "업종,행정동,서울 평균 대비 매출지수,예상매출(점포당),점포_수,총_직장_인구_수,총_유동인구_수";

const GEOJSON: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 중구 소공동"},
     "geometry": {"type": "Polygon", "coordinates": [[[126.97, 37.56], [126.98, 37.56], [126.98, 37.57], [126.97, 37.56]]]}}
]}"#;

#[test]
fn init_loads_once_and_stays_pristine() {
    let dir = tempfile::tempdir().unwrap();
    let first_csv = dir.path().join("first.csv");
    let second_csv = dir.path().join("second.csv");
    let geojson = dir.path().join("regions.geojson");
    fs::write(&first_csv, format!("{HEADER}\n커피-음료,소공동,4.13,160560000,40,1,1\n")).unwrap();
    fs::write(&second_csv, format!("{HEADER}\n제과점,소공동,1.0,1,1,1,1\n제과점,명동,0.5,1,1,1,1\n")).unwrap();
    fs::write(&geojson, GEOJSON).unwrap();

    assert!(Dataset::get().is_none());

    let first = Dataset::init(&first_csv, &geojson).unwrap();
    let second = Dataset::init(&second_csv, &geojson).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.categories(), vec!["커피-음료"]);

    let cached = Dataset::get().unwrap();
    assert!(std::ptr::eq(first, cached));

    let view = DashboardView::new(cached, None);
    assert!(view.regions[0].annotation.is_top5());
    assert!(cached.regions.iter().all(|r| !r.annotation.is_top5()));
}
