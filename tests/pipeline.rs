// End-to-end: files on disk -> load -> rank -> join -> map + report + page.

use std::fs;
use std::path::PathBuf;

use startup_atlas::map::render_map;
use startup_atlas::{join, rank, render_dashboard, AtlasError, Dataset, DashboardView};

const CSV: &str = "\
업종,행정동,서울 평균 대비 매출지수,예상매출(점포당),점포_수,총_직장_인구_수,총_유동인구_수
한식음식점,삼성1동,2.25,175670000,271,150000,420000
한식음식점,대치4동,1.98,151000000.9,88,40000,210000
한식음식점,수서동,1.95,150500000,67,35000,120000
한식음식점,역삼1동,1.80,140000000,301,210000,500000
한식음식점,서교동,1.70,130000000,250,30000,600000
한식음식점,명동,1.60,120000000,200,90000,700000
한식음식점,종로1·2·3·4가동,1.10,90000000,400,120000,650000
커피-음료,소공동,4.13,160560000,40,180000,300000
커피-음료,잠실2동,3.90,150000000,28,20000,150000
";

const GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 강남구 삼성1동"},
     "geometry": {"type": "Polygon", "coordinates": [[[127.05, 37.51], [127.07, 37.51], [127.07, 37.52], [127.05, 37.52], [127.05, 37.51]]]}},
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 강남구 대치4동"},
     "geometry": {"type": "Polygon", "coordinates": [[[127.05, 37.49], [127.07, 37.49], [127.07, 37.50], [127.05, 37.50], [127.05, 37.49]]]}},
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 중구 명동"},
     "geometry": {"type": "Polygon", "coordinates": [[[126.98, 37.56], [126.99, 37.56], [126.99, 37.57], [126.98, 37.56]]]}},
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 중구 소공동"},
     "geometry": {"type": "MultiPolygon", "coordinates": [[[[126.97, 37.56], [126.98, 37.56], [126.98, 37.57], [126.97, 37.56]]]]}},
    {"type": "Feature", "properties": {"adm_nm": "서울특별시 종로구 종로1·2·3·4가동"},
     "geometry": {"type": "Polygon", "coordinates": [[[126.99, 37.57], [127.00, 37.57], [127.00, 37.58], [126.99, 37.57]]]}}
  ]
}"#;

struct Fixture {
    _dir: tempfile::TempDir,
    csv: PathBuf,
    geojson: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("top5_2.csv");
    let geojson = dir.path().join("hangjeongdong.geojson");
    fs::write(&csv, CSV).unwrap();
    fs::write(&geojson, GEOJSON).unwrap();
    Fixture { _dir: dir, csv, geojson }
}

#[test]
fn loads_both_inputs() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();

    assert_eq!(dataset.rows.len(), 9);
    assert_eq!(dataset.regions.len(), 5);
    assert_eq!(dataset.categories(), vec!["한식음식점", "커피-음료"]);
}

#[test]
fn seven_rows_become_top_five() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();

    let ranked = rank(&dataset.rows, "한식음식점");
    let names: Vec<&str> = ranked.iter().map(|r| r.region_name()).collect();
    assert_eq!(names, vec!["삼성1동", "대치4동", "수서동", "역삼1동", "서교동"]);
    assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let joined = join(&dataset.regions, &ranked);
    assert_eq!(joined[0].annotation.rank(), Some(1));
    assert_eq!(joined[1].annotation.rank(), Some(2));
    assert_eq!(joined[1].annotation.sales(), Some(151_000_000));
    // 명동 and 종로 were ranked 6th and 7th
    assert!(!joined[2].annotation.is_top5());
    assert!(!joined[4].annotation.is_top5());
}

#[test]
fn cached_regions_stay_pristine_across_passes() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();
    let snapshot = dataset.regions.clone();

    let first = DashboardView::new(&dataset, Some("한식음식점"));
    let coffee = DashboardView::new(&dataset, Some("커피-음료"));
    let again = DashboardView::new(&dataset, Some("한식음식점"));

    assert_eq!(dataset.regions, snapshot);
    assert!(dataset.regions.iter().all(|r| !r.annotation.is_top5()));
    assert_eq!(first, again);
    assert!(coffee.regions[3].annotation.is_top5());
    assert!(!coffee.regions[0].annotation.is_top5());
    assert_eq!(render_map(&first.regions).unwrap(), render_map(&again.regions).unwrap());
}

#[test]
fn dashboard_page_has_map_cards_and_narrative() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();

    let html = render_dashboard(&dataset, None).unwrap();

    assert!(html.contains("선택 업종: 한식음식점"));
    assert!(html.contains("tile.openstreetmap.org"));
    assert!(html.contains(r#""adm_nm":"서울특별시 강남구 삼성1동","is_top5":true,"rank":1,"sales":175670000,"stores":271"#));
    assert!(html.contains(r#""adm_nm":"서울특별시 중구 명동","is_top5":false,"rank":null,"sales":null,"stores":null"#));
    assert!(html.contains("1위 | 삼성1동"));
    assert!(html.contains("예상 매출: 175,670,000원"));
    assert!(html.contains("삼성1동을 추천하는 이유"));
}

#[test]
fn absent_category_renders_empty_state() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();

    let view = DashboardView::new(&dataset, Some("없는업종"));
    assert!(view.ranked.is_empty());
    assert!(view.regions.iter().all(|r| !r.annotation.is_top5()));

    let html = render_dashboard(&dataset, Some("없는업종")).unwrap();
    assert!(html.contains("추천 행정동이 없습니다"));
    assert!(html.contains("상위 5개 행정동은"));
    assert!(!html.contains(r#""is_top5":true"#));
}

#[test]
fn svg_map_marks_top_regions() {
    let f = fixture();
    let dataset = Dataset::load(&f.csv, &f.geojson).unwrap();

    let svg = DashboardView::new(&dataset, None).map_svg().unwrap();
    assert!(svg.contains(r##"fill="#CC0000""##));
    assert!(svg.contains("<title>서울특별시 강남구 삼성1동</title>"));
}

#[test]
fn missing_files_are_reported() {
    let f = fixture();
    let missing = f.csv.with_file_name("nope.csv");

    let err = Dataset::load(&missing, &f.geojson).unwrap_err();
    assert!(matches!(err, AtlasError::NotFound { ref path } if *path == missing));

    let err = Dataset::load(&f.csv, &f.geojson.with_file_name("nope.geojson")).unwrap_err();
    assert!(matches!(err, AtlasError::NotFound { .. }));
}

#[test]
fn csv_without_required_columns_is_a_parse_error() {
    let f = fixture();
    fs::write(&f.csv, "업종,행정동\n카페,A동\n").unwrap();

    let err = Dataset::load(&f.csv, &f.geojson).unwrap_err();
    assert!(matches!(err, AtlasError::MissingColumn { .. }));
}
