pub mod test_utils;

use route_cleaner::{clean_route, export_data, import_data, CleaningConfig};
use std::fs;
use tempdir::TempDir;
use test_utils::timestamps;

#[test]
fn load_journey() {
    let route = test_utils::load_journey_for_test();
    assert_eq!(route.len(), 20);
    assert_eq!(route[0].point.latitude, 51.5);
    assert_eq!(route[0].point.longitude, -0.1);
    assert_eq!(route[0].timestamp_sec, 1326378718);
    assert_eq!(route[14].point.longitude, -0.08);
}

#[test]
fn missing_file() {
    assert!(import_data::load_csv("./tests/data/does_not_exist.csv").is_err());
}

#[test]
fn cleaned_route_round_trips_through_csv() {
    let temp_dir = TempDir::new("import_export_data-round_trip").unwrap();
    println!("temp dir: {:?}", temp_dir.path());

    let route = test_utils::load_journey_for_test();
    let cleaned = clean_route(&route, &CleaningConfig::default()).unwrap();

    let target = temp_dir.path().join("clean");
    let written = export_data::route_to_csv_file(&cleaned.points, target.to_str().unwrap()).unwrap();
    assert!(written.ends_with("clean.csv"));

    let content = fs::read_to_string(&written).unwrap();
    // only the positional fields survive
    assert!(content.lines().all(|line| line.split(',').count() == 3));

    let reloaded = import_data::load_csv(&written).unwrap();
    assert_eq!(reloaded, cleaned.points);
    assert_eq!(timestamps(&reloaded), timestamps(&cleaned.points));
}

#[test]
fn console_dump() {
    let route = test_utils::load_journey_for_test();
    let json = export_data::route_to_pretty_json(&route[..2]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            [51.5, -0.1, 1326378718],
            [51.5006, -0.1, 1326378723]
        ])
    );
}
