//! End-to-end road map tests over the sample inputs in `tests/roadmaps/`.

use std::path::PathBuf;

use roadgraph::{
    roadmap::{plan_trip, RoadMapInput, TripMetric},
    Error, VertexId,
};

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/roadmaps")
        .join(name)
}

fn render_all(input: &RoadMapInput) -> String {
    let mut output = String::new();
    for trip in &input.trips {
        let report = plan_trip(&input.map, trip).unwrap().unwrap();
        output.push_str(&format!("{report}\n\n"));
    }
    output
}

#[test]
fn orange_county_loads() {
    let input = RoadMapInput::from_file(&sample("orange_county.txt")).unwrap();

    assert_eq!(input.map.vertex_count(), 5);
    assert_eq!(input.map.edge_count(), 10);
    assert_eq!(input.trips.len(), 3);
    assert_eq!(input.trips[1].metric, TripMetric::Time);
    assert!(input.map.is_strongly_connected());
}

#[test]
fn orange_county_reports() {
    let input = RoadMapInput::from_file(&sample("orange_county.txt")).unwrap();

    let expected = "\
Shortest distance from Irvine to Costa Mesa
  Begin at Irvine
  Continue to Newport Beach (9.5 miles)
  Continue to Costa Mesa (4.1 miles)
Total distance: 13.6 miles

Shortest driving time from Irvine to Costa Mesa
  Begin at Irvine
  Continue to Newport Beach (9.5 miles @ 65.0mph = 8 mins 46.2 secs)
  Continue to Costa Mesa (4.1 miles @ 40.0mph = 6 mins 9.0 secs)
Total time: 14 mins 55.2 secs

Shortest driving time from Santa Ana to Newport Beach
  Begin at Santa Ana
  Continue to Costa Mesa (5.8 miles @ 45.0mph = 7 mins 44.0 secs)
  Continue to Newport Beach (4.1 miles @ 40.0mph = 6 mins 9.0 secs)
Total time: 13 mins 53.0 secs

";
    assert_eq!(render_all(&input), expected);
}

#[test]
fn disconnected_map_is_detected() {
    let input = RoadMapInput::from_file(&sample("disconnected.txt")).unwrap();

    assert!(!input.map.is_strongly_connected());
    assert_eq!(input.map.strongly_connected_components().len(), 2);

    // Avalon is reachable, but nothing leads back
    let report = plan_trip(&input.map, &input.trips[0]).unwrap().unwrap();
    assert_eq!(report.to, "Avalon");
    assert_eq!(report.total_miles, 46.5);
}

#[test]
fn unreachable_trip_yields_none() {
    let input = RoadMapInput::parse("2\n0 A\n1 B\n1\n0 1 1 10\n1\n1 0 d\n").unwrap();
    assert_eq!(plan_trip(&input.map, &input.trips[0]).unwrap(), None);
}

#[test]
fn trip_to_unknown_location_fails() {
    let input = RoadMapInput::parse("1\n0 A\n0\n1\n0 5 t\n").unwrap();
    assert!(matches!(
        plan_trip(&input.map, &input.trips[0]),
        Err(Error::VertexNotFound(id)) if id == VertexId::new(5)
    ));
}

#[test]
fn missing_file_is_io_error() {
    let result = RoadMapInput::from_file(&sample("does_not_exist.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn report_serializes_to_json() {
    let input = RoadMapInput::from_file(&sample("orange_county.txt")).unwrap();
    let report = plan_trip(&input.map, &input.trips[0]).unwrap().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["from"], "Irvine");
    assert_eq!(json["metric"], "distance");
    assert_eq!(json["legs"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["legs"][0]["to"], "Newport Beach");
}
