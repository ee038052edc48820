use super::helper::golden_records;
use golden_core::{Imo, Mmsi, Value, VesselOutboundPort, VesselQuery, VesselRecord};

fn imos(records: Vec<VesselRecord>) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| match r.imo() {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        })
        .collect()
}

#[test]
fn test_no_filters_returns_whole_table() {
    let adapter = golden_records();
    assert_eq!(adapter.vessels(&VesselQuery::default()).len(), adapter.len());
}

#[test]
fn test_imo_filter_is_exact() {
    let adapter = golden_records();
    let query = VesselQuery {
        imo: Some(Imo::new(1234567)),
        ..Default::default()
    };

    assert_eq!(imos(adapter.vessels(&query)), vec![1234567]);
}

#[test]
fn test_imo_filter_does_not_match_prefix() {
    let adapter = golden_records();
    let query = VesselQuery {
        imo: Some(Imo::new(123456)),
        ..Default::default()
    };

    assert!(adapter.vessels(&query).is_empty());
}

#[test]
fn test_mmsi_matches_any_listed_value() {
    let adapter = golden_records();
    let query = VesselQuery {
        mmsi: Some(Mmsi::new(257000000)),
        ..Default::default()
    };

    assert_eq!(imos(adapter.vessels(&query)), vec![7654321]);
}

#[test]
fn test_mmsi_substring_matches_and_skips_missing() {
    let adapter = golden_records();
    let query = VesselQuery {
        mmsi: Some(Mmsi::new(123)),
        ..Default::default()
    };

    assert_eq!(imos(adapter.vessels(&query)), vec![4123000]);
}

#[test]
fn test_name_is_case_insensitive_substring() {
    let adapter = golden_records();
    let query = VesselQuery {
        name: Some("star".into()),
        ..Default::default()
    };

    assert_eq!(imos(adapter.vessels(&query)), vec![7654321, 4123000]);
}

#[test]
fn test_name_is_matched_literally() {
    let adapter = golden_records();
    let query = VesselQuery {
        name: Some("s.a".into()),
        ..Default::default()
    };

    assert!(adapter.vessels(&query).is_empty());
}

#[test]
fn test_filters_are_combined() {
    let adapter = golden_records();
    let query = VesselQuery {
        imo: Some(Imo::new(7654321)),
        mmsi: Some(Mmsi::new(987654321)),
        name: Some("sea".into()),
    };
    assert_eq!(imos(adapter.vessels(&query)), vec![7654321]);

    let query = VesselQuery {
        imo: Some(Imo::new(1234567)),
        name: Some("sea".into()),
        ..Default::default()
    };
    assert!(adapter.vessels(&query).is_empty());
}

#[test]
fn test_in_memory_store_filters_the_same_way() {
    let adapter = csv_store::CsvAdapter::from_records(vec![
        VesselRecord::test_default(1),
        VesselRecord::test_default(2).with_field(VesselRecord::NAME, "['SEA STAR']"),
    ]);
    let query = VesselQuery {
        name: Some("sea".into()),
        ..Default::default()
    };

    assert_eq!(imos(adapter.vessels(&query)), vec![2]);
}
