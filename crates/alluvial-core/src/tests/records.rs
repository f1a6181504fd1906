use crate::*;
use serde_json::json;

#[test]
fn records_from_json_stringify_scalars() {
    let records = RecordSet::from_json(&json!([
        { "src": "A", "year": 2020, "flag": true },
        { "src": "B", "year": null }
    ]))
    .unwrap();

    assert_eq!(records.len(), 2);
    let first = &records.rows()[0];
    assert_eq!(first.get("year"), Some("2020"));
    assert_eq!(first.get("flag"), Some("true"));
    assert!(!records.rows()[1].contains("year"));
}

#[test]
fn records_from_json_rejects_non_tabular_input() {
    let err = RecordSet::from_json(&json!({ "src": "A" })).unwrap_err();
    assert!(matches!(err, Error::InvalidRecords { .. }));

    let err = RecordSet::from_json(&json!([["A", "X"]])).unwrap_err();
    assert!(matches!(err, Error::InvalidRecords { .. }));

    let err = RecordSet::from_json(&json!([{ "src": { "nested": 1 } }])).unwrap_err();
    assert!(matches!(err, Error::InvalidRecords { .. }));
}

#[test]
fn records_from_json_str_parses_text() {
    let records = RecordSet::from_json_str(r#"[{"src":"A","dst":"X"}]"#).unwrap();
    assert_eq!(records.rows()[0].get("dst"), Some("X"));
    assert!(RecordSet::from_json_str("[").is_err());
}

#[test]
fn record_iterates_in_insertion_order() {
    let record: Record = [("b", "2"), ("a", "1")].into_iter().collect();
    let pairs: Vec<(&str, &str)> = record.iter().collect();
    assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
}
