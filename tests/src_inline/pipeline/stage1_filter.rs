use super::*;
use serde_json::json;

fn record(v: serde_json::Value) -> StudentRecord {
    serde_json::from_value(v).unwrap()
}

#[test]
fn test_admissible_in_range() {
    assert!(admissible(&record(
        json!({"listening": 0, "reading": 75, "writing": "30", "speaking": 12.5})
    )));
}

#[test]
fn test_admissible_rejects_out_of_range() {
    assert!(!admissible(&record(
        json!({"listening": -1, "reading": 10, "writing": 10, "speaking": 10})
    )));
    assert!(!admissible(&record(
        json!({"listening": 10, "reading": 10, "writing": 10, "speaking": 76})
    )));
}

#[test]
fn test_admissible_rejects_non_numeric() {
    assert!(!admissible(&record(
        json!({"listening": "abc", "reading": 10, "writing": 10, "speaking": 10})
    )));
    assert!(!admissible(&record(
        json!({"reading": 10, "writing": 10, "speaking": 10})
    )));
}

#[test]
fn test_run_stage1_keeps_order_and_counts_drops() {
    let records = vec![
        record(json!({"id": "a", "listening": 70, "reading": 70, "writing": 70, "speaking": 70})),
        record(json!({"id": "b", "listening": 80, "reading": 10, "writing": 10, "speaking": 10})),
        record(json!({"id": "c", "listening": 1, "reading": 2, "writing": 3, "speaking": 4})),
    ];
    let out = run_stage1(records);
    assert_eq!(out.dropped, 1);
    let ids = out
        .admitted
        .iter()
        .map(|r| r.record.id_key())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_run_stage1_empty() {
    let out = run_stage1(Vec::new());
    assert!(out.admitted.is_empty());
    assert_eq!(out.dropped, 0);
}

#[test]
fn test_admissible_with_byte_order_mark() {
    assert!(admissible(&record(
        json!({"listening": "\u{FEFF}70", "reading": 70, "writing": 70, "speaking": 70})
    )));
    assert!(!admissible(&record(
        json!({"listening": "\u{0085}70", "reading": 70, "writing": 70, "speaking": 70})
    )));
}
