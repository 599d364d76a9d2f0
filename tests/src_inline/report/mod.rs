use super::*;

fn row(level: Level) -> ReportRow {
    ReportRow {
        id: "1".to_string(),
        name: "A".to_string(),
        listening: 0.0,
        reading: 0.0,
        writing: 0.0,
        speaking: 0.0,
        overall: 0,
        level,
        color: level.color().name(),
    }
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(70.0), "70");
    assert_eq!(format_score(12.5), "12.5");
    assert_eq!(format_score(-0.0), "0");
}

#[test]
fn test_level_stats_order_and_zeroes() {
    let rows = vec![row(Level::B1), row(Level::C1), row(Level::B1)];
    let stats = level_stats(&rows);
    let pairs = stats
        .iter()
        .map(|s| (s.level, s.count))
        .collect::<Vec<_>>();
    assert_eq!(
        pairs,
        vec![
            (Level::C1, 1),
            (Level::B2, 0),
            (Level::B1, 2),
            (Level::A2, 0)
        ]
    );
}

#[test]
fn test_row_scores_serialize_like_table() {
    let mut r = row(Level::A2);
    r.listening = 70.0;
    r.reading = 12.5;
    r.writing = -0.0;
    let text = serde_json::to_string(&r).unwrap();
    assert!(text.contains("\"listening\":70,"));
    assert!(text.contains("\"reading\":12.5,"));
    assert!(text.contains("\"writing\":0,"));
    assert!(text.contains("\"speaking\":0,"));
}
