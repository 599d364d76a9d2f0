use super::*;
use crate::model::levels::Level;
use crate::report::level_stats;

fn summary(rows: Vec<ReportRow>) -> ReportSummary {
    let levels = level_stats(&rows);
    ReportSummary {
        tool_name: "results-board".to_string(),
        tool_version: "0.1.0".to_string(),
        source: "http://example.test".to_string(),
        status: ReportStatus::Ready,
        rows,
        levels,
    }
}

fn row(name: &str, score: f64, overall: i32, level: Level) -> ReportRow {
    ReportRow {
        id: name.to_string(),
        name: name.to_string(),
        listening: score,
        reading: score,
        writing: score,
        speaking: score,
        overall,
        level,
        color: level.color().name(),
    }
}

#[test]
fn test_loading_placeholder() {
    let mut s = summary(Vec::new());
    s.status = ReportStatus::Loading;
    let out = render_report_text(&s, false);
    assert!(out.contains(LOADING_PLACEHOLDER));
    assert!(!out.contains("Listening"));
}

#[test]
fn test_table_rows() {
    let s = summary(vec![
        row("Aziz", 70.0, 70, Level::C1),
        row("Bo", 12.5, 12, Level::A2),
    ]);
    let out = render_report_text(&s, false);
    let lines = out.lines().collect::<Vec<_>>();

    let header = lines.iter().position(|l| l.starts_with("Name")).unwrap();
    assert!(lines[header].ends_with("Level"));
    assert!(lines[header + 2].starts_with("Aziz"));
    assert!(lines[header + 2].ends_with("70  C1"));
    assert!(lines[header + 3].starts_with("Bo  "));
    assert!(lines[header + 3].contains("12.5"));
    assert!(lines[header + 3].ends_with("12  A2"));
    assert!(out.contains("Levels: C1=1 B2=0 B1=0 A2=1"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_color_wraps_level() {
    let s = summary(vec![row("Aziz", 70.0, 70, Level::C1)]);
    let out = render_report_text(&s, true);
    assert!(out.contains("\x1b[32mC1\x1b[0m"));
}
