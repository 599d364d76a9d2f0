use crate::report::{LOADING_PLACEHOLDER, ReportRow, ReportStatus, ReportSummary, format_score};

const HEADER: [&str; 7] = [
    "Name",
    "Listening",
    "Reading",
    "Writing",
    "Speaking",
    "Overall",
    "Level",
];

pub fn render_report_text(summary: &ReportSummary, color: bool) -> String {
    let mut out = String::new();

    out.push_str("Student Results\n");
    out.push_str("===============\n\n");

    if summary.status == ReportStatus::Loading || summary.rows.is_empty() {
        out.push_str(LOADING_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    let cells = summary.rows.iter().map(row_cells).collect::<Vec<_>>();
    let mut widths = HEADER.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    push_line(&mut out, &HEADER.map(str::to_string), &widths);
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for (row, cells) in summary.rows.iter().zip(cells.iter()) {
        let mut line = pad_cells(cells, &widths);
        if color {
            // last column, so the padding can go
            line.pop();
            line.push(format!(
                "\x1b[{}m{}\x1b[0m",
                row.level.color().ansi_code(),
                row.level.label()
            ));
        }
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out.push('\n');
    let counts = summary
        .levels
        .iter()
        .map(|s| format!("{}={}", s.level.label(), s.count))
        .collect::<Vec<_>>();
    out.push_str(&format!("Levels: {}\n", counts.join(" ")));

    out
}

fn row_cells(row: &ReportRow) -> [String; 7] {
    [
        row.name.clone(),
        format_score(row.listening),
        format_score(row.reading),
        format_score(row.writing),
        format_score(row.speaking),
        row.overall.to_string(),
        row.level.label().to_string(),
    ]
}

// name left-aligned, numbers right-aligned, level left-aligned
fn pad_cells(cells: &[String; 7], widths: &[usize; 7]) -> Vec<String> {
    cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(i, (cell, &w))| match i {
            0 | 6 => format!("{:<w$}", cell),
            _ => format!("{:>w$}", cell),
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    out.push_str(pad_cells(cells, widths).join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
