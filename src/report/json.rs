use std::collections::BTreeMap;

use serde::Serialize;

use crate::report::{ReportError, ReportRow, ReportStatus, ReportSummary};

#[derive(Serialize)]
struct ReportDocument<'a> {
    tool: &'a str,
    version: &'a str,
    source: &'a str,
    status: ReportStatus,
    students: &'a [ReportRow],
    levels: BTreeMap<&'static str, usize>,
}

pub fn render_report_json(summary: &ReportSummary) -> Result<String, ReportError> {
    let levels = summary
        .levels
        .iter()
        .map(|s| (s.level.label(), s.count))
        .collect();
    let doc = ReportDocument {
        tool: &summary.tool_name,
        version: &summary.tool_version,
        source: &summary.source,
        status: summary.status,
        students: &summary.rows,
        levels,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
