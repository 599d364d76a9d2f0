use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::board::Board;
use crate::pipeline::stage1_filter::AdmittedRecord;
use crate::pipeline::stage3_classify::evaluate;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::{ReportError, ReportRow, ReportStatus, ReportSummary, level_stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub color: bool,
    pub source: String,
}

pub fn build_summary(board: &Board, source: &str) -> ReportSummary {
    let (status, rows) = match board.visible() {
        Some(records) => (
            ReportStatus::Ready,
            records.iter().map(build_row).collect::<Vec<_>>(),
        ),
        None => (ReportStatus::Loading, Vec::new()),
    };
    let levels = level_stats(&rows);

    ReportSummary {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        source: source.to_string(),
        status,
        rows,
        levels,
    }
}

fn build_row(admitted: &AdmittedRecord) -> ReportRow {
    let result = evaluate(&admitted.scores);
    let scores = admitted.scores.get();
    ReportRow {
        id: admitted.record.id_key(),
        name: admitted.record.display_name(),
        listening: scores.listening,
        reading: scores.reading,
        writing: scores.writing,
        speaking: scores.speaking,
        overall: result.overall,
        level: result.level,
        color: result.level.color().name(),
    }
}

pub fn render_report(board: &Board, options: &ReportOptions) -> Result<String, ReportError> {
    let summary = build_summary(board, &options.source);
    match options.format {
        ReportFormat::Text => Ok(render_report_text(&summary, options.color)),
        ReportFormat::Json => render_report_json(&summary),
    }
}

pub fn write_report(
    board: &Board,
    options: &ReportOptions,
    out: Option<&Path>,
) -> Result<(), ReportError> {
    let rendered = render_report(board, options)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            write_text(path, &rendered)?;
            info!("report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            w.write_all(rendered.as_bytes())?;
            w.flush()?;
        }
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
