use serde::{Serialize, Serializer};

use crate::model::levels::{Level, level_order};

pub mod json;
pub mod text;

pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_score")]
    pub listening: f64,
    #[serde(serialize_with = "serialize_score")]
    pub reading: f64,
    #[serde(serialize_with = "serialize_score")]
    pub writing: f64,
    #[serde(serialize_with = "serialize_score")]
    pub speaking: f64,
    pub overall: i32,
    pub level: Level,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct LevelStat {
    pub level: Level,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,
    pub status: ReportStatus,
    pub rows: Vec<ReportRow>,
    pub levels: Vec<LevelStat>,
}

pub fn level_stats(rows: &[ReportRow]) -> Vec<LevelStat> {
    level_order()
        .iter()
        .map(|&level| LevelStat {
            level,
            count: rows.iter().filter(|r| r.level == level).count(),
        })
        .collect()
}

/// Shortest display of a sub-score: `70`, `12.5`. Negative zero prints as `0`.
pub fn format_score(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

// whole numbers go out as integers, matching the table
fn serialize_score<S>(v: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if v.fract() == 0.0 && v.abs() <= SAFE_INTEGER {
        serializer.serialize_i64(*v as i64)
    } else {
        serializer.serialize_f64(*v)
    }
}

const SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
