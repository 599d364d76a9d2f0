use crate::pipeline::stage1_filter::{AdmittedRecord, admissible};

/// Process-local state shared between the fetch and the render pass.
///
/// Written once after a successful fetch, read by every render. A failed fetch
/// leaves it in `Loading` for the rest of the run.
#[derive(Debug, Clone, Default)]
pub enum Board {
    #[default]
    Loading,
    Ready(Vec<AdmittedRecord>),
}

impl Board {
    pub fn ready(records: Vec<AdmittedRecord>) -> Self {
        debug_assert!(records.iter().all(|r| admissible(&r.record)));
        Board::Ready(records)
    }

    /// Records to show, or `None` while the placeholder should be displayed.
    /// An empty list also shows the placeholder.
    pub fn visible(&self) -> Option<&[AdmittedRecord]> {
        match self {
            Board::Ready(records) if !records.is_empty() => Some(records),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/board.rs"]
mod tests;
