use crate::input::StudentRecord;
use crate::model::scores::AdmissibleScores;

#[derive(Debug, Clone)]
pub struct AdmittedRecord {
    pub record: StudentRecord,
    pub scores: AdmissibleScores,
}

#[derive(Debug, Clone, Default)]
pub struct Stage1Output {
    pub admitted: Vec<AdmittedRecord>,
    pub dropped: usize,
}

/// True iff all four coerced sub-scores lie in `[0, 75]`.
pub fn admissible(record: &StudentRecord) -> bool {
    AdmissibleScores::new(record.sub_scores()).is_some()
}

pub fn run_stage1(records: Vec<StudentRecord>) -> Stage1Output {
    let mut admitted = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        match AdmissibleScores::new(record.sub_scores()) {
            Some(scores) => admitted.push(AdmittedRecord { record, scores }),
            None => dropped += 1,
        }
    }

    Stage1Output { admitted, dropped }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
