use crate::model::levels::Level;
use crate::model::thresholds::{SUBSCORE_MAX, SUBSCORE_MIN};

/// The four coerced sub-scores of one record. Values may be NaN or out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
    pub speaking: f64,
}

impl SubScores {
    pub fn new(listening: f64, reading: f64, writing: f64, speaking: f64) -> Self {
        Self {
            listening,
            reading,
            writing,
            speaking,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.listening, self.reading, self.writing, self.speaking]
    }
}

/// Sub-scores that passed the range check. Only constructible through [`AdmissibleScores::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissibleScores(SubScores);

impl AdmissibleScores {
    /// Returns `None` unless every sub-score lies in `[SUBSCORE_MIN, SUBSCORE_MAX]`.
    /// NaN fails both comparisons and is rejected.
    pub fn new(scores: SubScores) -> Option<Self> {
        if scores.as_array().iter().all(|&v| within_range(v)) {
            Some(Self(scores))
        } else {
            None
        }
    }

    pub fn get(&self) -> &SubScores {
        &self.0
    }
}

pub fn within_range(value: f64) -> bool {
    value >= SUBSCORE_MIN && value <= SUBSCORE_MAX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedResult {
    pub overall: i32,
    pub level: Level,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
