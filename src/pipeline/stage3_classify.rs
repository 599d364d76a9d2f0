use crate::model::levels::Level;
use crate::model::scores::{AdmissibleScores, EvaluatedResult};
use crate::model::thresholds::LevelThresholds;
use crate::pipeline::stage2_overall::overall_of;

pub fn classify_level(overall: impl Into<f64>) -> Level {
    classify_with(overall.into(), &LevelThresholds::default_v1())
}

/// First match wins; the ranges overlap, so the order of the checks matters.
pub fn classify_with(overall: f64, thresholds: &LevelThresholds) -> Level {
    if overall >= thresholds.c1_min {
        return Level::C1;
    }
    if overall >= thresholds.b2_min {
        return Level::B2;
    }
    if overall >= thresholds.b1_min {
        return Level::B1;
    }
    Level::A2
}

pub fn evaluate(scores: &AdmissibleScores) -> EvaluatedResult {
    let overall = overall_of(scores);
    EvaluatedResult {
        overall,
        level: classify_level(overall),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
