use crate::model::scores::AdmissibleScores;

/// Inputs must already be validated; NaN or infinite inputs have no defined result.
pub fn overall_score(listening: f64, reading: f64, writing: f64, speaking: f64) -> i32 {
    let raw = (listening + reading + writing + speaking) / 4.0;
    round_overall(raw)
}

/// Rounds up only when the fractional part is strictly above one half.
/// An exact `.5` goes down, so this is not `f64::round`.
pub fn round_overall(raw: f64) -> i32 {
    debug_assert!(raw.is_finite(), "overall score of unvalidated sub-scores");
    let decimal = raw % 1.0;
    let rounded = if decimal > 0.5 { raw.ceil() } else { raw.floor() };
    rounded as i32
}

pub fn overall_of(scores: &AdmissibleScores) -> i32 {
    let s = scores.get();
    overall_score(s.listening, s.reading, s.writing, s.speaking)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_overall.rs"]
mod tests;
