pub mod levels;
pub mod scores;
pub mod thresholds;
