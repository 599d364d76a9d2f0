/// Inclusive bounds every sub-score must fall into.
pub const SUBSCORE_MIN: f64 = 0.0;
pub const SUBSCORE_MAX: f64 = 75.0;

/// Lower bounds of each level, checked from the top down.
#[derive(Debug, Clone)]
pub struct LevelThresholds {
    pub c1_min: f64,
    pub b2_min: f64,
    pub b1_min: f64,
}

impl LevelThresholds {
    pub fn default_v1() -> Self {
        Self {
            c1_min: 65.0,
            // Kept fractional: overall scores are integers, so this behaves as >= 51.
            b2_min: 50.5,
            b1_min: 38.0,
        }
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
