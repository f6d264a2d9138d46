use serde::{Deserialize, Serialize};

/// Closed rating range of the observation sheet, 1..=4 by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikertScale {
    pub min: f64,
    pub max: f64,
}

impl Default for LikertScale {
    fn default() -> Self {
        Self { min: 1.0, max: 4.0 }
    }
}

impl LikertScale {
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Mirror value of `v` on the scale: `min + max - v`.
    pub fn reflect(&self, v: f64) -> f64 {
        self.min + self.max - v
    }

    /// Chart axis range with half a step of padding on both ends.
    pub fn axis_range(&self) -> (f64, f64) {
        (self.min - 0.5, self.max + 0.5)
    }

    /// Whole-number tick positions inside the scale.
    pub fn ticks(&self) -> Vec<f64> {
        let first = self.min.ceil() as i64;
        let last = self.max.floor() as i64;
        (first..=last).map(|v| v as f64).collect()
    }
}
