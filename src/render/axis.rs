use std::ops::Range;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;

/// Continuous `f64` axis whose ticks sit exactly at the given positions.
///
/// Bars and markers are placed at fractional offsets, while tick labels
/// belong to whole categories (or Likert steps), so neither a plain float
/// range nor a segmented one fits.
#[derive(Clone)]
pub struct FixedTicks {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl FixedTicks {
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            inner: range.into(),
            ticks,
        }
    }
}

impl Ranged for FixedTicks {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for FixedTicks {
    fn format(value: &f64) -> String {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/axis.rs"]
mod tests;
