//! Exposure classification from mean luminance.

use crate::domain::{BrightnessLevel, BrightnessResult};
use crate::luminance::LumaPlane;

/// Mean-luminance exposure analyzer.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessAnalyzer {
    min_brightness: f64,
    max_brightness: f64,
}

impl BrightnessAnalyzer {
    /// Creates an analyzer with the given brightness window.
    #[must_use]
    pub const fn new(min_brightness: f64, max_brightness: f64) -> Self {
        Self {
            min_brightness,
            max_brightness,
        }
    }

    /// Classifies exposure of the luminance plane.
    ///
    /// Both comparisons are strict: an average exactly equal to either
    /// bound is optimal. A zero-pixel plane averages to 0.
    #[must_use]
    pub fn analyze(&self, plane: &LumaPlane) -> BrightnessResult {
        let average = plane.mean();
        let level = if average < self.min_brightness {
            BrightnessLevel::TooDark
        } else if average > self.max_brightness {
            BrightnessLevel::TooBright
        } else {
            BrightnessLevel::Optimal
        };

        BrightnessResult {
            level,
            average_brightness: average,
            min_threshold: self.min_brightness,
            max_threshold: self.max_brightness,
        }
    }
}
