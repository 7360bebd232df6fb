//! Contrast estimation from luminance spread.

use crate::domain::ContrastResult;
use crate::luminance::LumaPlane;

/// Luminance standard-deviation contrast analyzer.
#[derive(Debug, Clone, Copy)]
pub struct ContrastAnalyzer {
    min_contrast: f64,
}

impl ContrastAnalyzer {
    /// Creates an analyzer with the given minimum spread.
    #[must_use]
    pub const fn new(min_contrast: f64) -> Self {
        Self { min_contrast }
    }

    /// Scores contrast of the luminance plane.
    ///
    /// The comparison is inclusive: a score exactly equal to the
    /// threshold passes. A zero-pixel plane scores 0.
    #[must_use]
    pub fn analyze(&self, plane: &LumaPlane) -> ContrastResult {
        let score = plane.std_dev();
        ContrastResult {
            has_good_contrast: score >= self.min_contrast,
            contrast_score: score,
            threshold: self.min_contrast,
        }
    }
}
