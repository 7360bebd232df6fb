//! Per-metric and combined validation results.
//!
//! All results are immutable value objects created once per analysis call
//! and owned by the caller. Field names are part of the output contract
//! consumed by downstream pipelines.

use serde::{Deserialize, Serialize};

/// Sharpness verdict from the Laplacian-variance blur detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurResult {
    /// True when the edge-energy variance falls below the threshold.
    pub is_blurry: bool,
    /// Population variance of the Laplacian responses, >= 0.
    pub variance: f64,
    /// Certainty of the verdict, always in `[0.5, 1.0]`.
    pub confidence: f64,
    /// The threshold the variance was compared against.
    pub threshold: f64,
}

impl BlurResult {
    /// Diagnostic message when the image is blurry.
    #[must_use]
    pub fn issue(&self) -> Option<String> {
        self.is_blurry.then(|| {
            format!(
                "image appears blurry (edge variance {:.2} below threshold {:.2})",
                self.variance, self.threshold
            )
        })
    }
}

/// Exposure classification relative to the configured brightness window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessLevel {
    /// Average brightness below the lower bound.
    TooDark,
    /// Average brightness within bounds (inclusive).
    Optimal,
    /// Average brightness above the upper bound.
    TooBright,
}

/// Exposure verdict from the mean-luminance analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessResult {
    /// Exposure classification.
    pub level: BrightnessLevel,
    /// Mean luminance over every pixel.
    pub average_brightness: f64,
    /// Lower bound the mean was compared against.
    pub min_threshold: f64,
    /// Upper bound the mean was compared against.
    pub max_threshold: f64,
}

impl BrightnessResult {
    /// True when exposure is within bounds.
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        matches!(self.level, BrightnessLevel::Optimal)
    }

    /// Diagnostic message when exposure is outside bounds.
    #[must_use]
    pub fn issue(&self) -> Option<String> {
        match self.level {
            BrightnessLevel::TooDark => Some(format!(
                "image is too dark (average brightness {:.2} below {:.2})",
                self.average_brightness, self.min_threshold
            )),
            BrightnessLevel::TooBright => Some(format!(
                "image is too bright (average brightness {:.2} above {:.2})",
                self.average_brightness, self.max_threshold
            )),
            BrightnessLevel::Optimal => None,
        }
    }
}

/// Contrast verdict from the luminance-spread analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// True when the spread meets the threshold (inclusive).
    pub has_good_contrast: bool,
    /// Population standard deviation of luminance, >= 0.
    pub contrast_score: f64,
    /// The minimum spread the score was compared against.
    pub threshold: f64,
}

impl ContrastResult {
    /// Diagnostic message when contrast is insufficient.
    #[must_use]
    pub fn issue(&self) -> Option<String> {
        (!self.has_good_contrast).then(|| {
            format!(
                "image has low contrast (score {:.2} below {:.2})",
                self.contrast_score, self.threshold
            )
        })
    }
}

/// Combined verdict over all three quality dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityResult {
    /// True only when every individual check passed.
    pub is_valid: bool,
    /// Sharpness sub-result.
    pub blur: BlurResult,
    /// Exposure sub-result.
    pub brightness: BrightnessResult,
    /// Contrast sub-result.
    pub contrast: ContrastResult,
    /// Diagnostic messages in fixed order: blur, brightness, contrast.
    pub issues: Vec<String>,
    /// One-line human-readable verdict.
    pub summary: String,
}

impl QualityResult {
    /// Message used as the summary of a passing result.
    pub const ACCEPTABLE: &'static str = "image quality acceptable";

    /// Combines the three sub-results, deriving `is_valid`, `issues` and
    /// `summary`. Issue order is fixed regardless of how the sub-results
    /// were produced.
    #[must_use]
    pub fn compose(
        blur: BlurResult,
        brightness: BrightnessResult,
        contrast: ContrastResult,
    ) -> Self {
        let is_valid = !blur.is_blurry && brightness.is_optimal() && contrast.has_good_contrast;
        let issues: Vec<String> = [blur.issue(), brightness.issue(), contrast.issue()]
            .into_iter()
            .flatten()
            .collect();
        let summary = if is_valid {
            Self::ACCEPTABLE.to_string()
        } else {
            issues.join("; ")
        };
        Self {
            is_valid,
            blur,
            brightness,
            contrast,
            issues,
            summary,
        }
    }
}
