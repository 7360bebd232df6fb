//! Error types for the quality validation core.

use thiserror::Error;

/// Raised when a [`crate::QualityConfig`] invariant is violated at
/// construction. Construction fails atomically; no partially-built config
/// is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `blur_threshold` must be a positive, finite number.
    #[error("blur_threshold must be positive, got {0}")]
    InvalidBlurThreshold(f64),
    /// Brightness bounds must satisfy `0 <= min < max <= 255`.
    #[error("brightness bounds must satisfy 0 <= min < max <= 255, got min={min}, max={max}")]
    InvalidBrightnessBounds {
        /// Rejected lower bound.
        min: f64,
        /// Rejected upper bound.
        max: f64,
    },
    /// `min_contrast` must be a non-negative, finite number.
    #[error("min_contrast must be non-negative, got {0}")]
    InvalidMinContrast(f64),
}

/// Raised when the image codec cannot produce a pixel grid from the
/// supplied bytes. Surfaced before any analyzer runs; there is no retry
/// and no partial result.
#[derive(Debug, Error)]
#[error("could not decode image: {0}")]
pub struct InvalidImageError(#[from] pub image::ImageError);
