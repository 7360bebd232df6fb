//! Composed quality validation over all three metrics.

use crate::analyzers::{BlurDetector, BrightnessAnalyzer, ContrastAnalyzer};
use crate::domain::{BlurResult, BrightnessResult, ContrastResult, ImageInfo, QualityConfig, QualityResult};
use crate::error::InvalidImageError;
use crate::luminance::LumaPlane;

/// Runs the blur, brightness and contrast analyzers under one shared
/// config and combines their verdicts.
///
/// The analyzers are bound to the config's thresholds once, at
/// construction. Every call recomputes from its input; nothing is cached
/// across calls.
#[derive(Debug, Clone)]
pub struct ImageQualityValidator {
    config: QualityConfig,
    blur: BlurDetector,
    brightness: BrightnessAnalyzer,
    contrast: ContrastAnalyzer,
}

impl ImageQualityValidator {
    /// Creates a validator for the given config.
    #[must_use]
    pub const fn new(config: QualityConfig) -> Self {
        Self {
            blur: BlurDetector::new(config.blur_threshold()),
            brightness: BrightnessAnalyzer::new(config.min_brightness(), config.max_brightness()),
            contrast: ContrastAnalyzer::new(config.min_contrast()),
            config,
        }
    }

    /// The config this validator was built with.
    #[must_use]
    pub const fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Validates an already-decoded image.
    ///
    /// All three analyzers run against the same luminance plane,
    /// extracted exactly once per call.
    #[must_use]
    pub fn validate(&self, image: &ImageInfo) -> QualityResult {
        self.validate_plane(&image.luma_plane())
    }

    /// Decodes `bytes` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImageError`] when the codec cannot produce a
    /// pixel grid; no analyzer runs in that case.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<QualityResult, InvalidImageError> {
        let image = image::load_from_memory(bytes)?;
        Ok(self.validate_plane(&LumaPlane::from_image(&image)))
    }

    /// Runs only the blur detector.
    #[must_use]
    pub fn check_blur(&self, image: &ImageInfo) -> BlurResult {
        self.blur.detect(&image.luma_plane())
    }

    /// Runs only the brightness analyzer.
    #[must_use]
    pub fn check_brightness(&self, image: &ImageInfo) -> BrightnessResult {
        self.brightness.analyze(&image.luma_plane())
    }

    /// Runs only the contrast analyzer.
    #[must_use]
    pub fn check_contrast(&self, image: &ImageInfo) -> ContrastResult {
        self.contrast.analyze(&image.luma_plane())
    }

    fn validate_plane(&self, plane: &LumaPlane) -> QualityResult {
        QualityResult::compose(
            self.blur.detect(plane),
            self.brightness.analyze(plane),
            self.contrast.analyze(plane),
        )
    }
}

impl Default for ImageQualityValidator {
    fn default() -> Self {
        Self::new(QualityConfig::default())
    }
}
