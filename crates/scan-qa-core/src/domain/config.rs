//! Threshold configuration and named presets.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable threshold bundle for one validation pass.
///
/// Invariants are enforced at construction: `blur_threshold > 0`,
/// `0 <= min_brightness < max_brightness <= 255`, `min_contrast >= 0`.
/// Once built, a config never changes; derive variants with
/// [`QualityConfig::with_overrides`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityConfig {
    blur_threshold: f64,
    min_brightness: f64,
    max_brightness: f64,
    min_contrast: f64,
}

impl QualityConfig {
    /// Builds a validated config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the violated invariant. Non-finite
    /// values are rejected.
    pub fn new(
        blur_threshold: f64,
        min_brightness: f64,
        max_brightness: f64,
        min_contrast: f64,
    ) -> Result<Self, ConfigError> {
        if !blur_threshold.is_finite() || blur_threshold <= 0.0 {
            return Err(ConfigError::InvalidBlurThreshold(blur_threshold));
        }
        if !min_brightness.is_finite()
            || !max_brightness.is_finite()
            || min_brightness < 0.0
            || max_brightness > 255.0
            || min_brightness >= max_brightness
        {
            return Err(ConfigError::InvalidBrightnessBounds {
                min: min_brightness,
                max: max_brightness,
            });
        }
        if !min_contrast.is_finite() || min_contrast < 0.0 {
            return Err(ConfigError::InvalidMinContrast(min_contrast));
        }
        Ok(Self {
            blur_threshold,
            min_brightness,
            max_brightness,
            min_contrast,
        })
    }

    /// Returns a new config with the given overrides applied on top of
    /// `self`. `self` is untouched; the result is re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the combined values violate an
    /// invariant.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::new(
            overrides.blur_threshold.unwrap_or(self.blur_threshold),
            overrides.min_brightness.unwrap_or(self.min_brightness),
            overrides.max_brightness.unwrap_or(self.max_brightness),
            overrides.min_contrast.unwrap_or(self.min_contrast),
        )
    }

    /// Laplacian-variance floor below which an image counts as blurry.
    #[must_use]
    pub const fn blur_threshold(&self) -> f64 {
        self.blur_threshold
    }

    /// Lower bound on acceptable average brightness.
    #[must_use]
    pub const fn min_brightness(&self) -> f64 {
        self.min_brightness
    }

    /// Upper bound on acceptable average brightness.
    #[must_use]
    pub const fn max_brightness(&self) -> f64 {
        self.max_brightness
    }

    /// Minimum acceptable luminance standard deviation.
    #[must_use]
    pub const fn min_contrast(&self) -> f64 {
        self.min_contrast
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Preset::Default.config()
    }
}

/// Optional per-threshold overrides for [`QualityConfig::with_overrides`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Replacement blur threshold, if any.
    pub blur_threshold: Option<f64>,
    /// Replacement brightness lower bound, if any.
    pub min_brightness: Option<f64>,
    /// Replacement brightness upper bound, if any.
    pub max_brightness: Option<f64>,
    /// Replacement contrast floor, if any.
    pub min_contrast: Option<f64>,
}

impl ConfigOverrides {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.blur_threshold.is_none()
            && self.min_brightness.is_none()
            && self.max_brightness.is_none()
            && self.min_contrast.is_none()
    }
}

/// Named threshold presets tuned for specific capture scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// General-purpose defaults.
    Default,
    /// ID/payment card capture: tolerant of glare-prone laminated surfaces.
    CardScanning,
    /// Full-page document capture: text must stay legible.
    DocumentScanning,
    /// Photographic capture: sharpness weighted heavily.
    PhotoCapture,
    /// Lenient thresholds for poor capture conditions.
    Relaxed,
    /// Tight thresholds for archival-grade capture.
    Strict,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::CardScanning,
        Self::DocumentScanning,
        Self::PhotoCapture,
        Self::Relaxed,
        Self::Strict,
    ];

    /// The preset's fixed threshold bundle.
    #[must_use]
    pub const fn config(self) -> QualityConfig {
        // Values are compile-time constants that satisfy every invariant;
        // test_all_presets_satisfy_invariants re-checks them through new().
        let (blur_threshold, min_brightness, max_brightness, min_contrast) = match self {
            Self::Default => (100.0, 40.0, 220.0, 50.0),
            Self::CardScanning => (80.0, 35.0, 230.0, 40.0),
            Self::DocumentScanning => (120.0, 45.0, 215.0, 55.0),
            Self::PhotoCapture => (200.0, 30.0, 235.0, 45.0),
            Self::Relaxed => (50.0, 25.0, 240.0, 30.0),
            Self::Strict => (250.0, 50.0, 200.0, 65.0),
        };
        QualityConfig {
            blur_threshold,
            min_brightness,
            max_brightness,
            min_contrast,
        }
    }

    /// Stable snake_case name, matching the config-file spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CardScanning => "card_scanning",
            Self::DocumentScanning => "document_scanning",
            Self::PhotoCapture => "photo_capture",
            Self::Relaxed => "relaxed",
            Self::Strict => "strict",
        }
    }
}
