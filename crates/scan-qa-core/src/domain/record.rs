//! Batch pipeline records and the decoded-image carrier.

use image::GenericImageView;
use serde::{Deserialize, Serialize};

use super::QualityResult;
use crate::luminance::LumaPlane;

/// Validation outcome for a single image in a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Path to the validated image.
    pub path: String,
    /// Timestamp of validation (RFC 3339).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// Combined quality verdict.
    pub quality: QualityResult,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A decoded image together with its origin path.
///
/// Immutable for the duration of analysis; produced by an image source
/// adapter or built directly in tests.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path (or synthetic identifier) of the image.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Wraps a decoded image, capturing its dimensions.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Extracts the luminance plane the analyzers consume.
    #[must_use]
    pub fn luma_plane(&self) -> LumaPlane {
        LumaPlane::from_image(&self.image)
    }

    /// The image dimensions as a record value.
    #[must_use]
    pub const fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}
