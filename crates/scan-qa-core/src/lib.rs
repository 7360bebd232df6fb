//! Scan QA Core - Capture quality validation engine.
//!
//! Scores a decoded raster image on three independent dimensions —
//! sharpness (Laplacian edge-energy variance), exposure (mean luminance)
//! and contrast (luminance spread) — against configurable thresholds, and
//! combines them into a single pass/fail verdict with diagnostic detail.
//!
//! # Example
//!
//! ```
//! use scan_qa_core::{ImageInfo, ImageQualityValidator, Preset};
//!
//! let validator = ImageQualityValidator::new(Preset::DocumentScanning.config());
//! let image = ImageInfo::new("page.png", image::DynamicImage::new_rgb8(640, 480));
//! let result = validator.validate(&image);
//! if !result.is_valid {
//!     eprintln!("{}", result.summary);
//! }
//! ```

pub mod analyzers;
pub mod domain;
pub mod error;
pub mod luminance;
pub mod ports;
pub mod validator;

pub use analyzers::{BlurDetector, BrightnessAnalyzer, ContrastAnalyzer};
pub use domain::{
    BlurResult, BrightnessLevel, BrightnessResult, ConfigOverrides, ContrastResult,
    ImageDimensions, ImageInfo, Preset, QualityConfig, QualityResult, ValidationRecord,
};
pub use error::{ConfigError, InvalidImageError};
pub use luminance::{luminance, LumaPlane};
pub use ports::{ImageSource, ProgressEvent, ProgressSink, ResultOutput};
pub use validator::ImageQualityValidator;
