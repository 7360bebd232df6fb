//! Per-pixel luminance extraction.
//!
//! All three analyzers read brightness through this single primitive so
//! their statistics stay numerically consistent with each other.

use image::DynamicImage;

/// Perceptual brightness of one pixel using Rec. 601 weights.
///
/// Returns a value in `[0, 255]`. Alpha is ignored.
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// A decoded image reduced to one `f64` luminance value per pixel.
///
/// Built once per analysis call and shared by the blur, brightness and
/// contrast analyzers. Row-major storage.
#[derive(Debug, Clone)]
pub struct LumaPlane {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl LumaPlane {
    /// Extracts the luminance plane from a decoded image.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let data = rgba
            .pixels()
            .map(|p| luminance(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Plane width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-pixel plane.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Luminance at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the plane.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// All luminance values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mean luminance. Zero pixels yields 0.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Population standard deviation of luminance (divisor = count).
    /// Zero pixels yields 0.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .data
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.data.len() as f64;
        variance.sqrt()
    }
}
