//! Sharpness estimation via Laplacian edge-energy variance.
//!
//! A sharp image produces strong second-derivative responses at edges;
//! blurring smooths them out. The variance of the Laplacian over the
//! image interior is therefore a cheap, decode-only sharpness proxy.

use crate::domain::BlurResult;
use crate::luminance::LumaPlane;

/// Laplacian-variance blur detector.
#[derive(Debug, Clone, Copy)]
pub struct BlurDetector {
    threshold: f64,
}

impl BlurDetector {
    /// Creates a detector with the given variance threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured variance threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Estimates sharpness of the luminance plane.
    ///
    /// An image is blurry when the variance falls strictly below the
    /// threshold; a variance exactly equal to the threshold is sharp.
    #[must_use]
    pub fn detect(&self, plane: &LumaPlane) -> BlurResult {
        let variance = laplacian_variance(plane);
        let is_blurry = variance < self.threshold;

        // Distance-based certainty: 0.5 at the threshold, saturating to
        // 1.0 at twice the threshold away. Measures certainty, not
        // direction.
        let distance = (variance - self.threshold).abs();
        let max_distance = 2.0 * self.threshold;
        let normalized = (distance / max_distance).min(1.0);
        let confidence = 0.5 + 0.5 * normalized;

        BlurResult {
            is_blurry,
            variance,
            confidence,
            threshold: self.threshold,
        }
    }
}

/// Population variance of the 3x3 Laplacian `[[0,1,0],[1,-4,1],[0,1,0]]`
/// evaluated at interior pixels only (no border padding).
///
/// Planes narrower or shorter than 3 pixels have no interior and yield 0.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn laplacian_variance(plane: &LumaPlane) -> f64 {
    let (width, height) = (plane.width(), plane.height());
    if width < 3 || height < 3 {
        return 0.0;
    }

    let mut responses = Vec::with_capacity(((width - 2) * (height - 2)) as usize);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let response = plane.get(x, y - 1)
                + plane.get(x - 1, y)
                + plane.get(x + 1, y)
                + plane.get(x, y + 1)
                - 4.0 * plane.get(x, y);
            responses.push(response);
        }
    }

    let count = responses.len() as f64;
    let mean = responses.iter().sum::<f64>() / count;
    responses.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Luma};

    const TOLERANCE: f64 = 1e-9;

    fn plane_from_gray(img: GrayImage) -> LumaPlane {
        LumaPlane::from_image(&DynamicImage::ImageLuma8(img))
    }

    fn uniform(width: u32, height: u32, value: u8) -> LumaPlane {
        plane_from_gray(GrayImage::from_fn(width, height, |_, _| Luma([value])))
    }

    fn checkerboard(width: u32, height: u32, cell: u32, hi: u8, lo: u8) -> LumaPlane {
        plane_from_gray(GrayImage::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Luma([hi])
            } else {
                Luma([lo])
            }
        }))
    }

    #[test]
    fn test_uniform_image_has_zero_variance() {
        for size in [3, 8, 50] {
            let variance = laplacian_variance(&uniform(size, size, 128));
            assert!(variance.abs() < TOLERANCE, "{size}x{size} gave {variance}");
        }
    }

    #[test]
    fn test_uniform_image_is_blurry_for_any_positive_threshold() {
        let plane = uniform(10, 10, 200);
        for threshold in [0.001, 1.0, 100.0, 1e9] {
            let result = BlurDetector::new(threshold).detect(&plane);
            assert!(result.is_blurry, "threshold {threshold}");
        }
    }

    #[test]
    fn test_no_interior_yields_zero_variance() {
        // Too narrow, too short, and degenerate planes all have an empty
        // interior set.
        assert!(laplacian_variance(&uniform(2, 50, 0)).abs() < TOLERANCE);
        assert!(laplacian_variance(&uniform(50, 2, 255)).abs() < TOLERANCE);
        assert!(laplacian_variance(&uniform(1, 1, 9)).abs() < TOLERANCE);
        let empty = LumaPlane::from_image(&DynamicImage::new_rgb8(0, 0));
        assert!(laplacian_variance(&empty).abs() < TOLERANCE);
    }

    #[test]
    fn test_single_interior_pixel_has_zero_variance() {
        // A 3x3 plane has exactly one Laplacian response; the variance of
        // one sample is zero no matter how sharp the edge is.
        let img = GrayImage::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        assert!(laplacian_variance(&plane_from_gray(img)).abs() < TOLERANCE);
    }

    #[test]
    fn test_hand_computed_variance() {
        // 4x3 gray plane, all 100 except (1,1) = 110. Two interior
        // responses: -40 and 10, mean -15, variance 625.
        let img = GrayImage::from_fn(4, 3, |x, y| {
            if x == 1 && y == 1 {
                Luma([110u8])
            } else {
                Luma([100u8])
            }
        });
        let variance = laplacian_variance(&plane_from_gray(img));
        assert!((variance - 625.0).abs() < 1e-6, "got {variance}");
    }

    #[test]
    fn test_checkerboard_is_sharp() {
        let plane = checkerboard(100, 100, 10, 200, 80);
        let result = BlurDetector::new(100.0).detect(&plane);
        assert!(!result.is_blurry, "variance {}", result.variance);
        assert!(result.variance > 100.0);
    }

    #[test]
    fn test_variance_equal_to_threshold_is_sharp() {
        let plane = checkerboard(40, 40, 4, 255, 0);
        let variance = laplacian_variance(&plane);
        assert!(variance > 0.0);

        let result = BlurDetector::new(variance).detect(&plane);
        assert!(!result.is_blurry, "strict comparison must treat equality as sharp");
        assert!((result.confidence - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_threshold_monotonicity() {
        // Raising the threshold can flip sharp -> blurry, never the
        // reverse.
        let plane = checkerboard(60, 60, 6, 220, 40);
        let mut was_blurry = false;
        for threshold in [1.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0, 1e7] {
            let blurry = BlurDetector::new(threshold).detect(&plane).is_blurry;
            assert!(
                blurry || !was_blurry,
                "flipped back to sharp at threshold {threshold}"
            );
            was_blurry = blurry;
        }
        assert!(was_blurry, "sweep should end in blurry territory");
    }

    #[test]
    fn test_confidence_always_in_range() {
        let planes = [
            uniform(10, 10, 128),
            checkerboard(32, 32, 4, 255, 0),
            uniform(2, 2, 0),
        ];
        for plane in &planes {
            for threshold in [1e-6, 0.5, 100.0, 1e12] {
                let result = BlurDetector::new(threshold).detect(plane);
                assert!(
                    (0.5..=1.0).contains(&result.confidence),
                    "confidence {} at threshold {threshold}",
                    result.confidence
                );
            }
        }
    }

    #[test]
    fn test_confidence_saturates_far_from_threshold() {
        // Variance 0 against threshold t: distance t, max 2t, so the
        // normalized distance is 0.5 and confidence 0.75 for every t.
        let plane = uniform(10, 10, 60);
        for threshold in [1.0, 50.0, 1e6] {
            let result = BlurDetector::new(threshold).detect(&plane);
            assert!((result.confidence - 0.75).abs() < TOLERANCE);
        }

        // Variance far above threshold clamps to full confidence.
        let sharp = checkerboard(100, 100, 10, 200, 80);
        let result = BlurDetector::new(1.0).detect(&sharp);
        assert!((result.confidence - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_result_echoes_threshold() {
        let result = BlurDetector::new(42.0).detect(&uniform(5, 5, 1));
        assert!((result.threshold - 42.0).abs() < TOLERANCE);
        assert!(result.variance >= 0.0);
    }
}
