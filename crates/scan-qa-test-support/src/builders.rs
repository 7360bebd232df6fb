//! Synthetic image builders for testing.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use scan_qa_core::ImageInfo;

/// Builder for creating synthetic test images.
///
/// Provides convenience methods for generating images with specific
/// quality characteristics (sharp, flat, underexposed, etc.).
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Sharp/High-Contrast Images ===

    /// Creates a checkerboard of 10px blocks at luminance 200/80.
    ///
    /// Sharp edges, mean brightness 140, luminance spread 60 - passes
    /// every check under the default thresholds.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32) -> ImageInfo {
        Self::checkerboard_with(width, height, 10, 200, 80)
    }

    /// Creates a checkerboard with custom cell size and block luminances.
    #[must_use]
    pub fn checkerboard_with(width: u32, height: u32, cell: u32, hi: u8, lo: u8) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Luma([hi])
            } else {
                Luma([lo])
            }
        });
        ImageInfo::new("synthetic://checkerboard", DynamicImage::ImageLuma8(img))
    }

    /// Creates vertical bars (sharp edges along one axis only).
    #[must_use]
    pub fn vertical_bars(width: u32, height: u32, bar_width: u32) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            if (x / bar_width) % 2 == 0 {
                Luma([200u8])
            } else {
                Luma([80u8])
            }
        });
        ImageInfo::new("synthetic://vertical_bars", DynamicImage::ImageLuma8(img))
    }

    // === Flat/Blurry Images ===

    /// Creates a uniform gray image (no edges at all).
    ///
    /// Zero edge variance and zero contrast: fails blur and contrast
    /// checks under any positive threshold.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        ImageInfo::new("synthetic://uniform_gray", DynamicImage::ImageLuma8(img))
    }

    /// Creates a uniform RGB color image.
    #[must_use]
    pub fn uniform_rgb(width: u32, height: u32, r: u8, g: u8, b: u8) -> ImageInfo {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb([r, g, b]));
        ImageInfo::new("synthetic://uniform_rgb", DynamicImage::ImageRgb8(img))
    }

    /// Creates a smooth horizontal gradient (gentle edges, wide tonal
    /// range).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> ImageInfo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Luma([val])
        });
        ImageInfo::new(
            "synthetic://horizontal_gradient",
            DynamicImage::ImageLuma8(img),
        )
    }

    // === Exposure Images ===

    /// Creates a near-black image (severely underexposed).
    #[must_use]
    pub fn underexposed(width: u32, height: u32) -> ImageInfo {
        Self::uniform_rgb(width, height, 10, 10, 10)
    }

    /// Creates a near-white image (severely overexposed).
    #[must_use]
    pub fn overexposed(width: u32, height: u32) -> ImageInfo {
        Self::uniform_rgb(width, height, 250, 250, 250)
    }

    /// Creates a flat mid-gray image (well exposed, zero contrast).
    #[must_use]
    pub fn flat_midgray(width: u32, height: u32) -> ImageInfo {
        Self::uniform_rgb(width, height, 128, 128, 128)
    }

    // === Special Test Images ===

    /// Creates a 1x1 pixel image (edge case: no Laplacian interior).
    #[must_use]
    pub fn single_pixel(value: u8) -> ImageInfo {
        let img = GrayImage::from_fn(1, 1, |_, _| Luma([value]));
        ImageInfo::new("synthetic://1x1", DynamicImage::ImageLuma8(img))
    }

    /// Creates a tiny 2x2 image (below the minimum convolvable size).
    #[must_use]
    pub fn tiny(values: [[u8; 2]; 2]) -> ImageInfo {
        let mut img = GrayImage::new(2, 2);
        for (y, row) in values.iter().enumerate() {
            for (x, &val) in row.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                img.put_pixel(x as u32, y as u32, Luma([val]));
            }
        }
        ImageInfo::new("synthetic://2x2", DynamicImage::ImageLuma8(img))
    }
}
