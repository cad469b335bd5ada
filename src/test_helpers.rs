//! Shared test utilities for the photocard test suite.
//!
//! Provides synthetic source images, on-disk fixture writers, and pixel
//! assertions for framed output.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = write_test_jpeg(tmp.path(), "a.jpg", 800, 600);
//!
//! let framed = compose(&gradient_source(800, 600), &LANDSCAPE_CANVAS).unwrap();
//! assert_border_pure(&framed, &LANDSCAPE_CANVAS);
//! ```

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageEncoder, Rgb, RgbImage};

use crate::imaging::params::CanvasSpec;
use crate::types::{FramedImage, SourceImage};

// =========================================================================
// In-memory sources
// =========================================================================

/// A source whose pixels vary along both axes, so crops and resizes are visible.
pub fn gradient_source(width: u32, height: u32) -> SourceImage {
    SourceImage::new(
        format!("gradient-{width}x{height}.png"),
        DynamicImage::ImageRgb8(gradient(width, height)),
    )
}

/// A source split into equal-width vertical bands of the given colors.
pub fn split_source(width: u32, height: u32, bands: &[Rgb<u8>]) -> SourceImage {
    let band_width = width.div_ceil(bands.len() as u32);
    let img = RgbImage::from_fn(width, height, |x, _| bands[(x / band_width) as usize]);
    SourceImage::new("bands.png", DynamicImage::ImageRgb8(img))
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

// =========================================================================
// On-disk fixtures
// =========================================================================

/// Write a valid JPEG of the given size into `dir` and return its path.
pub fn write_test_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = gradient(width, height);
    let file = std::fs::File::create(&path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    path
}

/// Write a valid PNG of the given size into `dir` and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert every pixel in the four border strips equals the spec's border color.
pub fn assert_border_pure(framed: &FramedImage, spec: &CanvasSpec) {
    let rgb = framed.as_rgb();
    let color = Rgb(spec.border_color);
    for (x, y, px) in rgb.enumerate_pixels() {
        let in_side = x < spec.side_border || x >= spec.final_width - spec.side_border;
        let in_top_bottom =
            y < spec.top_bottom_border || y >= spec.final_height - spec.top_bottom_border;
        if in_side || in_top_bottom {
            assert_eq!(px, &color, "border pixel ({x}, {y}) is {px:?}");
        }
    }
}
