//! Frame compositor: crop-to-fill the source, then paste it inside a border.
//!
//! ```text
//!  ┌──────────────────────────┐  ─┐
//!  │          border          │   │ top_bottom_border
//!  │  ┌────────────────────┐  │  ─┘
//!  │  │                    │  │
//!  │  │  center-cropped,   │  │
//!  │  │  Lanczos3-resized  │  │
//!  │  │      content       │  │
//!  │  │                    │  │
//!  │  └────────────────────┘  │
//!  │                          │
//!  └──────────────────────────┘
//!   └┘ side_border
//! ```
//!
//! No I/O happens here. The same source and spec always produce the same pixels.

use super::backend::BackendError;
use super::calculations::{calculate_crop_box, content_offset};
use super::params::CanvasSpec;
use crate::types::{FramedImage, SourceImage};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Compose `source` into a card of exactly `spec.final_width × spec.final_height`.
///
/// The source is center-cropped to the content area's aspect ratio and
/// resampled with Lanczos3, so it fills the interior with no letterboxing and
/// no distortion. Any alpha channel is dropped.
pub fn compose(source: &SourceImage, spec: &CanvasSpec) -> Result<FramedImage, BackendError> {
    spec.validate()?;
    let (content_w, content_h) = spec
        .content_size()
        .ok_or_else(|| BackendError::Configuration("content area is empty".into()))?;

    let dims = source.dimensions();
    if dims.width == 0 || dims.height == 0 {
        return Err(BackendError::Decode {
            path: source.path().to_path_buf(),
            message: format!("image has no pixels ({}x{})", dims.width, dims.height),
        });
    }

    let content = fill_content(&source.image().to_rgb8(), (content_w, content_h));

    let mut canvas = RgbImage::from_pixel(
        spec.final_width,
        spec.final_height,
        Rgb(spec.border_color),
    );
    let (x, y) = content_offset(spec.side_border, spec.top_bottom_border);
    imageops::replace(&mut canvas, &content, x, y);

    Ok(FramedImage::new(canvas))
}

/// Crop the centered target-aspect box out of `rgb` and resample it to `target`.
fn fill_content(rgb: &RgbImage, target: (u32, u32)) -> RgbImage {
    let crop = calculate_crop_box((rgb.width(), rgb.height()), target);
    let cropped = imageops::crop_imm(rgb, crop.x, crop.y, crop.width, crop.height).to_image();
    if (cropped.width(), cropped.height()) == target {
        return cropped;
    }
    imageops::resize(&cropped, target.0, target.1, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::{LANDSCAPE_CANVAS, PORTRAIT_CANVAS};
    use crate::test_helpers::{assert_border_pure, gradient_source, split_source};
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn output_matches_canvas_size_for_any_source() {
        for &(w, h) in &[(800, 600), (600, 900), (500, 500), (1, 1), (3000, 40), (7, 2000)] {
            let source = gradient_source(w, h);
            for spec in [&PORTRAIT_CANVAS, &LANDSCAPE_CANVAS] {
                let framed = compose(&source, spec).unwrap();
                assert_eq!(
                    (framed.width(), framed.height()),
                    (spec.final_width, spec.final_height),
                    "source {w}x{h}"
                );
            }
        }
    }

    #[test]
    fn borders_are_pure_white() {
        let source = gradient_source(640, 480);
        let framed = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        assert_border_pure(&framed, &LANDSCAPE_CANVAS);

        let framed = compose(&gradient_source(480, 640), &PORTRAIT_CANVAS).unwrap();
        assert_border_pure(&framed, &PORTRAIT_CANVAS);
    }

    #[test]
    fn content_fills_interior_corners() {
        // A solid black source leaves no trace of the white canvas inside the borders.
        let source = SourceImage::new(
            "black.png",
            DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 200, Rgb([0, 0, 0]))),
        );
        let framed = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        let rgb = framed.as_rgb();
        for (x, y) in [(12, 40), (987, 40), (12, 709), (987, 709), (500, 375)] {
            assert_eq!(rgb.get_pixel(x, y), &Rgb([0, 0, 0]), "pixel ({x}, {y})");
        }
        assert_eq!(rgb.get_pixel(11, 40), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(988, 40), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(12, 39), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(12, 710), &Rgb([255, 255, 255]));
    }

    #[test]
    fn composing_twice_is_pixel_identical() {
        let source = gradient_source(1234, 567);
        let first = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        let second = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wide_source_is_cropped_not_squeezed() {
        // Left third red, middle third green, right third blue. Fitting a 5:1
        // strip into a 976x670 area keeps only the green middle.
        let source = split_source(
            1500,
            300,
            &[Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255])],
        );
        let framed = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        let rgb = framed.as_rgb();
        for x in [20, 500, 980] {
            let px = rgb.get_pixel(x, 375);
            assert!(px[1] > 200 && px[0] < 60 && px[2] < 60, "x={x}: {px:?}");
        }
    }

    #[test]
    fn alpha_channel_is_discarded() {
        let rgba = RgbaImage::from_pixel(100, 100, image::Rgba([10, 20, 30, 0]));
        let source = SourceImage::new("clear.png", DynamicImage::ImageRgba8(rgba));
        let framed = compose(&source, &PORTRAIT_CANVAS).unwrap();
        assert_eq!(framed.as_rgb().get_pixel(375, 500), &Rgb([10, 20, 30]));
    }

    #[test]
    fn invalid_canvas_is_rejected_before_work() {
        let spec = CanvasSpec {
            final_width: 20,
            ..PORTRAIT_CANVAS
        };
        let result = compose(&gradient_source(10, 10), &spec);
        assert!(matches!(result, Err(BackendError::Configuration(_))));
    }

    #[test]
    fn empty_source_is_decode_error() {
        let source = SourceImage::new(
            "empty.png",
            DynamicImage::ImageRgb8(RgbImage::new(0, 0)),
        );
        let result = compose(&source, &LANDSCAPE_CANVAS);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn exact_content_size_source_is_pasted_unchanged() {
        let source = gradient_source(976, 670);
        let framed = compose(&source, &LANDSCAPE_CANVAS).unwrap();
        let src = source.image().to_rgb8();
        assert_eq!(framed.as_rgb().get_pixel(12, 40), src.get_pixel(0, 0));
        assert_eq!(framed.as_rgb().get_pixel(987, 709), src.get_pixel(975, 669));
    }
}
