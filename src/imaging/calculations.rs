//! Pure calculation functions for frame geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// A rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Calculate the centered crop that gives the source the target's aspect ratio.
///
/// The box is the largest rectangle of the target aspect ratio that fits inside
/// the source, rounded to whole pixels, with the overflow split evenly between
/// both sides. Resampling the box to `target` then fills it exactly without
/// distortion.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height), both non-zero
/// * `target` - Target area dimensions (width, height), both non-zero
///
/// # Examples
/// ```
/// # use photocard::imaging::calculate_crop_box;
/// // 800x600 into a 976x670 content area: trim a little off top and bottom
/// let crop = calculate_crop_box((800, 600), (976, 670));
/// assert_eq!((crop.width, crop.height), (800, 549));
/// assert_eq!((crop.x, crop.y), (0, 25));
/// ```
pub fn calculate_crop_box(source: (u32, u32), target: (u32, u32)) -> CropBox {
    let (src_w, src_h) = (u64::from(source.0), u64::from(source.1));
    let (tgt_w, tgt_h) = (u64::from(target.0), u64::from(target.1));

    // Compare aspect ratios by cross-multiplying to stay in integers.
    let (crop_w, crop_h) = if src_w * tgt_h > tgt_w * src_h {
        // Source is wider: keep full height, trim left and right
        let w = rounded_div(src_h * tgt_w, tgt_h).clamp(1, src_w);
        (w, src_h)
    } else {
        // Source is taller (or same ratio): keep full width, trim top and bottom
        let h = rounded_div(src_w * tgt_h, tgt_w).clamp(1, src_h);
        (src_w, h)
    };

    CropBox {
        x: to_u32((src_w - crop_w) / 2),
        y: to_u32((src_h - crop_h) / 2),
        width: to_u32(crop_w),
        height: to_u32(crop_h),
    }
}

fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Every value passed here is bounded by a `u32` source dimension.
fn to_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Offset that places `content` at the border corner of a canvas.
///
/// The content region starts after the left border and the top border.
pub fn content_offset(side_border: u32, top_bottom_border: u32) -> (i64, i64) {
    (i64::from(side_border), i64::from(top_bottom_border))
}
