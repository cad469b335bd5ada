//! Parameter types for frame operations.
//!
//! These types describe *what* to produce, not *how* to produce it. The
//! [`compositor`](super::compositor) turns a [`CanvasSpec`] into pixels and the
//! [`backend`](super::backend) persists the results.
//!
//! ## Types
//!
//! - [`CanvasSpec`]: Fixed frame geometry: final size, border widths, border color.
//! - [`Orientation`]: Portrait or landscape, each mapped to one built-in canvas.
//! - [`DocumentParams`]: Output path and resolution for the aggregate PDF.
//!
//! ## Canvas table
//!
//! | Orientation | Canvas | Side border | Top/bottom border | Color |
//! |---|---|---|---|---|
//! | Portrait | 750×1000 | 12 | 40 | white |
//! | Landscape | 1000×750 | 12 | 40 | white |
//!
//! Adding an orientation means adding a variant and a row to [`CANVAS_TABLE`];
//! nothing else branches on orientation.

use super::backend::{BackendError, Dimensions};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const SIDE_BORDER: u32 = 12;
pub const TOP_BOTTOM_BORDER: u32 = 40;
pub const BORDER_COLOR: [u8; 3] = [255, 255, 255];

/// Geometry of one frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub final_width: u32,
    pub final_height: u32,
    /// Border on the left and right edges.
    pub side_border: u32,
    /// Border on the top and bottom edges.
    pub top_bottom_border: u32,
    pub border_color: [u8; 3],
}

impl CanvasSpec {
    /// Interior rectangle left after subtracting the borders.
    ///
    /// Returns `None` when the borders consume the whole canvas on either axis.
    pub fn content_size(&self) -> Option<(u32, u32)> {
        let width = self
            .final_width
            .checked_sub(self.side_border.checked_mul(2)?)?;
        let height = self
            .final_height
            .checked_sub(self.top_bottom_border.checked_mul(2)?)?;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Check the content-area-positive invariant.
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.content_size().is_none() {
            return Err(BackendError::Configuration(format!(
                "canvas {}x{} leaves no room for content inside borders of {}px (sides) and {}px (top/bottom)",
                self.final_width, self.final_height, self.side_border, self.top_bottom_border
            )));
        }
        Ok(())
    }
}

pub const PORTRAIT_CANVAS: CanvasSpec = CanvasSpec {
    final_width: 750,
    final_height: 1000,
    side_border: SIDE_BORDER,
    top_bottom_border: TOP_BOTTOM_BORDER,
    border_color: BORDER_COLOR,
};

pub const LANDSCAPE_CANVAS: CanvasSpec = CanvasSpec {
    final_width: 1000,
    final_height: 750,
    side_border: SIDE_BORDER,
    top_bottom_border: TOP_BOTTOM_BORDER,
    border_color: BORDER_COLOR,
};

/// Canvas lookup table, indexed by [`Orientation`].
pub const CANVAS_TABLE: [(Orientation, CanvasSpec); 2] = [
    (Orientation::Portrait, PORTRAIT_CANVAS),
    (Orientation::Landscape, LANDSCAPE_CANVAS),
];

/// Frame orientation chosen from the source's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classify a source image. Only strictly taller images are portrait;
    /// square sources resolve to landscape.
    pub fn of(dims: Dimensions) -> Self {
        if dims.height > dims.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Row of this orientation in [`CANVAS_TABLE`].
    const fn table_index(self) -> usize {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 1,
        }
    }

    /// The built-in canvas for this orientation.
    pub fn canvas_spec(self) -> &'static CanvasSpec {
        &CANVAS_TABLE[self.table_index()].1
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate every built-in canvas.
pub fn validate_canvas_table() -> Result<(), BackendError> {
    CANVAS_TABLE.iter().try_for_each(|(_, spec)| spec.validate())
}

/// Parameters for writing the aggregate multi-page document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentParams {
    pub output: PathBuf,
    /// Pixels per inch; a page measures `pixels * 72 / dpi` points.
    pub dpi: f32,
}
