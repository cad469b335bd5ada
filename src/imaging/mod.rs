//! Image processing in pure Rust, with no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Crop-to-fill** | centered crop + `imageops::resize` (Lanczos3) |
//! | **Frame** | `RgbImage::from_pixel` + `imageops::replace` |
//! | **Save** | PNG via `image` |
//! | **Document** | multi-page PDF via `lopdf` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Canvas table, orientation, document parameters
//! - **Compositor**: The in-memory frame transform
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Document**: PDF assembly
//! - **Operations**: High-level functions combining the above

pub mod backend;
mod calculations;
pub mod compositor;
pub mod document;
pub mod operations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropBox, calculate_crop_box};
pub use compositor::compose;
pub use operations::{FramePlan, frame_file, get_dimensions, plan_frame};
pub use params::{
    CANVAS_TABLE, CanvasSpec, DocumentParams, LANDSCAPE_CANVAS, Orientation, PORTRAIT_CANVAS,
};
pub use rust_backend::{RustBackend, supported_input_extensions};
