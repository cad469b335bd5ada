//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers every operation that touches the
//! filesystem: identify, load, save and write_document. Pixel work that needs
//! no I/O lives in the [`compositor`](super::compositor) so it can be tested
//! in memory.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate and `lopdf`.

use super::params::DocumentParams;
use crate::types::{FramedImage, SourceImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Invalid canvas: {0}")]
    Configuration(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image I/O backends.
pub trait ImageBackend {
    /// Read image dimensions from the file header without decoding pixels.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode an image from disk.
    fn load(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Write a framed image as a lossless PNG.
    fn save(&self, image: &FramedImage, output: &Path) -> Result<(), BackendError>;

    /// Write all pages, in order, into one multi-page document.
    fn write_document(
        &self,
        pages: &[FramedImage],
        params: &DocumentParams,
    ) -> Result<(), BackendError>;
}
