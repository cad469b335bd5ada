//! Image values passed between the loader, the compositor and the exporters.
//!
//! A [`SourceImage`] lives only while one input is being framed. A
//! [`FramedImage`] is owned by the batch until it has been written to disk and,
//! in PDF mode, appended to the aggregate document.

use crate::imaging::Dimensions;
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

/// A decoded input photograph and the path it was read from.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }
}

/// A finished card: border plus cropped content, always RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct FramedImage {
    image: RgbImage,
}

impl FramedImage {
    pub(crate) fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }
}

/// Framed images of one batch, in input order.
#[derive(Debug, Default)]
pub struct BatchResult {
    frames: Vec<FramedImage>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: FramedImage) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FramedImage] {
        &self.frames
    }
}
