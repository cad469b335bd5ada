//! Pure Rust image backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG) | `image::ImageReader` with content sniffing |
//! | Encode → PNG | `image::RgbImage::save_with_format` |
//! | Multi-page document | `lopdf` via [`document`](super::document) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::document::write_pdf;
use super::params::DocumentParams;
use crate::types::{FramedImage, SourceImage};
use image::{ImageFormat, ImageReader};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions accepted as input, matching the formats compiled into `image`.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Backend built on the `image` crate and `lopdf`.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a file and sniff its format from content, falling back to the extension.
fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    ImageReader::open(path)
        .map_err(|e| decode_error(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn load(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let image = open_reader(path)?
            .decode()
            .map_err(|e| decode_error(path, e))?;
        Ok(SourceImage::new(path, image))
    }

    fn save(&self, image: &FramedImage, output: &Path) -> Result<(), BackendError> {
        image
            .as_rgb()
            .save_with_format(output, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => BackendError::Io(io),
                other => BackendError::Encode(format!(
                    "PNG encode failed for {}: {}",
                    output.display(),
                    other
                )),
            })
    }

    fn write_document(
        &self,
        pages: &[FramedImage],
        params: &DocumentParams,
    ) -> Result<(), BackendError> {
        write_pdf(pages, params)
    }
}
