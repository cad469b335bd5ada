//! Input discovery.
//!
//! Turns the paths given on the command line into the ordered list of images
//! a batch will frame.
//!
//! ## Rules
//!
//! - **Files** are taken as given, in argument order. A file whose extension
//!   has no compiled-in decoder is rejected up front rather than failing
//!   mid-batch.
//! - **Directories** expand to the supported images directly inside them
//!   (no recursion), sorted by file name. Hidden entries are skipped.
//! - Duplicates are kept: naming the same file twice frames it twice.
//!
//! ```text
//! photocard generate -o out trip/ extra.png
//!
//! trip/
//! ├── .thumbs/         # skipped (hidden)
//! ├── 02-beach.jpg     # 2nd
//! ├── 01-dock.JPEG     # 1st
//! ├── notes.txt        # skipped (unsupported)
//! └── raw/             # skipped (no recursion)
//!
//! → trip/01-dock.JPEG, trip/02-beach.jpg, extra.png
//! ```

use crate::imaging::supported_input_extensions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Unsupported input format (expected one of {}): {}", supported_input_extensions().join(", "), .0.display())]
    UnsupportedExtension(PathBuf),
}

/// Expand command-line paths into the ordered list of input images.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            inputs.extend(images_in_dir(path)?);
        } else if path.is_file() {
            if !is_supported(path) {
                return Err(ScanError::UnsupportedExtension(path.clone()));
            }
            inputs.push(path.clone());
        } else {
            return Err(ScanError::NotFound(path.clone()));
        }
    }
    Ok(inputs)
}

fn images_in_dir(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e.file_name()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_supported(entry.path()) {
            images.push(entry.into_path());
        }
    }
    Ok(images)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Extension check, case-insensitive.
fn is_supported(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    supported_input_extensions().contains(&ext.as_str())
}
