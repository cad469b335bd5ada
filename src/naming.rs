//! Output file naming.
//!
//! Every input produces `<base name>.png`, where the base name is the input's
//! file name with its final extension removed:
//! - `holiday/a.jpg` → `a.png`
//! - `scan.final.jpeg` → `scan.final.png`
//! - `IMG_0001.PNG` → `IMG_0001.png`
//!
//! The aggregate document is always `photocards.pdf`.
//!
//! ## Collisions
//!
//! Two inputs with the same base name in different directories map to the
//! same output file. Names are not deduplicated: the later input overwrites
//! the earlier one. [`find_collisions`] reports these so the caller can warn.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File stem of the aggregate document.
pub const DOCUMENT_STEM: &str = "photocards";

/// Extension of every per-image output.
pub const IMAGE_EXTENSION: &str = "png";

/// Output file name for one input.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.{IMAGE_EXTENSION}")
}

/// File name of the aggregate document.
pub fn document_file_name() -> String {
    format!("{DOCUMENT_STEM}.pdf")
}

/// An output name claimed by more than one input, with the inputs in order.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCollision {
    pub output_name: String,
    pub inputs: Vec<PathBuf>,
}

/// Find output names produced by more than one input.
///
/// Results are sorted by output name; inputs keep their batch order, so the
/// last entry is the one whose output survives.
pub fn find_collisions(inputs: &[PathBuf]) -> Vec<NameCollision> {
    let mut by_name: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for input in inputs {
        by_name
            .entry(output_file_name(input))
            .or_default()
            .push(input.clone());
    }
    by_name
        .into_iter()
        .filter(|(_, inputs)| inputs.len() > 1)
        .map(|(output_name, inputs)| NameCollision {
            output_name,
            inputs,
        })
        .collect()
}
