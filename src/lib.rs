//! # Photocard
//!
//! Batch-frames photographs into fixed-size polaroid-style cards. Every input
//! is cropped to fill a fixed interior rectangle and pasted onto a white
//! canvas with thin side borders and thick top/bottom borders. Results are
//! written as PNGs, and optionally as one multi-page `photocards.pdf`.
//!
//! # Architecture: Two Stages
//!
//! ```text
//! 1. Scan      arguments  →  ordered input list   (files + directories)
//! 2. Process   inputs     →  out/*.png [+ photocards.pdf]
//! ```
//!
//! The framing transform itself ([`imaging::compose`]) is pure: a decoded
//! image and a canvas spec in, a framed image out. All filesystem access goes
//! through the [`imaging::ImageBackend`] trait, so the batch logic is tested
//! against a recording mock without decoding or writing anything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Expands command-line paths into the ordered input list |
//! | [`process`] | Batch orchestration: frame, save, optionally write the PDF |
//! | [`imaging`] | Canvas table, crop geometry, compositor, PNG/PDF backend |
//! | [`config`] | Optional `config.toml` loading, merging, and validation |
//! | [`naming`] | Output file names and collision detection |
//! | [`types`] | Source and framed image types shared across modules |
//! | [`output`] | CLI output formatting for progress, summaries, and checks |
//!
//! # Design Decisions
//!
//! ## Fixed Geometry
//!
//! There are exactly two canvases: portrait 750×1000 and landscape
//! 1000×750, both with 12px side borders and 40px top/bottom borders in
//! white. Only sources strictly taller than wide are portrait; squares get
//! the landscape card. Geometry lives in one table
//! ([`imaging::CANVAS_TABLE`]) and is not configurable.
//!
//! ## Crop, Then Resample
//!
//! The centered crop box is computed in source pixels with integer math
//! before any resampling, so extreme aspect ratios never allocate a huge
//! intermediate image and the same input always yields the same pixels.
//! Resampling uses Lanczos3.
//!
//! ## Lossless Output
//!
//! Cards are written as PNG regardless of the input format. Output names are
//! the input's base name with `.png`; collisions overwrite, and the CLI
//! warns about them before the batch starts.
//!
//! ## Fail Fast
//!
//! The first unreadable input stops the batch. Files written before the
//! failure stay on disk and the PDF is not written.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
