//! Batch export: frame every input and write the results.
//!
//! Takes an ordered list of input paths, an existing output directory and an
//! [`ExportMode`], and for each input in order:
//!
//! 1. decodes the image,
//! 2. picks portrait (taller than wide) or landscape (everything else),
//! 3. composes it onto the matching fixed canvas,
//! 4. writes `<base name>.png` into the output directory.
//!
//! In [`ExportMode::Pdf`] the framed images are also written, in input order,
//! to `photocards.pdf` once every PNG is on disk.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── a.png            # 1000x750 (landscape or square source)
//! ├── b.png            # 750x1000 (portrait source)
//! ├── c.png
//! └── photocards.pdf   # PDF mode only: pages a, b, c
//! ```
//!
//! ## Failure
//!
//! The first error stops the batch. Files already written stay on disk; there
//! is no rollback and no retry. An empty input list is a no-op.
//!
//! ## Execution
//!
//! Strictly sequential on the calling thread. Progress is reported through an
//! optional channel so a front end can display it while the batch runs.

use crate::config::FramerConfig;
use crate::imaging::params::validate_canvas_table;
use crate::imaging::{
    BackendError, DocumentParams, ImageBackend, Orientation, RustBackend, frame_file,
};
use crate::naming::{document_file_name, output_file_name};
use crate::types::BatchResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Output directory does not exist or is not a directory: {}", .0.display())]
    OutputDirNotFound(PathBuf),
}

/// Whether the aggregate document is produced in addition to the PNGs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// One PNG per input
    #[default]
    SeparateImages,
    /// One PNG per input plus photocards.pdf
    Pdf,
}

/// Settings for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub mode: ExportMode,
    pub dpi: f32,
}

impl ExportOptions {
    /// Build options from the loaded config, optionally overriding the mode.
    pub fn from_config(config: &FramerConfig, mode: Option<ExportMode>) -> Self {
        Self {
            mode: mode.unwrap_or(config.export.format),
            dpi: config.pdf.dpi,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&FramerConfig::default(), None)
    }
}

/// Progress events emitted while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    BatchStarted {
        image_count: usize,
    },
    ImageExported {
        /// 1-based position in the batch
        index: usize,
        source_path: String,
        output_path: String,
        orientation: Orientation,
        canvas: (u32, u32),
    },
    DocumentExported {
        path: String,
        page_count: usize,
    },
}

/// What a finished batch wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportSummary {
    /// Per-image files written. The document is not counted.
    pub produced_count: usize,
    /// Per-image outputs in input order (collisions repeat the same path).
    pub images: Vec<PathBuf>,
    /// The aggregate document, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

/// Create `output_dir` (and parents) for a batch that will write something.
///
/// An empty batch performs no writes, so the directory is left alone and
/// `false` is returned.
pub fn create_output_dir(inputs: &[PathBuf], output_dir: &Path) -> Result<bool, ProcessError> {
    if inputs.is_empty() {
        return Ok(false);
    }
    std::fs::create_dir_all(output_dir)?;
    Ok(true)
}

/// Run a batch with the production backend.
pub fn run(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &ExportOptions,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ExportSummary, ProcessError> {
    run_with_backend(&RustBackend::new(), inputs, output_dir, options, progress)
}

/// Run a batch using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &ExportOptions,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ExportSummary, ProcessError> {
    if inputs.is_empty() {
        return Ok(ExportSummary::default());
    }
    validate_canvas_table()?;
    if !output_dir.is_dir() {
        return Err(ProcessError::OutputDirNotFound(output_dir.to_path_buf()));
    }

    let emit = |event: ProcessEvent| {
        if let Some(tx) = &progress {
            // A closed receiver only means nobody is watching.
            let _ = tx.send(event);
        }
    };

    emit(ProcessEvent::BatchStarted {
        image_count: inputs.len(),
    });

    let mut batch = BatchResult::new();
    let mut summary = ExportSummary::default();

    for (i, input) in inputs.iter().enumerate() {
        let (orientation, framed) = frame_file(backend, input)?;
        let output = output_dir.join(output_file_name(input));
        backend.save(&framed, &output)?;

        emit(ProcessEvent::ImageExported {
            index: i + 1,
            source_path: input.display().to_string(),
            output_path: output.display().to_string(),
            orientation,
            canvas: (framed.width(), framed.height()),
        });

        summary.images.push(output);
        summary.produced_count += 1;
        batch.push(framed);
    }

    if options.mode == ExportMode::Pdf && !batch.is_empty() {
        let params = DocumentParams {
            output: output_dir.join(document_file_name()),
            dpi: options.dpi,
        };
        backend.write_document(batch.frames(), &params)?;
        emit(ProcessEvent::DocumentExported {
            path: params.output.display().to_string(),
            page_count: batch.len(),
        });
        summary.document = Some(params.output);
    }

    Ok(summary)
}
