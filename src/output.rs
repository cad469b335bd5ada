//! CLI output formatting.
//!
//! Each image is shown by its positional index and file name, with the
//! output path and canvas as indented context, so the output reads as an
//! inventory of the batch.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Framing 3 photos
//! 001 a.jpg → out/a.png
//!     landscape 1000x750
//! 002 b.png → out/b.png
//!     portrait 750x1000
//! 003 c.jpg → out/c.png
//!     landscape 1000x750
//! Document → out/photocards.pdf (3 pages)
//! Exported 3 image(s) to out
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 a.jpg
//!     Source: in/a.jpg (800x600)
//!     landscape 1000x750 → out/a.png
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::imaging::FramePlan;
use crate::naming::NameCollision;
use crate::process::{ExportSummary, ProcessEvent};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// File name of a path, falling back to the whole path.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::BatchStarted { image_count } => {
            vec![format!("Framing {}", plural(*image_count, "photo", "photos"))]
        }
        ProcessEvent::ImageExported {
            index,
            source_path,
            output_path,
            orientation,
            canvas,
        } => vec![
            format!(
                "{} {} \u{2192} {}",
                format_index(*index),
                display_name(source_path),
                output_path
            ),
            format!("    {} {}x{}", orientation, canvas.0, canvas.1),
        ],
        ProcessEvent::DocumentExported { path, page_count } => vec![format!(
            "Document \u{2192} {} ({})",
            path,
            plural(*page_count, "page", "pages")
        )],
    }
}

/// Print a progress event to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Closing line for a finished batch.
pub fn format_summary(summary: &ExportSummary, output_dir: &Path) -> String {
    format!(
        "Exported {} image(s) to {}",
        summary.produced_count,
        output_dir.display()
    )
}

// ============================================================================
// Check
// ============================================================================

/// Format the dry-run plan for every input.
pub fn format_check_output(plans: &[FramePlan]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, plan) in plans.iter().enumerate() {
        let source = plan.source.to_string_lossy();
        lines.push(format!("{} {}", format_index(i + 1), display_name(&source)));
        lines.push(format!(
            "    Source: {} ({}x{})",
            source, plan.source_dims.width, plan.source_dims.height
        ));
        lines.push(format!(
            "    {} {}x{} \u{2192} {}",
            plan.orientation,
            plan.canvas.final_width,
            plan.canvas.final_height,
            plan.output.display()
        ));
    }
    lines
}

/// Print the dry-run plan to stdout.
pub fn print_check_output(plans: &[FramePlan]) {
    for line in format_check_output(plans) {
        println!("{}", line);
    }
}

/// Warnings for inputs that will overwrite each other's output.
pub fn format_collision_warnings(collisions: &[NameCollision]) -> Vec<String> {
    let mut lines = Vec::new();
    for collision in collisions {
        lines.push(format!(
            "warning: {} inputs write {}; the last one wins",
            collision.inputs.len(),
            collision.output_name
        ));
        for input in &collision.inputs {
            lines.push(format!("    {}", input.display()));
        }
    }
    lines
}

/// Print collision warnings to stderr.
pub fn print_collision_warnings(collisions: &[NameCollision]) {
    for line in format_collision_warnings(collisions) {
        eprintln!("{}", line);
    }
}
