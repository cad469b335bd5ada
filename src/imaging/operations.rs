//! High-level frame operations.
//!
//! These functions combine orientation rules, naming and the compositor with
//! backend I/O. Planning is pure; framing loads through the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::compositor::compose;
use super::params::{CanvasSpec, Orientation};
use crate::naming::output_file_name;
use crate::types::FramedImage;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions from the file header using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// What a single input will turn into, computed without decoding pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub source: PathBuf,
    pub source_dims: Dimensions,
    pub orientation: Orientation,
    pub canvas: CanvasSpec,
    pub output: PathBuf,
}

/// Plan a frame operation without executing it.
pub fn plan_frame(source: &Path, source_dims: Dimensions, output_dir: &Path) -> FramePlan {
    let orientation = Orientation::of(source_dims);
    FramePlan {
        source: source.to_path_buf(),
        source_dims,
        orientation,
        canvas: *orientation.canvas_spec(),
        output: output_dir.join(output_file_name(source)),
    }
}

/// Load `source`, pick its orientation and compose it onto the matching canvas.
pub fn frame_file(backend: &impl ImageBackend, source: &Path) -> Result<(Orientation, FramedImage)> {
    let image = backend.load(source)?;
    let orientation = Orientation::of(image.dimensions());
    let framed = compose(&image, orientation.canvas_spec())?;
    Ok((orientation, framed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    #[test]
    fn get_dimensions_calls_backend() {
        let backend = MockBackend::with_sources(&[("/test.jpg", 1920, 1080)]);

        let dims = get_dimensions(&backend, Path::new("/test.jpg")).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 1920,
                height: 1080
            }
        );
        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::Identify("/test.jpg".to_string())]
        );
    }

    #[test]
    fn plan_landscape_source() {
        let plan = plan_frame(
            Path::new("/in/a.jpg"),
            Dimensions {
                width: 800,
                height: 600,
            },
            Path::new("/out"),
        );

        assert_eq!(plan.orientation, Orientation::Landscape);
        assert_eq!((plan.canvas.final_width, plan.canvas.final_height), (1000, 750));
        assert_eq!(plan.output, PathBuf::from("/out/a.png"));
    }

    #[test]
    fn plan_portrait_source() {
        let plan = plan_frame(
            Path::new("/in/b.png"),
            Dimensions {
                width: 600,
                height: 900,
            },
            Path::new("/out"),
        );

        assert_eq!(plan.orientation, Orientation::Portrait);
        assert_eq!((plan.canvas.final_width, plan.canvas.final_height), (750, 1000));
        assert_eq!(plan.output, PathBuf::from("/out/b.png"));
    }

    #[test]
    fn plan_square_source_is_landscape() {
        let plan = plan_frame(
            Path::new("c.jpg"),
            Dimensions {
                width: 500,
                height: 500,
            },
            Path::new("out"),
        );

        assert_eq!(plan.orientation, Orientation::Landscape);
        assert_eq!(plan.output, PathBuf::from("out/c.png"));
    }

    #[test]
    fn frame_file_loads_once_and_composes() {
        let backend = MockBackend::with_sources(&[("/in/b.png", 60, 90)]);

        let (orientation, framed) = frame_file(&backend, Path::new("/in/b.png")).unwrap();

        assert_eq!(orientation, Orientation::Portrait);
        assert_eq!((framed.width(), framed.height()), (750, 1000));
        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::Load("/in/b.png".to_string())]
        );
    }

    #[test]
    fn frame_file_propagates_decode_error() {
        let backend = MockBackend::new();
        let result = frame_file(&backend, Path::new("/in/missing.jpg"));
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }
}
