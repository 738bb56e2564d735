//! Error types.
//!
//! Every failure is detected before the host surface is touched, so a
//! failed `init()` or `render()` leaves the canvas exactly as it was.

use thiserror::Error;

/// Matrix data that cannot be laid out as a rectangular grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("matrix has no frames")]
    NoFrames,
    #[error("frame {frame} has no cells")]
    EmptyFrame { frame: usize },
    #[error("frame {frame}, row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        frame: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("frame {frame} is {found_cols}x{found_rows}, expected {expected_cols}x{expected_rows}")]
    FrameMismatch {
        frame: usize,
        expected_cols: usize,
        expected_rows: usize,
        found_cols: usize,
        found_rows: usize,
    },
}

/// Display lifecycle errors.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("invalid matrix: {0}")]
    Shape(#[from] ShapeError),
    #[error("no cell template factory was supplied")]
    MissingTemplate,
    #[error("canvas {key:?} could not be resolved")]
    HostUnavailable { key: String },
    #[error("frame index {index} out of range ({count} frames)")]
    FrameOutOfRange { index: usize, count: usize },
    #[error("display has not been initialized")]
    NotInitialized,
}

impl DisplayError {
    /// Short machine-readable kind, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            DisplayError::Shape(_) => "shape",
            DisplayError::MissingTemplate => "missing_template",
            DisplayError::HostUnavailable { .. } => "host_unavailable",
            DisplayError::FrameOutOfRange { .. } => "frame_out_of_range",
            DisplayError::NotInitialized => "not_initialized",
        }
    }
}

pub type Result<T> = std::result::Result<T, DisplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        let err = ShapeError::RaggedRow {
            frame: 0,
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "frame 0, row 2: expected 3 cells, found 1");

        let err = ShapeError::FrameMismatch {
            frame: 1,
            expected_cols: 3,
            expected_rows: 2,
            found_cols: 4,
            found_rows: 2,
        };
        assert_eq!(err.to_string(), "frame 1 is 4x2, expected 3x2");
    }

    #[test]
    fn test_display_error_from_shape() {
        let err: DisplayError = ShapeError::NoFrames.into();
        assert_eq!(err.kind(), "shape");
        assert_eq!(err.to_string(), "invalid matrix: matrix has no frames");
    }

    #[test]
    fn test_display_error_kinds() {
        let err = DisplayError::HostUnavailable {
            key: "matrix".to_string(),
        };
        assert_eq!(err.kind(), "host_unavailable");
        assert_eq!(err.to_string(), "canvas \"matrix\" could not be resolved");
        assert_eq!(DisplayError::MissingTemplate.kind(), "missing_template");
    }
}
