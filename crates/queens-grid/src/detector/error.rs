use super::ProfileAxis;
use queens_core::ImageViewError;

/// Errors returned by grid detection and cell sampling.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridDetectError {
    #[error("grid not detected (no {axis} line candidates above threshold)")]
    GridNotDetected { axis: ProfileAxis },
    #[error("line count mismatch (horizontal={horizontal}, vertical={vertical})")]
    LineCountMismatch { horizontal: usize, vertical: usize },
    #[error("insufficient grid lines (found {found}, need at least {min})")]
    InsufficientLines { found: usize, min: usize },
    #[error("image {width}x{height} too small for a {size}x{size} grid")]
    ImageTooSmall {
        width: usize,
        height: usize,
        size: usize,
    },
    #[error(transparent)]
    Image(#[from] ImageViewError),
}
