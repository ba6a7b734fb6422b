//! Grid-line detection.
//!
//! This module wires together binarization, row/column intensity projection,
//! peak clustering and the square-grid consistency checks.

mod error;
mod pipeline;
mod profile;
mod result;

pub use error::GridDetectError;
pub use pipeline::GridDetector;
pub use profile::{binarize, column_profile, find_line_peaks, row_profile};
pub use result::{GridLines, ProfileAxis};
