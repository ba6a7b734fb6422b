//! Grid extraction from a rectified screenshot of a Queens puzzle.
//!
//! ## Quickstart
//!
//! ```
//! use queens_core::RgbImageView;
//! use queens_grid::{GridDetector, GridDetectorParams};
//!
//! let data = vec![255u8; 100 * 100 * 3];
//! let img = RgbImageView::new(100, 100, &data).unwrap();
//! let detector = GridDetector::new(GridDetectorParams::default());
//! assert!(detector.detect(&img).is_err());
//! ```
//!
//! Algorithm (intensity projection):
//! 1. Convert to luma and binarize so dark grid lines become foreground (255).
//! 2. Sum foreground intensity along every row and every column.
//! 3. Keep indices whose sum exceeds `peak_fraction` of the profile maximum.
//! 4. Cluster surviving indices whose gap is at most `axis_len / cluster_gap_divisor`.
//! 5. Collapse each cluster to its rounded mean: one coordinate per grid line.
//! 6. Require equal horizontal/vertical counts and at least `min_lines` lines.
//!
//! Cell colors are then read from a single pixel at each cell center.

mod detector;
mod params;
mod sample;

#[cfg(test)]
mod synthetic;

pub use detector::{
    binarize, column_profile, find_line_peaks, row_profile, GridDetectError, GridDetector,
    GridLines, ProfileAxis,
};
pub use params::GridDetectorParams;
pub use sample::{cell_center, sample_cell_colors};
