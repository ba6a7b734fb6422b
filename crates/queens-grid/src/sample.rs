//! Per-cell color sampling.
//!
//! Puzzle cells are flat-colored, so one pixel at the cell center is the color
//! of record. No averaging is performed.

use crate::GridDetectError;
use queens_core::{ColorMatrix, RgbImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Pixel center of cell `(row, col)` on a `size × size` board spanning a
/// `width × height` image. Cell extents use integer division.
#[inline]
pub fn cell_center(width: usize, height: usize, size: usize, row: usize, col: usize) -> (usize, usize) {
    let cell_w = width / size;
    let cell_h = height / size;
    (col * cell_w + cell_w / 2, row * cell_h + cell_h / 2)
}

/// Sample one color per cell at the geometric cell centers.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image), fields(width = image.width, height = image.height))
)]
pub fn sample_cell_colors(image: &RgbImageView<'_>, size: usize) -> Result<ColorMatrix, GridDetectError> {
    let too_small = GridDetectError::ImageTooSmall {
        width: image.width,
        height: image.height,
        size,
    };
    if size == 0 || image.width < size || image.height < size {
        return Err(too_small);
    }

    let mut rows = Vec::with_capacity(size);
    for row in 0..size {
        let mut cells = Vec::with_capacity(size);
        for col in 0..size {
            let (x, y) = cell_center(image.width, image.height, size, row, col);
            let Some(color) = image.pixel(x, y) else {
                return Err(too_small);
            };
            cells.push(color);
        }
        rows.push(cells);
    }
    // rows are square by construction
    ColorMatrix::from_rows(rows).map_err(|_| too_small)
}
