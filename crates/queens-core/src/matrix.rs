use crate::{CellCoords, Rgb};
use serde::{Deserialize, Serialize};

/// Errors raised when assembling a [`ColorMatrix`] from nested rows.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ColorMatrixError {
    #[error("color matrix is empty")]
    Empty,
    #[error("color matrix is not square (row {row} has {len} cells, expected {size})")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// Square `size × size` matrix of sampled cell colors, stored row-major.
///
/// This is the hand-off between image extraction and the board model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMatrix {
    size: usize,
    colors: Vec<Rgb>,
}

impl ColorMatrix {
    /// Build from nested rows; every row must have as many cells as there are rows.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, ColorMatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(ColorMatrixError::Empty);
        }
        let mut colors = Vec::with_capacity(size * size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(ColorMatrixError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            colors.extend(cells);
        }
        Ok(Self { size, colors })
    }

    /// Build by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut colors = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                colors.push(f(row, col));
            }
        }
        Self { size, colors }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.colors.get(row * self.size + col).copied()
    }

    /// Iterate `(coords, color)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoords, Rgb)> + '_ {
        let size = self.size;
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, &c)| (CellCoords::new(i / size, i % size), c))
    }

    pub fn to_rows(&self) -> Vec<Vec<Rgb>> {
        self.colors
            .chunks(self.size.max(1))
            .map(|r| r.to_vec())
            .collect()
    }
}
