use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell position on the puzzle board (row-major, origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoords {
    pub row: usize,
    pub col: usize,
}

impl CellCoords {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the two cells touch horizontally, vertically or diagonally.
    ///
    /// A cell is not adjacent to itself.
    #[inline]
    pub fn is_king_adjacent(&self, other: &CellCoords) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Chess-style label: columns lettered from `A`, rows numbered from 1.
    pub fn label(&self) -> String {
        let col = u8::try_from(self.col)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| char::from(b'A' + c).to_string())
            .unwrap_or_else(|| format!("[{}]", self.col));
        format!("{}{}", col, self.row + 1)
    }
}

impl From<(usize, usize)> for CellCoords {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
