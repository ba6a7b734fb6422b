use serde::{Deserialize, Serialize};
use std::fmt;

/// Which projection a line set comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAxis {
    /// Row sums; peaks are horizontal lines (y coordinates).
    Horizontal,
    /// Column sums; peaks are vertical lines (x coordinates).
    Vertical,
}

impl fmt::Display for ProfileAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileAxis::Horizontal => f.write_str("horizontal"),
            ProfileAxis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Detected grid-line coordinates, in pixels, sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLines {
    /// y coordinates of horizontal lines.
    pub horizontal: Vec<usize>,
    /// x coordinates of vertical lines.
    pub vertical: Vec<usize>,
}

impl GridLines {
    /// Board dimension N: one less than the line count per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.horizontal.len().saturating_sub(1)
    }
}
