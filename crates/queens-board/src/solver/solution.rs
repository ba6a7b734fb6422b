use crate::{Region, RegionId};
use queens_core::{CellCoords, Rgb};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The cell chosen for one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub region: RegionId,
    pub color: Rgb,
    pub cell: CellCoords,
}

/// One chosen cell per region, in region order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub size: usize,
    pub assignments: Vec<Assignment>,
}

impl Solution {
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Chosen cells in region order.
    pub fn cells(&self) -> Vec<CellCoords> {
        self.assignments.iter().map(|a| a.cell).collect()
    }

    pub fn cell_for(&self, region: RegionId) -> Option<CellCoords> {
        self.assignments
            .iter()
            .find(|a| a.region == region)
            .map(|a| a.cell)
    }

    /// Check every puzzle rule against `regions`.
    ///
    /// One cell per region taken from that region, one per row, one per column,
    /// and no two chosen cells touching (diagonals included).
    pub fn is_valid_for(&self, regions: &[Region]) -> bool {
        if self.assignments.len() != regions.len() || regions.len() != self.size {
            return false;
        }
        for (a, region) in self.assignments.iter().zip(regions) {
            if a.region != region.id || !region.contains(a.cell) {
                return false;
            }
        }

        let cells = self.cells();
        let rows: HashSet<_> = cells.iter().map(|c| c.row).collect();
        let cols: HashSet<_> = cells.iter().map(|c| c.col).collect();
        if rows.len() != cells.len() || cols.len() != cells.len() {
            return false;
        }
        cells
            .iter()
            .enumerate()
            .all(|(i, a)| cells[i + 1..].iter().all(|b| !a.is_king_adjacent(b)))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.assignments {
            writeln!(
                f,
                "region {:>2} {}: {} {}",
                a.region.0 + 1,
                a.color,
                a.cell.label(),
                a.cell
            )?;
        }
        Ok(())
    }
}
