//! Color-region grouping by similarity flood fill.

use crate::{Board, GroupingParams};
use queens_core::{CellCoords, Rgb};

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Index of a region in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub usize);

/// Connected, color-homogeneous group of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    /// Color of the seed cell.
    pub color: Rgb,
    /// Members in discovery order; the solver tries them in this order.
    pub members: Vec<CellCoords>,
    /// Cell chosen by the last successful solve.
    pub assigned: Option<CellCoords>,
}

impl Region {
    pub fn new(id: RegionId, color: Rgb, members: Vec<CellCoords>) -> Self {
        Self {
            id,
            color,
            members,
            assigned: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, coords: CellCoords) -> bool {
        self.members.contains(&coords)
    }
}

/// Partition all board cells into regions.
///
/// Cells are seeded in row-major order. From each seed a depth-first traversal
/// with an explicit stack follows a neighbor only if its squared RGB distance
/// to the *current* cell is within `similarity_threshold`, so gradual drift
/// along a path stays in one region. Regions are returned in seed order.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(board, params), fields(size = board.size()))
)]
pub fn group_regions(board: &Board, params: &GroupingParams) -> Vec<Region> {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for seed in board.cells() {
        let seed_idx = seed.row() * size + seed.col();
        if visited[seed_idx] {
            continue;
        }

        let mut region = Region::new(RegionId(regions.len()), seed.color(), Vec::new());
        stack.clear();
        stack.push(seed.coords());

        while let Some(at) = stack.pop() {
            let idx = at.row * size + at.col;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            region.members.push(at);

            let Some(current) = board.cell_at(at) else {
                continue;
            };
            for (_, n) in current.neighbors() {
                if visited[n.row * size + n.col] {
                    continue;
                }
                let Some(neighbor) = board.cell_at(n) else {
                    continue;
                };
                if current.color().distance_sq(&neighbor.color()) <= params.similarity_threshold {
                    stack.push(n);
                }
            }
        }

        regions.push(region);
    }

    regions
}
