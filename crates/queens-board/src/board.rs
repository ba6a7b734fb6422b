//! Cell graph built from a sampled color matrix.

use crate::region::{group_regions, Region, RegionId};
use crate::GroupingParams;
use queens_core::{CellCoords, ColorMatrix, Rgb};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// 4-neighborhood direction. No wraparound at the board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in flood-fill push order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Step from `from` on a `size × size` board.
    pub fn step(self, from: CellCoords, size: usize) -> Option<CellCoords> {
        let CellCoords { row, col } = from;
        match self {
            Direction::Up => row.checked_sub(1).map(|r| CellCoords::new(r, col)),
            Direction::Down => (row + 1 < size).then(|| CellCoords::new(row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| CellCoords::new(row, c)),
            Direction::Right => (col + 1 < size).then(|| CellCoords::new(row, col + 1)),
        }
    }
}

/// One board cell. Neighbors and region are stored as plain identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coords: CellCoords,
    color: Rgb,
    neighbors: [Option<CellCoords>; 4],
    pub(crate) region: Option<RegionId>,
}

impl Cell {
    #[inline]
    pub fn coords(&self) -> CellCoords {
        self.coords
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.coords.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.coords.col
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<CellCoords> {
        self.neighbors[dir.index()]
    }

    /// Existing neighbors in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, CellCoords)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbor(d).map(|n| (d, n)))
    }

    /// Region this cell was grouped into, once grouping has run.
    #[inline]
    pub fn region(&self) -> Option<RegionId> {
        self.region
    }
}

/// Square puzzle board: cells, their adjacency, and the color regions.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    regions: Vec<Region>,
}

impl Board {
    /// Build the cell graph. Regions stay empty until [`Board::group`] runs.
    pub fn new(colors: &ColorMatrix) -> Self {
        let size = colors.size();
        let cells = colors
            .iter()
            .map(|(coords, color)| {
                let mut neighbors = [None; 4];
                for dir in Direction::ALL {
                    neighbors[dir.index()] = dir.step(coords, size);
                }
                Cell {
                    coords,
                    color,
                    neighbors,
                    region: None,
                }
            })
            .collect();
        debug!("built {size}x{size} cell graph");
        Self {
            size,
            cells,
            regions: Vec::new(),
        }
    }

    /// Build the cell graph and group it into regions.
    pub fn build(colors: &ColorMatrix, params: &GroupingParams) -> Self {
        let mut board = Self::new(colors);
        board.group(params);
        board
    }

    /// (Re)compute regions, replacing any previous grouping.
    pub fn group(&mut self, params: &GroupingParams) {
        for cell in &mut self.cells {
            cell.region = None;
        }
        self.regions = group_regions(self, params);
        for region in &self.regions {
            for &m in &region.members {
                let idx = m.row * self.size + m.col;
                self.cells[idx].region = Some(region.id);
            }
        }
        info!("grouped {} cells into {} regions", self.cells.len(), self.regions.len());
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`, or `None` off the board.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    #[inline]
    pub fn cell_at(&self, coords: CellCoords) -> Option<&Cell> {
        self.cell(coords.row, coords.col)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    /// Log region count plus color, size and members of every region.
    pub fn log_regions(&self) {
        info!("total number of regions: {}", self.regions.len());
        for region in &self.regions {
            let members: Vec<_> = region.members.iter().map(|m| (m.row, m.col)).collect();
            info!(
                "region {}: color={} size={} cells={:?}",
                region.id.0 + 1,
                region.color,
                region.members.len(),
                members
            );
        }
    }
}
