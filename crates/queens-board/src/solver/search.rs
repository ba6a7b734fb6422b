use super::{Assignment, Solution, SolveError};
use crate::{Board, Region, SolverParams};
use queens_core::CellCoords;

use log::{debug, info};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Mutable bookkeeping of one search. Created fresh per solve call.
struct SearchContext {
    used_rows: Vec<bool>,
    used_cols: Vec<bool>,
    placed: Vec<CellCoords>,
    nodes: u64,
    max_nodes: Option<u64>,
}

impl SearchContext {
    fn new(size: usize, max_nodes: Option<u64>) -> Self {
        Self {
            used_rows: vec![false; size],
            used_cols: vec![false; size],
            placed: Vec::with_capacity(size),
            nodes: 0,
            max_nodes,
        }
    }

    fn is_valid(&self, cell: CellCoords) -> bool {
        !self.used_rows[cell.row]
            && !self.used_cols[cell.col]
            && !self.placed.iter().any(|p| p.is_king_adjacent(&cell))
    }

    fn commit(&mut self, cell: CellCoords) {
        self.used_rows[cell.row] = true;
        self.used_cols[cell.col] = true;
        self.placed.push(cell);
    }

    fn undo(&mut self, cell: CellCoords) {
        self.used_rows[cell.row] = false;
        self.used_cols[cell.col] = false;
        self.placed.pop();
    }

    /// Try to fill regions `index..`. `Ok(false)` means exhausted.
    fn place(&mut self, regions: &[Region], index: usize) -> Result<bool, SolveError> {
        let Some(region) = regions.get(index) else {
            return Ok(true);
        };
        for &cell in &region.members {
            if !self.is_valid(cell) {
                continue;
            }
            if self.max_nodes.is_some_and(|max| self.nodes >= max) {
                return Err(SolveError::SearchAborted { nodes: self.nodes });
            }
            self.nodes += 1;

            self.commit(cell);
            if self.place(regions, index + 1)? {
                return Ok(true);
            }
            self.undo(cell);
        }
        Ok(false)
    }
}

/// Depth-first backtracking over regions in their stored order.
///
/// Candidates are tried in member order, so the result is deterministic for a
/// given region partition.
pub struct Solver {
    params: SolverParams,
}

impl Solver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Solve the board's regions, recording each region's chosen cell.
    pub fn solve_board(&self, board: &mut Board) -> Result<Solution, SolveError> {
        let size = board.size();
        self.solve_regions(size, board.regions_mut())
    }

    /// Solve an explicit region partition of a `size × size` board.
    ///
    /// Every region's `assigned` cell is reset first and written only on success.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, regions), fields(regions = regions.len()))
    )]
    pub fn solve_regions(
        &self,
        size: usize,
        regions: &mut [Region],
    ) -> Result<Solution, SolveError> {
        for region in regions.iter_mut() {
            region.assigned = None;
        }
        if regions.len() != size {
            return Err(SolveError::RegionCountInvalid {
                regions: regions.len(),
                size,
            });
        }
        if let Some(&cell) = regions
            .iter()
            .flat_map(|r| r.members.iter())
            .find(|c| c.row >= size || c.col >= size)
        {
            return Err(SolveError::CellOutOfBounds { cell, size });
        }

        let mut ctx = SearchContext::new(size, self.params.max_nodes);
        let found = ctx.place(regions, 0)?;
        debug!("search visited {} placements", ctx.nodes);
        if !found {
            return Err(SolveError::Unsolvable);
        }

        let assignments = regions
            .iter_mut()
            .zip(ctx.placed.iter())
            .map(|(region, &cell)| {
                region.assigned = Some(cell);
                Assignment {
                    region: region.id,
                    color: region.color,
                    cell,
                }
            })
            .collect::<Vec<_>>();

        info!("solution found");
        for a in &assignments {
            info!("region {} {}: cell {}", a.region.0 + 1, a.color, a.cell);
        }
        Ok(Solution { size, assignments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupingParams, RegionId};
    use queens_core::{ColorMatrix, Rgb};

    fn region(id: usize, members: &[(usize, usize)]) -> Region {
        Region::new(
            RegionId(id),
            Rgb::new(40 * id as u8, 0, 0),
            members.iter().map(|&p| p.into()).collect(),
        )
    }

    fn cells(v: &[(usize, usize)]) -> Vec<CellCoords> {
        v.iter().map(|&p| p.into()).collect()
    }

    /// Four regions with two mirror-image solutions.
    fn four_regions(column_major: bool) -> Vec<Region> {
        let mut regions = vec![
            region(0, &[(0, 0), (0, 1), (1, 0)]),
            region(1, &[(0, 2), (0, 3), (1, 3)]),
            region(2, &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]),
            region(3, &[(2, 0), (2, 3), (3, 0), (3, 3)]),
        ];
        if column_major {
            for r in &mut regions {
                r.members.sort_by_key(|c| (c.col, c.row));
            }
        }
        regions
    }

    fn board_from_layout(layout: &[&str]) -> Board {
        let _ = env_logger::builder().is_test(true).try_init();
        let palette = [
            Rgb::new(230, 150, 120),
            Rgb::new(150, 190, 240),
            Rgb::new(180, 220, 150),
            Rgb::new(240, 220, 130),
            Rgb::new(200, 160, 220),
            Rgb::new(250, 250, 250),
            Rgb::new(160, 160, 160),
            Rgb::new(255, 180, 200),
        ];
        let colors = ColorMatrix::from_fn(layout.len(), |r, c| {
            palette[(layout[r].as_bytes()[c] - b'A') as usize]
        });
        Board::build(&colors, &GroupingParams::default())
    }

    #[test]
    fn column_major_member_order_yields_reference_solution() {
        let mut regions = four_regions(true);
        let s = Solver::new(SolverParams::default())
            .solve_regions(4, &mut regions)
            .expect("solution");
        assert_eq!(s.cells(), cells(&[(1, 0), (0, 2), (3, 1), (2, 3)]));
        assert!(s.is_valid_for(&regions));
    }

    #[test]
    fn row_major_member_order_yields_mirror_solution() {
        let mut regions = four_regions(false);
        let s = Solver::new(SolverParams::default())
            .solve_regions(4, &mut regions)
            .expect("solution");
        assert_eq!(s.cells(), cells(&[(0, 1), (1, 3), (3, 2), (2, 0)]));
        assert!(s.is_valid_for(&regions));
    }

    #[test]
    fn assigned_cells_are_recorded_on_regions() {
        let mut regions = four_regions(true);
        Solver::new(SolverParams::default())
            .solve_regions(4, &mut regions)
            .expect("solution");
        let assigned: Vec<_> = regions.iter().filter_map(|r| r.assigned).collect();
        assert_eq!(assigned, cells(&[(1, 0), (0, 2), (3, 1), (2, 3)]));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let mut board = board_from_layout(&["AABBB", "ACCBB", "DCCCE", "DDCEE", "DDEEE"]);
        let solver = Solver::new(SolverParams::default());
        let first = solver.solve_board(&mut board).expect("solution");
        for _ in 0..3 {
            assert_eq!(solver.solve_board(&mut board).expect("solution"), first);
        }
        assert_eq!(
            first.cells(),
            cells(&[(0, 1), (1, 4), (2, 2), (3, 0), (4, 3)])
        );
        assert!(first.is_valid_for(board.regions()));
    }

    #[test]
    fn region_count_mismatch_is_rejected_before_search() {
        // the two corner groups of the last region are split by flood fill
        let mut board = board_from_layout(&["AABB", "ACCB", "DCCD", "DCCD"]);
        assert_eq!(board.regions().len(), 5);
        let err = Solver::new(SolverParams::default())
            .solve_board(&mut board)
            .unwrap_err();
        assert_eq!(err, SolveError::RegionCountInvalid { regions: 5, size: 4 });
        assert!(board.regions().iter().all(|r| r.assigned.is_none()));
    }

    #[test]
    fn adjacent_singletons_are_unsolvable() {
        let mut board = board_from_layout(&["ABBB", "CDBB", "CCCC", "CCCC"]);
        assert_eq!(board.regions().len(), 4);
        let err = Solver::new(SolverParams::default())
            .solve_board(&mut board)
            .unwrap_err();
        assert_eq!(err, SolveError::Unsolvable);
    }

    #[test]
    fn failed_solve_clears_previous_assignment() {
        let mut regions = four_regions(true);
        let solver = Solver::new(SolverParams::default());
        solver.solve_regions(4, &mut regions).expect("solution");
        regions[3].members = cells(&[(3, 0)]);
        assert_eq!(
            solver.solve_regions(4, &mut regions),
            Err(SolveError::Unsolvable)
        );
        assert!(regions.iter().all(|r| r.assigned.is_none()));
    }

    #[test]
    fn node_cap_aborts_distinctly() {
        let mut regions = four_regions(false);
        let solver = Solver::new(SolverParams { max_nodes: Some(2) });
        assert_eq!(
            solver.solve_regions(4, &mut regions),
            Err(SolveError::SearchAborted { nodes: 2 })
        );
        let generous = Solver::new(SolverParams {
            max_nodes: Some(10_000),
        });
        assert!(generous.solve_regions(4, &mut regions).is_ok());
    }

    #[test]
    fn out_of_bounds_members_are_reported() {
        let mut regions = four_regions(false);
        regions[1].members.push(CellCoords::new(0, 7));
        assert_eq!(
            Solver::new(SolverParams::default()).solve_regions(4, &mut regions),
            Err(SolveError::CellOutOfBounds {
                cell: CellCoords::new(0, 7),
                size: 4
            })
        );
    }

    #[test]
    fn eight_by_eight_board_solves() {
        let mut board = board_from_layout(&[
            "CCAAABBB", "CCAAABBB", "CCCAADDB", "CCCADDDD", "GGCEEEDD", "GGFEEEDD", "GGGGGGHD",
            "GGGGHHHH",
        ]);
        assert_eq!(board.regions().len(), 8);
        let s = Solver::new(SolverParams::default())
            .solve_board(&mut board)
            .expect("solution");
        assert!(s.is_valid_for(board.regions()));
    }
}
