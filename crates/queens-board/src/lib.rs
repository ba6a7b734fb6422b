//! Board model, region grouping and constraint solving for Queens puzzles.
//!
//! ## Quickstart
//!
//! ```
//! use queens_board::{Board, GroupingParams, Solver, SolverParams};
//! use queens_core::{ColorMatrix, Rgb};
//!
//! let palette = [
//!     Rgb::new(230, 150, 120),
//!     Rgb::new(150, 190, 240),
//!     Rgb::new(180, 220, 150),
//!     Rgb::new(240, 220, 130),
//!     Rgb::new(200, 160, 220),
//! ];
//! let layout = ["AABBB", "ACCBB", "DCCCE", "DDCEE", "DDEEE"];
//! let colors = ColorMatrix::from_fn(5, |r, c| {
//!     palette[(layout[r].as_bytes()[c] - b'A') as usize]
//! });
//!
//! let mut board = Board::build(&colors, &GroupingParams::default());
//! let solution = Solver::new(SolverParams::default()).solve_board(&mut board).unwrap();
//! assert_eq!(solution.len(), 5);
//! ```
//!
//! Pipeline:
//! 1. Build one [`Cell`] per color-matrix entry, linked to its 4-neighbors.
//! 2. Flood-fill (explicit stack) cells into color [`Region`]s; each step
//!    compares a cell with its neighbor, not with the region seed.
//! 3. Backtrack over regions in discovery order, one cell per region, with
//!    row, column and king-move exclusion.

mod board;
mod params;
mod region;
mod solver;

pub use board::{Board, Cell, Direction};
pub use params::{GroupingParams, SolverParams};
pub use region::{group_regions, Region, RegionId};
pub use solver::{Assignment, Solution, SolveError, Solver};
