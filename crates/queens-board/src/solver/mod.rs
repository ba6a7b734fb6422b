//! Backtracking constraint solver.
//!
//! Chooses one cell per region such that no row, column or king-move
//! neighborhood holds two chosen cells. First solution wins; uniqueness is
//! not checked.

mod error;
mod search;
mod solution;

pub use error::SolveError;
pub use search::Solver;
pub use solution::{Assignment, Solution};
