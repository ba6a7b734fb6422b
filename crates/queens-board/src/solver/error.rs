use queens_core::CellCoords;

/// Errors returned by the solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("region count {regions} does not match board size {size}")]
    RegionCountInvalid { regions: usize, size: usize },
    #[error("region cell {cell} lies outside the {size}x{size} board")]
    CellOutOfBounds { cell: CellCoords, size: usize },
    #[error("no assignment satisfies the row, column and adjacency constraints")]
    Unsolvable,
    #[error("search aborted after {nodes} placements")]
    SearchAborted { nodes: u64 },
}
