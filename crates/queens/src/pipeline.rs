use crate::board::{Board, GroupingParams, Solution, SolveError, Solver, SolverParams};
use crate::core::{ColorMatrix, ImageViewError, RgbImageView};
use crate::grid::{sample_cell_colors, GridDetectError, GridDetector, GridDetectorParams, GridLines};

use log::info;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors of an end-to-end run. Every failure is terminal for that run.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Image(#[from] ImageViewError),
    #[error(transparent)]
    Grid(#[from] GridDetectError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl PipelineError {
    /// Stable failure-kind name for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Image(_) => "InvalidImage",
            PipelineError::Grid(GridDetectError::GridNotDetected { .. }) => "GridNotDetected",
            PipelineError::Grid(GridDetectError::LineCountMismatch { .. }) => "LineCountMismatch",
            PipelineError::Grid(GridDetectError::InsufficientLines { .. }) => "InsufficientLines",
            PipelineError::Grid(GridDetectError::ImageTooSmall { .. }) => "ImageTooSmall",
            PipelineError::Grid(GridDetectError::Image(_)) => "InvalidImage",
            PipelineError::Solve(SolveError::RegionCountInvalid { .. }) => "RegionCountInvalid",
            PipelineError::Solve(SolveError::CellOutOfBounds { .. }) => "CellOutOfBounds",
            PipelineError::Solve(SolveError::Unsolvable) => "Unsolvable",
            PipelineError::Solve(SolveError::SearchAborted { .. }) => "SearchAborted",
        }
    }
}

/// Parameters of every stage, as loaded from a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub grid: GridDetectorParams,
    pub grouping: GroupingParams,
    pub solver: SolverParams,
}

/// Everything a successful run produces.
#[derive(Clone, Debug)]
pub struct PuzzleResult {
    pub lines: GridLines,
    pub colors: ColorMatrix,
    pub board: Board,
    pub solution: Solution,
}

/// Screenshot → grid lines → cell colors → regions → solution.
pub struct PuzzleSolver {
    params: PipelineParams,
    detector: GridDetector,
    solver: Solver,
}

impl PuzzleSolver {
    pub fn new(params: PipelineParams) -> Self {
        let detector = GridDetector::new(params.grid.clone());
        let solver = Solver::new(params.solver.clone());
        Self {
            params,
            detector,
            solver,
        }
    }

    #[inline]
    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    #[inline]
    pub fn detector(&self) -> &GridDetector {
        &self.detector
    }

    /// Detect the grid lines of the cropped puzzle image.
    pub fn detect_lines(&self, image: &RgbImageView<'_>) -> Result<GridLines, PipelineError> {
        Ok(self.detector.detect(image)?)
    }

    /// Sample cell colors for a detected grid.
    pub fn sample_colors(
        &self,
        image: &RgbImageView<'_>,
        lines: &GridLines,
    ) -> Result<ColorMatrix, PipelineError> {
        Ok(sample_cell_colors(image, lines.size())?)
    }

    /// Build the cell graph and its regions from sampled colors.
    pub fn build_board(&self, colors: &ColorMatrix) -> Board {
        let board = Board::build(colors, &self.params.grouping);
        board.log_regions();
        board
    }

    /// Solve a board built by [`PuzzleSolver::build_board`].
    pub fn solve_board(&self, board: &mut Board) -> Result<Solution, PipelineError> {
        Ok(self.solver.solve_board(board)?)
    }

    /// Solve from an already sampled color matrix.
    pub fn solve_colors(&self, colors: &ColorMatrix) -> Result<(Board, Solution), PipelineError> {
        let mut board = self.build_board(colors);
        let solution = self.solve_board(&mut board)?;
        Ok((board, solution))
    }

    /// Run every stage on a screenshot cropped to the puzzle border.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn solve(&self, image: &RgbImageView<'_>) -> Result<PuzzleResult, PipelineError> {
        let lines = self.detect_lines(image)?;
        let colors = self.sample_colors(image, &lines)?;
        let (board, solution) = self.solve_colors(&colors)?;
        info!("solved {0}x{0} puzzle", board.size());
        Ok(PuzzleResult {
            lines,
            colors,
            board,
            solution,
        })
    }
}
