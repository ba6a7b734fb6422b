//! High-level facade crate for the `queens-*` workspace.
//!
//! This crate provides:
//! - re-exports of the stage crates,
//! - an end-to-end [`PuzzleSolver`] from screenshot pixels to a [`Solution`](board::Solution),
//! - JSON config and report helpers ([`io`]),
//! - (feature `image`) helpers that load and convert `image::RgbImage`.
//!
//! ## Quickstart
//!
//! ```no_run
//! use queens::detect;
//! use queens::PipelineParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = detect::load_rgb("puzzle.png")?;
//! let result = detect::solve_image(&img, &PipelineParams::default())?;
//! print!("{}", result.solution);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `queens::core`: colors, coordinates, image views, the color matrix.
//! - `queens::grid`: grid-line detection and cell color sampling.
//! - `queens::board`: cell graph, region grouping, backtracking solver.
//! - `queens::detect` (feature `image`): end-to-end helpers from `image::RgbImage`.
//!
//! Screen capture, locating the puzzle on screen and clicking the answer are
//! left to the caller; the input here is an image already cropped to the
//! puzzle's outer border.

pub use queens_board as board;
pub use queens_core as core;
pub use queens_grid as grid;

pub use queens_board::{GroupingParams, Solution, SolveError, SolverParams};
pub use queens_core::{CellCoords, ColorMatrix, Rgb};
pub use queens_grid::{GridDetectError, GridDetectorParams, GridLines};

pub mod io;
mod pipeline;

pub use pipeline::{PipelineError, PipelineParams, PuzzleResult, PuzzleSolver};

#[cfg(feature = "image")]
pub mod detect;
