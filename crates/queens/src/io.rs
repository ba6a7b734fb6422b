//! JSON configuration and report helpers.

use crate::board::{Board, Solution};
use crate::core::{CellCoords, Rgb};
use crate::grid::GridLines;
use crate::{PipelineError, PipelineParams};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum QueensIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Configuration for one solve run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueensConfig {
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    /// Where to write the binarized image used for line detection.
    #[serde(default)]
    pub binary_debug_path: Option<String>,
    #[serde(default)]
    pub params: PipelineParams,
}

impl QueensConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, QueensIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), QueensIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("queens_report.json"))
    }

    pub fn binary_debug_path(&self) -> Option<PathBuf> {
        self.binary_debug_path.as_ref().map(PathBuf::from)
    }
}

/// Wall-clock time spent per stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimingsMs {
    pub load_image: u64,
    pub detect_lines: u64,
    pub sample_colors: u64,
    pub group_regions: u64,
    pub solve: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: usize,
    pub color: Rgb,
    pub size: usize,
    pub members: Vec<CellCoords>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementReport {
    pub region: usize,
    pub cell: CellCoords,
    pub label: String,
}

/// Report written after a run, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub image_path: String,
    pub config_path: Option<String>,
    pub params: PipelineParams,
    pub grid_size: Option<usize>,
    pub lines: Option<GridLines>,
    pub regions: Vec<RegionSummary>,
    pub solution: Option<Vec<PlacementReport>>,
    pub error_kind: Option<String>,
    pub error: Option<String>,
    pub timings_ms: TimingsMs,
}

impl SolveReport {
    pub fn new(cfg: &QueensConfig, config_path: Option<&Path>) -> Self {
        Self {
            image_path: cfg.image_path.clone(),
            config_path: config_path.map(|p| p.display().to_string()),
            params: cfg.params.clone(),
            grid_size: None,
            lines: None,
            regions: Vec::new(),
            solution: None,
            error_kind: None,
            error: None,
            timings_ms: TimingsMs::default(),
        }
    }

    pub fn set_lines(&mut self, lines: &GridLines) {
        self.grid_size = Some(lines.size());
        self.lines = Some(lines.clone());
    }

    pub fn set_board(&mut self, board: &Board) {
        self.grid_size = Some(board.size());
        self.regions = board
            .regions()
            .iter()
            .map(|r| RegionSummary {
                id: r.id.0,
                color: r.color,
                size: r.len(),
                members: r.members.clone(),
            })
            .collect();
    }

    pub fn set_solution(&mut self, solution: &Solution) {
        self.solution = Some(
            solution
                .assignments
                .iter()
                .map(|a| PlacementReport {
                    region: a.region.0,
                    cell: a.cell,
                    label: a.cell.label(),
                })
                .collect(),
        );
        self.error_kind = None;
        self.error = None;
    }

    pub fn set_error(&mut self, err: &PipelineError) {
        self.solution = None;
        self.error_kind = Some(err.kind().to_string());
        self.error = Some(err.to_string());
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), QueensIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
