use serde::{Deserialize, Serialize};

/// Region grouping settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingParams {
    /// Maximal squared RGB distance between two adjacent cells of one region.
    ///
    /// 1000 is roughly 18 per channel. Empirically tuned on real captures.
    pub similarity_threshold: u32,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            similarity_threshold: 1000,
        }
    }
}

/// Backtracking search settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Abort after this many tentative placements. `None` searches exhaustively.
    pub max_nodes: Option<u64>,
}
