use serde::{Deserialize, Serialize};

/// Parameters of the projection-based grid-line detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDetectorParams {
    /// Luma at or below this value counts as grid-line ink.
    pub dark_threshold: u8,

    /// Fraction of the profile maximum an index must exceed to be a line candidate.
    pub peak_fraction: f32,

    /// Candidates closer than `axis_len / cluster_gap_divisor` merge into one line.
    ///
    /// Absorbs line thickness and anti-aliasing. Unlike plain
    /// `axis_len / cluster_gap_divisor`, which is 0 below 50 px at the default,
    /// the merge gap is floored at 1 px so adjacent pixels of one line still merge.
    pub cluster_gap_divisor: usize,

    /// Minimal number of lines per axis; fewer is treated as noise.
    ///
    /// The default of 5 lines is a 4×4 board.
    pub min_lines: usize,
}

impl Default for GridDetectorParams {
    fn default() -> Self {
        Self {
            dark_threshold: 50,
            peak_fraction: 0.5,
            cluster_gap_divisor: 50,
            min_lines: 5,
        }
    }
}

impl GridDetectorParams {
    /// Merge gap in pixels for an axis of the given length.
    #[inline]
    pub fn cluster_gap(&self, axis_len: usize) -> usize {
        (axis_len / self.cluster_gap_divisor.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_gap_scales_with_axis() {
        let p = GridDetectorParams::default();
        assert_eq!(p.cluster_gap(500), 10);
        assert_eq!(p.cluster_gap(120), 2);
        assert_eq!(p.cluster_gap(20), 1);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let p: GridDetectorParams =
            serde_json::from_str(r#"{ "dark_threshold": 80 }"#).expect("params");
        assert_eq!(p.dark_threshold, 80);
        assert_eq!(p.min_lines, 5);
        assert_eq!(p.cluster_gap_divisor, 50);
    }
}
