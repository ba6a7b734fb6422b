use super::profile::{binarize, column_profile, find_line_peaks, row_profile};
use super::{GridDetectError, GridLines, ProfileAxis};
use crate::GridDetectorParams;
use queens_core::{GrayImage, GrayImageView, RgbImageView};

use log::{debug, info, warn};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Projection-based grid-line detector.
///
/// Expects an image already cropped to the puzzle's outer border.
pub struct GridDetector {
    params: GridDetectorParams,
}

impl GridDetector {
    pub fn new(params: GridDetectorParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &GridDetectorParams {
        &self.params
    }

    /// Binarized image the projections are computed from.
    pub fn binary_image(&self, image: &RgbImageView<'_>) -> GrayImage {
        let gray = image.to_gray();
        binarize(&gray.view(), self.params.dark_threshold)
    }

    /// Detect grid lines in an RGB screenshot.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn detect(&self, image: &RgbImageView<'_>) -> Result<GridLines, GridDetectError> {
        let gray = image.to_gray();
        self.detect_gray(&gray.view())
    }

    /// Detect grid lines in an already grayscale image.
    pub fn detect_gray(&self, gray: &GrayImageView<'_>) -> Result<GridLines, GridDetectError> {
        let binary = binarize(gray, self.params.dark_threshold);
        let view = binary.view();

        let horizontal = find_line_peaks(&row_profile(&view), view.height, &self.params);
        let vertical = find_line_peaks(&column_profile(&view), view.width, &self.params);
        debug!("horizontal lines at y={horizontal:?}");
        debug!("vertical lines at x={vertical:?}");

        let lines = self.validate(GridLines {
            horizontal,
            vertical,
        })?;
        info!("detected {0}x{0} grid", lines.size());
        Ok(lines)
    }

    fn validate(&self, lines: GridLines) -> Result<GridLines, GridDetectError> {
        if lines.horizontal.is_empty() {
            return Err(GridDetectError::GridNotDetected {
                axis: ProfileAxis::Horizontal,
            });
        }
        if lines.vertical.is_empty() {
            return Err(GridDetectError::GridNotDetected {
                axis: ProfileAxis::Vertical,
            });
        }
        if lines.horizontal.len() != lines.vertical.len() {
            warn!(
                "rejecting grid: {} horizontal vs {} vertical lines",
                lines.horizontal.len(),
                lines.vertical.len()
            );
            return Err(GridDetectError::LineCountMismatch {
                horizontal: lines.horizontal.len(),
                vertical: lines.vertical.len(),
            });
        }
        if lines.horizontal.len() < self.params.min_lines {
            return Err(GridDetectError::InsufficientLines {
                found: lines.horizontal.len(),
                min: self.params.min_lines,
            });
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::{render_board, SyntheticBoard};
    use queens_core::Rgb;

    fn detect(board: &SyntheticBoard) -> Result<GridLines, GridDetectError> {
        let _ = env_logger::builder().is_test(true).try_init();
        let (w, h, data) = render_board(board);
        let view = RgbImageView::new(w, h, &data).expect("view");
        GridDetector::new(GridDetectorParams::default()).detect(&view)
    }

    #[test]
    fn detects_five_by_five_grid() {
        let board = SyntheticBoard::uniform(5, 40, 3, Rgb::new(200, 220, 240));
        let lines = detect(&board).expect("grid");
        assert_eq!(lines.size(), 5);
        assert_eq!(lines.horizontal, lines.vertical);
        assert_eq!(lines.horizontal.len(), 6);
        for (k, &y) in lines.horizontal.iter().enumerate() {
            let expected = board.line_center(k);
            assert!(y.abs_diff(expected) <= 1, "line {k}: {y} vs {expected}");
        }
    }

    #[test]
    fn blank_image_is_not_a_grid() {
        let board = SyntheticBoard::uniform(5, 40, 0, Rgb::new(255, 255, 255));
        assert_eq!(
            detect(&board),
            Err(GridDetectError::GridNotDetected {
                axis: ProfileAxis::Horizontal
            })
        );
    }

    #[test]
    fn three_by_three_grid_is_rejected_as_noise() {
        let board = SyntheticBoard::uniform(3, 40, 3, Rgb::new(200, 220, 240));
        assert_eq!(
            detect(&board),
            Err(GridDetectError::InsufficientLines { found: 4, min: 5 })
        );
    }

    #[test]
    fn mismatched_axes_are_reported_with_counts() {
        let board = SyntheticBoard::uniform(5, 40, 3, Rgb::new(200, 220, 240));
        let (w, h, mut data) = render_board(&board);
        // Paint an extra full-width horizontal line through the middle of row 2.
        let y0 = board.line_center(2) + 20;
        for y in y0..y0 + 3 {
            for x in 0..w {
                let i = (y * w + x) * 3;
                data[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
        let view = RgbImageView::new(w, h, &data).expect("view");
        let err = GridDetector::new(GridDetectorParams::default())
            .detect(&view)
            .unwrap_err();
        assert_eq!(
            err,
            GridDetectError::LineCountMismatch {
                horizontal: 7,
                vertical: 6
            }
        );
    }

    #[test]
    fn binary_image_marks_only_lines() {
        let board = SyntheticBoard::uniform(4, 30, 2, Rgb::new(240, 240, 240));
        let (w, h, data) = render_board(&board);
        let view = RgbImageView::new(w, h, &data).expect("view");
        let bin = GridDetector::new(GridDetectorParams::default()).binary_image(&view);
        let center = 15 * w + 15;
        assert_eq!(bin.data[center], 0);
        assert_eq!(bin.data[0], 255);
    }
}
