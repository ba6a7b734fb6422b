//! Synthetic puzzle screenshots for unit tests.

use queens_core::Rgb;

pub(crate) struct SyntheticBoard {
    pub size: usize,
    pub cell_px: usize,
    pub thickness: usize,
    pub colors: Vec<Rgb>,
}

impl SyntheticBoard {
    pub fn uniform(size: usize, cell_px: usize, thickness: usize, color: Rgb) -> Self {
        Self {
            size,
            cell_px,
            thickness,
            colors: vec![color; size * size],
        }
    }

    pub fn side(&self) -> usize {
        self.size * self.cell_px
    }

    fn line_start(&self, k: usize) -> usize {
        let start = (k * self.cell_px).saturating_sub(self.thickness / 2);
        start.min(self.side() - self.thickness)
    }

    /// Pixel coordinate the detector should report for line `k`.
    pub fn line_center(&self, k: usize) -> usize {
        self.line_start(k) + self.thickness / 2
    }
}

/// Render to an interleaved RGB buffer: `(width, height, data)`.
pub(crate) fn render_board(board: &SyntheticBoard) -> (usize, usize, Vec<u8>) {
    let side = board.side();
    let mut data = vec![0u8; side * side * 3];
    for y in 0..side {
        for x in 0..side {
            let color = board.colors[(y / board.cell_px) * board.size + x / board.cell_px];
            let i = (y * side + x) * 3;
            data[i..i + 3].copy_from_slice(&color.0);
        }
    }
    if board.thickness == 0 {
        return (side, side, data);
    }
    for k in 0..=board.size {
        let start = board.line_start(k);
        for t in start..start + board.thickness {
            for s in 0..side {
                for (x, y) in [(s, t), (t, s)] {
                    let i = (y * side + x) * 3;
                    data[i..i + 3].copy_from_slice(&[0, 0, 0]);
                }
            }
        }
    }
    (side, side, data)
}
