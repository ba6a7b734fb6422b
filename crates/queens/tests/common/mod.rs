#![allow(dead_code)]

use image::{Rgb, RgbImage};

pub const PALETTE: [[u8; 3]; 5] = [
    [230, 150, 120],
    [150, 190, 240],
    [180, 220, 150],
    [240, 220, 130],
    [200, 160, 220],
];

pub const FIVE_BY_FIVE: [&str; 5] = ["AABBB", "ACCBB", "DCCCE", "DDCEE", "DDEEE"];

/// Render a letter layout as a screenshot cropped to the outer border:
/// `cell_px` square cells separated by black lines `thickness` pixels wide.
pub fn render_layout(layout: &[&str], cell_px: u32, thickness: u32) -> RgbImage {
    let size = layout.len() as u32;
    let side = size * cell_px;
    let mut img = RgbImage::from_fn(side, side, |x, y| {
        let letter = layout[(y / cell_px) as usize].as_bytes()[(x / cell_px) as usize];
        Rgb(PALETTE[(letter - b'A') as usize])
    });
    for k in 0..=size {
        let start = (k * cell_px)
            .saturating_sub(thickness / 2)
            .min(side - thickness);
        for t in start..start + thickness {
            for s in 0..side {
                img.put_pixel(s, t, Rgb([0, 0, 0]));
                img.put_pixel(t, s, Rgb([0, 0, 0]));
            }
        }
    }
    img
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
