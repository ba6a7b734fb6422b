//! Intensity projection and peak clustering.

use crate::GridDetectorParams;
use queens_core::{GrayImage, GrayImageView};

/// Inverse binary threshold: pixels at or below `dark_threshold` become 255, the rest 0.
pub fn binarize(gray: &GrayImageView<'_>, dark_threshold: u8) -> GrayImage {
    let data = gray
        .data
        .iter()
        .map(|&v| if v <= dark_threshold { 255 } else { 0 })
        .collect();
    GrayImage {
        width: gray.width,
        height: gray.height,
        data,
    }
}

/// Sum of intensities along each row (`height` entries).
pub fn row_profile(img: &GrayImageView<'_>) -> Vec<u64> {
    if img.width == 0 {
        return vec![0; img.height];
    }
    img.rows()
        .map(|row| row.iter().map(|&v| v as u64).sum())
        .collect()
}

/// Sum of intensities along each column (`width` entries).
pub fn column_profile(img: &GrayImageView<'_>) -> Vec<u64> {
    let mut sums = vec![0u64; img.width];
    if img.width == 0 {
        return sums;
    }
    for row in img.rows() {
        for (acc, &v) in sums.iter_mut().zip(row) {
            *acc += v as u64;
        }
    }
    sums
}

/// Turn a 1-D intensity profile into line coordinates.
///
/// Indices strictly above `peak_fraction * max` survive; consecutive survivors
/// at most `cluster_gap(axis_len)` apart form one cluster, reported as the
/// rounded mean of its indices. Returns an empty vector when nothing survives.
pub fn find_line_peaks(profile: &[u64], axis_len: usize, params: &GridDetectorParams) -> Vec<usize> {
    let Some(&max) = profile.iter().max() else {
        return Vec::new();
    };
    let threshold = max as f64 * params.peak_fraction as f64;
    let candidates = profile
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v as f64 > threshold)
        .map(|(i, _)| i);

    let gap = params.cluster_gap(axis_len);
    let mut lines = Vec::new();
    let mut cluster: Vec<usize> = Vec::new();
    for idx in candidates {
        if let Some(&last) = cluster.last() {
            if idx - last > gap {
                lines.push(cluster_center(&cluster));
                cluster.clear();
            }
        }
        cluster.push(idx);
    }
    if !cluster.is_empty() {
        lines.push(cluster_center(&cluster));
    }
    lines
}

fn cluster_center(cluster: &[usize]) -> usize {
    let sum: usize = cluster.iter().sum();
    (sum as f64 / cluster.len() as f64).round() as usize
}
