use crate::core::{GrayImage, RgbImageView};
use crate::io::QueensIoError;
use crate::{PipelineError, PipelineParams, PuzzleResult, PuzzleSolver};

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::ImageReader;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Borrow an `image::RgbImage` as a `queens-core` view.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Decode any supported image file into RGB8.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<::image::RgbImage, QueensIoError> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

/// Run the full pipeline on a decoded screenshot.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn solve_image(
    img: &::image::RgbImage,
    params: &PipelineParams,
) -> Result<PuzzleResult, PipelineError> {
    PuzzleSolver::new(params.clone()).solve(&rgb_view(img))
}

/// Convert a `queens-core` gray image into an `image::GrayImage`.
pub fn to_image_gray(gray: &GrayImage) -> Result<::image::GrayImage, QueensIoError> {
    ::image::GrayImage::from_raw(gray.width as u32, gray.height as u32, gray.data.clone())
        .ok_or_else(|| {
            QueensIoError::Image(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })
}

/// Write a gray image (e.g. the binarized line mask) to disk.
pub fn save_gray(path: impl AsRef<Path>, gray: &GrayImage) -> Result<(), QueensIoError> {
    to_image_gray(gray)?.save(path)?;
    Ok(())
}
