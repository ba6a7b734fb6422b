//! Core types and utilities for Queens puzzle extraction and solving.
//!
//! This crate is intentionally small. It does *not* depend on any image codec;
//! the facade crate converts decoded images into the lightweight views here.

mod color;
mod coords;
mod image;
mod matrix;

pub use color::Rgb;
pub use coords::CellCoords;
pub use image::{GrayImage, GrayImageView, ImageViewError, RgbImageView};
pub use matrix::{ColorMatrix, ColorMatrixError};
