use std::io;
use std::result;

use ndarray::ShapeError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "image")]
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[cfg(feature = "image")]
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("unrecognized filetype: {0}")]
    UnrecognizedFormat(String),

    #[error("tile of size {size} at ({x}, {y}) exceeds the {width}x{height} source")]
    OutOfBounds {
        x: usize,
        y: usize,
        size: usize,
        width: usize,
        height: usize,
    },

    #[error("tile {index} has size {found}, expected {expected}")]
    TileSizeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
