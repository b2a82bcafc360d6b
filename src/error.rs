//! Error types for wuline

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up the rasterizer or talking to the host.
///
/// Drawing itself never fails: a segment is either rasterized or dropped by
/// the clipper.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("scene file error: {0}")]
    Json(#[from] serde_json::Error),

    /// SDL reports its failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    /// The buffer must be at least 2x2 so the clip rectangle is non-empty.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::Sdl(msg)
    }
}
