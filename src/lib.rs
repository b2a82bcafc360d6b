//! Antialiased, clipped line rasterizer
//!
//! [`LineRasterizer`] owns a packed-RGB frame buffer and draws lines with
//! real-valued endpoints into it: outcode clipping against the drawable
//! rectangle, then Xiaolin Wu's algorithm with integer coverage blending.
//! The rest of the crate is the spinning-rectangles demo built on top.

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod raster;
pub mod scene;
pub mod util;

pub use color::Color;
pub use display::PixelBuffer;
pub use error::{Error, Result};
pub use raster::{LineRasterizer, Segment};
