//! Clipped, antialiased line drawing into a [`PixelBuffer`]
//!
//! `draw_line` runs two stages: [`clip::clip`] trims the segment to the
//! drawable rectangle (or drops it), then [`wu::rasterize`] blends the
//! coverage of every touched pixel into the buffer.

pub mod clip;
pub mod wu;

pub use clip::{ClipRect, Outcode};

use tracing::debug;

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::error::{Error, Result};

/// A line segment between two real-valued points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same segment with the endpoints swapped
    pub fn reversed(self) -> Self {
        Self::new(self.x1, self.y1, self.x0, self.y0)
    }
}

/// Owns the frame buffer and draws clipped, antialiased lines into it
#[derive(Debug, Clone)]
pub struct LineRasterizer {
    buffer: PixelBuffer,
    clip: ClipRect,
}

impl LineRasterizer {
    /// Create a rasterizer with a black `width` x `height` buffer
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_buffer(PixelBuffer::with_size(width, height))
    }

    /// Draw into an existing buffer. Both dimensions must be at least 2.
    pub fn from_buffer(buffer: PixelBuffer) -> Result<Self> {
        let (width, height) = (buffer.width(), buffer.height());
        if width < 2 || height < 2 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let clip = ClipRect::for_buffer(width, height);
        debug!(width, height, ?clip, "line rasterizer ready");
        Ok(Self { buffer, clip })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn clip_rect(&self) -> &ClipRect {
        &self.clip
    }

    /// Frame contents, for presentation
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Fill the whole buffer with `color`
    pub fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    /// Draw an antialiased line from (x0, y0) to (x1, y1).
    ///
    /// Parts outside the clip rectangle are cut off; a line that misses it
    /// entirely draws nothing. Coordinates must be finite.
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        self.draw_segment(Segment::new(x0, y0, x1, y1), color);
    }

    pub fn draw_segment(&mut self, segment: Segment, color: Color) {
        let Some(visible) = clip::clip(&self.clip, segment) else {
            return;
        };
        let buffer = &mut self.buffer;
        wu::rasterize(visible, |x, y, coverage| buffer.plot(x, y, coverage, color));
    }

    /// Draw the closed outline through `points`, last point joined to the first
    pub fn draw_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if points.len() < 2 {
            return;
        }
        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            self.draw_line(x0, y0, x1, y1, color);
        }
    }
}
