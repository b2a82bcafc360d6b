//! Outcode line clipping
//!
//! Cohen-Sutherland style: each endpoint gets a 4-bit code naming the sides
//! of the clip rectangle it lies beyond. Endpoints are pulled onto one
//! violated edge at a time until both codes are empty, or until both share a
//! side and the segment cannot be visible.

use std::ops::BitOr;

use super::Segment;

/// Corrections should settle in at most two per endpoint. The cap only
/// matters for rounding ping-pong at corners and for non-finite input.
const MAX_ITERATIONS: u32 = 16;

/// Sides of the clip rectangle a point lies outside of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    /// Beyond `max_y` (further down the screen)
    pub const BOTTOM: Self = Self(4);
    /// Above `min_y`
    pub const TOP: Self = Self(8);

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, side: Self) -> bool {
        self.0 & side.0 == side.0
    }

    /// True when both codes are outside on a common side
    #[inline]
    pub fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Axis-aligned clip rectangle with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClipRect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Drawable area of a `width` x `height` buffer.
    ///
    /// Inset by two pixels on the right and bottom: every point the
    /// rasterizer plots also touches its right or lower neighbour.
    pub fn for_buffer(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64 - 2.0, height as f64 - 2.0)
    }

    pub fn outcode(&self, x: f64, y: f64) -> Outcode {
        let mut code = Outcode::INSIDE;
        if x < self.min_x {
            code = code | Outcode::LEFT;
        } else if x > self.max_x {
            code = code | Outcode::RIGHT;
        }
        if y < self.min_y {
            code = code | Outcode::TOP;
        } else if y > self.max_y {
            code = code | Outcode::BOTTOM;
        }
        code
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.outcode(x, y).is_inside()
    }

    /// Slide (x, y) along direction (dx, dy) onto the first violated edge,
    /// checked left, right, bottom, top.
    ///
    /// An edge parallel to the direction is skipped; if no edge applies the
    /// point comes back unchanged.
    fn move_to_edge(&self, code: Outcode, x: f64, y: f64, dx: f64, dy: f64) -> (f64, f64) {
        if code.contains(Outcode::LEFT) && dx != 0.0 {
            (self.min_x, y + (self.min_x - x) * dy / dx)
        } else if code.contains(Outcode::RIGHT) && dx != 0.0 {
            (self.max_x, y + (self.max_x - x) * dy / dx)
        } else if code.contains(Outcode::BOTTOM) && dy != 0.0 {
            (x + (self.max_y - y) * dx / dy, self.max_y)
        } else if code.contains(Outcode::TOP) && dy != 0.0 {
            (x + (self.min_y - y) * dx / dy, self.min_y)
        } else {
            (x, y)
        }
    }
}

/// Clip `segment` to `rect`.
///
/// Returns the visible part, or `None` when the segment misses the rectangle.
/// A segment already inside comes back unchanged.
pub fn clip(rect: &ClipRect, segment: Segment) -> Option<Segment> {
    let Segment {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = segment;

    let mut code0 = rect.outcode(x0, y0);
    let mut code1 = rect.outcode(x1, y1);

    for _ in 0..MAX_ITERATIONS {
        if (code0 | code1).is_inside() {
            return Some(Segment::new(x0, y0, x1, y1));
        }
        if code0.shares_side(code1) {
            return None;
        }

        let dx = x1 - x0;
        let dy = y1 - y0;

        if !code0.is_inside() {
            (x0, y0) = rect.move_to_edge(code0, x0, y0, dx, dy);
            code0 = rect.outcode(x0, y0);
        } else {
            (x1, y1) = rect.move_to_edge(code1, x1, y1, dx, dy);
            code1 = rect.outcode(x1, y1);
        }
    }

    None
}
