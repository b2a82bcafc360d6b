//! Xiaolin Wu's antialiased line
//!
//! The segment is walked one unit at a time along its dominant axis. Each
//! step covers two pixels across the minor axis, weighted by how far the true
//! line sits from each pixel. The two end columns are further attenuated by
//! how much of the column the segment actually spans.

use super::Segment;

/// Round half up: `floor(v + 0.5)`
#[inline]
pub fn round(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Fractional part in `[0, 1)`, also for negative `v`
#[inline]
pub fn fpart(v: f64) -> f64 {
    v - v.floor()
}

#[inline]
pub fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}

/// Rasterize `segment`, calling `plot(x, y, coverage)` for every touched pixel.
///
/// The segment is expected to be clipped already. Emits two pixels per
/// endpoint column and two per interior column; coordinates are in buffer
/// space regardless of the internal steep transpose.
pub fn rasterize<F>(segment: Segment, mut plot: F)
where
    F: FnMut(i32, i32, f64),
{
    let Segment { x0, y0, x1, y1 } = segment;

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (x0, y0, x1, y1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    let (x0, y0, x1, y1) = if x0 > x1 {
        (x1, y1, x0, y0)
    } else {
        (x0, y0, x1, y1)
    };

    let dx = x1 - x0;
    let dy = y1 - y0;
    // dx is only zero for a single point
    let gradient = if dx == 0.0 { 0.0 } else { dy / dx };

    // Split `weight` between the two pixels straddling `intery` in column `x`
    let mut column = |x: i32, intery: f64, weight: f64| {
        let y = intery.floor() as i32;
        let f = fpart(intery);
        if steep {
            plot(y, x, (1.0 - f) * weight);
            plot(y + 1, x, f * weight);
        } else {
            plot(x, y, (1.0 - f) * weight);
            plot(x, y + 1, f * weight);
        }
    };

    let xend0 = round(x0);
    let yend0 = y0 + gradient * (xend0 as f64 - x0);
    column(xend0, yend0, rfpart(x0 + 0.5));

    let xend1 = round(x1);
    let yend1 = y1 + gradient * (xend1 as f64 - x1);
    column(xend1, yend1, fpart(x1 + 0.5));

    let mut intery = yend0 + gradient;
    for x in (xend0 + 1)..xend1 {
        column(x, intery, 1.0);
        intery += gradient;
    }
}
