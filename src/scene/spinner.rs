//! Rotating rectangle outline

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::raster::LineRasterizer;

/// A rectangle centred on (x, y), spinning at `spin` radians per second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spinner {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub angle: f32,
    pub spin: f32,
}

impl Spinner {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            angle: 0.0,
            spin: 0.0,
        }
    }

    pub fn with_rotation(mut self, angle: f32, spin: f32) -> Self {
        self.angle = angle;
        self.spin = spin;
        self
    }

    pub fn update(&mut self, dt: f32) {
        self.angle += self.spin * dt;
    }

    /// Corners in screen space: top-left, top-right, bottom-right,
    /// bottom-left before rotation
    pub fn corners(&self) -> [(f32, f32); 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        let (sin, cos) = self.angle.sin_cos();
        let rotate = |px: f32, py: f32| (self.x + cos * px - sin * py, self.y + sin * px + cos * py);
        [
            rotate(-hw, -hh),
            rotate(hw, -hh),
            rotate(hw, hh),
            rotate(-hw, hh),
        ]
    }

    /// Draw the four edges
    pub fn render(&self, raster: &mut LineRasterizer) {
        let corners = self.corners().map(|(x, y)| (x as f64, y as f64));
        raster.draw_polygon(&corners, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_unrotated_corners() {
        let spinner = Spinner::new(10.0, 20.0, 4.0, 2.0, Color::WHITE);
        assert_eq!(
            spinner.corners(),
            [(8.0, 19.0), (12.0, 19.0), (12.0, 21.0), (8.0, 21.0)]
        );
    }

    #[test]
    fn test_quarter_turn_swaps_extent() {
        let spinner = Spinner::new(0.0, 0.0, 4.0, 2.0, Color::WHITE).with_rotation(FRAC_PI_2, 0.0);
        let [(x0, y0), (x1, y1), _, _] = spinner.corners();
        // (-2, -1) rotates to (1, -2), (2, -1) to (1, 2)
        assert_abs_diff_eq!(x0, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(y0, -2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(x1, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(y1, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_update_advances_angle() {
        let mut spinner = Spinner::new(0.0, 0.0, 1.0, 1.0, Color::WHITE).with_rotation(1.0, 2.0);
        spinner.update(0.25);
        assert_abs_diff_eq!(spinner.angle, 1.5);
    }

    #[test]
    fn test_render_draws_outline() {
        let mut raster = LineRasterizer::new(32, 32).unwrap();
        let spinner = Spinner::new(15.0, 15.0, 10.0, 10.0, Color::new(0x00FF00));
        spinner.render(&mut raster);
        let buffer = raster.buffer();
        assert_eq!(buffer.get_pixel(15, 10), Some(Color::new(0x00FF00)));
        assert_eq!(buffer.get_pixel(20, 15), Some(Color::new(0x00FF00)));
        assert_eq!(buffer.get_pixel(15, 15), Some(Color::BLACK));
    }
}
