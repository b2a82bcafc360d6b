//! Packed 24-bit RGB colors and coverage blending
//!
//! Colors are `0x00RRGGBB` integers. Blending splits a color into two lanes,
//! red+blue (`0xFF00FF`) and green (`0x00FF00`), so both lanes are blended
//! with one multiply each and the 8 spare bits between channels absorb the
//! intermediate products.

use serde::{Deserialize, Serialize};

const RB_MASK: u32 = 0xFF00FF;
const G_MASK: u32 = 0x00FF00;
const RGB_MASK: u32 = 0xFFFFFF;

/// Brightening factor used when picking display colors
const BRIGHTER_FACTOR: f64 = 0.7;

/// Packed `0x00RRGGBB` color. The top byte is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xFFFFFF);

    /// Wrap a packed value, discarding the unused top byte
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed & RGB_MASK)
    }

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Composite `src` over `dst` with fractional `coverage` in `[0, 1]`.
    ///
    /// Coverage 1.0 quantizes to 256, not 255, so a fully covered pixel
    /// reproduces `src` bit for bit after the `>> 8`.
    #[inline]
    pub fn blend(src: Self, dst: Self, coverage: f64) -> Self {
        let c = quantize_coverage(coverage);
        let inv = 256 - c;
        let rb = (((src.0 & RB_MASK) * c + (dst.0 & RB_MASK) * inv) >> 8) & RB_MASK;
        let g = (((src.0 & G_MASK) * c + (dst.0 & G_MASK) * inv) >> 8) & G_MASK;
        Self(rb | g)
    }

    /// Lighter variant of this color, used for the demo palette.
    ///
    /// Each channel is divided by 0.7 and capped at 255. Dark channels are
    /// lifted to 3 first so they actually move; pure black becomes `(3, 3, 3)`.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - BRIGHTER_FACTOR)) as u32;
        let (r, g, b) = (self.r() as u32, self.g() as u32, self.b() as u32);
        if r == 0 && g == 0 && b == 0 {
            return Self::from_rgb(floor as u8, floor as u8, floor as u8);
        }

        let lift = |c: u32| -> u8 {
            let c = if c > 0 && c < floor { floor } else { c };
            ((c as f64 / BRIGHTER_FACTOR) as u32).min(255) as u8
        };
        Self::from_rgb(lift(r), lift(g), lift(b))
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::new(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Scale coverage to the blend weight: `floor(256 * coverage)` in `[0, 256]`
#[inline]
pub fn quantize_coverage(coverage: f64) -> u32 {
    // f64 -> u32 casts saturate, so negative or NaN coverage lands on 0
    ((256.0 * coverage) as u32).min(256)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_coverage_reproduces_source() {
        for src in [0xFFFFFF, 0x123456, 0xFF0000, 0x00FF00, 0x0000FF, 0x010101] {
            let out = Color::blend(Color::new(src), Color::BLACK, 1.0);
            assert_eq!(out.packed(), src);
        }
    }

    #[test]
    fn test_full_coverage_replaces_destination() {
        let out = Color::blend(Color::new(0x204060), Color::new(0xFFFFFF), 1.0);
        assert_eq!(out.packed(), 0x204060);
    }

    #[test]
    fn test_zero_coverage_keeps_destination() {
        let out = Color::blend(Color::WHITE, Color::new(0x336699), 0.0);
        assert_eq!(out.packed(), 0x336699);
    }

    #[test]
    fn test_half_coverage_truncates() {
        // (255 * 128) >> 8 = 127 in every channel
        let out = Color::blend(Color::WHITE, Color::BLACK, 0.5);
        assert_eq!(out.packed(), 0x7F7F7F);
    }

    #[test]
    fn test_lanes_do_not_bleed() {
        let out = Color::blend(Color::new(0xFF00FF), Color::new(0x00FF00), 0.5);
        assert_eq!(out.r(), 127);
        assert_eq!(out.g(), 127);
        assert_eq!(out.b(), 127);
    }

    #[test]
    fn test_quantize_coverage_levels() {
        assert_eq!(quantize_coverage(0.0), 0);
        assert_eq!(quantize_coverage(0.5), 128);
        assert_eq!(quantize_coverage(0.999), 255);
        assert_eq!(quantize_coverage(1.0), 256);
        assert_eq!(quantize_coverage(-0.25), 0);
        assert_eq!(quantize_coverage(f64::NAN), 0);
    }

    #[test]
    fn test_new_masks_top_byte() {
        assert_eq!(Color::new(0xFF123456).packed(), 0x123456);
    }

    #[test]
    fn test_channel_accessors() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_brighter() {
        assert_eq!(Color::BLACK.brighter(), Color::from_rgb(3, 3, 3));
        assert_eq!(Color::WHITE.brighter(), Color::WHITE);
        // 100 / 0.7 = 142.86; 1 is lifted to 3 first, 3 / 0.7 = 4.28
        assert_eq!(Color::from_rgb(100, 1, 0).brighter(), Color::from_rgb(142, 4, 0));
    }

    #[test]
    fn test_serde_as_packed_integer() {
        let json = serde_json::to_string(&Color::new(0x00FF80)).unwrap();
        assert_eq!(json, "65408");
        let back: Color = serde_json::from_str("4278255360").unwrap();
        assert_eq!(back.packed(), 0x00FF00);
    }
}
