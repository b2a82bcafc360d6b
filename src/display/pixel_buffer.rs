use crate::color::Color;
use crate::error::{Error, Result};

// ============================================================================
// PixelBuffer
// ============================================================================

/// Packed RGB pixel buffer for software rendering
///
/// One `u32` per pixel in `0x00RRGGBB` form, row-major, origin top-left.
/// The native-endian bytes of this layout match SDL's `RGB888` texture format,
/// so frames upload without conversion.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a black buffer of the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Adopt a host-provided pixel array. Its length must be `width * height`.
    pub fn from_vec(pixels: Vec<u32>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Hand the pixel array back to the host
    pub fn into_inner(self) -> Vec<u32> {
        self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of pixel (x, y); callers check bounds first
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Fill every pixel with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.packed());
    }

    /// Read a pixel from the buffer (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(Color::new(self.pixels[idx]))
        } else {
            None
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color.packed();
        }
    }

    /// Blend `color` into pixel (x, y) weighted by `coverage` in `[0, 1]`.
    ///
    /// The line rasterizer keeps its footprint inside the buffer through the
    /// clip inset. A cell that still falls outside (the half-pixel overhang at
    /// the top and left edges) is dropped rather than wrapped into another row.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, coverage: f64, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            let dst = Color::new(self.pixels[idx]);
            self.pixels[idx] = Color::blend(color, dst, coverage).packed();
        }
    }

    /// Packed pixels, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: u32 has no padding and u8 has alignment 1, so the same
        // allocation viewed as bytes is valid for 4x the length.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Count of pixels that differ from black
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }
}
