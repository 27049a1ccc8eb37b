//! Raster - RGB output pixel buffer
//!
//! A `Raster` is the rendering target for quadtree output: an owned
//! width × height RGB buffer (3 bytes per pixel, row-major) plus the
//! rectangle-drawing primitives the renderer needs. All drawing is
//! clipped to the buffer, and a given draw sequence always produces a
//! byte-identical buffer.
//!
//! File encoding is not handled here; the buffer is handed to an external
//! writer (see quadpix-io).

use crate::error::{Error, Result};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Owned RGB pixel buffer, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Create a raster filled with a solid color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let npix = width as usize * height as usize;
        let mut data = Vec::with_capacity(npix * 3);
        for _ in 0..npix {
            data.extend_from_slice(&[fill.r, fill.g, fill.b]);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the pixel color at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Color::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set a single pixel, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Fill a rectangle with a solid color, clipped to the buffer.
    ///
    /// `(x, y)` is the top-left corner; `w × h` the extent. A rectangle
    /// fully outside the buffer is a no-op.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);
        for yy in y1..y2 {
            let row = yy as usize * self.width as usize;
            for xx in x1..x2 {
                let i = (row + xx as usize) * 3;
                self.data[i] = color.r;
                self.data[i + 1] = color.g;
                self.data[i + 2] = color.b;
            }
        }
    }

    /// Draw a rectangle outline of the given line width, drawn inward
    /// from the rectangle edge and clipped to the buffer.
    ///
    /// A `line_width` of zero is treated as 1. If the rectangle is too
    /// small for the requested width the interior simply fills in.
    pub fn draw_rect_outline(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        line_width: u32,
        color: Color,
    ) {
        if w == 0 || h == 0 {
            return;
        }
        let lw = line_width.max(1).min(w.max(h));
        let lw_x = lw.min(w);
        let lw_y = lw.min(h);
        // Top and bottom bands
        self.fill_rect(x, y, w, lw_y, color);
        self.fill_rect(x, y + h - lw_y, w, lw_y, color);
        // Left and right bands
        self.fill_rect(x, y, lw_x, h, color);
        self.fill_rect(x + w - lw_x, y, lw_x, h, color);
    }
}
