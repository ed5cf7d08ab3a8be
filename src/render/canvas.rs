//! Canvas - the fixed-size RGBA raster every generator draws into.

use crate::error::{HufferError, Result};
use crate::types::Colour;

/// A fixed-size RGBA pixel grid.
///
/// Writes never blend: the last write to a pixel wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,

    /// Pixels, row-major: pixels[y * width + x].
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    ///
    /// Fails with `InvalidDimension` if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HufferError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::TRANSPARENT; width as usize * height as usize],
        })
    }

    /// Create a transparent square canvas.
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether (x, y) lies on the canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel.
    ///
    /// Writes outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Fill the inclusive rectangle (x0, y0)..=(x1, y1).
    ///
    /// Corners may be given in either order and are clamped to the canvas.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let (left, right) = (x0.min(x1).max(0), x0.max(x1).min(self.width as i32 - 1));
        let (top, bottom) = (y0.min(y1).max(0), y0.max(y1).min(self.height as i32 - 1));

        for y in top..=bottom {
            for x in left..=right {
                self.set_pixel(x, y, colour);
            }
        }
    }

    /// Get a reference to the pixels (row-major).
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate over all pixels with their positions.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (i32, i32, Colour)> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i % width) as i32, (i / width) as i32, c))
    }

    /// Number of pixels with any opacity.
    pub fn painted_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Check if nothing has been drawn.
    pub fn is_blank(&self) -> bool {
        self.painted_pixel_count() == 0
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }
}
