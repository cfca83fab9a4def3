/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// An immutable grid of straight 8-bit RGBA pixels, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width:  usize,
    height: usize,
    pixels: Vec<[u8; 4]>
}

impl RgbaImage {
    /// Create an image from row-major pixels.
    ///
    /// Returns `None` if `pixels.len()` does not equal `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Option<RgbaImage> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(RgbaImage {
            width,
            height,
            pixels
        })
    }

    /// Create an image where every pixel has the same color
    #[cfg(test)]
    pub(crate) fn filled(width: usize, height: usize, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage {
            width,
            height,
            pixels: vec![pixel; width * height]
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the pixel at column `x`, row `y`
    ///
    /// Returns `None` if `(x, y)` lies outside the image
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Return row `y` as a slice of `width` pixels
    pub fn row(&self, y: usize) -> &[[u8; 4]] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate over rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 4]]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}
