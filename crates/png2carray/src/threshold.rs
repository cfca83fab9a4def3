/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Default threshold for every channel
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Per channel minimum values a pixel must reach to be set.
///
/// All channels are compared on the 0-255 scale.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Thresholds {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8,
    pub alpha: u8
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            red:   DEFAULT_THRESHOLD,
            green: DEFAULT_THRESHOLD,
            blue:  DEFAULT_THRESHOLD,
            alpha: DEFAULT_THRESHOLD
        }
    }
}

impl Thresholds {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Thresholds {
        Thresholds {
            red,
            green,
            blue,
            alpha
        }
    }

    /// Whether every channel of `pixel` meets or exceeds its threshold
    #[inline]
    pub const fn is_valid(&self, pixel: [u8; 4]) -> bool {
        let [r, g, b, a] = pixel;
        r >= self.red && g >= self.green && b >= self.blue && a >= self.alpha
    }

    /// The bit emitted for `pixel`, `is_valid` flipped when `invert` is set
    #[inline]
    pub const fn is_set(&self, pixel: [u8; 4], invert: bool) -> bool {
        self.is_valid(pixel) ^ invert
    }
}

#[cfg(test)]
mod tests {
    use super::Thresholds;

    #[test]
    fn all_channels_must_pass() {
        let t = Thresholds::default();
        assert!(t.is_valid([127, 127, 127, 127]));
        assert!(!t.is_valid([255, 255, 126, 255]));
        assert!(!t.is_valid([255, 255, 255, 0]));
    }

    #[test]
    fn invert_flips_bit() {
        let t = Thresholds::default();
        assert!(t.is_set([0, 0, 0, 255], true));
        assert!(!t.is_set([255, 255, 255, 255], true));
        assert!(t.is_set([255, 255, 255, 255], false));
    }

    #[test]
    fn zero_thresholds_accept_everything() {
        let t = Thresholds::new(0, 0, 0, 0);
        assert!(t.is_valid([0, 0, 0, 0]));
    }

    #[test]
    fn raising_a_threshold_never_sets_more_pixels() {
        for value in 0..=255u8 {
            let pixel = [value, 200, 200, 255];
            for red in 0..255u8 {
                let lower = Thresholds::new(red, 127, 127, 127);
                let higher = Thresholds::new(red + 1, 127, 127, 127);
                if higher.is_valid(pixel) {
                    assert!(lower.is_valid(pixel));
                }
            }
        }
    }
}
