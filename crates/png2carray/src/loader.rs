/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Png loading
//!
//! Everything is normalized to straight 8-bit RGBA so that thresholds
//! always compare against the 0-255 range, regardless of the bit depth
//! or color type stored in the file.
use std::fs::read;
use std::path::Path;

use log::{debug, trace};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_png::PngDecoder;

use crate::errors::ConvertErrors;
use crate::image::RgbaImage;

/// Read `path` into memory and decode it as a png
pub fn load_png<P: AsRef<Path>>(path: P) -> Result<RgbaImage, ConvertErrors> {
    let path = path.as_ref();

    let data = read(path).map_err(|e| ConvertErrors::InputOpen(path.to_path_buf(), e))?;

    trace!("Read {} bytes from {:?}", data.len(), path);

    decode_png(&data)
}

/// Decode png bytes into an RGBA image
pub fn decode_png(data: &[u8]) -> Result<RgbaImage, ConvertErrors> {
    let options = DecoderOptions::default().png_set_strip_to_8bit(true);

    let mut decoder = PngDecoder::new_with_options(data, options);

    let pixels = decoder.decode_raw()?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or_else(|| ConvertErrors::Decode("Image dimensions unknown".to_string()))?;

    let colorspace = decoder
        .get_colorspace()
        .ok_or_else(|| ConvertErrors::Decode("Image colorspace unknown".to_string()))?;

    debug!("Decoded {width}x{height} png, colorspace {colorspace:?}");

    let expected = width * height * colorspace.num_components();

    if pixels.len() != expected {
        return Err(ConvertErrors::Decode(format!(
            "Expected {expected} bytes of pixel data but decoder returned {}",
            pixels.len()
        )));
    }

    let rgba = expand_to_rgba(&pixels, colorspace)?;

    RgbaImage::from_pixels(width, height, rgba)
        .ok_or_else(|| ConvertErrors::Decode("Pixel count does not match dimensions".to_string()))
}

/// Expand interleaved 8-bit samples into RGBA quadruplets
///
/// Grayscale is replicated into the three color channels and a missing
/// alpha channel is treated as fully opaque.
pub fn expand_to_rgba(data: &[u8], colorspace: ColorSpace) -> Result<Vec<[u8; 4]>, ConvertErrors> {
    let pixels = match colorspace {
        ColorSpace::Luma => data.iter().map(|&l| [l, l, l, 255]).collect(),
        ColorSpace::LumaA => data
            .chunks_exact(2)
            .map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        ColorSpace::RGB => data
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        ColorSpace::RGBA => data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect(),
        other => return Err(ConvertErrors::UnsupportedColorspace(other))
    };
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use super::expand_to_rgba;
    use crate::errors::ConvertErrors;

    #[test]
    fn luma_is_replicated_and_opaque() {
        let px = expand_to_rgba(&[10, 200], ColorSpace::Luma).unwrap();
        assert_eq!(px, vec![[10, 10, 10, 255], [200, 200, 200, 255]]);
    }

    #[test]
    fn luma_alpha_keeps_alpha() {
        let px = expand_to_rgba(&[10, 20], ColorSpace::LumaA).unwrap();
        assert_eq!(px, vec![[10, 10, 10, 20]]);
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        let px = expand_to_rgba(&[1, 2, 3, 4, 5, 6], ColorSpace::RGB).unwrap();
        assert_eq!(px, vec![[1, 2, 3, 255], [4, 5, 6, 255]]);
    }

    #[test]
    fn unsupported_colorspace() {
        let err = expand_to_rgba(&[0; 4], ColorSpace::CMYK).unwrap_err();
        assert!(matches!(err, ConvertErrors::UnsupportedColorspace(ColorSpace::CMYK)));
    }
}
