/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! C array emitter
//!
//! Output looks like
//! ```text
//! unsigned char toersten[2][16] = {
//!     {0xff, 0x00},
//!     {0x0f, 0xf0}
//! };
//! ```
//! with rows indented by a single tab and no newline after the closing `};`.
use std::io::Write;

use log::{trace, warn};

use crate::errors::ConvertErrors;
use crate::image::RgbaImage;
use crate::options::{ConvertOptions, OutputFormat, RemainderPolicy};
use crate::threshold::Thresholds;

/// Write `image` in the layout chosen by `options`
pub fn emit<W: Write>(
    image: &RgbaImage, options: &ConvertOptions, out: &mut W
) -> Result<(), ConvertErrors> {
    match options.get_format() {
        OutputFormat::Expanded => write_expanded(image, options, out),
        OutputFormat::Compact => write_compact(image, options, out)
    }
}

/// Write one `0` or `1` token per pixel
pub fn write_expanded<W: Write>(
    image: &RgbaImage, options: &ConvertOptions, out: &mut W
) -> Result<(), ConvertErrors> {
    let thresholds = options.get_thresholds();
    let invert = options.get_invert();

    trace!("Writing expanded array, thresholds {thresholds:?}, invert {invert}");

    write_array(
        out,
        options.get_name(),
        image.height(),
        image.width(),
        |y, row| {
            for &pixel in image.row(y) {
                let token = if thresholds.is_set(pixel, invert) { "1" } else { "0" };
                push_token(row, token);
            }
        }
    )
}

/// Write eight pixels per byte, most significant bit first
pub fn write_compact<W: Write>(
    image: &RgbaImage, options: &ConvertOptions, out: &mut W
) -> Result<(), ConvertErrors> {
    let thresholds = options.get_thresholds();
    let invert = options.get_invert();
    let remainder = options.get_remainder();

    let leftover = image.width() % 8;

    if leftover != 0 {
        match remainder {
            RemainderPolicy::Drop => warn!(
                "Width {} is not a multiple of 8, last {leftover} pixels of each row are dropped",
                image.width()
            ),
            RemainderPolicy::Pad => warn!(
                "Width {} is not a multiple of 8, rows are padded with {} clear bits",
                image.width(),
                8 - leftover
            )
        }
    }

    trace!("Writing compact array, thresholds {thresholds:?}, invert {invert}");

    write_array(
        out,
        options.get_name(),
        image.height(),
        compact_columns(image.width(), remainder),
        |y, row| {
            for byte in pack_row(image.row(y), &thresholds, invert, remainder) {
                push_token(row, &format!("{byte:#04x}"));
            }
        }
    )
}

/// Number of bytes a row of `width` pixels occupies in compact mode
pub const fn compact_columns(width: usize, remainder: RemainderPolicy) -> usize {
    match remainder {
        RemainderPolicy::Drop => width / 8,
        RemainderPolicy::Pad => width.div_ceil(8)
    }
}

/// Classify a row and pack it into bytes, most significant bit first.
///
/// Padding bits are always clear, whatever `invert` says.
pub fn pack_row(
    row: &[[u8; 4]], thresholds: &Thresholds, invert: bool, remainder: RemainderPolicy
) -> Vec<u8> {
    let pack = |pixels: &[[u8; 4]]| {
        pixels
            .iter()
            .fold(0_u8, |acc, &px| (acc << 1) | u8::from(thresholds.is_set(px, invert)))
    };

    let mut bytes = Vec::with_capacity(compact_columns(row.len(), remainder));
    let mut groups = row.chunks_exact(8);

    for group in &mut groups {
        bytes.push(pack(group));
    }

    let rest = groups.remainder();

    if remainder == RemainderPolicy::Pad && !rest.is_empty() {
        bytes.push(pack(rest) << (8 - rest.len()));
    }
    bytes
}

fn push_token(row: &mut String, token: &str) {
    if !row.is_empty() {
        row.push_str(", ");
    }
    row.push_str(token);
}

fn write_array<W, F>(
    out: &mut W, name: &str, rows: usize, columns: usize, mut fill_row: F
) -> Result<(), ConvertErrors>
where
    W: Write,
    F: FnMut(usize, &mut String)
{
    writeln!(out, "unsigned char {name}[{rows}][{columns}] = {{")?;

    let mut row = String::new();

    for y in 0..rows {
        row.clear();
        fill_row(y, &mut row);

        write!(out, "\t{{{row}}}")?;

        if y + 1 < rows {
            out.write_all(b",")?;
        }
        out.write_all(b"\n")?;
    }
    out.write_all(b"};")?;

    Ok(())
}
