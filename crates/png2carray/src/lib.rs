/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turn png images into C bitmap arrays.
//!
//! Every pixel is classified as set or clear by comparing each of its
//! RGBA channels against a threshold, a pixel is set when all four
//! channels meet their threshold. The resulting bitmap is written as a
//! C `unsigned char` array, either one `0`/`1` per pixel or packed eight
//! pixels to a byte.
//!
//! # Example
//! ```no_run
//! use png2carray::{convert_file, ConvertOptions, OutputFormat};
//!
//! let options = ConvertOptions::new().set_format(OutputFormat::Compact);
//! convert_file("logo.png", "logo.c", &options).unwrap();
//! ```
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

pub use crate::emitter::{compact_columns, emit, pack_row, write_compact, write_expanded};
pub use crate::errors::ConvertErrors;
pub use crate::image::RgbaImage;
pub use crate::loader::{decode_png, expand_to_rgba, load_png};
pub use crate::options::{ConvertOptions, OutputFormat, RemainderPolicy, DEFAULT_ARRAY_NAME};
pub use crate::threshold::{Thresholds, DEFAULT_THRESHOLD};

mod emitter;
mod errors;
mod image;
mod loader;
mod options;
mod threshold;

/// Decode the png at `input` and write its bitmap to `output`
///
/// `output` is created if missing and truncated otherwise. It is only
/// opened after the input decoded successfully.
pub fn convert_file<P, Q>(input: P, output: Q, options: &ConvertOptions) -> Result<(), ConvertErrors>
where
    P: AsRef<Path>,
    Q: AsRef<Path>
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let image = load_png(input)?;

    info!(
        "Loaded {:?}, {}x{} pixels",
        input,
        image.width(),
        image.height()
    );

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(output)
        .map_err(|e| ConvertErrors::OutputOpen(output.to_path_buf(), e))?;

    let mut writer = BufWriter::new(file);

    emit(&image, options, &mut writer)?;

    writer.flush()?;

    info!("Wrote {:?} array to {:?}", options.get_format(), output);

    Ok(())
}
