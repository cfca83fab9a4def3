/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use zune_core::colorspace::ColorSpace;
use zune_png::error::PngDecodeErrors;

/// Errors that can occur while converting an image
pub enum ConvertErrors {
    /// The input file could not be opened or read
    InputOpen(PathBuf, io::Error),
    /// The input is not a png we can decode
    Decode(String),
    /// The decoder produced a layout we cannot map to RGBA
    UnsupportedColorspace(ColorSpace),
    /// The output file could not be created or truncated
    OutputOpen(PathBuf, io::Error),
    /// Writing the array to the output failed
    Write(io::Error),
    /// The array name is not a valid C identifier
    InvalidName(String),
    /// Input and output refer to the same file
    SamePath(PathBuf)
}

impl Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputOpen(path, err) => {
                write!(f, "Error opening input file {:?}: {}", path, err)
            }
            Self::Decode(reason) => write!(f, "Error decoding image: {reason}"),
            Self::UnsupportedColorspace(colorspace) => {
                write!(f, "Unsupported colorspace {colorspace:?}")
            }
            Self::OutputOpen(path, err) => {
                write!(f, "Error opening output file {:?}: {}", path, err)
            }
            Self::Write(err) => write!(f, "Error writing output: {err}"),
            Self::InvalidName(name) => {
                write!(f, "{name:?} is not a valid C identifier")
            }
            Self::SamePath(path) => {
                write!(f, "Cannot use {:?} as both input and output", path)
            }
        }
    }
}

impl Display for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ConvertErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputOpen(_, err) | Self::OutputOpen(_, err) | Self::Write(err) => Some(err),
            _ => None
        }
    }
}

impl From<PngDecodeErrors> for ConvertErrors {
    fn from(err: PngDecodeErrors) -> Self {
        // the decoder's Debug output ends with a newline
        let reason = format!("{err:?}");
        Self::Decode(reason.trim_end().to_string())
    }
}

impl From<io::Error> for ConvertErrors {
    fn from(err: io::Error) -> Self {
        Self::Write(err)
    }
}
