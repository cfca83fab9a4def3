/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::ConvertErrors;
use crate::threshold::Thresholds;

/// Name of the emitted array unless one is configured
pub const DEFAULT_ARRAY_NAME: &str = "toersten";

/// Layout of the emitted array
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One `0`/`1` token per pixel
    #[default]
    Expanded,
    /// Eight pixels per byte, most significant bit first
    Compact
}

/// What compact mode does with the last `width % 8` pixels of a row
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RemainderPolicy {
    /// Leave them out of the output
    #[default]
    Drop,
    /// Emit one more byte with the unused low bits cleared
    Pad
}

/// Options for a conversion, fixed once built
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertOptions {
    thresholds: Thresholds,
    invert:     bool,
    format:     OutputFormat,
    remainder:  RemainderPolicy,
    name:       String
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            thresholds: Thresholds::default(),
            invert:     false,
            format:     OutputFormat::default(),
            remainder:  RemainderPolicy::default(),
            name:       DEFAULT_ARRAY_NAME.to_string()
        }
    }
}

impl ConvertOptions {
    pub fn new() -> ConvertOptions {
        ConvertOptions::default()
    }

    pub fn set_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn set_invert(mut self, yes: bool) -> Self {
        self.invert = yes;
        self
    }

    pub fn set_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn set_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Set the name of the emitted array
    ///
    /// # Errors
    /// If `name` is not a valid C identifier
    pub fn set_name(mut self, name: &str) -> Result<Self, ConvertErrors> {
        if !is_c_identifier(name) {
            return Err(ConvertErrors::InvalidName(name.to_string()));
        }
        self.name = name.to_string();
        Ok(self)
    }

    pub const fn get_thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub const fn get_invert(&self) -> bool {
        self.invert
    }

    pub const fn get_format(&self) -> OutputFormat {
        self.format
    }

    pub const fn get_remainder(&self) -> RemainderPolicy {
        self.remainder
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ConvertOptions::new();
        assert_eq!(options.get_name(), "toersten");
        assert_eq!(options.get_format(), OutputFormat::Expanded);
        assert_eq!(options.get_remainder(), RemainderPolicy::Drop);
        assert_eq!(options.get_thresholds(), Thresholds::new(127, 127, 127, 127));
        assert!(!options.get_invert());
    }

    #[test]
    fn names() {
        assert!(ConvertOptions::new().set_name("_logo2").is_ok());
        assert!(ConvertOptions::new().set_name("2logo").is_err());
        assert!(ConvertOptions::new().set_name("lo-go").is_err());
        assert!(ConvertOptions::new().set_name("").is_err());
    }
}
