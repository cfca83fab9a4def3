/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod arg_parsers;
pub(crate) mod help_strings;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use png2carray::DEFAULT_ARRAY_NAME;

use crate::cmd_args::arg_parsers::IRemainderPolicy;
use crate::cmd_args::help_strings::{COMPACT_HELP, REMAINDER_HELP, THRESHOLD_HELP};

fn threshold_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("N")
        .help_heading("THRESHOLDS")
        .help(help)
        .long_help(THRESHOLD_HELP)
        .default_value("127")
        .value_parser(value_parser!(u8))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("png2carray")
        .about("Convert a png image into a C bitmap array")
        .arg(Arg::new("in")
            .help("Input png file to read data from")
            .value_parser(value_parser!(PathBuf))
            .index(1)
            .required(true))
        .arg(Arg::new("out")
            .help("Output file to write the C array to")
            .value_parser(value_parser!(PathBuf))
            .index(2)
            .required(true))
        .arg(Arg::new("compact")
            .short('c')
            .long("compact")
            .action(ArgAction::SetTrue)
            .help("8 pixels are packed into one byte")
            .long_help(COMPACT_HELP))
        .arg(Arg::new("invert")
            .short('i')
            .long("invert")
            .action(ArgAction::SetTrue)
            .help("Invert all bits. 0xff -> 0x00"))
        .arg(Arg::new("remainder")
            .long("remainder")
            .help("What compact mode does with pixels past the last full byte")
            .long_help(REMAINDER_HELP)
            .default_value("drop")
            .value_parser(value_parser!(IRemainderPolicy)))
        .arg(Arg::new("name")
            .long("name")
            .value_name("IDENT")
            .help("Name of the emitted C array")
            .default_value(DEFAULT_ARRAY_NAME))
        .arg(threshold_arg("red", "Red threshold"))
        .arg(threshold_arg("green", "Green threshold"))
        .arg(threshold_arg("blue", "Blue threshold"))
        .arg(threshold_arg("alpha", "Alpha threshold"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}

#[cfg(test)]
mod tests {
    use png2carray::DEFAULT_THRESHOLD;

    use super::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn thresholds_must_fit_a_byte() {
        let result = create_cmd_args().try_get_matches_from(["png2carray", "a.png", "a.c", "--red", "256"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["png2carray", "a.png", "a.c"])
            .unwrap();

        assert_eq!(matches.get_one::<u8>("alpha"), Some(&DEFAULT_THRESHOLD));
        assert_eq!(matches.get_one::<String>("name").map(String::as_str), Some("toersten"));
        assert!(!matches.get_flag("compact"));
    }
}
