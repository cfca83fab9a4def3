/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};
use png2carray::{
    ConvertErrors, ConvertOptions, OutputFormat, RemainderPolicy, Thresholds, DEFAULT_ARRAY_NAME,
    DEFAULT_THRESHOLD
};

use crate::cmd_args::arg_parsers::IRemainderPolicy;

fn get_threshold(options: &ArgMatches, channel: &str) -> u8 {
    let value = options
        .get_one::<u8>(channel)
        .copied()
        .unwrap_or(DEFAULT_THRESHOLD);

    if options.value_source(channel) == Some(CommandLine) {
        info!("Setting {channel} threshold to {value}");
    }
    value
}

/// Collect parsed arguments into conversion options
pub fn parse_options(options: &ArgMatches) -> Result<ConvertOptions, ConvertErrors> {
    let thresholds = Thresholds::new(
        get_threshold(options, "red"),
        get_threshold(options, "green"),
        get_threshold(options, "blue"),
        get_threshold(options, "alpha")
    );

    let format = if options.get_flag("compact") {
        info!("Packing 8 pixels per byte");
        OutputFormat::Compact
    } else {
        OutputFormat::Expanded
    };

    let invert = options.get_flag("invert");

    if invert {
        info!("Inverting all bits");
    }

    let remainder = options
        .get_one::<IRemainderPolicy>("remainder")
        .map_or(RemainderPolicy::default(), |r| r.to_remainder_policy());

    let name = options
        .get_one::<String>("name")
        .map_or(DEFAULT_ARRAY_NAME, String::as_str);

    ConvertOptions::new()
        .set_thresholds(thresholds)
        .set_invert(invert)
        .set_format(format)
        .set_remainder(remainder)
        .set_name(name)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use png2carray::{ConvertErrors, OutputFormat, RemainderPolicy, Thresholds};

    use super::parse_options;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn flags_reach_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "png2carray", "in.png", "out.c", "-c", "-i", "--red", "10", "--alpha", "0",
                "--remainder", "pad", "--name", "logo"
            ])
            .unwrap();

        let options = parse_options(&matches).unwrap();

        assert_eq!(options.get_format(), OutputFormat::Compact);
        assert!(options.get_invert());
        assert_eq!(options.get_thresholds(), Thresholds::new(10, 127, 127, 0));
        assert_eq!(options.get_remainder(), RemainderPolicy::Pad);
        assert_eq!(options.get_name(), "logo");
    }

    #[test]
    fn bad_name_is_rejected() {
        let matches = create_cmd_args()
            .try_get_matches_from(["png2carray", "in.png", "out.c", "--name", "not valid"])
            .unwrap();

        assert!(matches!(parse_options(&matches), Err(ConvertErrors::InvalidName(_))));
    }
}
