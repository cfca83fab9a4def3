/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use png2carray::RemainderPolicy;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IRemainderPolicy {
    Drop,
    Pad
}

impl IRemainderPolicy {
    pub const fn to_remainder_policy(self) -> RemainderPolicy {
        match self {
            IRemainderPolicy::Drop => RemainderPolicy::Drop,
            IRemainderPolicy::Pad => RemainderPolicy::Pad
        }
    }
}

impl ValueEnum for IRemainderPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Drop, Self::Pad]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Drop => PossibleValue::new("drop"),
            Self::Pad => PossibleValue::new("pad")
        })
    }
}

impl std::str::FromStr for IRemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for variant in Self::value_variants() {
            if variant
                .to_possible_value()
                .is_some_and(|value| value.matches(s, false))
            {
                return Ok(*variant);
            }
        }
        Err(format!("Invalid variant: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use png2carray::RemainderPolicy;

    use super::IRemainderPolicy;

    #[test]
    fn parse_policies() {
        let pad: IRemainderPolicy = "pad".parse().unwrap();
        assert_eq!(pad.to_remainder_policy(), RemainderPolicy::Pad);
        assert!("zero".parse::<IRemainderPolicy>().is_err());
    }
}
