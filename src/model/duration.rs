// File: ./src/model/duration.rs
//! Parser for RFC 5545 duration tokens (`P1D`, `PT1H30M`, `-PT15M`, ...).
//!
//! The grammar is small enough to walk by hand: an optional sign, a literal
//! `P`, date components (weeks/days), then an optional `T` introducing time
//! components (hours/minutes/seconds). Seconds may carry a fractional part;
//! the other components must be whole numbers.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid duration token '{0}'")]
pub struct InvalidDuration(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IcalDuration {
    pub negative: bool,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl IcalDuration {
    /// Total length in minutes. Fractional seconds survive as fractional
    /// minutes.
    pub fn total_minutes(&self) -> f64 {
        let magnitude = f64::from(self.weeks) * 7.0 * 24.0 * 60.0
            + f64::from(self.days) * 24.0 * 60.0
            + f64::from(self.hours) * 60.0
            + f64::from(self.minutes)
            + self.seconds / 60.0;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl FromStr for IcalDuration {
    type Err = InvalidDuration;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fail = || InvalidDuration(input.to_string());
        let token = input.trim();

        let (negative, rest) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };
        let rest = rest.strip_prefix('P').ok_or_else(fail)?;

        let mut duration = IcalDuration {
            negative,
            ..IcalDuration::default()
        };
        let mut in_time = false;
        let mut saw_component = false;
        let mut number = String::new();

        for c in rest.chars() {
            match c {
                'T' | 't' if !in_time && number.is_empty() => in_time = true,
                '0'..='9' => number.push(c),
                '.' | ',' if !number.contains('.') => number.push('.'),
                unit => {
                    if number.is_empty() {
                        return Err(fail());
                    }
                    match (unit.to_ascii_uppercase(), in_time) {
                        ('W', false) => duration.weeks = parse_whole(&number).ok_or_else(fail)?,
                        ('D', false) => duration.days = parse_whole(&number).ok_or_else(fail)?,
                        ('H', true) => duration.hours = parse_whole(&number).ok_or_else(fail)?,
                        ('M', true) => duration.minutes = parse_whole(&number).ok_or_else(fail)?,
                        ('S', true) => {
                            duration.seconds = number.parse::<f64>().map_err(|_| fail())?;
                        }
                        _ => return Err(fail()),
                    }
                    saw_component = true;
                    number.clear();
                }
            }
        }

        // A trailing number with no unit, or a bare "P"/"PT", is malformed.
        if !number.is_empty() || !saw_component {
            return Err(fail());
        }
        Ok(duration)
    }
}

fn parse_whole(number: &str) -> Option<u32> {
    if number.contains('.') {
        return None;
    }
    number.parse().ok()
}
