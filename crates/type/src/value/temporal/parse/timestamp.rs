// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Error, TemporalKind},
	value::{
		Timestamp,
		temporal::parse::{date::build_date, parse_digits, temporal_error, time::build_time},
	},
};

/// Parses `yyyy-mm-dd hh:mm:ss[.f]` with up to nine fraction digits. Unless
/// `jdbc_escape` is set the IBM `yyyy-mm-dd-hh.mm.ss[.f]` form and
/// `yyyy-mm-dd hh:mm` are accepted as well.
pub fn parse_timestamp(text: &str, jdbc_escape: bool) -> Result<Timestamp, Error> {
	let input = text.trim();

	if let Some((date_part, time_part)) = input.split_once(' ') {
		return parse_iso(date_part, time_part.trim_start(), jdbc_escape, input);
	}

	if !jdbc_escape {
		let parts: Vec<&str> = input.splitn(4, '-').collect();
		if let [year, month, day, time_part] = parts.as_slice() {
			return parse_ibm(year, month, day, time_part, input);
		}
	}

	Err(invalid_format(input))
}

fn parse_iso(date_part: &str, time_part: &str, jdbc_escape: bool, input: &str) -> Result<Timestamp, Error> {
	let date_parts: Vec<&str> = date_part.split('-').collect();
	let [year, month, day] = date_parts.as_slice() else {
		return Err(invalid_format(input));
	};
	let date = component_date(year, month, day, input)?;

	let (clock, fraction) = match time_part.split_once('.') {
		Some((clock, fraction)) => (clock, Some(fraction)),
		None => (time_part, None),
	};

	let clock_parts: Vec<&str> = clock.split(':').collect();
	let time = match clock_parts.as_slice() {
		[hour, minute, second] => build_time(hour, minute, Some(second), 2, input)?,
		[hour, minute] if !jdbc_escape && fraction.is_none() => build_time(hour, minute, None, 2, input)?,
		_ => return Err(invalid_format(input)),
	};

	let nanos = match fraction {
		Some(fraction) => parse_fraction(fraction, input)?,
		None => 0,
	};
	Timestamp::new(date, time, nanos).ok_or_else(|| invalid_format(input))
}

fn parse_ibm(year: &str, month: &str, day: &str, time_part: &str, input: &str) -> Result<Timestamp, Error> {
	let date = component_date(year, month, day, input)?;

	let parts: Vec<&str> = time_part.split('.').collect();
	let (time, nanos) = match parts.as_slice() {
		[hour, minute, second] => (build_time(hour, minute, Some(second), 2, input)?, 0),
		[hour, minute, second, fraction] => {
			(build_time(hour, minute, Some(second), 2, input)?, parse_fraction(fraction, input)?)
		}
		_ => return Err(invalid_format(input)),
	};
	Timestamp::new(date, time, nanos).ok_or_else(|| invalid_format(input))
}

fn component_date(year: &str, month: &str, day: &str, input: &str) -> Result<crate::value::Date, Error> {
	let year = parse_digits(year, 4, 4, TemporalKind::InvalidYear, "year", input)?;
	let month = parse_digits(month, 2, 2, TemporalKind::InvalidMonth, "month", input)?;
	let day = parse_digits(day, 2, 2, TemporalKind::InvalidDay, "day", input)?;
	build_date(year, month, day, input)
}

/// Right pads `1..=9` fraction digits to nanoseconds
fn parse_fraction(fraction: &str, input: &str) -> Result<u32, Error> {
	let digits = parse_digits(fraction, 1, 9, TemporalKind::InvalidFraction, "fraction", input)?;
	Ok(digits * 10u32.pow(9 - fraction.len() as u32))
}

fn invalid_format(input: &str) -> Error {
	temporal_error(TemporalKind::InvalidTimestampFormat, format!("invalid timestamp format '{}'", input), input)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{Date, Time};

	fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> Timestamp {
		Timestamp::new(Date::new(y, mo, d).unwrap(), Time::new(h, mi, s).unwrap(), nanos).unwrap()
	}

	#[test]
	fn test_iso_without_fraction() {
		assert_eq!(parse_timestamp("2024-03-15 10:20:30", true).unwrap(), ts(2024, 3, 15, 10, 20, 30, 0));
	}

	#[test]
	fn test_iso_fraction_is_right_padded() {
		assert_eq!(parse_timestamp("2024-03-15 10:20:30.5", true).unwrap(), ts(2024, 3, 15, 10, 20, 30, 500_000_000));
		assert_eq!(
			parse_timestamp("2024-03-15 10:20:30.123456789", true).unwrap(),
			ts(2024, 3, 15, 10, 20, 30, 123_456_789)
		);
		assert_eq!(parse_timestamp("2024-03-15 10:20:30.1234567890", true).unwrap_err().code, "TEMPORAL_010");
	}

	#[test]
	fn test_ibm_format() {
		assert_eq!(
			parse_timestamp("2024-03-15-10.20.30.000001", false).unwrap(),
			ts(2024, 3, 15, 10, 20, 30, 1_000)
		);
		assert_eq!(parse_timestamp("2024-03-15-10.20.30", false).unwrap(), ts(2024, 3, 15, 10, 20, 30, 0));
		assert!(parse_timestamp("2024-03-15-10.20.30", true).is_err());
	}

	#[test]
	fn test_missing_seconds() {
		assert_eq!(parse_timestamp("2024-03-15 10:20", false).unwrap(), ts(2024, 3, 15, 10, 20, 0, 0));
		assert_eq!(parse_timestamp("2024-03-15 10:20", true).unwrap_err().code, "TEMPORAL_003");
	}

	#[test]
	fn test_invalid_components() {
		assert_eq!(parse_timestamp("2024-02-30 10:20:30", true).unwrap_err().code, "TEMPORAL_006");
		assert_eq!(parse_timestamp("2024-03-15 25:20:30", true).unwrap_err().code, "TEMPORAL_007");
		assert_eq!(parse_timestamp("2024-03-15 10:20:30.x", true).unwrap_err().code, "TEMPORAL_010");
	}

	#[test]
	fn test_garbage() {
		assert_eq!(parse_timestamp("2024-03-15", true).unwrap_err().code, "TEMPORAL_003");
		assert_eq!(parse_timestamp("now", false).unwrap_err().code, "TEMPORAL_003");
		assert!(parse_timestamp("", false).is_err());
	}
}
