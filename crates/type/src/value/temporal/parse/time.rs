// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Error, TemporalKind},
	value::{
		Time,
		temporal::parse::{parse_digits, temporal_error},
	},
};

/// Parses `hh:mm:ss`, and unless `jdbc_escape` is set also `hh.mm[.ss]`,
/// `hh:mm` and the USA `hh[:mm] AM|PM` formats.
pub fn parse_time(text: &str, jdbc_escape: bool) -> Result<Time, Error> {
	let input = text.trim();

	if jdbc_escape {
		let parts: Vec<&str> = input.split(':').collect();
		if parts.len() != 3 {
			return Err(invalid_format(input));
		}
		return build_time(parts[0], parts[1], Some(parts[2]), 2, input);
	}

	if let Some((body, pm)) = split_meridiem(input) {
		return parse_meridiem(body, pm, input);
	}

	let separator = if input.contains(':') {
		':'
	} else if input.contains('.') {
		'.'
	} else {
		return Err(invalid_format(input));
	};

	let parts: Vec<&str> = input.split(separator).collect();
	match parts.as_slice() {
		[hour, minute] => build_time(hour, minute, None, 1, input),
		[hour, minute, second] => build_time(hour, minute, Some(second), 1, input),
		_ => Err(invalid_format(input)),
	}
}

pub(crate) fn build_time(
	hour: &str,
	minute: &str,
	second: Option<&str>,
	min_hour_len: usize,
	input: &str,
) -> Result<Time, Error> {
	let hour = parse_digits(hour, min_hour_len, 2, TemporalKind::InvalidHour, "hour", input)?;
	let minute = parse_digits(minute, 2, 2, TemporalKind::InvalidMinute, "minute", input)?;
	let second = match second {
		Some(second) => parse_digits(second, 2, 2, TemporalKind::InvalidSecond, "second", input)?,
		None => 0,
	};

	if hour > 23 {
		return Err(temporal_error(TemporalKind::InvalidHour, format!("invalid hour '{}'", hour), input));
	}
	if minute > 59 {
		return Err(temporal_error(TemporalKind::InvalidMinute, format!("invalid minute '{}'", minute), input));
	}
	if second > 59 {
		return Err(temporal_error(TemporalKind::InvalidSecond, format!("invalid second '{}'", second), input));
	}

	Time::new(hour, minute, second).ok_or_else(|| invalid_format(input))
}

fn split_meridiem(input: &str) -> Option<(&str, bool)> {
	if input.len() < 2 || !input.is_char_boundary(input.len() - 2) {
		return None;
	}
	let (body, suffix) = input.split_at(input.len() - 2);
	if suffix.eq_ignore_ascii_case("am") {
		Some((body.trim_end(), false))
	} else if suffix.eq_ignore_ascii_case("pm") {
		Some((body.trim_end(), true))
	} else {
		None
	}
}

fn parse_meridiem(body: &str, pm: bool, input: &str) -> Result<Time, Error> {
	let (hour, minute) = match body.split_once(':') {
		Some((hour, minute)) => (hour, minute),
		None => (body, "00"),
	};
	let hour = parse_digits(hour, 1, 2, TemporalKind::InvalidHour, "hour", input)?;
	if !(1..=12).contains(&hour) {
		return Err(temporal_error(TemporalKind::InvalidHour, format!("invalid hour '{}'", hour), input));
	}
	let minute = parse_digits(minute, 2, 2, TemporalKind::InvalidMinute, "minute", input)?;
	if minute > 59 {
		return Err(temporal_error(TemporalKind::InvalidMinute, format!("invalid minute '{}'", minute), input));
	}

	let hour = match (hour, pm) {
		(12, false) => 0,
		(12, true) => 12,
		(hour, false) => hour,
		(hour, true) => hour + 12,
	};
	Time::new(hour, minute, 0).ok_or_else(|| invalid_format(input))
}

fn invalid_format(input: &str) -> Error {
	temporal_error(TemporalKind::InvalidTimeFormat, format!("invalid time format '{}'", input), input)
}
