// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Error, TemporalKind},
	value::{
		Date,
		temporal::parse::{parse_digits, temporal_error},
	},
};

/// Parses `yyyy-mm-dd`, and unless `jdbc_escape` is set also the USA
/// `mm/dd/yyyy` and EUR `dd.mm.yyyy` formats.
pub fn parse_date(text: &str, jdbc_escape: bool) -> Result<Date, Error> {
	let input = text.trim();

	let (separator, year_idx, month_idx, day_idx) = if input.contains('-') {
		('-', 0, 1, 2)
	} else if !jdbc_escape && input.contains('/') {
		('/', 2, 0, 1)
	} else if !jdbc_escape && input.contains('.') {
		('.', 2, 1, 0)
	} else {
		return Err(temporal_error(
			TemporalKind::InvalidDateFormat,
			format!("invalid date format '{}'", input),
			input,
		));
	};

	let parts: Vec<&str> = input.split(separator).collect();
	if parts.len() != 3 {
		return Err(temporal_error(
			TemporalKind::InvalidDateFormat,
			format!("invalid date format '{}'", input),
			input,
		));
	}

	let year = parse_digits(parts[year_idx], 4, 4, TemporalKind::InvalidYear, "year", input)?;
	let month_len = if jdbc_escape {
		2
	} else {
		1
	};
	let month = parse_digits(parts[month_idx], month_len, 2, TemporalKind::InvalidMonth, "month", input)?;
	let day = parse_digits(parts[day_idx], month_len, 2, TemporalKind::InvalidDay, "day", input)?;

	build_date(year, month, day, input)
}

pub(crate) fn build_date(year: u32, month: u32, day: u32, input: &str) -> Result<Date, Error> {
	if year < 1 {
		return Err(temporal_error(TemporalKind::InvalidYear, format!("invalid year '{}'", year), input));
	}
	if !(1..=12).contains(&month) {
		return Err(temporal_error(TemporalKind::InvalidMonth, format!("invalid month '{}'", month), input));
	}
	Date::new(year as i32, month, day).ok_or_else(|| {
		temporal_error(TemporalKind::InvalidDay, format!("invalid day '{}' for {:04}-{:02}", day, year, month), input)
	})
}
