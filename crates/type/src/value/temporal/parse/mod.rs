// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Parsing of SQL date, time and timestamp literals.
//!
//! With `jdbc_escape` set only the JDBC escape formats are accepted:
//! `yyyy-mm-dd`, `hh:mm:ss` and `yyyy-mm-dd hh:mm:ss[.fffffffff]`. Otherwise
//! the USA, EUR and IBM formats are accepted as well.

mod date;
mod time;
mod timestamp;

pub use date::parse_date;
pub use time::parse_time;
pub use timestamp::parse_timestamp;

use crate::error::{Error, TemporalKind, TypeError};

pub(crate) fn temporal_error(kind: TemporalKind, message: impl Into<String>, input: &str) -> Error {
	TypeError::Temporal {
		kind,
		message: message.into(),
		input: input.to_string(),
	}
	.into()
}

/// Parses a run of `min..=max` ascii digits
pub(crate) fn parse_digits(
	part: &str,
	min: usize,
	max: usize,
	kind: TemporalKind,
	component: &str,
	input: &str,
) -> Result<u32, Error> {
	if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
		return Err(temporal_error(kind, format!("invalid {} '{}'", component, part), input));
	}
	part.parse::<u32>().map_err(|_| temporal_error(kind, format!("invalid {} '{}'", component, part), input))
}
