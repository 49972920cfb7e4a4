// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{
	Date, Error, Result, TemporalKind, Time, Timestamp, Type, TypeError, Value,
	value::temporal::{
		MAX_DAY_NUMBER,
		parse::{parse_date, parse_time, parse_timestamp},
	},
};

use crate::factory::{ValueFactory, reset};

fn temporal_error(kind: TemporalKind, message: String, input: &str) -> Error {
	TypeError::Temporal {
		kind,
		message,
		input: input.to_string(),
	}
	.into()
}

fn unsupported(function: &'static str, operand: &Value) -> Error {
	TypeError::UnsupportedOperand {
		function,
		operand: operand.get_type(),
	}
	.into()
}

fn digits(text: &str, range: std::ops::Range<usize>) -> u32 {
	text[range].bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}

/// `yyyyddd`: a year followed by the day within that year
fn date_from_year_day(text: &str) -> Result<Date> {
	let year = digits(text, 0..4);
	let day = digits(text, 4..7);
	if year < 1 {
		return Err(temporal_error(TemporalKind::InvalidYear, format!("invalid year '{}'", year), text));
	}
	Date::from_year_day(year as i32, day).ok_or_else(|| {
		temporal_error(TemporalKind::InvalidDay, format!("invalid day of year '{}' for {:04}", day, year), text)
	})
}

/// `yyyymmddhhmmss`
fn timestamp_from_digits(text: &str) -> Result<Timestamp> {
	let (year, month, day) = (digits(text, 0..4), digits(text, 4..6), digits(text, 6..8));
	let (hour, minute, second) = (digits(text, 8..10), digits(text, 10..12), digits(text, 12..14));
	let iso = format!(
		"{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
		year, month, day, hour, minute, second
	);
	parse_timestamp(&iso, true)
}

fn all_digits(text: &str, len: usize) -> bool {
	text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

impl ValueFactory {
	pub fn date(&self, value: impl Into<Option<Date>>) -> Value {
		Value::Date(value.into())
	}

	pub fn date_reusing(&self, value: impl Into<Option<Date>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Date, value.into(), |v| Ok(Value::Date(v)), Value::set_date)
	}

	pub fn null_date(&self, previous: Option<Value>) -> Result<Value> {
		self.date_reusing(None, previous)
	}

	/// Parses a date literal, accepting only `yyyy-mm-dd` when `jdbc_escape`
	/// is set.
	pub fn date_from_str(&self, text: &str, jdbc_escape: bool) -> Result<Value> {
		Ok(Value::Date(Some(parse_date(text, jdbc_escape)?)))
	}

	pub fn time(&self, value: impl Into<Option<Time>>) -> Value {
		Value::Time(value.into())
	}

	pub fn time_reusing(&self, value: impl Into<Option<Time>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Time, value.into(), |v| Ok(Value::Time(v)), Value::set_time)
	}

	pub fn null_time(&self, previous: Option<Value>) -> Result<Value> {
		self.time_reusing(None, previous)
	}

	/// Parses a time literal, accepting only `hh:mm:ss` when `jdbc_escape`
	/// is set.
	pub fn time_from_str(&self, text: &str, jdbc_escape: bool) -> Result<Value> {
		Ok(Value::Time(Some(parse_time(text, jdbc_escape)?)))
	}

	pub fn timestamp(&self, value: impl Into<Option<Timestamp>>) -> Value {
		Value::Timestamp(value.into())
	}

	pub fn timestamp_reusing(&self, value: impl Into<Option<Timestamp>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Timestamp, value.into(), |v| Ok(Value::Timestamp(v)), Value::set_timestamp)
	}

	pub fn null_timestamp(&self, previous: Option<Value>) -> Result<Value> {
		self.timestamp_reusing(None, previous)
	}

	/// Parses a timestamp literal, accepting only
	/// `yyyy-mm-dd hh:mm:ss[.fffffffff]` when `jdbc_escape` is set.
	pub fn timestamp_from_str(&self, text: &str, jdbc_escape: bool) -> Result<Value> {
		Ok(Value::Timestamp(Some(parse_timestamp(text, jdbc_escape)?)))
	}

	/// The SQL `DATE(x)` function.
	///
	/// Accepts a DATE, the date part of a TIMESTAMP, a day number where
	/// 0001-01-01 is day 1, a seven digit `yyyyddd` string, or any date
	/// literal. NULL yields NULL.
	pub fn date_of(&self, operand: &Value) -> Result<Value> {
		if operand.is_null() {
			return match operand.get_type() {
				ty if ty.is_integer() || ty.is_character() || ty == Type::Date || ty == Type::Timestamp => {
					Ok(Value::Date(None))
				}
				_ => Err(unsupported("DATE", operand)),
			};
		}

		let date = match operand {
			Value::Date(Some(date)) => *date,
			Value::Timestamp(Some(timestamp)) => timestamp.date(),
			value if value.get_type().is_integer() => {
				let day_number = value.as_i64().unwrap_or_default();
				Date::from_day_number(day_number).ok_or_else(|| {
					temporal_error(
						TemporalKind::InvalidDayNumber,
						format!("day number {} is outside 1..={}", day_number, MAX_DAY_NUMBER),
						&day_number.to_string(),
					)
				})?
			}
			value => match value.as_str() {
				Some(text) if all_digits(text.trim(), 7) => date_from_year_day(text.trim())?,
				Some(text) => parse_date(text, false)?,
				None => return Err(unsupported("DATE", operand)),
			},
		};
		Ok(Value::Date(Some(date)))
	}

	/// The SQL `TIMESTAMP(x)` function.
	///
	/// Accepts a TIMESTAMP, a DATE at midnight, a fourteen digit
	/// `yyyymmddhhmmss` string, or any timestamp literal. NULL yields NULL.
	pub fn timestamp_of(&self, operand: &Value) -> Result<Value> {
		if operand.is_null() {
			return match operand.get_type() {
				ty if ty.is_character() || ty == Type::Date || ty == Type::Timestamp => Ok(Value::Timestamp(None)),
				_ => Err(unsupported("TIMESTAMP", operand)),
			};
		}

		let timestamp = match operand {
			Value::Timestamp(Some(timestamp)) => *timestamp,
			Value::Date(Some(date)) => Timestamp::from_date(*date),
			value => match value.as_str() {
				Some(text) if all_digits(text.trim(), 14) => timestamp_from_digits(text.trim())?,
				Some(text) => parse_timestamp(text, false)?,
				None => return Err(unsupported("TIMESTAMP", operand)),
			},
		};
		Ok(Value::Timestamp(Some(timestamp)))
	}

	/// The SQL `TIMESTAMP(d, t)` function. Either operand may be a literal.
	pub fn timestamp_from_parts(&self, date: &Value, time: &Value) -> Result<Value> {
		let date_part = match date {
			Value::Date(date) => *date,
			value if value.get_type().is_character() => match value.as_str() {
				Some(text) => Some(parse_date(text, false)?),
				None => None,
			},
			value => return Err(unsupported("TIMESTAMP", value)),
		};
		let time_part = match time {
			Value::Time(time) => *time,
			value if value.get_type().is_character() => match value.as_str() {
				Some(text) => Some(parse_time(text, false)?),
				None => None,
			},
			value => return Err(unsupported("TIMESTAMP", value)),
		};

		match (date_part, time_part) {
			(Some(date), Some(time)) => Ok(Value::Timestamp(Some(Timestamp::from_parts(date, time)))),
			_ => Ok(Value::Timestamp(None)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn factory() -> ValueFactory {
		ValueFactory::builder().build()
	}

	fn date(y: i32, m: u32, d: u32) -> Date {
		Date::new(y, m, d).unwrap()
	}

	#[test]
	fn test_from_str() {
		let factory = factory();
		assert_eq!(factory.date_from_str("2024-03-15", true).unwrap().as_date(), Some(date(2024, 3, 15)));
		assert_eq!(factory.date_from_str("03/15/2024", false).unwrap().as_date(), Some(date(2024, 3, 15)));
		assert!(factory.date_from_str("03/15/2024", true).is_err());
		assert_eq!(factory.time_from_str("1:30 PM", false).unwrap().as_time(), Time::new(13, 30, 0));
		assert!(factory.timestamp_from_str("2024-03-15 10:20:30.5", true).unwrap().as_timestamp().is_some());
	}

	#[test]
	fn test_reuse() {
		let factory = factory();
		let value = factory.date(date(2024, 1, 1));
		let value = factory.date_reusing(date(2024, 1, 2), Some(value)).unwrap();
		assert_eq!(value.as_date(), Some(date(2024, 1, 2)));
		assert!(factory.null_date(Some(value)).unwrap().is_null());
		assert!(factory.time_reusing(Time::midnight(), Some(factory.date(None))).is_err());
	}

	#[test]
	fn test_date_of_day_number() {
		let factory = factory();
		assert_eq!(factory.date_of(&factory.integer(1)).unwrap().as_date(), Some(date(1, 1, 1)));
		assert_eq!(factory.date_of(&factory.big_int(3_652_059)).unwrap().as_date(), Some(date(9999, 12, 31)));
		assert_eq!(factory.date_of(&factory.integer(0)).unwrap_err().code, "TEMPORAL_011");
		assert_eq!(factory.date_of(&factory.integer(3_652_060)).unwrap_err().code, "TEMPORAL_011");
	}

	#[test]
	fn test_date_of_strings() {
		let factory = factory();
		assert_eq!(factory.date_of(&factory.var_char("2024060")).unwrap().as_date(), Some(date(2024, 2, 29)));
		assert_eq!(factory.date_of(&factory.char("2023366")).unwrap_err().code, "TEMPORAL_006");
		assert_eq!(factory.date_of(&factory.var_char("15.03.2024")).unwrap().as_date(), Some(date(2024, 3, 15)));
	}

	#[test]
	fn test_date_of_temporal_and_null() {
		let factory = factory();
		let ts = Timestamp::new(date(2024, 3, 15), Time::new(10, 0, 0).unwrap(), 0).unwrap();
		assert_eq!(factory.date_of(&factory.timestamp(ts)).unwrap().as_date(), Some(date(2024, 3, 15)));
		assert_eq!(factory.date_of(&factory.date(date(2000, 1, 1))).unwrap().as_date(), Some(date(2000, 1, 1)));
		assert_eq!(factory.date_of(&factory.integer(None)).unwrap(), Value::Date(None));
		assert_eq!(factory.date_of(&factory.boolean(true)).unwrap_err().code, "FUNCTION_001");
		assert_eq!(factory.date_of(&factory.time(None)).unwrap_err().code, "FUNCTION_001");
	}

	#[test]
	fn test_timestamp_of() {
		let factory = factory();
		let expected = Timestamp::new(date(2024, 3, 15), Time::new(10, 20, 30).unwrap(), 0).unwrap();
		assert_eq!(factory.timestamp_of(&factory.var_char("20240315102030")).unwrap().as_timestamp(), Some(expected));
		assert_eq!(
			factory.timestamp_of(&factory.var_char("2024-03-15-10.20.30")).unwrap().as_timestamp(),
			Some(expected)
		);
		assert_eq!(
			factory.timestamp_of(&factory.date(date(2024, 3, 15))).unwrap().as_timestamp(),
			Some(Timestamp::from_date(date(2024, 3, 15)))
		);
		assert_eq!(factory.timestamp_of(&factory.var_char("20241315102030")).unwrap_err().code, "TEMPORAL_005");
		assert_eq!(factory.timestamp_of(&factory.var_char(None)).unwrap(), Value::Timestamp(None));
		assert_eq!(factory.timestamp_of(&factory.integer(1)).unwrap_err().code, "FUNCTION_001");
	}

	#[test]
	fn test_timestamp_from_parts() {
		let factory = factory();
		let value = factory
			.timestamp_from_parts(&factory.date(date(2024, 3, 15)), &factory.time(Time::new(1, 2, 3)))
			.unwrap();
		assert_eq!(value.to_string(), "2024-03-15 01:02:03.0");

		let value = factory.timestamp_from_parts(&factory.var_char("2024-03-15"), &factory.var_char("01:02:03")).unwrap();
		assert_eq!(value.to_string(), "2024-03-15 01:02:03.0");

		assert!(factory.timestamp_from_parts(&factory.date(None), &factory.time(Time::midnight())).unwrap().is_null());
		assert!(factory.timestamp_from_parts(&factory.integer(1), &factory.time(None)).is_err());
	}
}
