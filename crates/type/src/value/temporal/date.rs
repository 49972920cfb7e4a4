// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::value::temporal::parse::parse_date;

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as days since Unix epoch (1970-01-01).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	// Negative values represent dates before 1970
	days_since_epoch: i32,
}

impl Default for Date {
	fn default() -> Self {
		Self {
			days_since_epoch: 0,
		}
	}
}

/// Days from 0001-01-01 to 1970-01-01
const EPOCH_DAY_NUMBER: i32 = 719_162;

/// Day number of 9999-12-31 when 0001-01-01 is day 1
pub const MAX_DAY_NUMBER: i64 = 3_652_059;

impl Date {
	#[inline]
	pub(crate) fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Howard Hinnant's days_from_civil
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i32 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

		Some(era * 146097 + doe - 719468)
	}

	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	/// The date `day_of_year` days into `year`, counting January 1st as 1.
	pub fn from_year_day(year: i32, day_of_year: u32) -> Option<Self> {
		let length = if Self::is_leap_year(year) {
			366
		} else {
			365
		};
		if day_of_year < 1 || day_of_year > length {
			return None;
		}
		let first = Self::ymd_to_days_since_epoch(year, 1, 1)?;
		Some(Self {
			days_since_epoch: first + day_of_year as i32 - 1,
		})
	}

	/// The date of a SQL day number, where 0001-01-01 is day 1 and
	/// 9999-12-31 is day 3652059.
	pub fn from_day_number(day_number: i64) -> Option<Self> {
		if !(1..=MAX_DAY_NUMBER).contains(&day_number) {
			return None;
		}
		Some(Self {
			days_since_epoch: day_number as i32 - 1 - EPOCH_DAY_NUMBER,
		})
	}

	pub fn day_number(&self) -> i64 {
		self.days_since_epoch as i64 + EPOCH_DAY_NUMBER as i64 + 1
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn from_days_since_epoch(days: i32) -> Option<Self> {
		// roughly one million years either side of 1970
		if !(-365_250_000..=365_250_000).contains(&days) {
			return None;
		}
		Some(Self {
			days_since_epoch: days,
		})
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		parse_date(value, true).map_err(|e| E::custom(e.message.clone()))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_date_display_standard_dates() {
		let date = Date::new(2024, 3, 15).unwrap();
		assert_eq!(format!("{}", date), "2024-03-15");

		let date = Date::new(1999, 12, 31).unwrap();
		assert_eq!(format!("{}", date), "1999-12-31");
	}

	#[test]
	fn test_date_display_boundary_dates() {
		let date = Date::new(1, 1, 1).unwrap();
		assert_eq!(format!("{}", date), "0001-01-01");

		let date = Date::new(9999, 12, 31).unwrap();
		assert_eq!(format!("{}", date), "9999-12-31");

		let date = Date::new(-1, 1, 1).unwrap();
		assert_eq!(format!("{}", date), "-0001-01-01");
	}

	#[test]
	fn test_date_display_default() {
		assert_eq!(format!("{}", Date::default()), "1970-01-01");
	}

	#[test]
	fn test_invalid_dates() {
		assert!(Date::new(2024, 0, 1).is_none());
		assert!(Date::new(2024, 13, 1).is_none());
		assert!(Date::new(2024, 1, 0).is_none());
		assert!(Date::new(2024, 1, 32).is_none());
		assert!(Date::new(2023, 2, 29).is_none());
		assert!(Date::new(2024, 4, 31).is_none());
	}

	#[test]
	fn test_leap_year_detection() {
		assert!(Date::is_leap_year(2000));
		assert!(Date::is_leap_year(2024));
		assert!(!Date::is_leap_year(1900));
		assert!(!Date::is_leap_year(2023));
	}

	#[test]
	fn test_day_numbers() {
		assert_eq!(Date::from_day_number(1), Date::new(1, 1, 1));
		assert_eq!(Date::from_day_number(MAX_DAY_NUMBER), Date::new(9999, 12, 31));
		assert_eq!(Date::from_day_number(719_163), Date::new(1970, 1, 1));
		assert_eq!(Date::from_day_number(0), None);
		assert_eq!(Date::from_day_number(MAX_DAY_NUMBER + 1), None);

		let date = Date::new(2024, 3, 15).unwrap();
		assert_eq!(Date::from_day_number(date.day_number()), Some(date));
	}

	#[test]
	fn test_year_day() {
		assert_eq!(Date::from_year_day(2024, 1), Date::new(2024, 1, 1));
		assert_eq!(Date::from_year_day(2024, 60), Date::new(2024, 2, 29));
		assert_eq!(Date::from_year_day(2024, 366), Date::new(2024, 12, 31));
		assert_eq!(Date::from_year_day(2023, 366), None);
		assert_eq!(Date::from_year_day(2023, 0), None);
	}

	#[test]
	fn test_serde_roundtrip() {
		let date = Date::new(2024, 3, 15).unwrap();
		let json = serde_json::to_string(&date).unwrap();
		assert_eq!(json, "\"2024-03-15\"");

		let recovered: Date = serde_json::from_str(&json).unwrap();
		assert_eq!(date, recovered);
	}
}
