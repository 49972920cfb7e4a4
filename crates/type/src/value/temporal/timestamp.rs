// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::value::{
	Date, Time,
	temporal::parse::parse_timestamp,
};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// A date and time of day with nanosecond precision
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
	date: Date,
	nanos_of_day: u64,
}

impl Timestamp {
	pub fn new(date: Date, time: Time, nanosecond: u32) -> Option<Self> {
		if nanosecond as u64 >= NANOS_PER_SECOND {
			return None;
		}
		Some(Self {
			date,
			nanos_of_day: time.to_seconds_of_day() as u64 * NANOS_PER_SECOND + nanosecond as u64,
		})
	}

	/// Midnight at the start of `date`
	pub fn from_date(date: Date) -> Self {
		Self {
			date,
			nanos_of_day: 0,
		}
	}

	pub fn from_parts(date: Date, time: Time) -> Self {
		Self {
			date,
			nanos_of_day: time.to_seconds_of_day() as u64 * NANOS_PER_SECOND,
		}
	}

	pub fn date(&self) -> Date {
		self.date
	}

	/// The time of day, truncated to seconds
	pub fn time(&self) -> Time {
		let seconds = (self.nanos_of_day / NANOS_PER_SECOND) as u32;
		Time::from_seconds_of_day(seconds).unwrap_or_default()
	}

	pub fn nanosecond(&self) -> u32 {
		(self.nanos_of_day % NANOS_PER_SECOND) as u32
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let fraction = format!("{:09}", self.nanosecond());
		let fraction = fraction.trim_end_matches('0');
		let fraction = if fraction.is_empty() {
			"0"
		} else {
			fraction
		};
		write!(f, "{} {}.{}", self.date, self.time(), fraction)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
	type Value = Timestamp;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a timestamp in the format YYYY-MM-DD HH:MM:SS[.fffffffff]")
	}

	fn visit_str<E>(self, value: &str) -> Result<Timestamp, E>
	where
		E: de::Error,
	{
		parse_timestamp(value, true).map_err(|e| E::custom(e.message.clone()))
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(TimestampVisitor)
	}
}
