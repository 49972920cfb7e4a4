// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::value::temporal::parse::parse_time;

pub(crate) const SECONDS_PER_DAY: u32 = 86_400;

/// A time of day with second precision, as SQL TIME has no fractional seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
	seconds_of_day: u32,
}

impl Time {
	pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		Some(Self {
			seconds_of_day: hour * 3600 + minute * 60 + second,
		})
	}

	pub fn midnight() -> Self {
		Self::default()
	}

	pub fn from_seconds_of_day(seconds: u32) -> Option<Self> {
		if seconds >= SECONDS_PER_DAY {
			return None;
		}
		Some(Self {
			seconds_of_day: seconds,
		})
	}

	pub fn to_seconds_of_day(&self) -> u32 {
		self.seconds_of_day
	}

	pub fn hour(&self) -> u32 {
		self.seconds_of_day / 3600
	}

	pub fn minute(&self) -> u32 {
		(self.seconds_of_day % 3600) / 60
	}

	pub fn second(&self) -> u32 {
		self.seconds_of_day % 60
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
	}
}

impl Serialize for Time {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
	type Value = Time;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a time in the format HH:MM:SS")
	}

	fn visit_str<E>(self, value: &str) -> Result<Time, E>
	where
		E: de::Error,
	{
		parse_time(value, true).map_err(|e| E::custom(e.message.clone()))
	}
}

impl<'de> Deserialize<'de> for Time {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(TimeVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_components() {
		let time = Time::new(14, 30, 5).unwrap();
		assert_eq!(time.hour(), 14);
		assert_eq!(time.minute(), 30);
		assert_eq!(time.second(), 5);
		assert_eq!(time.to_string(), "14:30:05");
	}

	#[test]
	fn test_invalid_components() {
		assert!(Time::new(24, 0, 0).is_none());
		assert!(Time::new(0, 60, 0).is_none());
		assert!(Time::new(0, 0, 60).is_none());
		assert!(Time::from_seconds_of_day(SECONDS_PER_DAY).is_none());
	}

	#[test]
	fn test_serde_roundtrip() {
		let time = Time::new(23, 59, 59).unwrap();
		let json = serde_json::to_string(&time).unwrap();
		assert_eq!(json, "\"23:59:59\"");
		let recovered: Time = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, time);
	}
}
