// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Exact numerics. Which representation a database uses is decided once at
//! boot by installing a [`DecimalBackend`]; every DECIMAL value built after
//! that goes through it.

use std::{
	cmp::Ordering,
	fmt::{self, Debug, Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

mod backend;
mod parse;
mod scaled;

pub use backend::{BigDecimalBackend, ScaledDecimalBackend};
pub use parse::parse_decimal;
pub use scaled::ScaledDecimal;

use crate::error::Error;

/// Identity of a decimal representation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecimalKind {
	/// Arbitrary precision, backed by `bigdecimal`
	Big,
	/// Unscaled integer plus scale, for constrained runtimes
	Scaled,
}

impl Display for DecimalKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			DecimalKind::Big => f.write_str("big"),
			DecimalKind::Scaled => f.write_str("scaled"),
		}
	}
}

/// A DECIMAL payload. Values of different kinds compare numerically.
#[derive(Clone, Debug)]
pub enum Decimal {
	Big(BigDecimal),
	Scaled(ScaledDecimal),
}

impl Decimal {
	pub fn kind(&self) -> DecimalKind {
		match self {
			Decimal::Big(_) => DecimalKind::Big,
			Decimal::Scaled(_) => DecimalKind::Scaled,
		}
	}

	pub fn to_big(&self) -> BigDecimal {
		match self {
			Decimal::Big(value) => value.clone(),
			Decimal::Scaled(value) => value.to_big(),
		}
	}

	pub fn is_zero(&self) -> bool {
		match self {
			Decimal::Big(value) => value.is_zero(),
			Decimal::Scaled(value) => value.is_zero(),
		}
	}
}

impl PartialEq for Decimal {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Decimal::Big(l), Decimal::Big(r)) => l.cmp(r),
			(Decimal::Scaled(l), Decimal::Scaled(r)) => l.cmp(r),
			(l, r) => l.to_big().cmp(&r.to_big()),
		}
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Decimal::Big(value) => f.write_str(&value.to_plain_string()),
			Decimal::Scaled(value) => Display::fmt(value, f),
		}
	}
}

impl Serialize for Decimal {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
	type Value = Decimal;

	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		formatter.write_str("a decimal number as a string")
	}

	fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
	where
		E: de::Error,
	{
		BigDecimal::from_str(value).map(Decimal::Big).map_err(|e| E::custom(e.to_string()))
	}
}

impl<'de> Deserialize<'de> for Decimal {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DecimalVisitor)
	}
}

/// One representation of DECIMAL values
pub trait DecimalBackend: Debug + Send + Sync {
	fn kind(&self) -> DecimalKind;

	fn name(&self) -> &'static str;

	fn from_i64(&self, value: i64) -> Decimal;

	/// Fails for NaN and infinities
	fn from_f64(&self, value: f64) -> Result<Decimal, Error>;

	fn parse(&self, text: &str) -> Result<Decimal, Error>;

	/// Re-expresses a decimal of any kind in this representation
	fn convert(&self, value: &Decimal) -> Result<Decimal, Error>;

	fn zero(&self) -> Decimal {
		self.from_i64(0)
	}
}

/// Caller input accepted by decimal constructors. `None` stands for SQL
/// NULL.
pub trait IntoDecimal {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error>;
}

impl IntoDecimal for i32 {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		Ok(Some(backend.from_i64(self as i64)))
	}
}

impl IntoDecimal for i64 {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		Ok(Some(backend.from_i64(self)))
	}
}

impl IntoDecimal for f64 {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		backend.from_f64(self).map(Some)
	}
}

impl IntoDecimal for &str {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		backend.parse(self).map(Some)
	}
}

impl IntoDecimal for String {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		backend.parse(&self).map(Some)
	}
}

impl IntoDecimal for Decimal {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		if self.kind() == backend.kind() {
			return Ok(Some(self));
		}
		backend.convert(&self).map(Some)
	}
}

impl IntoDecimal for &Decimal {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		backend.convert(self).map(Some)
	}
}

impl IntoDecimal for Option<Decimal> {
	fn into_decimal(self, backend: &dyn DecimalBackend) -> Result<Option<Decimal>, Error> {
		match self {
			Some(value) => value.into_decimal(backend),
			None => Ok(None),
		}
	}
}
