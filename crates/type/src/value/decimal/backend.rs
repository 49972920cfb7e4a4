// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;

use crate::{
	error::{Error, TypeError},
	value::{
		Type,
		decimal::{Decimal, DecimalBackend, DecimalKind, ScaledDecimal, parse::parse_decimal},
	},
};

/// Goes through the shortest text form of the float, so `0.1` stays `0.1`
fn finite_f64(value: f64) -> Result<BigDecimal, Error> {
	if !value.is_finite() {
		return Err(TypeError::NumberOutOfRange {
			target: Type::Decimal,
			value: value.to_string(),
		}
		.into());
	}
	parse_decimal(&value.to_string())
}

/// The arbitrary precision representation used by full deployments
#[derive(Clone, Copy, Debug, Default)]
pub struct BigDecimalBackend;

impl DecimalBackend for BigDecimalBackend {
	fn kind(&self) -> DecimalKind {
		DecimalKind::Big
	}

	fn name(&self) -> &'static str {
		"bigdecimal"
	}

	fn from_i64(&self, value: i64) -> Decimal {
		Decimal::Big(BigDecimal::from(value))
	}

	fn from_f64(&self, value: f64) -> Result<Decimal, Error> {
		finite_f64(value).map(Decimal::Big)
	}

	fn parse(&self, text: &str) -> Result<Decimal, Error> {
		parse_decimal(text).map(Decimal::Big)
	}

	fn convert(&self, value: &Decimal) -> Result<Decimal, Error> {
		Ok(Decimal::Big(value.to_big()))
	}
}

/// Unscaled integer plus scale, the representation of constrained deployments
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaledDecimalBackend;

impl DecimalBackend for ScaledDecimalBackend {
	fn kind(&self) -> DecimalKind {
		DecimalKind::Scaled
	}

	fn name(&self) -> &'static str {
		"scaled"
	}

	fn from_i64(&self, value: i64) -> Decimal {
		Decimal::Scaled(ScaledDecimal::from_i64(value))
	}

	fn from_f64(&self, value: f64) -> Result<Decimal, Error> {
		let big = finite_f64(value)?;
		ScaledDecimal::from_big(&big).map(Decimal::Scaled)
	}

	fn parse(&self, text: &str) -> Result<Decimal, Error> {
		let big = parse_decimal(text)?;
		ScaledDecimal::from_big(&big).map(Decimal::Scaled)
	}

	fn convert(&self, value: &Decimal) -> Result<Decimal, Error> {
		match value {
			Decimal::Scaled(value) => Ok(Decimal::Scaled(value.clone())),
			Decimal::Big(value) => ScaledDecimal::from_big(value).map(Decimal::Scaled),
		}
	}
}
