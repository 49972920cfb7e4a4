// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::{
	error::{Error, TypeError},
	value::Type,
};

/// Largest scale, and largest folded exponent, a scaled decimal accepts
pub const MAX_SCALE: u32 = 1_000;

/// An unscaled integer and a non-negative scale: `unscaled * 10^-scale`.
#[derive(Clone, Debug)]
pub struct ScaledDecimal {
	unscaled: BigInt,
	scale: u32,
}

impl ScaledDecimal {
	pub fn new(unscaled: BigInt, scale: u32) -> Self {
		Self {
			unscaled,
			scale,
		}
	}

	pub fn from_i64(value: i64) -> Self {
		Self::new(BigInt::from(value), 0)
	}

	/// Negative exponents are folded into the unscaled integer. Exponents
	/// beyond [`MAX_SCALE`] in either direction are out of range.
	pub fn from_big(value: &BigDecimal) -> Result<Self, Error> {
		let (unscaled, exponent) = value.as_bigint_and_exponent();
		let magnitude = u32::try_from(exponent.unsigned_abs())
			.ok()
			.filter(|m| *m <= MAX_SCALE)
			.ok_or_else(|| {
				Error::from(TypeError::NumberOutOfRange {
					target: Type::Decimal,
					value: value.to_string(),
				})
			})?;
		if exponent < 0 {
			let factor = BigInt::from(10u8).pow(magnitude);
			return Ok(Self::new(unscaled * factor, 0));
		}
		Ok(Self::new(unscaled, magnitude))
	}

	pub fn to_big(&self) -> BigDecimal {
		BigDecimal::new(self.unscaled.clone(), self.scale as i64)
	}

	pub fn unscaled(&self) -> &BigInt {
		&self.unscaled
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	pub fn is_zero(&self) -> bool {
		self.unscaled.is_zero()
	}

	fn rescaled(&self, scale: u32) -> BigInt {
		if scale <= self.scale {
			return self.unscaled.clone();
		}
		&self.unscaled * BigInt::from(10u8).pow(scale - self.scale)
	}
}

impl PartialEq for ScaledDecimal {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for ScaledDecimal {}

impl PartialOrd for ScaledDecimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ScaledDecimal {
	fn cmp(&self, other: &Self) -> Ordering {
		let scale = self.scale.max(other.scale);
		self.rescaled(scale).cmp(&other.rescaled(scale))
	}
}

impl Display for ScaledDecimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = self.unscaled.abs().to_str_radix(10);
		let sign = if self.unscaled.sign() == Sign::Minus {
			"-"
		} else {
			""
		};
		let scale = self.scale as usize;
		if scale == 0 {
			return write!(f, "{}{}", sign, digits);
		}
		if digits.len() <= scale {
			return write!(f, "{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits);
		}
		let (integral, fractional) = digits.split_at(digits.len() - scale);
		write!(f, "{}{}.{}", sign, integral, fractional)
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(ScaledDecimal::new(BigInt::from(12345), 2).to_string(), "123.45");
		assert_eq!(ScaledDecimal::new(BigInt::from(-5), 3).to_string(), "-0.005");
		assert_eq!(ScaledDecimal::new(BigInt::from(-12), 0).to_string(), "-12");
		assert_eq!(ScaledDecimal::new(BigInt::from(0), 2).to_string(), "0.00");
	}

	#[test]
	fn test_from_big_folds_negative_exponent() {
		let big = BigDecimal::from_str("1.5e3").unwrap();
		let scaled = ScaledDecimal::from_big(&big).unwrap();
		assert_eq!(scaled.scale(), 0);
		assert_eq!(scaled.to_string(), "1500");
	}

	#[test]
	fn test_comparison_ignores_scale() {
		let a = ScaledDecimal::new(BigInt::from(150), 2);
		let b = ScaledDecimal::new(BigInt::from(15), 1);
		let c = ScaledDecimal::new(BigInt::from(2), 0);
		assert_eq!(a, b);
		assert!(a < c);
		assert!(ScaledDecimal::from_i64(-1) < ScaledDecimal::from_i64(0));
	}

	#[test]
	fn test_to_big() {
		let scaled = ScaledDecimal::new(BigInt::from(12345), 2);
		assert_eq!(scaled.to_big(), BigDecimal::from_str("123.45").unwrap());
	}
}
