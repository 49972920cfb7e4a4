// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal;

use crate::{
	error::{Error, TypeError},
	return_error,
	value::Type,
};

/// Parses decimal text into an arbitrary precision decimal. Surrounding
/// whitespace is ignored and `_` may be used as a digit separator.
pub fn parse_decimal(text: &str) -> Result<BigDecimal, Error> {
	let needs_trimming = text.as_bytes().first().is_some_and(|b| b.is_ascii_whitespace())
		|| text.as_bytes().last().is_some_and(|b| b.is_ascii_whitespace());
	let has_underscores = text.as_bytes().contains(&b'_');

	let value = match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(text),
		(true, false) => Cow::Borrowed(text.trim()),
		(false, true) => Cow::Owned(text.replace('_', "")),
		(true, true) => Cow::Owned(text.trim().replace('_', "")),
	};

	if value.is_empty() {
		return_error!(TypeError::InvalidNumber {
			target: Type::Decimal,
			input: text.to_string(),
		});
	}

	BigDecimal::from_str(&value).map_err(|_| {
		crate::error!(TypeError::InvalidNumber {
			target: Type::Decimal,
			input: text.to_string(),
		})
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_decimal_integer() {
		assert_eq!(parse_decimal("123").unwrap().to_plain_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		assert_eq!(parse_decimal("123.45").unwrap().to_plain_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_with_underscores() {
		assert_eq!(parse_decimal(" 1_234.56 ").unwrap().to_plain_string(), "1234.56");
	}

	#[test]
	fn test_parse_decimal_negative() {
		assert_eq!(parse_decimal("-123.45").unwrap().to_plain_string(), "-123.45");
	}

	#[test]
	fn test_parse_decimal_scientific_notation() {
		assert_eq!(parse_decimal("1.23e2").unwrap().to_plain_string(), "123");
	}

	#[test]
	fn test_parse_decimal_empty() {
		let err = parse_decimal("  ").unwrap_err();
		assert_eq!(err.code, "NUMBER_001");
	}

	#[test]
	fn test_parse_decimal_invalid() {
		assert!(parse_decimal("not_a_number").is_err());
		assert!(parse_decimal("1.2.3").is_err());
	}
}
