// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::error::{TemporalKind, TypeError};

pub mod internal;
pub mod render;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.code)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

fn temporal_code(kind: TemporalKind) -> &'static str {
	match kind {
		TemporalKind::InvalidDateFormat => "TEMPORAL_001",
		TemporalKind::InvalidTimeFormat => "TEMPORAL_002",
		TemporalKind::InvalidTimestampFormat => "TEMPORAL_003",
		TemporalKind::InvalidYear => "TEMPORAL_004",
		TemporalKind::InvalidMonth => "TEMPORAL_005",
		TemporalKind::InvalidDay => "TEMPORAL_006",
		TemporalKind::InvalidHour => "TEMPORAL_007",
		TemporalKind::InvalidMinute => "TEMPORAL_008",
		TemporalKind::InvalidSecond => "TEMPORAL_009",
		TemporalKind::InvalidFraction => "TEMPORAL_010",
		TemporalKind::InvalidDayNumber => "TEMPORAL_011",
	}
}

fn temporal_help(kind: TemporalKind) -> &'static str {
	match kind {
		TemporalKind::InvalidDateFormat
		| TemporalKind::InvalidYear
		| TemporalKind::InvalidMonth
		| TemporalKind::InvalidDay => "use yyyy-mm-dd, mm/dd/yyyy or dd.mm.yyyy (e.g., 2024-03-15)",
		TemporalKind::InvalidTimeFormat
		| TemporalKind::InvalidHour
		| TemporalKind::InvalidMinute
		| TemporalKind::InvalidSecond => "use hh:mm:ss, hh.mm.ss or hh:mm AM (e.g., 14:30:00)",
		TemporalKind::InvalidTimestampFormat | TemporalKind::InvalidFraction => {
			"use yyyy-mm-dd hh:mm:ss[.fffffffff] or yyyy-mm-dd-hh.mm.ss[.ffffff]"
		}
		TemporalKind::InvalidDayNumber => "day numbers range from 1 (0001-01-01) to 3652059 (9999-12-31)",
	}
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::Temporal {
				kind,
				input,
				..
			} => Diagnostic {
				code: temporal_code(kind).to_string(),
				message,
				label: Some(format!("'{}' is not a valid temporal literal", input)),
				help: Some(temporal_help(kind).to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidNumber {
				target,
				input,
			} => Diagnostic {
				code: "NUMBER_001".to_string(),
				message,
				label: Some(format!("'{}' cannot be parsed as {}", input, target)),
				help: Some("use plain decimal notation, optionally with an exponent (e.g., -12.50, 1.5E3)"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::NumberOutOfRange {
				target,
				value,
			} => Diagnostic {
				code: "NUMBER_002".to_string(),
				message,
				label: Some(format!("{} is outside the domain of {}", value, target)),
				help: None,
				notes: vec!["NaN and infinite values are not valid SQL numbers".to_string()],
				cause: None,
			},

			TypeError::ReuseMismatch {
				expected,
				found,
			} => Diagnostic {
				code: "VALUE_001".to_string(),
				message,
				label: Some(format!("expected a {} value to reuse, got {}", expected, found)),
				help: Some("pass a value of the same concrete type, or none to allocate a new one"
					.to_string()),
				notes: vec!["reusing a value of a different type is a programming error".to_string()],
				cause: None,
			},

			TypeError::DecimalKindMismatch {
				expected,
				found,
			} => Diagnostic {
				code: "VALUE_002".to_string(),
				message,
				label: Some(format!("expected a {} decimal, got {}", expected, found)),
				help: Some("build decimals through the booted factory so every value shares one representation"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::UnknownFormatId {
				format_id,
			} => Diagnostic {
				code: "FORMAT_001".to_string(),
				message,
				label: Some(format!("format id {} is not known to this version", format_id)),
				help: Some("the stored data is corrupt or was written by a newer version".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::UnsupportedOperand {
				function,
				operand,
			} => Diagnostic {
				code: "FUNCTION_001".to_string(),
				message,
				label: Some(format!("{} operand of {}", operand, function)),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::NotBooted => Diagnostic {
				code: "LIFECYCLE_001".to_string(),
				message,
				label: None,
				help: Some("boot the value factory before constructing or resolving decimal values"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::AlreadyBooted => Diagnostic {
				code: "LIFECYCLE_002".to_string(),
				message,
				label: None,
				help: Some("boot is a one-time initialization".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidLocale {
				..
			} => Diagnostic {
				code: "COLLATION_001".to_string(),
				message,
				label: None,
				help: Some("use a BCP-47 language tag (e.g., en-US, de, sv-SE)".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::LocaleAlreadySet {
				..
			} => Diagnostic {
				code: "COLLATION_002".to_string(),
				message,
				label: None,
				help: None,
				notes: vec!["the database locale is set once, when the database is opened".to_string()],
				cause: None,
			},

			TypeError::CollatorUnavailable {
				reason,
				..
			} => Diagnostic {
				code: "COLLATION_003".to_string(),
				message,
				label: None,
				help: None,
				notes: vec![reason],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{DecimalKind, FormatId, Type};

	#[test]
	fn test_reuse_mismatch_code() {
		let diagnostic = TypeError::ReuseMismatch {
			expected: Type::Integer,
			found: Type::VarChar,
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "VALUE_001");
		assert_eq!(diagnostic.message, "cannot reuse a VARCHAR value as INTEGER");
	}

	#[test]
	fn test_decimal_kind_mismatch_code() {
		let diagnostic = TypeError::DecimalKindMismatch {
			expected: DecimalKind::Big,
			found: DecimalKind::Scaled,
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "VALUE_002");
		assert_eq!(diagnostic.message, "cannot store a scaled decimal in a big decimal value");
	}

	#[test]
	fn test_unknown_format_id_code() {
		let diagnostic = TypeError::UnknownFormatId {
			format_id: FormatId(9999),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "FORMAT_001");
		assert!(diagnostic.message.contains("9999"));
	}

	#[test]
	fn test_temporal_codes_are_distinct() {
		let kinds = [
			TemporalKind::InvalidDateFormat,
			TemporalKind::InvalidTimeFormat,
			TemporalKind::InvalidTimestampFormat,
			TemporalKind::InvalidYear,
			TemporalKind::InvalidMonth,
			TemporalKind::InvalidDay,
			TemporalKind::InvalidHour,
			TemporalKind::InvalidMinute,
			TemporalKind::InvalidSecond,
			TemporalKind::InvalidFraction,
			TemporalKind::InvalidDayNumber,
		];
		let mut codes: Vec<_> = kinds.iter().map(|k| temporal_code(*k)).collect();
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), kinds.len());
	}
}
