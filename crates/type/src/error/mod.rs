// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;
mod r#macro;

pub use diagnostic::{Diagnostic, IntoDiagnostic, render::DefaultRenderer};

use crate::value::{DecimalKind, FormatId, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

/// Which part of a temporal literal could not be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
	InvalidDateFormat,
	InvalidTimeFormat,
	InvalidTimestampFormat,
	InvalidYear,
	InvalidMonth,
	InvalidDay,
	InvalidHour,
	InvalidMinute,
	InvalidSecond,
	InvalidFraction,
	InvalidDayNumber,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("{message}")]
	Temporal {
		kind: TemporalKind,
		message: String,
		input: String,
	},

	#[error("'{input}' is not a valid {target}")]
	InvalidNumber {
		target: Type,
		input: String,
	},

	#[error("{value} cannot be represented as {target}")]
	NumberOutOfRange {
		target: Type,
		value: String,
	},

	#[error("cannot reuse a {found} value as {expected}")]
	ReuseMismatch {
		expected: Type,
		found: Type,
	},

	#[error("cannot store a {found} decimal in a {expected} decimal value")]
	DecimalKindMismatch {
		expected: DecimalKind,
		found: DecimalKind,
	},

	#[error("no value type is registered for format id {format_id}")]
	UnknownFormatId {
		format_id: FormatId,
	},

	#[error("{function} cannot be applied to a {operand} value")]
	UnsupportedOperand {
		function: &'static str,
		operand: Type,
	},

	#[error("the decimal implementation has not been booted")]
	NotBooted,

	#[error("the decimal implementation has already been booted")]
	AlreadyBooted,

	#[error("'{locale}' is not a valid locale")]
	InvalidLocale {
		locale: String,
	},

	#[error("the database locale has already been set to '{current}'")]
	LocaleAlreadySet {
		current: String,
	},

	#[error("no collator is available for locale '{locale}'")]
	CollatorUnavailable {
		locale: String,
		reason: String,
	},
}
