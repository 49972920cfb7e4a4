// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use collation::{CollationStrength, CollationType, Collator, Locale};
pub use error::{Diagnostic, Error, IntoDiagnostic, TemporalKind, TypeError};
pub use value::{
	Date, Decimal, DecimalBackend, DecimalKind, FormatId, GetType, IntoDecimal, OrderedF32, OrderedF64,
	RowLocation, Text, Time, Timestamp, Type, UserObject, Value, Xml,
};

pub mod collation;
pub mod error;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
