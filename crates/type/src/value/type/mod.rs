// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

use crate::value::FormatId;

/// All concrete SQL value types
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	TinyInt,
	/// A 2-byte signed integer
	SmallInt,
	/// A 4-byte signed integer
	Integer,
	/// An 8-byte signed integer
	BigInt,
	/// A 4-byte floating point
	Real,
	/// An 8-byte floating point
	Double,
	/// An exact numeric, represented by the booted decimal implementation
	Decimal,
	/// Fixed length character data, blank padded
	Char,
	/// Varying length character data
	VarChar,
	/// Long varying length character data
	LongVarChar,
	/// Character large object
	Clob,
	/// Fixed length character data ordered by the database locale
	NationalChar,
	/// Varying length character data ordered by the database locale
	NationalVarChar,
	/// Long varying length character data ordered by the database locale
	NationalLongVarChar,
	/// Character large object ordered by the database locale
	NClob,
	/// Fixed length binary data
	Bit,
	/// Varying length binary data
	VarBit,
	/// Long varying length binary data
	LongVarBit,
	/// Binary large object
	Blob,
	/// A calendar date (year, month, day)
	Date,
	/// A time of day with second precision
	Time,
	/// A date and time of day with nanosecond precision
	Timestamp,
	/// A reference to a stored row
	Ref,
	/// An opaque user defined object
	UserType,
	/// An XML document
	Xml,
	/// The storage location of a heap row
	RowLocation,
}

impl Type {
	pub const ALL: [Type; 27] = [
		Type::Boolean,
		Type::TinyInt,
		Type::SmallInt,
		Type::Integer,
		Type::BigInt,
		Type::Real,
		Type::Double,
		Type::Decimal,
		Type::Char,
		Type::VarChar,
		Type::LongVarChar,
		Type::Clob,
		Type::NationalChar,
		Type::NationalVarChar,
		Type::NationalLongVarChar,
		Type::NClob,
		Type::Bit,
		Type::VarBit,
		Type::LongVarBit,
		Type::Blob,
		Type::Date,
		Type::Time,
		Type::Timestamp,
		Type::Ref,
		Type::UserType,
		Type::Xml,
		Type::RowLocation,
	];

	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::TinyInt
				| Type::SmallInt | Type::Integer
				| Type::BigInt | Type::Real
				| Type::Double | Type::Decimal
		)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::TinyInt | Type::SmallInt | Type::Integer | Type::BigInt)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Real | Type::Double)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	/// Character types are the only collation sensitive types
	pub fn is_character(&self) -> bool {
		matches!(
			self,
			Type::Char
				| Type::VarChar | Type::LongVarChar
				| Type::Clob | Type::NationalChar
				| Type::NationalVarChar
				| Type::NationalLongVarChar
				| Type::NClob
		)
	}

	/// National character types bind the database collator when constructed
	pub fn is_national(&self) -> bool {
		matches!(self, Type::NationalChar | Type::NationalVarChar | Type::NationalLongVarChar | Type::NClob)
	}

	pub fn is_binary(&self) -> bool {
		matches!(self, Type::Bit | Type::VarBit | Type::LongVarBit | Type::Blob)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::Time | Type::Timestamp)
	}

	pub fn is_large_object(&self) -> bool {
		matches!(self, Type::Clob | Type::NClob | Type::Blob)
	}

	/// The blank padded fixed length types
	pub fn is_fixed_length(&self) -> bool {
		matches!(self, Type::Char | Type::NationalChar | Type::Bit)
	}
}

impl Type {
	/// The stored format id of this type. Part of the on-disk contract.
	pub fn format_id(&self) -> FormatId {
		match self {
			Type::Boolean => FormatId::BOOLEAN,
			Type::TinyInt => FormatId::TINYINT,
			Type::SmallInt => FormatId::SMALLINT,
			Type::Integer => FormatId::INTEGER,
			Type::BigInt => FormatId::BIGINT,
			Type::Real => FormatId::REAL,
			Type::Double => FormatId::DOUBLE,
			Type::Decimal => FormatId::DECIMAL,
			Type::Char => FormatId::CHAR,
			Type::VarChar => FormatId::VARCHAR,
			Type::LongVarChar => FormatId::LONGVARCHAR,
			Type::Clob => FormatId::CLOB,
			Type::NationalChar => FormatId::NATIONAL_CHAR,
			Type::NationalVarChar => FormatId::NATIONAL_VARCHAR,
			Type::NationalLongVarChar => FormatId::NATIONAL_LONGVARCHAR,
			Type::NClob => FormatId::NCLOB,
			Type::Bit => FormatId::BIT,
			Type::VarBit => FormatId::VARBIT,
			Type::LongVarBit => FormatId::LONGVARBIT,
			Type::Blob => FormatId::BLOB,
			Type::Date => FormatId::DATE,
			Type::Time => FormatId::TIME,
			Type::Timestamp => FormatId::TIMESTAMP,
			Type::Ref => FormatId::REF,
			Type::UserType => FormatId::USERTYPE,
			Type::Xml => FormatId::XML,
			Type::RowLocation => FormatId::HEAP_ROW_LOCATION,
		}
	}

	/// Direct lookup of the type stored under `format_id`. `None` for ids
	/// this version does not know.
	pub fn from_format_id(format_id: FormatId) -> Option<Type> {
		let ty = match format_id {
			FormatId::BOOLEAN => Type::Boolean,
			FormatId::TINYINT => Type::TinyInt,
			FormatId::SMALLINT => Type::SmallInt,
			FormatId::INTEGER => Type::Integer,
			FormatId::BIGINT => Type::BigInt,
			FormatId::REAL => Type::Real,
			FormatId::DOUBLE => Type::Double,
			FormatId::DECIMAL => Type::Decimal,
			FormatId::CHAR => Type::Char,
			FormatId::VARCHAR => Type::VarChar,
			FormatId::LONGVARCHAR => Type::LongVarChar,
			FormatId::CLOB => Type::Clob,
			FormatId::NATIONAL_CHAR => Type::NationalChar,
			FormatId::NATIONAL_VARCHAR => Type::NationalVarChar,
			FormatId::NATIONAL_LONGVARCHAR => Type::NationalLongVarChar,
			FormatId::NCLOB => Type::NClob,
			FormatId::BIT => Type::Bit,
			FormatId::VARBIT => Type::VarBit,
			FormatId::LONGVARBIT => Type::LongVarBit,
			FormatId::BLOB => Type::Blob,
			FormatId::DATE => Type::Date,
			FormatId::TIME => Type::Time,
			FormatId::TIMESTAMP => Type::Timestamp,
			FormatId::REF => Type::Ref,
			FormatId::USERTYPE => Type::UserType,
			FormatId::XML => Type::Xml,
			FormatId::HEAP_ROW_LOCATION => Type::RowLocation,
			_ => return None,
		};
		Some(ty)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::TinyInt => f.write_str("TINYINT"),
			Type::SmallInt => f.write_str("SMALLINT"),
			Type::Integer => f.write_str("INTEGER"),
			Type::BigInt => f.write_str("BIGINT"),
			Type::Real => f.write_str("REAL"),
			Type::Double => f.write_str("DOUBLE"),
			Type::Decimal => f.write_str("DECIMAL"),
			Type::Char => f.write_str("CHAR"),
			Type::VarChar => f.write_str("VARCHAR"),
			Type::LongVarChar => f.write_str("LONG VARCHAR"),
			Type::Clob => f.write_str("CLOB"),
			Type::NationalChar => f.write_str("NATIONAL CHAR"),
			Type::NationalVarChar => f.write_str("NATIONAL VARCHAR"),
			Type::NationalLongVarChar => f.write_str("LONG NVARCHAR"),
			Type::NClob => f.write_str("NCLOB"),
			Type::Bit => f.write_str("CHAR FOR BIT DATA"),
			Type::VarBit => f.write_str("VARCHAR FOR BIT DATA"),
			Type::LongVarBit => f.write_str("LONG VARCHAR FOR BIT DATA"),
			Type::Blob => f.write_str("BLOB"),
			Type::Date => f.write_str("DATE"),
			Type::Time => f.write_str("TIME"),
			Type::Timestamp => f.write_str("TIMESTAMP"),
			Type::Ref => f.write_str("REF"),
			Type::UserType => f.write_str("JAVA_OBJECT"),
			Type::Xml => f.write_str("XML"),
			Type::RowLocation => f.write_str("ROW LOCATION"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_format_id_round_trip_for_every_type() {
		for ty in Type::ALL {
			assert_eq!(Type::from_format_id(ty.format_id()), Some(ty), "{ty}");
		}
	}

	#[test]
	fn test_format_ids_are_unique() {
		let ids: HashSet<_> = Type::ALL.iter().map(|t| t.format_id()).collect();
		assert_eq!(ids.len(), Type::ALL.len());
	}

	#[test]
	fn test_unknown_format_id() {
		assert_eq!(Type::from_format_id(FormatId(0)), None);
		assert_eq!(Type::from_format_id(FormatId(u16::MAX)), None);
	}

	#[test]
	fn test_categories() {
		assert!(Type::NClob.is_character());
		assert!(Type::NClob.is_national());
		assert!(Type::NClob.is_large_object());
		assert!(!Type::Clob.is_national());
		assert!(!Type::Blob.is_character());
		assert!(Type::Decimal.is_number());
		assert!(!Type::Decimal.is_integer());
		assert!(Type::Timestamp.is_temporal());
	}
}
