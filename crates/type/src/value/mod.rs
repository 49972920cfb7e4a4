// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

pub mod decimal;
mod format_id;
mod location;
mod ordered_f32;
mod ordered_f64;
mod set;
pub mod temporal;
mod text;
mod r#type;
mod user;
mod xml;

pub use decimal::{Decimal, DecimalBackend, DecimalKind, IntoDecimal};
pub use format_id::FormatId;
pub use location::RowLocation;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use temporal::{Date, Time, Timestamp};
pub use text::Text;
pub use r#type::{GetType, Type};
pub use user::UserObject;
pub use xml::Xml;

use crate::collation::Collator;

/// A SQL datum of one concrete type. Every variant can hold SQL NULL, and a
/// null still knows its type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Boolean(Option<bool>),
	TinyInt(Option<i8>),
	SmallInt(Option<i16>),
	Integer(Option<i32>),
	BigInt(Option<i64>),
	Real(Option<OrderedF32>),
	Double(Option<OrderedF64>),
	/// Tagged with the representation that built it, null or not
	Decimal {
		kind: DecimalKind,
		value: Option<Decimal>,
	},
	Char(Text),
	VarChar(Text),
	LongVarChar(Text),
	Clob(Text),
	NationalChar(Text),
	NationalVarChar(Text),
	NationalLongVarChar(Text),
	NClob(Text),
	Bit(Option<Vec<u8>>),
	VarBit(Option<Vec<u8>>),
	LongVarBit(Option<Vec<u8>>),
	Blob(Option<Vec<u8>>),
	Date(Option<Date>),
	Time(Option<Time>),
	Timestamp(Option<Timestamp>),
	Ref(Option<RowLocation>),
	UserType(Option<UserObject>),
	Xml(Option<Xml>),
	RowLocation(Option<RowLocation>),
}

impl Value {
	/// A null of `ty`. DECIMAL nulls are of the `Big` kind, use
	/// [`Value::null_decimal`] for another representation.
	pub fn null_of(ty: Type) -> Value {
		match ty {
			Type::Boolean => Value::Boolean(None),
			Type::TinyInt => Value::TinyInt(None),
			Type::SmallInt => Value::SmallInt(None),
			Type::Integer => Value::Integer(None),
			Type::BigInt => Value::BigInt(None),
			Type::Real => Value::Real(None),
			Type::Double => Value::Double(None),
			Type::Decimal => Value::null_decimal(DecimalKind::Big),
			Type::Char => Value::Char(Text::null(None)),
			Type::VarChar => Value::VarChar(Text::null(None)),
			Type::LongVarChar => Value::LongVarChar(Text::null(None)),
			Type::Clob => Value::Clob(Text::null(None)),
			Type::NationalChar => Value::NationalChar(Text::null(None)),
			Type::NationalVarChar => Value::NationalVarChar(Text::null(None)),
			Type::NationalLongVarChar => Value::NationalLongVarChar(Text::null(None)),
			Type::NClob => Value::NClob(Text::null(None)),
			Type::Bit => Value::Bit(None),
			Type::VarBit => Value::VarBit(None),
			Type::LongVarBit => Value::LongVarBit(None),
			Type::Blob => Value::Blob(None),
			Type::Date => Value::Date(None),
			Type::Time => Value::Time(None),
			Type::Timestamp => Value::Timestamp(None),
			Type::Ref => Value::Ref(None),
			Type::UserType => Value::UserType(None),
			Type::Xml => Value::Xml(None),
			Type::RowLocation => Value::RowLocation(None),
		}
	}

	pub fn null_decimal(kind: DecimalKind) -> Value {
		Value::Decimal {
			kind,
			value: None,
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Boolean(_) => Type::Boolean,
			Value::TinyInt(_) => Type::TinyInt,
			Value::SmallInt(_) => Type::SmallInt,
			Value::Integer(_) => Type::Integer,
			Value::BigInt(_) => Type::BigInt,
			Value::Real(_) => Type::Real,
			Value::Double(_) => Type::Double,
			Value::Decimal {
				..
			} => Type::Decimal,
			Value::Char(_) => Type::Char,
			Value::VarChar(_) => Type::VarChar,
			Value::LongVarChar(_) => Type::LongVarChar,
			Value::Clob(_) => Type::Clob,
			Value::NationalChar(_) => Type::NationalChar,
			Value::NationalVarChar(_) => Type::NationalVarChar,
			Value::NationalLongVarChar(_) => Type::NationalLongVarChar,
			Value::NClob(_) => Type::NClob,
			Value::Bit(_) => Type::Bit,
			Value::VarBit(_) => Type::VarBit,
			Value::LongVarBit(_) => Type::LongVarBit,
			Value::Blob(_) => Type::Blob,
			Value::Date(_) => Type::Date,
			Value::Time(_) => Type::Time,
			Value::Timestamp(_) => Type::Timestamp,
			Value::Ref(_) => Type::Ref,
			Value::UserType(_) => Type::UserType,
			Value::Xml(_) => Type::Xml,
			Value::RowLocation(_) => Type::RowLocation,
		}
	}

	pub fn format_id(&self) -> FormatId {
		self.get_type().format_id()
	}

	pub fn is_null(&self) -> bool {
		match self {
			Value::Boolean(v) => v.is_none(),
			Value::TinyInt(v) => v.is_none(),
			Value::SmallInt(v) => v.is_none(),
			Value::Integer(v) => v.is_none(),
			Value::BigInt(v) => v.is_none(),
			Value::Real(v) => v.is_none(),
			Value::Double(v) => v.is_none(),
			Value::Decimal {
				value,
				..
			} => value.is_none(),
			Value::Char(t)
			| Value::VarChar(t)
			| Value::LongVarChar(t)
			| Value::Clob(t)
			| Value::NationalChar(t)
			| Value::NationalVarChar(t)
			| Value::NationalLongVarChar(t)
			| Value::NClob(t) => t.is_null(),
			Value::Bit(v) | Value::VarBit(v) | Value::LongVarBit(v) | Value::Blob(v) => v.is_none(),
			Value::Date(v) => v.is_none(),
			Value::Time(v) => v.is_none(),
			Value::Timestamp(v) => v.is_none(),
			Value::Ref(v) | Value::RowLocation(v) => v.is_none(),
			Value::UserType(v) => v.is_none(),
			Value::Xml(v) => v.is_none(),
		}
	}

	/// A fresh null of the same concrete type, keeping the collator and the
	/// decimal representation.
	pub fn null_like(&self) -> Value {
		match self {
			Value::Decimal {
				kind,
				..
			} => Value::null_decimal(*kind),
			Value::Char(t) => Value::Char(Text::null(t.collator().cloned())),
			Value::VarChar(t) => Value::VarChar(Text::null(t.collator().cloned())),
			Value::LongVarChar(t) => Value::LongVarChar(Text::null(t.collator().cloned())),
			Value::Clob(t) => Value::Clob(Text::null(t.collator().cloned())),
			Value::NationalChar(t) => Value::NationalChar(Text::null(t.collator().cloned())),
			Value::NationalVarChar(t) => Value::NationalVarChar(Text::null(t.collator().cloned())),
			Value::NationalLongVarChar(t) => Value::NationalLongVarChar(Text::null(t.collator().cloned())),
			Value::NClob(t) => Value::NClob(Text::null(t.collator().cloned())),
			other => Value::null_of(other.get_type()),
		}
	}

	fn as_text(&self) -> Option<&Text> {
		match self {
			Value::Char(t)
			| Value::VarChar(t)
			| Value::LongVarChar(t)
			| Value::Clob(t)
			| Value::NationalChar(t)
			| Value::NationalVarChar(t)
			| Value::NationalLongVarChar(t)
			| Value::NClob(t) => Some(t),
			_ => None,
		}
	}

	pub(crate) fn as_text_mut(&mut self) -> Option<&mut Text> {
		match self {
			Value::Char(t)
			| Value::VarChar(t)
			| Value::LongVarChar(t)
			| Value::Clob(t)
			| Value::NationalChar(t)
			| Value::NationalVarChar(t)
			| Value::NationalLongVarChar(t)
			| Value::NClob(t) => Some(t),
			_ => None,
		}
	}

	/// The collator of character data, `None` for code point order and for
	/// every other type.
	pub fn collator(&self) -> Option<&Collator> {
		self.as_text().and_then(Text::collator)
	}

	/// The same character value ordered by `collator`. Other values are
	/// returned unchanged.
	pub fn with_collator(mut self, collator: Option<Collator>) -> Value {
		if let Some(text) = self.as_text_mut() {
			text.set_collator(collator);
		}
		self
	}

	pub fn decimal_kind(&self) -> Option<DecimalKind> {
		match self {
			Value::Decimal {
				kind,
				..
			} => Some(*kind),
			_ => None,
		}
	}
}

impl Value {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => *v,
			_ => None,
		}
	}

	pub fn as_i8(&self) -> Option<i8> {
		match self {
			Value::TinyInt(v) => *v,
			_ => None,
		}
	}

	pub fn as_i16(&self) -> Option<i16> {
		match self {
			Value::TinyInt(v) => v.map(i16::from),
			Value::SmallInt(v) => *v,
			_ => None,
		}
	}

	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Value::TinyInt(v) => v.map(i32::from),
			Value::SmallInt(v) => v.map(i32::from),
			Value::Integer(v) => *v,
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::TinyInt(v) => v.map(i64::from),
			Value::SmallInt(v) => v.map(i64::from),
			Value::Integer(v) => v.map(i64::from),
			Value::BigInt(v) => *v,
			_ => None,
		}
	}

	pub fn as_f32(&self) -> Option<f32> {
		match self {
			Value::Real(v) => v.map(|v| *v),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Real(v) => v.map(|v| *v as f64),
			Value::Double(v) => v.map(|v| *v),
			_ => None,
		}
	}

	pub fn as_decimal(&self) -> Option<&Decimal> {
		match self {
			Value::Decimal {
				value,
				..
			} => value.as_ref(),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		self.as_text().and_then(Text::as_str)
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Value::Bit(v) | Value::VarBit(v) | Value::LongVarBit(v) | Value::Blob(v) => v.as_deref(),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<Date> {
		match self {
			Value::Date(v) => *v,
			_ => None,
		}
	}

	pub fn as_time(&self) -> Option<Time> {
		match self {
			Value::Time(v) => *v,
			_ => None,
		}
	}

	pub fn as_timestamp(&self) -> Option<Timestamp> {
		match self {
			Value::Timestamp(v) => *v,
			_ => None,
		}
	}

	pub fn as_row_location(&self) -> Option<RowLocation> {
		match self {
			Value::Ref(v) | Value::RowLocation(v) => *v,
			_ => None,
		}
	}

	pub fn as_user_object(&self) -> Option<&UserObject> {
		match self {
			Value::UserType(v) => v.as_ref(),
			_ => None,
		}
	}

	pub fn as_xml(&self) -> Option<&Xml> {
		match self {
			Value::Xml(v) => v.as_ref(),
			_ => None,
		}
	}
}

/// Only non null values of the same concrete type are ordered.
impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::TinyInt(l), Value::TinyInt(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::SmallInt(l), Value::SmallInt(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Integer(l), Value::Integer(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::BigInt(l), Value::BigInt(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Real(l), Value::Real(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Double(l), Value::Double(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(
				Value::Decimal {
					value: l,
					..
				},
				Value::Decimal {
					value: r,
					..
				},
			) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Char(l), Value::Char(r))
			| (Value::VarChar(l), Value::VarChar(r))
			| (Value::LongVarChar(l), Value::LongVarChar(r))
			| (Value::Clob(l), Value::Clob(r))
			| (Value::NationalChar(l), Value::NationalChar(r))
			| (Value::NationalVarChar(l), Value::NationalVarChar(r))
			| (Value::NationalLongVarChar(l), Value::NationalLongVarChar(r))
			| (Value::NClob(l), Value::NClob(r)) => l.compare(r),
			(Value::Bit(l), Value::Bit(r))
			| (Value::VarBit(l), Value::VarBit(r))
			| (Value::LongVarBit(l), Value::LongVarBit(r))
			| (Value::Blob(l), Value::Blob(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Date(l), Value::Date(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Time(l), Value::Time(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Timestamp(l), Value::Timestamp(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			(Value::Ref(l), Value::Ref(r)) | (Value::RowLocation(l), Value::RowLocation(r)) => {
				l.as_ref()?.partial_cmp(r.as_ref()?)
			}
			(Value::Xml(l), Value::Xml(r)) => l.as_ref()?.partial_cmp(r.as_ref()?),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_null() {
			return f.write_str("NULL");
		}
		match self {
			Value::Boolean(Some(v)) => Display::fmt(v, f),
			Value::TinyInt(Some(v)) => Display::fmt(v, f),
			Value::SmallInt(Some(v)) => Display::fmt(v, f),
			Value::Integer(Some(v)) => Display::fmt(v, f),
			Value::BigInt(Some(v)) => Display::fmt(v, f),
			Value::Real(Some(v)) => Display::fmt(v, f),
			Value::Double(Some(v)) => Display::fmt(v, f),
			Value::Decimal {
				value: Some(v),
				..
			} => Display::fmt(v, f),
			Value::Bit(Some(bytes))
			| Value::VarBit(Some(bytes))
			| Value::LongVarBit(Some(bytes))
			| Value::Blob(Some(bytes)) => {
				for byte in bytes {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
			Value::Date(Some(v)) => Display::fmt(v, f),
			Value::Time(Some(v)) => Display::fmt(v, f),
			Value::Timestamp(Some(v)) => Display::fmt(v, f),
			Value::Ref(Some(v)) | Value::RowLocation(Some(v)) => Display::fmt(v, f),
			Value::UserType(Some(v)) => Display::fmt(v, f),
			Value::Xml(Some(v)) => Display::fmt(v, f),
			other => match other.as_text() {
				Some(text) => Display::fmt(text, f),
				None => f.write_str("NULL"),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collation::{CollationStrength, parse_locale};

	#[test]
	fn test_null_of_every_type() {
		for ty in Type::ALL {
			let value = Value::null_of(ty);
			assert!(value.is_null(), "{ty}");
			assert_eq!(value.get_type(), ty);
			assert_eq!(value.format_id(), ty.format_id());
			assert_eq!(value.to_string(), "NULL");
		}
	}

	#[test]
	fn test_null_like_keeps_identity() {
		let collator = Collator::new(&parse_locale("en").unwrap(), CollationStrength::Default).unwrap();
		let value = Value::NationalVarChar(Text::new("abc", Some(collator.clone())));
		let null = value.null_like();
		assert!(null.is_null());
		assert_eq!(null.get_type(), Type::NationalVarChar);
		assert_eq!(null.collator(), Some(&collator));

		let decimal = Value::null_decimal(DecimalKind::Scaled);
		assert_eq!(decimal.null_like().decimal_kind(), Some(DecimalKind::Scaled));
	}

	#[test]
	fn test_ordering_requires_same_type() {
		assert!(Value::Integer(Some(1)) < Value::Integer(Some(2)));
		assert_eq!(Value::Integer(Some(1)).partial_cmp(&Value::BigInt(Some(2))), None);
		assert_eq!(Value::Integer(None).partial_cmp(&Value::Integer(Some(2))), None);
	}

	#[test]
	fn test_character_ordering_uses_collator() {
		assert!(Value::VarChar(Text::new("B", None)) < Value::VarChar(Text::new("a", None)));

		let collator = Collator::new(&parse_locale("en").unwrap(), CollationStrength::Default).unwrap();
		let upper = Value::NationalVarChar(Text::new("B", Some(collator.clone())));
		let lower = Value::NationalVarChar(Text::new("a", Some(collator)));
		assert!(upper > lower);
	}

	#[test]
	fn test_widening_accessors() {
		let value = Value::SmallInt(Some(-3));
		assert_eq!(value.as_i16(), Some(-3));
		assert_eq!(value.as_i32(), Some(-3));
		assert_eq!(value.as_i64(), Some(-3));
		assert_eq!(value.as_i8(), None);
		assert_eq!(Value::Real(Some(OrderedF32::try_from(1.5f32).unwrap())).as_f64(), Some(1.5));
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Boolean(Some(true)).to_string(), "true");
		assert_eq!(Value::VarBit(Some(vec![0xca, 0xfe])).to_string(), "cafe");
		assert_eq!(Value::Char(Text::new("x", None)).to_string(), "x");
		assert_eq!(Value::Date(Date::new(2024, 1, 2)).to_string(), "2024-01-02");
	}

	#[test]
	fn test_with_collator_only_touches_character_data() {
		let collator = Collator::new(&parse_locale("de").unwrap(), CollationStrength::Primary).unwrap();
		let value = Value::null_of(Type::VarChar).with_collator(Some(collator.clone()));
		assert_eq!(value.collator(), Some(&collator));

		let value = Value::null_of(Type::Integer).with_collator(Some(collator));
		assert_eq!(value.collator(), None);
	}
}
