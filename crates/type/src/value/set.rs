// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Setters that overwrite a value in place. A setter only accepts the
//! variants that can hold its payload; anything else is a reuse contract
//! violation and leaves the value untouched.

use tracing::error;

use crate::{
	error::{Error, TypeError},
	value::{
		Date, Decimal, GetType, OrderedF32, OrderedF64, RowLocation, Time, Timestamp, Type, UserObject, Value, Xml,
	},
};

fn mismatch(expected: Type, found: Type) -> Error {
	error!(%expected, %found, "value reuse contract violated");
	TypeError::ReuseMismatch {
		expected,
		found,
	}
	.into()
}

impl Value {
	pub fn set_to_null(&mut self) {
		match self {
			Value::Boolean(v) => *v = None,
			Value::TinyInt(v) => *v = None,
			Value::SmallInt(v) => *v = None,
			Value::Integer(v) => *v = None,
			Value::BigInt(v) => *v = None,
			Value::Real(v) => *v = None,
			Value::Double(v) => *v = None,
			Value::Decimal {
				value,
				..
			} => *value = None,
			Value::Bit(v) | Value::VarBit(v) | Value::LongVarBit(v) | Value::Blob(v) => *v = None,
			Value::Date(v) => *v = None,
			Value::Time(v) => *v = None,
			Value::Timestamp(v) => *v = None,
			Value::Ref(v) | Value::RowLocation(v) => *v = None,
			Value::UserType(v) => *v = None,
			Value::Xml(v) => *v = None,
			other => {
				if let Some(text) = other.as_text_mut() {
					text.set_null();
				}
			}
		}
	}

	pub fn set_boolean(&mut self, value: bool) -> Result<(), Error> {
		match self {
			Value::Boolean(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(bool::get_type(), other.get_type())),
		}
	}

	pub fn set_tiny_int(&mut self, value: i8) -> Result<(), Error> {
		match self {
			Value::TinyInt(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(i8::get_type(), other.get_type())),
		}
	}

	pub fn set_small_int(&mut self, value: i16) -> Result<(), Error> {
		match self {
			Value::SmallInt(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(i16::get_type(), other.get_type())),
		}
	}

	pub fn set_integer(&mut self, value: i32) -> Result<(), Error> {
		match self {
			Value::Integer(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(i32::get_type(), other.get_type())),
		}
	}

	pub fn set_big_int(&mut self, value: i64) -> Result<(), Error> {
		match self {
			Value::BigInt(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(i64::get_type(), other.get_type())),
		}
	}

	/// Fails for NaN and infinities
	pub fn set_real(&mut self, value: f32) -> Result<(), Error> {
		match self {
			Value::Real(v) => {
				*v = Some(OrderedF32::try_from(value)?);
				Ok(())
			}
			other => Err(mismatch(f32::get_type(), other.get_type())),
		}
	}

	/// Fails for NaN and infinities
	pub fn set_double(&mut self, value: f64) -> Result<(), Error> {
		match self {
			Value::Double(v) => {
				*v = Some(OrderedF64::try_from(value)?);
				Ok(())
			}
			other => Err(mismatch(f64::get_type(), other.get_type())),
		}
	}

	/// The decimal must already be in the representation of this value.
	pub fn set_decimal(&mut self, decimal: Decimal) -> Result<(), Error> {
		match self {
			Value::Decimal {
				kind,
				..
			} if decimal.kind() != *kind => {
				let (expected, found) = (*kind, decimal.kind());
				error!(%expected, %found, "decimal representation mismatch");
				Err(TypeError::DecimalKindMismatch {
					expected,
					found,
				}
				.into())
			}
			Value::Decimal {
				value,
				..
			} => {
				*value = Some(decimal);
				Ok(())
			}
			other => Err(mismatch(Decimal::get_type(), other.get_type())),
		}
	}

	/// Works for every character type and keeps the attached collator.
	pub fn set_string(&mut self, value: &str) -> Result<(), Error> {
		let found = self.get_type();
		match self.as_text_mut() {
			Some(text) => {
				text.set(value);
				Ok(())
			}
			None => Err(mismatch(String::get_type(), found)),
		}
	}

	/// Works for every binary type, reusing the existing buffer.
	pub fn set_bytes(&mut self, value: &[u8]) -> Result<(), Error> {
		match self {
			Value::Bit(v) | Value::VarBit(v) | Value::LongVarBit(v) | Value::Blob(v) => {
				match v {
					Some(buffer) => {
						buffer.clear();
						buffer.extend_from_slice(value);
					}
					None => *v = Some(value.to_vec()),
				}
				Ok(())
			}
			other => Err(mismatch(Vec::<u8>::get_type(), other.get_type())),
		}
	}

	pub fn set_date(&mut self, value: Date) -> Result<(), Error> {
		match self {
			Value::Date(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Date::get_type(), other.get_type())),
		}
	}

	pub fn set_time(&mut self, value: Time) -> Result<(), Error> {
		match self {
			Value::Time(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Time::get_type(), other.get_type())),
		}
	}

	pub fn set_timestamp(&mut self, value: Timestamp) -> Result<(), Error> {
		match self {
			Value::Timestamp(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Timestamp::get_type(), other.get_type())),
		}
	}

	/// Works for REF and row location values.
	pub fn set_row_location(&mut self, value: RowLocation) -> Result<(), Error> {
		match self {
			Value::Ref(v) | Value::RowLocation(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Type::Ref, other.get_type())),
		}
	}

	pub fn set_user_object(&mut self, value: UserObject) -> Result<(), Error> {
		match self {
			Value::UserType(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Type::UserType, other.get_type())),
		}
	}

	pub fn set_xml(&mut self, value: Xml) -> Result<(), Error> {
		match self {
			Value::Xml(v) => {
				*v = Some(value);
				Ok(())
			}
			other => Err(mismatch(Xml::get_type(), other.get_type())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{DecimalBackend, DecimalKind, Text, decimal::ScaledDecimalBackend};

	#[test]
	fn test_set_then_null_keeps_type() {
		let mut value = Value::null_of(Type::Integer);
		value.set_integer(7).unwrap();
		assert_eq!(value.as_i32(), Some(7));
		value.set_to_null();
		assert!(value.is_null());
		assert_eq!(value.get_type(), Type::Integer);
	}

	#[test]
	fn test_mismatch_leaves_value_untouched() {
		let mut value = Value::SmallInt(Some(3));
		let err = value.set_integer(7).unwrap_err();
		assert_eq!(err.code, "VALUE_001");
		assert_eq!(value, Value::SmallInt(Some(3)));
	}

	#[test]
	fn test_mismatch_names_both_types() {
		let mut value = Value::null_of(Type::Date);
		let err = value.set_string("x").unwrap_err();
		assert_eq!(err.message, "cannot reuse a DATE value as VARCHAR");
	}

	#[test]
	fn test_set_string_keeps_collator_and_buffer() {
		let mut value = Value::Char(Text::new(String::with_capacity(32), None));
		let before = value.as_str().unwrap().as_ptr();
		value.set_string("abc").unwrap();
		assert_eq!(value.as_str(), Some("abc"));
		assert_eq!(value.as_str().unwrap().as_ptr(), before);
		assert_eq!(value.get_type(), Type::Char);
	}

	#[test]
	fn test_set_bytes_reuses_buffer() {
		let mut value = Value::Blob(Some(Vec::with_capacity(16)));
		let before = value.as_bytes().unwrap().as_ptr();
		value.set_bytes(&[1, 2, 3]).unwrap();
		assert_eq!(value.as_bytes(), Some(&[1u8, 2, 3][..]));
		assert_eq!(value.as_bytes().unwrap().as_ptr(), before);
	}

	#[test]
	fn test_set_double_rejects_nan() {
		let mut value = Value::null_of(Type::Double);
		assert_eq!(value.set_double(f64::NAN).unwrap_err().code, "NUMBER_002");
		assert!(value.is_null());
		value.set_double(-0.0).unwrap();
		assert!(value.as_f64().unwrap().is_sign_positive());
	}

	#[test]
	fn test_set_decimal() {
		let mut value = Value::null_decimal(DecimalKind::Scaled);
		value.set_decimal(ScaledDecimalBackend.from_i64(12)).unwrap();
		assert_eq!(value.to_string(), "12");
		assert_eq!(value.decimal_kind(), Some(DecimalKind::Scaled));
	}

	#[test]
	fn test_set_decimal_rejects_other_representation() {
		let mut value = Value::null_of(Type::Decimal);
		let err = value.set_decimal(ScaledDecimalBackend.from_i64(12)).unwrap_err();
		assert_eq!(err.code, "VALUE_002");
		assert!(value.is_null());
		assert_eq!(value.decimal_kind(), Some(DecimalKind::Big));
	}

	#[test]
	fn test_row_location_setter_covers_ref() {
		let mut value = Value::null_of(Type::Ref);
		value.set_row_location(RowLocation::new(1, 2)).unwrap();
		assert_eq!(value.as_row_location(), Some(RowLocation::new(1, 2)));
		assert!(Value::null_of(Type::Xml).set_row_location(RowLocation::new(1, 2)).is_err());
	}
}
