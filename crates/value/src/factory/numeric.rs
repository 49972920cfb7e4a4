// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{Decimal, IntoDecimal, OrderedF32, OrderedF64, Result, Type, TypeError, Value, err};
use tracing::error;

use crate::factory::{ValueFactory, reset, reuse};

impl ValueFactory {
	pub fn tiny_int(&self, value: impl Into<Option<i8>>) -> Value {
		Value::TinyInt(value.into())
	}

	pub fn tiny_int_reusing(&self, value: impl Into<Option<i8>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::TinyInt, value.into(), |v| Ok(Value::TinyInt(v)), Value::set_tiny_int)
	}

	pub fn null_tiny_int(&self, previous: Option<Value>) -> Result<Value> {
		self.tiny_int_reusing(None, previous)
	}

	pub fn small_int(&self, value: impl Into<Option<i16>>) -> Value {
		Value::SmallInt(value.into())
	}

	pub fn small_int_reusing(&self, value: impl Into<Option<i16>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::SmallInt, value.into(), |v| Ok(Value::SmallInt(v)), Value::set_small_int)
	}

	pub fn null_small_int(&self, previous: Option<Value>) -> Result<Value> {
		self.small_int_reusing(None, previous)
	}

	pub fn integer(&self, value: impl Into<Option<i32>>) -> Value {
		Value::Integer(value.into())
	}

	pub fn integer_reusing(&self, value: impl Into<Option<i32>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Integer, value.into(), |v| Ok(Value::Integer(v)), Value::set_integer)
	}

	/// The code point of `value` as an INTEGER
	pub fn integer_from_char(&self, value: impl Into<Option<char>>) -> Value {
		Value::Integer(value.into().map(|c| c as i32))
	}

	pub fn null_integer(&self, previous: Option<Value>) -> Result<Value> {
		self.integer_reusing(None, previous)
	}

	pub fn big_int(&self, value: impl Into<Option<i64>>) -> Value {
		Value::BigInt(value.into())
	}

	pub fn big_int_reusing(&self, value: impl Into<Option<i64>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::BigInt, value.into(), |v| Ok(Value::BigInt(v)), Value::set_big_int)
	}

	pub fn null_big_int(&self, previous: Option<Value>) -> Result<Value> {
		self.big_int_reusing(None, previous)
	}

	/// Fails for NaN and infinities
	pub fn real(&self, value: impl Into<Option<f32>>) -> Result<Value> {
		let value = value.into().map(OrderedF32::try_from).transpose()?;
		Ok(Value::Real(value))
	}

	pub fn real_reusing(&self, value: impl Into<Option<f32>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Real, value.into(), |v| self.real(v), Value::set_real)
	}

	pub fn null_real(&self, previous: Option<Value>) -> Result<Value> {
		self.real_reusing(None, previous)
	}

	/// Fails for NaN and infinities
	pub fn double(&self, value: impl Into<Option<f64>>) -> Result<Value> {
		let value = value.into().map(OrderedF64::try_from).transpose()?;
		Ok(Value::Double(value))
	}

	pub fn double_reusing(&self, value: impl Into<Option<f64>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Double, value.into(), |v| self.double(v), Value::set_double)
	}

	pub fn null_double(&self, previous: Option<Value>) -> Result<Value> {
		self.double_reusing(None, previous)
	}

	/// A DECIMAL in the booted representation. Fails before boot and for
	/// input that is not a finite number.
	pub fn decimal(&self, value: impl IntoDecimal) -> Result<Value> {
		self.decimal_reusing(value, None)
	}

	/// `previous` must already hold the booted representation.
	pub fn decimal_reusing(&self, value: impl IntoDecimal, previous: Option<Value>) -> Result<Value> {
		let backend = self.decimal_backend()?;
		let decimal = value.into_decimal(backend.as_ref())?;
		let mut result = match reuse(previous, Type::Decimal)? {
			Some(previous) => match previous.decimal_kind() {
				Some(found) if found != backend.kind() => {
					error!(expected = %backend.kind(), %found, "decimal reuse contract violated");
					return err!(TypeError::DecimalKindMismatch {
						expected: backend.kind(),
						found,
					});
				}
				_ => previous,
			},
			None => Value::null_decimal(backend.kind()),
		};
		match decimal {
			Some(decimal) => result.set_decimal(decimal)?,
			None => result.set_to_null(),
		}
		Ok(result)
	}

	pub fn null_decimal(&self, previous: Option<Value>) -> Result<Value> {
		self.decimal_reusing(None::<Decimal>, previous)
	}
}
