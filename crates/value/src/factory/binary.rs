// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{Result, Type, Value};

use crate::factory::{ValueFactory, reset};

fn fresh(ty: Type, value: Option<&[u8]>) -> Value {
	match ty {
		Type::Bit => Value::Bit(value.map(<[u8]>::to_vec)),
		Type::VarBit => Value::VarBit(value.map(<[u8]>::to_vec)),
		Type::LongVarBit => Value::LongVarBit(value.map(<[u8]>::to_vec)),
		_ => Value::Blob(value.map(<[u8]>::to_vec)),
	}
}

fn reset_bytes(ty: Type, value: Option<&[u8]>, previous: Option<Value>) -> Result<Value> {
	reset(previous, ty, value, |v| Ok(fresh(ty, v)), Value::set_bytes)
}

impl ValueFactory {
	pub fn bit<'a>(&self, value: impl Into<Option<&'a [u8]>>) -> Value {
		fresh(Type::Bit, value.into())
	}

	pub fn bit_reusing<'a>(&self, value: impl Into<Option<&'a [u8]>>, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::Bit, value.into(), previous)
	}

	pub fn null_bit(&self, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::Bit, None, previous)
	}

	pub fn var_bit<'a>(&self, value: impl Into<Option<&'a [u8]>>) -> Value {
		fresh(Type::VarBit, value.into())
	}

	pub fn var_bit_reusing<'a>(&self, value: impl Into<Option<&'a [u8]>>, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::VarBit, value.into(), previous)
	}

	pub fn null_var_bit(&self, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::VarBit, None, previous)
	}

	pub fn long_var_bit<'a>(&self, value: impl Into<Option<&'a [u8]>>) -> Value {
		fresh(Type::LongVarBit, value.into())
	}

	pub fn long_var_bit_reusing<'a>(
		&self,
		value: impl Into<Option<&'a [u8]>>,
		previous: Option<Value>,
	) -> Result<Value> {
		reset_bytes(Type::LongVarBit, value.into(), previous)
	}

	pub fn null_long_var_bit(&self, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::LongVarBit, None, previous)
	}

	pub fn blob<'a>(&self, value: impl Into<Option<&'a [u8]>>) -> Value {
		fresh(Type::Blob, value.into())
	}

	pub fn blob_reusing<'a>(&self, value: impl Into<Option<&'a [u8]>>, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::Blob, value.into(), previous)
	}

	pub fn null_blob(&self, previous: Option<Value>) -> Result<Value> {
		reset_bytes(Type::Blob, None, previous)
	}
}
