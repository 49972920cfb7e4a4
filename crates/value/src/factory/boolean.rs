// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{Result, Type, Value};

use crate::factory::{ValueFactory, reset, reuse};

impl ValueFactory {
	pub fn boolean(&self, value: impl Into<Option<bool>>) -> Value {
		Value::Boolean(value.into())
	}

	pub fn boolean_reusing(&self, value: impl Into<Option<bool>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Boolean, value.into(), |v| Ok(Value::Boolean(v)), Value::set_boolean)
	}

	pub fn null_boolean(&self, previous: Option<Value>) -> Result<Value> {
		self.boolean_reusing(None, previous)
	}

	/// `value` itself when given, otherwise a fresh null BOOLEAN
	pub fn boolean_from_value(&self, value: Option<Value>) -> Result<Value> {
		Ok(reuse(value, Type::Boolean)?.unwrap_or(Value::Boolean(None)))
	}
}
