// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{Result, RowLocation, Type, UserObject, Value};

use crate::factory::{ValueFactory, reset};

impl ValueFactory {
	pub fn user_object(&self, value: impl Into<Option<UserObject>>) -> Value {
		Value::UserType(value.into())
	}

	pub fn user_object_reusing(&self, value: impl Into<Option<UserObject>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::UserType, value.into(), |v| Ok(Value::UserType(v)), Value::set_user_object)
	}

	pub fn null_user_object(&self, previous: Option<Value>) -> Result<Value> {
		self.user_object_reusing(None, previous)
	}

	/// A REF to the row at `value`
	pub fn reference(&self, value: impl Into<Option<RowLocation>>) -> Value {
		Value::Ref(value.into())
	}

	pub fn reference_reusing(&self, value: impl Into<Option<RowLocation>>, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Ref, value.into(), |v| Ok(Value::Ref(v)), Value::set_row_location)
	}

	pub fn null_reference(&self, previous: Option<Value>) -> Result<Value> {
		self.reference_reusing(None, previous)
	}

	/// An XML value, empty until the document is parsed into it
	pub fn xml_value(&self, previous: Option<Value>) -> Result<Value> {
		self.null_xml(previous)
	}

	pub fn null_xml(&self, previous: Option<Value>) -> Result<Value> {
		reset(previous, Type::Xml, None, |v| Ok(Value::Xml(v)), Value::set_xml)
	}
}
