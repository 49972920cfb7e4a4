// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use strata_type::{Collator, Result, Text, Value};

use crate::factory::{ValueFactory, reset};

fn fresh(wrap: fn(Text) -> Value, value: Option<&str>, collator: Option<Collator>) -> Value {
	match value {
		Some(value) => wrap(Text::new(value, collator)),
		None => wrap(Text::null(collator)),
	}
}

impl ValueFactory {
	fn reset_text(&self, wrap: fn(Text) -> Value, value: Option<&str>, previous: Option<Value>) -> Result<Value> {
		let ty = wrap(Text::null(None)).get_type();
		reset(
			previous,
			ty,
			value,
			|v| {
				let collator = if ty.is_national() {
					self.collation().territory_collator()?
				} else {
					None
				};
				Ok(fresh(wrap, v, collator))
			},
			Value::set_string,
		)
	}

	pub fn char<'a>(&self, value: impl Into<Option<&'a str>>) -> Value {
		fresh(Value::Char, value.into(), None)
	}

	pub fn char_reusing<'a>(&self, value: impl Into<Option<&'a str>>, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::Char, value.into(), previous)
	}

	pub fn null_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::Char, None, previous)
	}

	pub fn var_char<'a>(&self, value: impl Into<Option<&'a str>>) -> Value {
		fresh(Value::VarChar, value.into(), None)
	}

	pub fn var_char_reusing<'a>(&self, value: impl Into<Option<&'a str>>, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::VarChar, value.into(), previous)
	}

	pub fn null_var_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::VarChar, None, previous)
	}

	pub fn long_var_char<'a>(&self, value: impl Into<Option<&'a str>>) -> Value {
		fresh(Value::LongVarChar, value.into(), None)
	}

	pub fn long_var_char_reusing<'a>(
		&self,
		value: impl Into<Option<&'a str>>,
		previous: Option<Value>,
	) -> Result<Value> {
		self.reset_text(Value::LongVarChar, value.into(), previous)
	}

	pub fn null_long_var_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::LongVarChar, None, previous)
	}

	pub fn clob<'a>(&self, value: impl Into<Option<&'a str>>) -> Value {
		fresh(Value::Clob, value.into(), None)
	}

	pub fn clob_reusing<'a>(&self, value: impl Into<Option<&'a str>>, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::Clob, value.into(), previous)
	}

	pub fn null_clob(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::Clob, None, previous)
	}

	/// Ordered by the database locale, or by code point while there is none
	pub fn national_char<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<Value> {
		self.reset_text(Value::NationalChar, value.into(), None)
	}

	pub fn national_char_reusing<'a>(
		&self,
		value: impl Into<Option<&'a str>>,
		previous: Option<Value>,
	) -> Result<Value> {
		self.reset_text(Value::NationalChar, value.into(), previous)
	}

	pub fn null_national_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::NationalChar, None, previous)
	}

	pub fn national_var_char<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<Value> {
		self.reset_text(Value::NationalVarChar, value.into(), None)
	}

	pub fn national_var_char_reusing<'a>(
		&self,
		value: impl Into<Option<&'a str>>,
		previous: Option<Value>,
	) -> Result<Value> {
		self.reset_text(Value::NationalVarChar, value.into(), previous)
	}

	pub fn null_national_var_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::NationalVarChar, None, previous)
	}

	pub fn national_long_var_char<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<Value> {
		self.reset_text(Value::NationalLongVarChar, value.into(), None)
	}

	pub fn national_long_var_char_reusing<'a>(
		&self,
		value: impl Into<Option<&'a str>>,
		previous: Option<Value>,
	) -> Result<Value> {
		self.reset_text(Value::NationalLongVarChar, value.into(), previous)
	}

	pub fn null_national_long_var_char(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::NationalLongVarChar, None, previous)
	}

	pub fn nclob<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<Value> {
		self.reset_text(Value::NClob, value.into(), None)
	}

	pub fn nclob_reusing<'a>(&self, value: impl Into<Option<&'a str>>, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::NClob, value.into(), previous)
	}

	pub fn null_nclob(&self, previous: Option<Value>) -> Result<Value> {
		self.reset_text(Value::NClob, None, previous)
	}
}
