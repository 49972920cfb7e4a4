// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use crate::collation::{Collator, compare_padded};

/// Character data together with the collator it is ordered by. Without a
/// collator the text orders by code point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
	value: Option<String>,
	collator: Option<Collator>,
}

impl Text {
	pub fn new(value: impl Into<String>, collator: Option<Collator>) -> Self {
		Self {
			value: Some(value.into()),
			collator,
		}
	}

	pub fn null(collator: Option<Collator>) -> Self {
		Self {
			value: None,
			collator,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		self.value.as_deref()
	}

	pub fn is_null(&self) -> bool {
		self.value.is_none()
	}

	pub fn collator(&self) -> Option<&Collator> {
		self.collator.as_ref()
	}

	pub fn set_collator(&mut self, collator: Option<Collator>) {
		self.collator = collator;
	}

	/// Overwrites the text, keeping the existing buffer when there is one.
	pub fn set(&mut self, value: &str) {
		match &mut self.value {
			Some(buffer) => {
				buffer.clear();
				buffer.push_str(value);
			}
			None => self.value = Some(value.to_string()),
		}
	}

	pub fn set_owned(&mut self, value: String) {
		self.value = Some(value);
	}

	pub fn set_null(&mut self) {
		self.value = None;
	}

	/// Orders two non null texts, using whichever collator is attached.
	/// Texts bound to different collators are unordered.
	pub fn compare(&self, other: &Self) -> Option<Ordering> {
		let (left, right) = (self.value.as_deref()?, other.value.as_deref()?);
		let collator = match (&self.collator, &other.collator) {
			(Some(l), Some(r)) if l != r => return None,
			(l, r) => l.as_ref().or(r.as_ref()),
		};
		Some(match collator {
			Some(collator) => collator.compare(left, right),
			None => compare_padded(left, right),
		})
	}

	pub fn into_string(self) -> Option<String> {
		self.value
	}
}

impl Display for Text {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => f.write_str(value),
			None => f.write_str("NULL"),
		}
	}
}
