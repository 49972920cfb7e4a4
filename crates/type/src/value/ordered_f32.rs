// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::{
	error::{Error, TypeError},
	value::Type,
};

/// A finite f32 with a total order. NaN and infinities are rejected, negative
/// zero is stored as zero.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}

	pub fn zero() -> OrderedF32 {
		OrderedF32(0.0)
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = Error;

	fn try_from(f: f32) -> Result<Self, Self::Error> {
		if !f.is_finite() {
			return Err(TypeError::NumberOutOfRange {
				target: Type::Real,
				value: f.to_string(),
			}
			.into());
		}
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		Ok(OrderedF32(normalized))
	}
}
