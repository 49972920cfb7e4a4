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

/// A finite f64 with a total order. NaN and infinities are rejected, negative
/// zero is stored as zero.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}

	pub fn zero() -> OrderedF64 {
		OrderedF64(0.0)
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF64> for f64 {
	fn from(v: OrderedF64) -> Self {
		v.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = Error;

	fn try_from(f: f64) -> Result<Self, Self::Error> {
		if !f.is_finite() {
			return Err(TypeError::NumberOutOfRange {
				target: Type::Double,
				value: f.to_string(),
			}
			.into());
		}
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		Ok(OrderedF64(normalized))
	}
}
