// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Locates a stored row by page and slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowLocation {
	pub page: u64,
	pub slot: u32,
}

impl RowLocation {
	pub fn new(page: u64, slot: u32) -> Self {
		Self {
			page,
			slot,
		}
	}
}

impl Display for RowLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "({},{})", self.page, self.slot)
	}
}
