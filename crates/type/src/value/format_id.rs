// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Stable identifier of a stored value representation.
///
/// The numbers are written to disk in front of every stored column value, so
/// they must never be renumbered. A new type gets a new, never used id.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatId(pub u16);

impl FormatId {
	pub const TIMESTAMP: FormatId = FormatId(31);
	pub const BOOLEAN: FormatId = FormatId(77);
	pub const CHAR: FormatId = FormatId(78);
	pub const DOUBLE: FormatId = FormatId(79);
	pub const INTEGER: FormatId = FormatId(80);
	pub const BIGINT: FormatId = FormatId(81);
	pub const REAL: FormatId = FormatId(82);
	pub const REF: FormatId = FormatId(83);
	pub const SMALLINT: FormatId = FormatId(84);
	pub const VARCHAR: FormatId = FormatId(85);
	pub const BIT: FormatId = FormatId(87);
	pub const VARBIT: FormatId = FormatId(88);
	pub const HEAP_ROW_LOCATION: FormatId = FormatId(90);
	pub const TINYINT: FormatId = FormatId(199);
	pub const DECIMAL: FormatId = FormatId(200);
	pub const LONGVARBIT: FormatId = FormatId(234);
	pub const LONGVARCHAR: FormatId = FormatId(235);
	pub const USERTYPE: FormatId = FormatId(267);
	pub const DATE: FormatId = FormatId(298);
	pub const TIME: FormatId = FormatId(299);
	pub const NATIONAL_LONGVARCHAR: FormatId = FormatId(362);
	pub const NATIONAL_VARCHAR: FormatId = FormatId(369);
	pub const NATIONAL_CHAR: FormatId = FormatId(370);
	pub const BLOB: FormatId = FormatId(443);
	pub const CLOB: FormatId = FormatId(447);
	pub const NCLOB: FormatId = FormatId(448);
	pub const XML: FormatId = FormatId(456);

	pub fn value(&self) -> u16 {
		self.0
	}
}

impl From<u16> for FormatId {
	fn from(value: u16) -> Self {
		FormatId(value)
	}
}

impl From<FormatId> for u16 {
	fn from(value: FormatId) -> Self {
		value.0
	}
}

impl Display for FormatId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_serde_is_a_plain_number() {
		let json = serde_json::to_string(&FormatId::DECIMAL).unwrap();
		assert_eq!(json, "200");
		let recovered: FormatId = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, FormatId::DECIMAL);
	}
}
