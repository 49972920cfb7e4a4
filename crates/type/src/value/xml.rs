// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Serialized XML markup
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Xml(pub String);

impl Xml {
	pub fn new(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for Xml {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
