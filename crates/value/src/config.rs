// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strata_type::value::decimal::{BigDecimalBackend, DecimalBackend, ScaledDecimalBackend};

/// Which decimal representation a deployment boots with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalProfile {
	/// Arbitrary precision decimals
	#[default]
	Full,
	/// Unscaled integer plus scale, for small runtimes
	Constrained,
}

impl DecimalProfile {
	pub fn backend(&self) -> Arc<dyn DecimalBackend> {
		match self {
			DecimalProfile::Full => Arc::new(BigDecimalBackend),
			DecimalProfile::Constrained => Arc::new(ScaledDecimalBackend),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueConfig {
	pub decimal: DecimalProfile,
	/// Database locale applied at boot, e.g. `en-US`
	pub locale: Option<String>,
}
