// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use strata_type::Value;

/// Supplies the row location descriptor of the storage layer in use
pub trait RowLocator: Debug + Send + Sync {
	/// A null row location, ready to be filled by the store
	fn null_row_location(&self) -> Value;
}

/// Row locations of heap tables
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapRowLocator;

impl RowLocator for HeapRowLocator {
	fn null_row_location(&self) -> Value {
		Value::RowLocation(None)
	}
}
