// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use once_cell::sync::OnceCell;
use strata_type::{DecimalBackend, FormatId, Result, Type, TypeError, Value, return_error, sanity_assert};
use tracing::{instrument, trace};

use crate::locator::RowLocator;

/// Maps stored format ids to the null value of their type.
///
/// Every entry is fixed except DECIMAL, which is filled in once when the
/// factory boots, and the row location, which comes from the storage layer.
pub struct FormatRegistry {
	decimal: OnceCell<Arc<dyn DecimalBackend>>,
	row_locator: Arc<dyn RowLocator>,
}

impl FormatRegistry {
	pub fn new(row_locator: Arc<dyn RowLocator>) -> Self {
		Self {
			decimal: OnceCell::new(),
			row_locator,
		}
	}

	pub(crate) fn install_decimal(&self, backend: Arc<dyn DecimalBackend>) -> Result<()> {
		if self.decimal.set(backend).is_err() {
			return_error!(TypeError::AlreadyBooted);
		}
		Ok(())
	}

	/// The booted decimal representation
	pub fn decimal(&self) -> Result<&Arc<dyn DecimalBackend>> {
		match self.decimal.get() {
			Some(backend) => Ok(backend),
			None => strata_type::err!(TypeError::NotBooted),
		}
	}

	pub fn is_booted(&self) -> bool {
		self.decimal.get().is_some()
	}

	/// The null value stored under `format_id`, or `None` when the id is
	/// unknown. Fails for DECIMAL before boot.
	#[instrument(name = "registry::resolve", level = "trace", skip(self))]
	pub fn resolve(&self, format_id: FormatId) -> Result<Option<Value>> {
		let Some(ty) = Type::from_format_id(format_id) else {
			trace!("no type registered");
			return Ok(None);
		};

		let value = match ty {
			Type::Decimal => Value::null_decimal(self.decimal()?.kind()),
			Type::RowLocation => {
				let value = self.row_locator.null_row_location();
				sanity_assert!(
					value.get_type() == Type::RowLocation,
					"row locator produced a {} value",
					value.get_type()
				);
				value
			}
			ty => Value::null_of(ty),
		};
		Ok(Some(value))
	}
}
