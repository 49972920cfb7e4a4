// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use once_cell::sync::OnceCell;
use strata_type::{
	CollationType, Collator, Decimal, DecimalBackend, FormatId, Result, Type, TypeError, Value, err,
};
use tracing::{debug, error, instrument};

use crate::{
	builder::{ValueFactoryBuilder, ValueFactoryConfigurator},
	collation::CollationProvider,
	config::ValueConfig,
	registry::FormatRegistry,
};

mod binary;
mod boolean;
mod character;
mod numeric;
mod other;
mod temporal;

/// Builds SQL values of every type.
///
/// Constructors come in three forms. `name(input)` builds a fresh value,
/// where an absent input is SQL NULL. `name_reusing(input, previous)`
/// overwrites `previous` in place and hands the same value back, or builds a
/// fresh one when there is no previous value. `null_name(previous)` does the
/// same but always yields NULL. A previous value of another type is a
/// contract violation.
pub struct ValueFactory {
	config: ValueConfig,
	registry: FormatRegistry,
	collation: CollationProvider,
	zero: OnceCell<Decimal>,
}

impl ValueFactory {
	pub(crate) fn new(config: ValueConfig, registry: FormatRegistry, collation: CollationProvider) -> Self {
		Self {
			config,
			registry,
			collation,
			zero: OnceCell::new(),
		}
	}

	pub fn builder() -> ValueFactoryBuilder {
		ValueFactoryBuilder::new()
	}

	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(ValueFactoryBuilder) -> ValueFactoryBuilder + Send + 'static,
	{
		let configurator: ValueFactoryConfigurator = Box::new(configurator);
		configurator(ValueFactoryBuilder::new()).build()
	}

	pub fn config(&self) -> &ValueConfig {
		&self.config
	}

	/// Applies the configured locale and installs the configured decimal
	/// representation. Happens once, before the factory is shared. Nothing
	/// is installed when the locale is rejected.
	#[instrument(name = "factory::boot", level = "debug", skip(self))]
	pub fn boot(&self) -> Result<()> {
		if self.registry.is_booted() {
			return err!(TypeError::AlreadyBooted);
		}

		if let Some(locale) = &self.config.locale {
			match self.collation.locale()? {
				Some(current) => debug!(%current, "database locale already set, keeping it"),
				None => self.collation.set_locale(locale)?,
			}
		}

		let backend = self.config.decimal.backend();
		let zero = backend.zero();
		let name = backend.name();

		self.registry.install_decimal(backend)?;
		let _ = self.zero.set(zero);
		debug!(backend = name, "decimal implementation installed");
		Ok(())
	}

	#[instrument(name = "factory::stop", level = "debug", skip(self))]
	pub fn stop(&self) {
		debug!("value factory stopped");
	}

	pub fn is_booted(&self) -> bool {
		self.registry.is_booted()
	}

	pub fn registry(&self) -> &FormatRegistry {
		&self.registry
	}

	pub fn collation(&self) -> &CollationProvider {
		&self.collation
	}

	pub fn decimal_backend(&self) -> Result<&Arc<dyn DecimalBackend>> {
		self.registry.decimal()
	}

	/// Zero in the booted decimal representation
	pub fn zero_decimal(&self) -> Result<&Decimal> {
		match self.zero.get() {
			Some(zero) => Ok(zero),
			None => err!(TypeError::NotBooted),
		}
	}

	pub fn set_locale(&self, locale: &str) -> Result<()> {
		self.collation.set_locale(locale)
	}

	pub fn collator(&self, collation: CollationType) -> Result<Option<Collator>> {
		self.collation.collator(collation)
	}

	/// The null value stored under `format_id`, with character data ordered
	/// by `collation`. `None` when the id is unknown.
	pub fn resolve_null(&self, format_id: FormatId, collation: CollationType) -> Result<Option<Value>> {
		let Some(value) = self.registry.resolve(format_id)? else {
			return Ok(None);
		};
		if collation.is_default() || !value.get_type().is_character() {
			return Ok(Some(value));
		}
		let collator = self.collation.collator(collation)?;
		Ok(Some(value.with_collator(collator)))
	}

	/// Like [`ValueFactory::resolve_null`], failing for unknown ids
	pub fn resolve_null_required(&self, format_id: FormatId, collation: CollationType) -> Result<Value> {
		match self.resolve_null(format_id, collation)? {
			Some(value) => Ok(value),
			None => err!(TypeError::UnknownFormatId {
				format_id
			}),
		}
	}
}

/// `previous` if it is a `ty`
fn reuse(previous: Option<Value>, ty: Type) -> Result<Option<Value>> {
	match previous {
		Some(value) if value.get_type() == ty => Ok(Some(value)),
		Some(value) => {
			let found = value.get_type();
			error!(expected = %ty, %found, "value reuse contract violated");
			err!(TypeError::ReuseMismatch {
				expected: ty,
				found,
			})
		}
		None => Ok(None),
	}
}

/// Overwrites `previous` with `value` through `set`, or builds a fresh
/// value with `fresh` when there is nothing to reuse.
fn reset<T>(
	previous: Option<Value>,
	ty: Type,
	value: Option<T>,
	fresh: impl FnOnce(Option<T>) -> Result<Value>,
	set: impl FnOnce(&mut Value, T) -> Result<()>,
) -> Result<Value> {
	let Some(mut previous) = reuse(previous, ty)? else {
		return fresh(value);
	};
	match value {
		Some(value) => set(&mut previous, value)?,
		None => previous.set_to_null(),
	}
	Ok(previous)
}

#[cfg(test)]
mod tests {
	use strata_type::{CollationStrength, DecimalKind};

	use super::*;
	use crate::config::DecimalProfile;

	#[test]
	fn test_boot_once() {
		let factory = ValueFactory::builder().build();
		assert!(!factory.is_booted());
		factory.boot().unwrap();
		assert!(factory.is_booted());
		assert_eq!(factory.boot().unwrap_err().code, "LIFECYCLE_002");
		factory.stop();
	}

	#[test]
	fn test_zero_decimal() {
		let factory = ValueFactory::builder().decimal_profile(DecimalProfile::Constrained).build();
		assert_eq!(factory.zero_decimal().unwrap_err().code, "LIFECYCLE_001");
		factory.boot().unwrap();
		let zero = factory.zero_decimal().unwrap();
		assert!(zero.is_zero());
		assert_eq!(zero.kind(), DecimalKind::Scaled);
	}

	#[test]
	fn test_boot_applies_configured_locale() {
		let factory = ValueFactory::with_configurator(|builder| builder.locale("de"));
		assert_eq!(factory.collation().locale().unwrap(), None);
		factory.boot().unwrap();
		let collator = factory.collator(CollationType::TerritoryBased(CollationStrength::Default)).unwrap();
		assert_eq!(collator.unwrap().locale().to_string(), "de");
	}

	#[test]
	fn test_boot_with_invalid_locale_installs_nothing() {
		let factory = ValueFactory::builder().locale("not a locale!").build();
		assert_eq!(factory.boot().unwrap_err().code, "COLLATION_001");
		assert!(!factory.is_booted());
		assert_eq!(factory.zero_decimal().unwrap_err().code, "LIFECYCLE_001");

		factory.set_locale("en").unwrap();
		factory.boot().unwrap();
		assert!(factory.is_booted());
	}

	#[test]
	fn test_boot_keeps_explicit_locale() {
		let factory = ValueFactory::builder().locale("de").build();
		factory.set_locale("fr").unwrap();
		factory.boot().unwrap();
		assert_eq!(factory.collation().locale().unwrap().map(|l| l.to_string()), Some("fr".to_string()));
	}

	#[test]
	fn test_reuse_rejects_other_types() {
		let err = reuse(Some(Value::null_of(Type::SmallInt)), Type::Integer).unwrap_err();
		assert_eq!(err.code, "VALUE_001");
		assert!(reuse(None, Type::Integer).unwrap().is_none());
	}

	#[test]
	fn test_resolve_null_with_collation() {
		let factory = ValueFactory::builder().build();
		factory.set_locale("en").unwrap();
		let primary = CollationType::TerritoryBased(CollationStrength::Primary);

		let value = factory.resolve_null(FormatId::VARCHAR, primary).unwrap().unwrap();
		assert_eq!(value.collator().map(|c| c.strength()), Some(CollationStrength::Primary));

		let value = factory.resolve_null(FormatId::VARCHAR, CollationType::UcsBasic).unwrap().unwrap();
		assert_eq!(value.collator(), None);

		let value = factory.resolve_null(FormatId::INTEGER, primary).unwrap().unwrap();
		assert_eq!(value, Value::Integer(None));
	}

	#[test]
	fn test_resolve_null_required() {
		let factory = ValueFactory::builder().build();
		let err = factory.resolve_null_required(FormatId(12), CollationType::UcsBasic).unwrap_err();
		assert_eq!(err.code, "FORMAT_001");
	}
}
