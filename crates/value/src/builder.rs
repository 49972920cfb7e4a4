// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use crate::{
	collation::{CollationProvider, LocaleFinder},
	config::{DecimalProfile, ValueConfig},
	factory::ValueFactory,
	locator::{HeapRowLocator, RowLocator},
	registry::FormatRegistry,
};

/// Configuration function for the value factory
pub type ValueFactoryConfigurator = Box<dyn FnOnce(ValueFactoryBuilder) -> ValueFactoryBuilder + Send>;

/// Builder for configuring the value factory
pub struct ValueFactoryBuilder {
	config: ValueConfig,
	locale_finder: Option<Arc<dyn LocaleFinder>>,
	row_locator: Arc<dyn RowLocator>,
}

impl ValueFactoryBuilder {
	pub fn new() -> Self {
		Self {
			config: ValueConfig::default(),
			locale_finder: None,
			row_locator: Arc::new(HeapRowLocator),
		}
	}

	/// Replaces the whole configuration
	pub fn config(mut self, config: ValueConfig) -> Self {
		self.config = config;
		self
	}

	pub fn decimal_profile(mut self, profile: DecimalProfile) -> Self {
		self.config.decimal = profile;
		self
	}

	/// Locale applied when the factory boots
	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.config.locale = Some(locale.into());
		self
	}

	pub fn locale_finder(mut self, finder: impl LocaleFinder + 'static) -> Self {
		self.locale_finder = Some(Arc::new(finder));
		self
	}

	pub fn row_locator(mut self, locator: impl RowLocator + 'static) -> Self {
		self.row_locator = Arc::new(locator);
		self
	}

	pub fn build(self) -> ValueFactory {
		ValueFactory::new(
			self.config,
			FormatRegistry::new(self.row_locator),
			CollationProvider::new(self.locale_finder),
		)
	}
}

impl Default for ValueFactoryBuilder {
	fn default() -> Self {
		Self::new()
	}
}
