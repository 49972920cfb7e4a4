// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use once_cell::sync::OnceCell;
use strata_type::{
	CollationStrength, CollationType, Collator, Locale, Result, TypeError, collation::parse_locale, return_error,
};
use tracing::{debug, instrument, warn};

/// Finds the locale of the current database when none was set explicitly
pub trait LocaleFinder: Send + Sync {
	fn find_locale(&self) -> Option<Locale>;
}

impl<F> LocaleFinder for F
where
	F: Fn() -> Option<Locale> + Send + Sync,
{
	fn find_locale(&self) -> Option<Locale> {
		self()
	}
}

struct LocaleState {
	locale: Locale,
	// one slot per strength, in declaration order
	collators: [OnceCell<Collator>; 5],
}

impl LocaleState {
	fn new(locale: Locale) -> Result<Self> {
		let state = Self {
			locale,
			collators: Default::default(),
		};
		// a locale without collation data is rejected up front
		state.collator(CollationStrength::Default)?;
		Ok(state)
	}

	fn collator(&self, strength: CollationStrength) -> Result<&Collator> {
		let slot = match strength {
			CollationStrength::Default => 0,
			CollationStrength::Primary => 1,
			CollationStrength::Secondary => 2,
			CollationStrength::Tertiary => 3,
			CollationStrength::Identical => 4,
		};
		self.collators[slot].get_or_try_init(|| Collator::new(&self.locale, strength))
	}
}

/// Holds the database locale and hands out collators derived from it. The
/// locale is set at most once, explicitly or by asking the [`LocaleFinder`]
/// on first demand.
pub struct CollationProvider {
	state: OnceCell<LocaleState>,
	finder: Option<Arc<dyn LocaleFinder>>,
}

impl CollationProvider {
	pub fn new(finder: Option<Arc<dyn LocaleFinder>>) -> Self {
		Self {
			state: OnceCell::new(),
			finder,
		}
	}

	#[instrument(name = "collation::set_locale", level = "debug", skip(self))]
	pub fn set_locale(&self, locale: &str) -> Result<()> {
		if let Some(state) = self.state.get() {
			return_error!(TypeError::LocaleAlreadySet {
				current: state.locale.to_string(),
			});
		}

		let state = LocaleState::new(parse_locale(locale)?)?;
		if let Err(state) = self.state.set(state) {
			let current = self.state.get().map(|s| s.locale.to_string()).unwrap_or_else(|| state.locale.to_string());
			return_error!(TypeError::LocaleAlreadySet {
				current
			});
		}

		debug!(locale, "database locale set");
		Ok(())
	}

	/// The database locale, discovering it if needed
	pub fn locale(&self) -> Result<Option<&Locale>> {
		Ok(self.state()?.map(|state| &state.locale))
	}

	/// `None` for UCS_BASIC, and for territory based collation while the
	/// database has no locale.
	pub fn collator(&self, collation: CollationType) -> Result<Option<Collator>> {
		let strength = match collation {
			CollationType::UcsBasic => return Ok(None),
			CollationType::TerritoryBased(strength) => strength,
		};
		match self.state()? {
			Some(state) => state.collator(strength).cloned().map(Some),
			None => Ok(None),
		}
	}

	/// The collator national character data is built with
	pub fn territory_collator(&self) -> Result<Option<Collator>> {
		self.collator(CollationType::TerritoryBased(CollationStrength::Default))
	}

	fn state(&self) -> Result<Option<&LocaleState>> {
		if let Some(state) = self.state.get() {
			return Ok(Some(state));
		}
		self.discover()
	}

	#[instrument(name = "collation::discover", level = "debug", skip(self))]
	fn discover(&self) -> Result<Option<&LocaleState>> {
		let Some(finder) = &self.finder else {
			return Ok(None);
		};
		let Some(locale) = finder.find_locale() else {
			warn!("database locale not available yet, character data falls back to code point order");
			return Ok(None);
		};

		debug!(%locale, "database locale discovered");
		let state = LocaleState::new(locale)?;
		// losing a race against set_locale keeps the winner
		let _ = self.state.set(state);
		Ok(self.state.get())
	}
}

impl Debug for CollationProvider {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("CollationProvider")
			.field("locale", &self.state.get().map(|s| s.locale.to_string()))
			.field("finder", &self.finder.is_some())
			.finish()
	}
}
