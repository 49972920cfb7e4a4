// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Ordering of character data.
//!
//! `UCS_BASIC` orders by code point. A territory based collation orders by
//! the rules of the database locale at a chosen strength.

use std::{
	cmp::Ordering,
	fmt::{self, Debug, Display, Formatter},
	sync::Arc,
};

use icu_collator::{
	CollatorBorrowed,
	options::{CollatorOptions, Strength},
};
pub use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};

use crate::error::{Error, TypeError};

/// How strictly a territory based collation distinguishes characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollationStrength {
	/// Whatever the locale considers normal
	#[default]
	Default,
	/// Base letters only
	Primary,
	/// Base letters and accents
	Secondary,
	/// Base letters, accents and case
	Tertiary,
	/// Every code point difference
	Identical,
}

/// The collation requested for a character column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollationType {
	#[default]
	UcsBasic,
	TerritoryBased(CollationStrength),
}

impl CollationType {
	/// The numeric form used in catalogs
	pub fn id(&self) -> u8 {
		match self {
			CollationType::UcsBasic => 0,
			CollationType::TerritoryBased(CollationStrength::Default) => 1,
			CollationType::TerritoryBased(CollationStrength::Primary) => 2,
			CollationType::TerritoryBased(CollationStrength::Secondary) => 3,
			CollationType::TerritoryBased(CollationStrength::Tertiary) => 4,
			CollationType::TerritoryBased(CollationStrength::Identical) => 5,
		}
	}

	pub fn from_id(id: u8) -> Option<Self> {
		Some(match id {
			0 => CollationType::UcsBasic,
			1 => CollationType::TerritoryBased(CollationStrength::Default),
			2 => CollationType::TerritoryBased(CollationStrength::Primary),
			3 => CollationType::TerritoryBased(CollationStrength::Secondary),
			4 => CollationType::TerritoryBased(CollationStrength::Tertiary),
			5 => CollationType::TerritoryBased(CollationStrength::Identical),
			_ => return None,
		})
	}

	pub fn is_default(&self) -> bool {
		matches!(self, CollationType::UcsBasic)
	}
}

impl Display for CollationType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			CollationType::UcsBasic => f.write_str("UCS_BASIC"),
			CollationType::TerritoryBased(CollationStrength::Default) => f.write_str("TERRITORY_BASED"),
			CollationType::TerritoryBased(CollationStrength::Primary) => f.write_str("TERRITORY_BASED:PRIMARY"),
			CollationType::TerritoryBased(CollationStrength::Secondary) => {
				f.write_str("TERRITORY_BASED:SECONDARY")
			}
			CollationType::TerritoryBased(CollationStrength::Tertiary) => f.write_str("TERRITORY_BASED:TERTIARY"),
			CollationType::TerritoryBased(CollationStrength::Identical) => {
				f.write_str("TERRITORY_BASED:IDENTICAL")
			}
		}
	}
}

pub fn parse_locale(locale: &str) -> Result<Locale, Error> {
	Locale::try_from_str(locale.trim()).map_err(|_| {
		TypeError::InvalidLocale {
			locale: locale.to_string(),
		}
		.into()
	})
}

/// A locale specific comparator, cheap to clone and shared between values.
#[derive(Clone)]
pub struct Collator {
	inner: Arc<CollatorBorrowed<'static>>,
	locale: Locale,
	strength: CollationStrength,
}

impl Collator {
	pub fn new(locale: &Locale, strength: CollationStrength) -> Result<Self, Error> {
		let mut options = CollatorOptions::default();
		options.strength = match strength {
			CollationStrength::Default => None,
			CollationStrength::Primary => Some(Strength::Primary),
			CollationStrength::Secondary => Some(Strength::Secondary),
			CollationStrength::Tertiary => Some(Strength::Tertiary),
			CollationStrength::Identical => Some(Strength::Identical),
		};

		let inner = icu_collator::Collator::try_new(locale.into(), options).map_err(|e| {
			Error::from(TypeError::CollatorUnavailable {
				locale: locale.to_string(),
				reason: e.to_string(),
			})
		})?;

		Ok(Self {
			inner: Arc::new(inner),
			locale: locale.clone(),
			strength,
		})
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn strength(&self) -> CollationStrength {
		self.strength
	}

	/// Trailing blanks are not significant.
	pub fn compare(&self, left: &str, right: &str) -> Ordering {
		self.inner.compare(left.trim_end_matches(' '), right.trim_end_matches(' '))
	}
}

impl PartialEq for Collator {
	fn eq(&self, other: &Self) -> bool {
		self.locale == other.locale && self.strength == other.strength
	}
}

impl Debug for Collator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Collator").field("locale", &self.locale.to_string()).field("strength", &self.strength).finish()
	}
}

/// Code point order, the shorter string padded with blanks
pub fn compare_padded(left: &str, right: &str) -> Ordering {
	let mut left = left.chars();
	let mut right = right.chars();
	loop {
		match (left.next(), right.next()) {
			(None, None) => return Ordering::Equal,
			(l, r) => {
				let ordering = l.unwrap_or(' ').cmp(&r.unwrap_or(' '));
				if ordering != Ordering::Equal {
					return ordering;
				}
			}
		}
	}
}
