// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Database locale handling and national character ordering

use std::{
	cmp::Ordering,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering as AtomicOrdering},
	},
};

use strata_type::{CollationStrength, CollationType, collation::parse_locale};
use strata_value::ValueFactory;

#[test]
fn test_ucs_basic_never_has_a_collator() {
	let factory = ValueFactory::builder().locale("en").build();
	assert_eq!(factory.collator(CollationType::UcsBasic).unwrap(), None);
	factory.boot().unwrap();
	assert_eq!(factory.collator(CollationType::UcsBasic).unwrap(), None);
}

#[test]
fn test_national_char_orders_by_locale() {
	let factory = ValueFactory::builder().build();
	factory.boot().unwrap();
	factory.set_locale("en").unwrap();

	let words = ["banana", "Apple", "cherry", "apple"];
	let mut national: Vec<_> = words.iter().map(|w| factory.national_char(*w).unwrap()).collect();
	national.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
	let national: Vec<_> = national.iter().map(|v| v.as_str().unwrap()).collect();
	assert_eq!(national, ["apple", "Apple", "banana", "cherry"]);

	let mut plain: Vec<_> = words.iter().map(|w| factory.char(*w)).collect();
	plain.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
	let plain: Vec<_> = plain.iter().map(|v| v.as_str().unwrap()).collect();
	assert_eq!(plain, ["Apple", "apple", "banana", "cherry"]);
}

#[test]
fn test_locale_is_set_once() {
	let factory = ValueFactory::builder().build();
	factory.set_locale("en").unwrap();
	let err = factory.set_locale("en").unwrap_err();
	assert_eq!(err.code, "COLLATION_002");
}

#[test]
fn test_values_keep_the_collator_they_were_built_with() {
	let factory = ValueFactory::builder().build();
	let before = factory.national_var_char("x").unwrap();
	factory.set_locale("de").unwrap();
	let after = factory.national_var_char("x").unwrap();
	assert_eq!(before.collator(), None);
	assert!(after.collator().is_some());
}

#[test]
fn test_locale_finder_is_consulted_lazily() {
	let asked = Arc::new(AtomicBool::new(false));
	let flag = asked.clone();
	let factory = ValueFactory::builder()
		.locale_finder(move || {
			flag.store(true, AtomicOrdering::SeqCst);
			parse_locale("fr-CA").ok()
		})
		.build();
	factory.boot().unwrap();
	assert!(!asked.load(AtomicOrdering::SeqCst));

	let value = factory.national_char("x").unwrap();
	assert!(asked.load(AtomicOrdering::SeqCst));
	assert_eq!(value.collator().unwrap().locale().to_string(), "fr-CA");

	let primary = factory.collator(CollationType::TerritoryBased(CollationStrength::Primary)).unwrap().unwrap();
	assert_eq!(primary.locale().to_string(), "fr-CA");
}
