// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Construction, reuse and null handling through the public factory API

use strata_type::{Date, Decimal, RowLocation, Time, Timestamp, Type, UserObject, Value};
use strata_value::{DecimalProfile, Result, ValueFactory};

fn booted() -> ValueFactory {
	let factory = ValueFactory::builder().build();
	factory.boot().unwrap();
	factory
}

fn null_of(factory: &ValueFactory, ty: Type, previous: Option<Value>) -> Result<Value> {
	match ty {
		Type::Boolean => factory.null_boolean(previous),
		Type::TinyInt => factory.null_tiny_int(previous),
		Type::SmallInt => factory.null_small_int(previous),
		Type::Integer => factory.null_integer(previous),
		Type::BigInt => factory.null_big_int(previous),
		Type::Real => factory.null_real(previous),
		Type::Double => factory.null_double(previous),
		Type::Decimal => factory.null_decimal(previous),
		Type::Char => factory.null_char(previous),
		Type::VarChar => factory.null_var_char(previous),
		Type::LongVarChar => factory.null_long_var_char(previous),
		Type::Clob => factory.null_clob(previous),
		Type::NationalChar => factory.null_national_char(previous),
		Type::NationalVarChar => factory.null_national_var_char(previous),
		Type::NationalLongVarChar => factory.null_national_long_var_char(previous),
		Type::NClob => factory.null_nclob(previous),
		Type::Bit => factory.null_bit(previous),
		Type::VarBit => factory.null_var_bit(previous),
		Type::LongVarBit => factory.null_long_var_bit(previous),
		Type::Blob => factory.null_blob(previous),
		Type::Date => factory.null_date(previous),
		Type::Time => factory.null_time(previous),
		Type::Timestamp => factory.null_timestamp(previous),
		Type::Ref => factory.null_reference(previous),
		Type::UserType => factory.null_user_object(previous),
		Type::Xml => factory.null_xml(previous),
		Type::RowLocation => Ok(factory.registry().resolve(ty.format_id())?.unwrap()),
	}
}

#[test]
fn test_null_construction_for_every_type() {
	let factory = booted();
	for ty in Type::ALL {
		let value = null_of(&factory, ty, None).unwrap();
		assert!(value.is_null(), "{ty}");
		assert_eq!(value.get_type(), ty);
	}
}

#[test]
fn test_null_reuse_for_every_type() {
	let factory = booted();
	for ty in Type::ALL {
		let previous = null_of(&factory, ty, None).unwrap();
		let value = null_of(&factory, ty, Some(previous.clone())).unwrap();
		assert_eq!(value, previous, "{ty}");
	}
}

#[test]
fn test_null_reuse_rejects_other_types() {
	let factory = booted();
	for ty in Type::ALL.into_iter().filter(|ty| *ty != Type::RowLocation) {
		let other = if ty == Type::Integer {
			factory.big_int(1)
		} else {
			factory.integer(1)
		};
		let err = null_of(&factory, ty, Some(other)).unwrap_err();
		assert_eq!(err.code, "VALUE_001", "{ty}");
	}
}

#[test]
fn test_decimal_zero_after_boot() {
	let factory = booted();
	let value = factory.decimal(0).unwrap();
	assert!(!value.is_null());
	assert!(value.as_decimal().is_some_and(Decimal::is_zero));
	assert_eq!(value.as_decimal(), Some(factory.zero_decimal().unwrap()));
}

#[test]
fn test_integer_null_then_reuse() {
	let factory = booted();
	let d1 = factory.null_integer(None).unwrap();
	assert!(d1.is_null());
	assert_eq!(d1.get_type(), Type::Integer);

	let d2 = factory.integer_reusing(5, Some(d1)).unwrap();
	assert!(!d2.is_null());
	assert_eq!(d2.as_i32(), Some(5));
	assert_eq!(d2, factory.integer(5));
}

#[test]
fn test_reused_heap_values_keep_their_buffer() {
	let factory = booted();
	let value = factory.var_char("a fairly long piece of text");
	let before = value.as_str().unwrap().as_ptr();
	let value = factory.var_char_reusing("short", Some(value)).unwrap();
	assert_eq!(value.as_str().unwrap().as_ptr(), before);
	assert_eq!(value, factory.var_char("short"));
}

#[test]
fn test_round_trip_then_null_keeps_type() {
	let factory = booted();
	let date = Date::new(2024, 2, 29).unwrap();
	let time = Time::new(12, 0, 1).unwrap();
	let values = vec![
		factory.boolean(true),
		factory.tiny_int(-8),
		factory.small_int(300),
		factory.integer(70_000),
		factory.big_int(1 << 40),
		factory.real(1.25).unwrap(),
		factory.double(-2.5).unwrap(),
		factory.decimal("3.14").unwrap(),
		factory.char("c"),
		factory.clob("clob"),
		factory.nclob("nclob").unwrap(),
		factory.blob(&b"\x00\xff"[..]),
		factory.date(date),
		factory.time(time),
		factory.timestamp(Timestamp::from_parts(date, time)),
		factory.reference(RowLocation::new(1, 1)),
		factory.user_object(UserObject::new("object")),
	];

	for mut value in values {
		let ty = value.get_type();
		assert!(!value.is_null(), "{ty}");
		value.set_to_null();
		assert!(value.is_null(), "{ty}");
		assert_eq!(value.get_type(), ty);
		assert_eq!(value.to_string(), "NULL");
	}
}

#[test]
fn test_read_back() {
	let factory = booted();
	assert_eq!(factory.tiny_int(-8).as_i8(), Some(-8));
	assert_eq!(factory.small_int(300).as_i16(), Some(300));
	assert_eq!(factory.big_int(1 << 40).as_i64(), Some(1 << 40));
	assert_eq!(factory.real(1.25).unwrap().as_f32(), Some(1.25));
	assert_eq!(factory.decimal("3.14").unwrap().to_string(), "3.14");
	assert_eq!(factory.long_var_char("text").as_str(), Some("text"));
	assert_eq!(factory.long_var_bit(&b"bits"[..]).as_bytes(), Some(&b"bits"[..]));
}

#[test]
fn test_constrained_profile() {
	let factory = ValueFactory::builder().decimal_profile(DecimalProfile::Constrained).build();
	factory.boot().unwrap();
	let a = factory.decimal("1.10").unwrap();
	let b = factory.decimal(1.1).unwrap();
	assert_eq!(a, b);
	assert_eq!(factory.decimal_backend().unwrap().name(), "scaled");
}
