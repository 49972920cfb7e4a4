// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{Date, Decimal, OrderedF32, OrderedF64, Time, Timestamp, Type, Xml};

/// The SQL type a native payload is stored as by default
pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Boolean
	}
}

impl GetType for i8 {
	fn get_type() -> Type {
		Type::TinyInt
	}
}

impl GetType for i16 {
	fn get_type() -> Type {
		Type::SmallInt
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Integer
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::BigInt
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Real
	}
}

impl GetType for OrderedF32 {
	fn get_type() -> Type {
		Type::Real
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Double
	}
}

impl GetType for OrderedF64 {
	fn get_type() -> Type {
		Type::Double
	}
}

impl GetType for Decimal {
	fn get_type() -> Type {
		Type::Decimal
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::VarChar
	}
}

impl GetType for Vec<u8> {
	fn get_type() -> Type {
		Type::VarBit
	}
}

impl GetType for Date {
	fn get_type() -> Type {
		Type::Date
	}
}

impl GetType for Time {
	fn get_type() -> Type {
		Type::Time
	}
}

impl GetType for Timestamp {
	fn get_type() -> Type {
		Type::Timestamp
	}
}

impl GetType for Xml {
	fn get_type() -> Type {
		Type::Xml
	}
}
