// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	any::{Any, type_name},
	fmt::{self, Debug, Display, Formatter},
	sync::Arc,
};

/// An opaque object stored in a user defined type column. Two objects are
/// equal only when they are the same allocation.
#[derive(Clone)]
pub struct UserObject {
	inner: Arc<dyn Any + Send + Sync>,
	type_name: &'static str,
}

impl UserObject {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self {
			inner: Arc::new(value),
			type_name: type_name::<T>(),
		}
	}

	pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
		Self {
			inner: value,
			type_name: type_name::<T>(),
		}
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.downcast_ref::<T>()
	}
}

impl PartialEq for UserObject {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Debug for UserObject {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("UserObject").field("type_name", &self.type_name).finish_non_exhaustive()
	}
}

impl Display for UserObject {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}@{:p}", self.type_name, Arc::as_ptr(&self.inner))
	}
}
