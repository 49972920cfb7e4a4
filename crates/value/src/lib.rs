// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Construction of SQL values.
//!
//! [`ValueFactory`] builds every concrete SQL type, recycles existing values
//! in place, and rebuilds typed nulls from stored format ids. It owns the two
//! pieces of process wide state values depend on: the decimal representation
//! installed at [`ValueFactory::boot`] and the database locale used to order
//! national character data.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::{ValueFactoryBuilder, ValueFactoryConfigurator};
pub use collation::{CollationProvider, LocaleFinder};
pub use config::{DecimalProfile, ValueConfig};
pub use factory::ValueFactory;
pub use locator::{HeapRowLocator, RowLocator};
pub use registry::FormatRegistry;
pub use strata_type::{Error, Result};

mod builder;
mod collation;
mod config;
mod factory;
mod locator;
mod registry;
