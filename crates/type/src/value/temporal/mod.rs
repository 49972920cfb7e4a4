// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod date;
pub mod parse;
mod time;
mod timestamp;

pub use date::{Date, MAX_DAY_NUMBER};
pub use time::Time;
pub use timestamp::Timestamp;
