// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// Creates an internal error diagnostic with source location
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let location = format!("{}:{}:{}", file, line, column);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		label: Some(format!("Internal invariant violated at {}", location)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Location: {}\nFunction: {}\nModule: {}\nVersion: {}",
			location,
			function,
			module_path,
			env!("CARGO_PKG_VERSION"),
		)),
		notes: vec![format!("Error occurred in function: {}", function)],
		cause: None,
	}
}

/// Internal error without source location
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown", "unknown")
}
