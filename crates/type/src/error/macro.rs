// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Turns anything implementing `IntoDiagnostic` into an `Error`
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error(Box::new($crate::error::IntoDiagnostic::into_diagnostic($diagnostic)))
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}

/// Creates an internal error diagnostic capturing the source location
#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::error::diagnostic::internal::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostic::internal::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
}

#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::error::Error(Box::new($crate::internal_error!($reason))))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error(Box::new($crate::internal_error!($fmt, $($arg)*))))
    };
}

/// Flags a logically unreachable state. Only checked with debug assertions or
/// the `sanity` feature; never part of normal error handling.
#[macro_export]
macro_rules! sanity_assert {
    ($cond:expr, $($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "sanity")) && !($cond) {
            panic!("{}", $crate::internal_error!($($arg)*).message);
        }
    };
}
