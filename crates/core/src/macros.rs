// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

/// Wraps a `Diagnostic` into an `Err(Error)`.
#[macro_export]
macro_rules! err {
    ($diagnostic:expr) => {
        Err($crate::Error($diagnostic))
    };
}

/// Returns early from the enclosing function with the given diagnostic.
#[macro_export]
macro_rules! return_error {
    ($diagnostic:expr) => {
        return Err($crate::Error($diagnostic))
    };
}
