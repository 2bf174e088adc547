// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod diagnostic;
mod error;
pub mod interface;
mod macros;
mod span;
pub mod value;

pub use diagnostic::Diagnostic;
pub use error::Error;
pub use span::Span;
pub use value::Type;

pub type Result<T> = std::result::Result<T, Error>;
