// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use opal_core::Error;

pub mod resolve;
pub mod schema;
pub mod store;
pub mod system;
pub mod test_utils;
pub mod view;

pub type Result<T> = std::result::Result<T, Error>;
