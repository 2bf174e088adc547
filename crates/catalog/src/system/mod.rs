// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Introspection projections over the committed catalog state.
//!
//! Pure mappings, no mutation: `DESCRIBE`, `INFORMATION_SCHEMA.VIEWS`,
//! `INFORMATION_SCHEMA.TABLES` and `SHOW TABLES` rows. Every projection
//! works off a store snapshot, so a partially-applied mutation is never
//! observable.

mod describe;
mod show;
mod tables;
mod views;

pub use describe::{DescribeRow, describe_view};
pub use show::{ShowTablesRow, show_tables};
pub use tables::{TablesRow, tables};
pub use views::{ViewsRow, views};

/// The catalog identifier rendered into INFORMATION_SCHEMA rows.
pub const CATALOG_NAME: &str = "OPAL";
