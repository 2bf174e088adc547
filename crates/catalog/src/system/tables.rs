// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::store::CatalogStore;
use crate::system::CATALOG_NAME;

/// One row of `INFORMATION_SCHEMA.TABLES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablesRow {
    pub table_catalog: String,
    pub table_schema: String,
    pub table_name: String,
    pub table_type: String,
}

/// Every committed entry, views and tables alike, ordered by schema
/// then name. `table_type` discriminates the two kinds.
pub fn tables<S: ViewStorage>(store: &CatalogStore<S>) -> Vec<TablesRow> {
    store
        .list_all()
        .into_iter()
        .map(|(schema, entry)| TablesRow {
            table_catalog: CATALOG_NAME.to_string(),
            table_schema: schema,
            table_name: entry.name().to_string(),
            table_type: entry.kind().to_string(),
        })
        .collect()
}
