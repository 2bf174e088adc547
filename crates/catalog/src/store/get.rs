// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::schema::SchemaPath;
use crate::store::CatalogStore;
use crate::view::{CatalogEntry, ViewDefinition};

impl<S: ViewStorage> CatalogStore<S> {
    /// Snapshot read of an entry, lock-free.
    pub fn find_entry(&self, schema: &SchemaPath, name: &str) -> Option<CatalogEntry> {
        let key = Self::entry_key(&schema.to_string(), name);
        self.entries.get(&key).map(|entry| entry.value().clone())
    }

    pub fn find_view(&self, schema: &SchemaPath, name: &str) -> Option<ViewDefinition> {
        match self.find_entry(schema, name) {
            Some(CatalogEntry::View(view)) => Some(view),
            _ => None,
        }
    }
}
