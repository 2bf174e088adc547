// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::schema::SchemaPath;
use crate::store::CatalogStore;
use crate::view::CatalogEntry;

impl<S: ViewStorage> CatalogStore<S> {
    /// Entries of one schema, name-ordered. A copied-out snapshot; the
    /// live map is never exposed.
    pub fn list(&self, schema: &SchemaPath) -> Vec<CatalogEntry> {
        let schema = schema.to_string();
        self.entries
            .iter()
            .filter(|entry| entry.key().0 == schema)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Every committed entry with its dotted schema path, ordered by
    /// schema then name.
    pub fn list_all(&self) -> Vec<(String, CatalogEntry)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().0.clone(), entry.value().clone()))
            .collect()
    }
}
