// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;
use tracing::info;

use crate::store::{CatalogStore, storage_failure};
use crate::view::{CatalogEntry, ViewDefinition};

impl<S: ViewStorage> CatalogStore<S> {
    /// Rehydrates the in-memory index from the persistent store.
    /// Returns the number of views loaded.
    ///
    /// Every record is decoded before any is published, so a corrupt
    /// record leaves the index empty rather than partially populated.
    pub fn load(&self) -> crate::Result<usize> {
        let _guard = self.write_lock.lock();

        let records = self.storage.list(None).map_err(storage_failure)?;

        let mut definitions = Vec::with_capacity(records.len());
        for (key, bytes) in records {
            definitions.push((key, ViewDefinition::decode(&bytes)?));
        }

        let count = definitions.len();
        for (key, definition) in definitions {
            self.entries
                .insert((key.schema, key.name), CatalogEntry::View(definition));
        }

        info!(views = count, "catalog loaded from storage");

        Ok(count)
    }
}
