// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::Span;
use opal_core::diagnostic::catalog::{not_a_view, view_not_found};
use opal_core::interface::ViewStorage;
use opal_core::return_error;
use tracing::debug;

use crate::schema::{SchemaNodeId, SchemaTree};
use crate::store::{CatalogStore, storage_failure};
use crate::view::CatalogEntry;

impl<S: ViewStorage> CatalogStore<S> {
    /// Drops a view. The mutability gate is checked before existence, so
    /// dropping any name in an immutable schema fails the same way.
    pub fn drop_view(
        &self,
        tree: &SchemaTree,
        schema: SchemaNodeId,
        name: &str,
        span: Option<Span>,
    ) -> crate::Result<()> {
        let path = self.mutable_path(tree, schema, span.as_ref())?;

        let _guard = self.write_lock.lock();

        let key = Self::entry_key(&path, name);
        match self.entries.get(&key).map(|entry| entry.value().clone()) {
            None => return_error!(view_not_found(span, &path, name)),
            Some(CatalogEntry::Table { name }) => {
                return_error!(not_a_view(span, &path, &name));
            }
            Some(CatalogEntry::View(_)) => {}
        }

        self.storage.delete(&Self::store_key(&path, name)).map_err(storage_failure)?;
        self.entries.remove(&key);

        debug!(schema = %path, view = %name, "view dropped");

        Ok(())
    }
}
