// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Per-schema catalog entry store.
//!
//! Entries live in a skip map keyed by `(dotted schema path, name)`, so
//! reads are lock-free snapshot reads. Mutations serialize through a
//! single write lock and re-check under it, persist through the storage
//! collaborator, and only then publish to the map. A failed statement
//! therefore never leaves a half-committed entry.

mod create;
mod drop;
mod get;
mod list;
mod load;
mod table;

use std::ops::Deref;
use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use opal_core::diagnostic::catalog::schema_immutable;
use opal_core::diagnostic::storage::storage_error;
use opal_core::interface::{StorageError, StoreKey, ViewStorage};
use opal_core::{Error, Span, return_error};
use parking_lot::Mutex;

pub use create::ViewToCreate;

use crate::schema::{SchemaNodeId, SchemaTree};
use crate::view::CatalogEntry;

type EntryKey = (String, String);

pub struct CatalogStore<S: ViewStorage>(Arc<CatalogStoreInner<S>>);

pub struct CatalogStoreInner<S: ViewStorage> {
    entries: SkipMap<EntryKey, CatalogEntry>,
    write_lock: Mutex<()>,
    storage: S,
}

impl<S: ViewStorage> Clone for CatalogStore<S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S: ViewStorage> Deref for CatalogStore<S> {
    type Target = CatalogStoreInner<S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: ViewStorage> CatalogStore<S> {
    pub fn new(storage: S) -> Self {
        Self(Arc::new(CatalogStoreInner {
            entries: SkipMap::new(),
            write_lock: Mutex::new(()),
            storage,
        }))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn entry_key(schema: &str, name: &str) -> EntryKey {
        (schema.to_string(), name.to_string())
    }

    fn store_key(schema: &str, name: &str) -> StoreKey {
        StoreKey::new(schema, name)
    }

    /// The dotted path of a mutation target, with the mutability gate
    /// applied first.
    fn mutable_path(
        &self,
        tree: &SchemaTree,
        schema: SchemaNodeId,
        span: Option<&Span>,
    ) -> crate::Result<String> {
        let path = tree.path_of(schema).to_string();
        if !tree.is_mutable(schema) {
            return_error!(schema_immutable(span.cloned(), &path));
        }
        Ok(path)
    }
}

fn storage_failure(error: StorageError) -> Error {
    Error(storage_error(error.0))
}
