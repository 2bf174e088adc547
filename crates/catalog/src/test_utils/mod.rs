// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Shared fixtures for catalog tests.

use std::sync::atomic::{AtomicBool, Ordering};

use opal_core::Type;
use opal_core::interface::{
    OutputColumn, QueryShape, StorageError, StoreKey, TableReference, ViewStorage,
};
use opal_storage::Memory;

use crate::schema::{SchemaPath, SchemaTree};
use crate::store::{CatalogStore, ViewToCreate};
use crate::view::{ViewColumn, ViewDefinition};

/// A namespace hierarchy with the shape used across the test suite:
/// `cp` is a read-only built-in namespace, `dfs` holds the mutable
/// workspaces `tmp` and `sandbox`.
pub fn test_tree() -> SchemaTree {
    let mut tree = SchemaTree::new();
    let root = tree.root();

    tree.add_schema(root, "cp", false);
    let dfs = tree.add_schema(root, "dfs", false);
    tree.add_schema(dfs, "tmp", true);
    tree.add_schema(dfs, "sandbox", true);

    tree
}

pub fn test_store() -> CatalogStore<Memory> {
    CatalogStore::new(Memory::new())
}

/// In-memory backend whose writes can be switched to fail, for
/// exercising the persist-before-publish ordering. Reads always work.
pub struct UnreliableStorage {
    inner: Memory,
    fail_writes: AtomicBool,
}

impl UnreliableStorage {
    pub fn new() -> Self {
        Self { inner: Memory::new(), fail_writes: AtomicBool::new(false) }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError("injected write failure".to_string()));
        }
        Ok(())
    }
}

impl Default for UnreliableStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStorage for UnreliableStorage {
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn put(&self, key: &StoreKey, value: Vec<u8>) -> Result<(), StorageError> {
        self.check_writable()?;
        self.inner.put(key, value)
    }

    fn delete(&self, key: &StoreKey) -> Result<(), StorageError> {
        self.check_writable()?;
        self.inner.delete(key)
    }

    fn list(&self, schema: Option<&str>) -> Result<Vec<(StoreKey, Vec<u8>)>, StorageError> {
        self.inner.list(schema)
    }
}

/// A query shape over explicit `(name, type, nullable)` output columns
/// and the given table references.
pub fn query_shape(columns: &[(&str, Type, bool)], tables: &[&[&str]]) -> QueryShape {
    let names: Vec<String> = columns.iter().map(|(name, _, _)| format!("`{}`", name)).collect();
    QueryShape {
        sql: format!("SELECT {} FROM `t`", names.join(", ")),
        is_wildcard: false,
        columns: columns
            .iter()
            .map(|(name, ty, nullable)| OutputColumn::new(*name, *ty, *nullable))
            .collect(),
        tables: tables.iter().map(|segments| TableReference::new(segments.iter().copied())).collect(),
    }
}

pub fn wildcard_shape(columns: &[(&str, Type, bool)]) -> QueryShape {
    let mut shape = query_shape(columns, &[]);
    shape.sql = "SELECT * FROM `t`".to_string();
    shape.is_wildcard = true;
    shape
}

/// A `ViewToCreate` with nullable columns and a self-describing body.
pub fn view_to_create(name: &str, columns: &[(&str, Type)]) -> ViewToCreate {
    let column_list: Vec<String> = columns.iter().map(|(n, _)| format!("`{}`", n)).collect();
    ViewToCreate {
        span: None,
        name: name.to_string(),
        columns: columns.iter().map(|(n, ty)| ViewColumn::new(*n, *ty, true)).collect(),
        sql: format!("SELECT {} FROM `cp`.`region.json`", column_list.join(", ")),
        tables: vec![TableReference::new(["cp", "region.json"])],
    }
}

pub fn view_definition(schema: &str, name: &str, columns: &[(&str, Type)]) -> ViewDefinition {
    view_with_tables(schema, name, columns, vec![TableReference::new(["cp", "region.json"])])
}

pub fn view_with_tables(
    schema: &str,
    name: &str,
    columns: &[(&str, Type)],
    tables: Vec<TableReference>,
) -> ViewDefinition {
    let column_list: Vec<String> = columns.iter().map(|(n, _)| format!("`{}`", n)).collect();
    ViewDefinition {
        name: name.to_string(),
        schema: SchemaPath::parse(schema),
        columns: columns.iter().map(|(n, ty)| ViewColumn::new(*n, *ty, true)).collect(),
        sql: format!("SELECT {} FROM `t`", column_list.join(", ")),
        tables,
        version: 1,
    }
}
