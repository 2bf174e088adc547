// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

/// Key of a persisted view definition: the dotted defining schema path
/// plus the view name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreKey {
    pub schema: String,
    pub name: String,
}

impl StoreKey {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self { schema: schema.into(), name: name.into() }
    }
}

/// Failure reported by the persistent store. The catalog treats it as
/// fatal for the statement; retrying is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(pub String);

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for StorageError {}

/// Durable key-value interface for serialized view definitions with
/// atomic put/delete. Implementations must never expose a partially
/// written value.
pub trait ViewStorage: Send + Sync {
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StorageError>;

    fn put(&self, key: &StoreKey, value: Vec<u8>) -> Result<(), StorageError>;

    fn delete(&self, key: &StoreKey) -> Result<(), StorageError>;

    /// All entries whose schema equals `schema`, or every entry when
    /// `schema` is `None`.
    fn list(&self, schema: Option<&str>) -> Result<Vec<(StoreKey, Vec<u8>)>, StorageError>;
}
