// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;
use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use opal_core::interface::{StorageError, StoreKey, ViewStorage};

/// In-memory storage backend. Cheap to clone, safe to share across
/// threads; every value is published whole or not at all.
#[derive(Clone)]
pub struct Memory(Arc<MemoryInner>);

pub struct MemoryInner {
    memory: SkipMap<StoreKey, Vec<u8>>,
}

impl Deref for Memory {
    type Target = MemoryInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self(Arc::new(MemoryInner { memory: SkipMap::new() }))
    }
}

impl ViewStorage for Memory {
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.memory.get(key).map(|entry| entry.value().clone()))
    }

    fn put(&self, key: &StoreKey, value: Vec<u8>) -> Result<(), StorageError> {
        self.memory.insert(key.clone(), value);
        Ok(())
    }

    fn delete(&self, key: &StoreKey) -> Result<(), StorageError> {
        self.memory.remove(key);
        Ok(())
    }

    fn list(&self, schema: Option<&str>) -> Result<Vec<(StoreKey, Vec<u8>)>, StorageError> {
        Ok(self
            .memory
            .iter()
            .filter(|entry| schema.is_none_or(|s| entry.key().schema == s))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }
}
