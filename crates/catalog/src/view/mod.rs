// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod validate;

use std::fmt::{Display, Formatter};

use opal_core::diagnostic::storage::storage_error;
use opal_core::interface::TableReference;
use opal_core::{Error, Type};
use serde::{Deserialize, Serialize};

pub use validate::validate_columns;

use crate::schema::SchemaPath;

/// Discriminates the two entry kinds sharing one namespace per schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Table,
    View,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntryKind::Table => "TABLE",
            EntryKind::View => "VIEW",
        })
    }
}

/// A named catalog entry within one schema. Views and tables share one
/// name namespace, so collision checks go through a single lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogEntry {
    Table { name: String },
    View(ViewDefinition),
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Table { name } => name,
            CatalogEntry::View(view) => &view.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Table { .. } => EntryKind::Table,
            CatalogEntry::View(_) => EntryKind::View,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewColumn {
    pub name: String,
    pub ty: Type,
    pub nullable: bool,
}

impl ViewColumn {
    pub fn new(name: impl Into<String>, ty: Type, nullable: bool) -> Self {
        Self { name: name.into(), ty, nullable }
    }
}

/// A persisted view definition. The record is sufficient to answer all
/// introspection queries without re-parsing the original statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefinition {
    pub name: String,
    /// The defining schema path, captured at creation and never changed
    /// afterwards, including across a replace. Unqualified references in
    /// the body resolve against it.
    pub schema: SchemaPath,
    pub columns: Vec<ViewColumn>,
    /// Canonical re-serialized query text.
    pub sql: String,
    /// Table references of the canonical body, in order of appearance.
    pub tables: Vec<TableReference>,
    /// Bumped on every replace, starting at 1.
    pub version: u64,
}

impl ViewDefinition {
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error(storage_error(e.to_string())))
    }

    pub fn decode(bytes: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error(storage_error(e.to_string())))
    }
}
