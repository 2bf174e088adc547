// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use crate::Type;

/// One output column of a view-defining query, as derived by the
/// parser/planner collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumn {
    pub name: String,
    pub ty: Type,
    pub nullable: bool,
}

impl OutputColumn {
    pub fn new(name: impl Into<String>, ty: Type, nullable: bool) -> Self {
        Self { name: name.into(), ty, nullable }
    }
}

/// A possibly-qualified table reference appearing in a view body. The
/// last segment is the table or view name; any leading segments form a
/// schema path expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReference {
    pub segments: Vec<String>,
}

impl TableReference {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { segments: segments.into_iter().map(Into::into).collect() }
    }

    /// The trailing table/view name segment.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The leading schema segments, empty for an unqualified reference.
    pub fn schema_segments(&self) -> &[String] {
        let len = self.segments.len();
        &self.segments[..len.saturating_sub(1)]
    }
}

/// The planner's view of a view-defining query: its canonical
/// re-serialized text, output shape and the table references it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryShape {
    /// Canonical re-serialized query text, not the user's literal input.
    pub sql: String,
    /// True when the projection contains a `*`.
    pub is_wildcard: bool,
    pub columns: Vec<OutputColumn>,
    pub tables: Vec<TableReference>,
}
