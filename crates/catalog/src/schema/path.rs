// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// An ordered, case-preserved sequence of schema name segments. May be
/// fully qualified, partially qualified, or empty (fully relative to a
/// default). Equality is segment-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn empty() -> Self {
        Self { segments: Vec::new() }
    }

    /// Parses a dotted path expression such as `dfs.tmp`. Segment case
    /// is preserved.
    pub fn parse(expr: &str) -> Self {
        if expr.is_empty() {
            return Self::empty();
        }
        Self { segments: expr.split('.').map(str::to_string).collect() }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }
}

impl Display for SchemaPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segments.join(".").as_str())
    }
}

impl From<&str> for SchemaPath {
    fn from(expr: &str) -> Self {
        Self::parse(expr)
    }
}
