// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::schema::SchemaPath;

/// Per-statement session state. Passed explicitly on every call; the
/// engine holds no process-wide default schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub current_schema: SchemaPath,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { current_schema: SchemaPath::empty() }
    }

    /// The `USE <schema>` statement.
    pub fn use_schema(&mut self, schema: impl Into<SchemaPath>) {
        self.current_schema = schema.into();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
