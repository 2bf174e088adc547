// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::diagnostic::catalog::schema_not_found;
use opal_core::{Span, return_error};

use crate::schema::{SchemaNodeId, SchemaPath, SchemaTree};

impl SchemaTree {
    /// Resolves a path expression against the session's current default
    /// schema.
    ///
    /// A path whose first segment names a root-level namespace is
    /// absolute and resolved top-down from the root. Any other path is
    /// first tried as a suffix of `default`, then as an absolute path.
    /// The empty path resolves to the default itself.
    pub fn resolve(
        &self,
        path: &SchemaPath,
        default: &SchemaPath,
    ) -> crate::Result<SchemaNodeId> {
        self.resolve_with_span(path, default, None)
    }

    pub fn resolve_with_span(
        &self,
        path: &SchemaPath,
        default: &SchemaPath,
        span: Option<Span>,
    ) -> crate::Result<SchemaNodeId> {
        if path.is_empty() {
            match self.resolve_absolute(default.segments()) {
                Some(id) => return Ok(id),
                None => return_error!(schema_not_found(span, &default.to_string())),
            }
        }

        let absolute_first =
            path.first().map(|first| self.child(self.root(), first).is_some()).unwrap_or(false);

        if absolute_first {
            if let Some(id) = self.resolve_absolute(path.segments()) {
                return Ok(id);
            }
        } else {
            if let Some(base) = self.resolve_absolute(default.segments()) {
                if let Some(id) = self.resolve_from(base, path.segments()) {
                    return Ok(id);
                }
            }
            if let Some(id) = self.resolve_absolute(path.segments()) {
                return Ok(id);
            }
        }

        return_error!(schema_not_found(span, &path.to_string()))
    }

    fn resolve_absolute(&self, segments: &[String]) -> Option<SchemaNodeId> {
        self.resolve_from(self.root(), segments)
    }

    fn resolve_from(&self, start: SchemaNodeId, segments: &[String]) -> Option<SchemaNodeId> {
        let mut current = start;
        for segment in segments {
            current = self.child(current, segment)?;
        }
        Some(current)
    }
}
