// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::resolve::{ResolvedTable, resolve_table_reference};
use crate::schema::SchemaTree;
use crate::view::ViewDefinition;

/// A view body with every table reference resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundView {
    pub sql: String,
    pub tables: Vec<ResolvedTable>,
}

/// Expands a stored view for execution. Unqualified references in the
/// body resolve against the view's defining schema, never the querying
/// session's current default. Binding is re-derived on every call, so a
/// replaced view always reflects its latest body.
pub fn bind_view(tree: &SchemaTree, view: &ViewDefinition) -> crate::Result<BoundView> {
    let mut tables = Vec::with_capacity(view.tables.len());
    for reference in &view.tables {
        tables.push(resolve_table_reference(tree, reference, &view.schema)?);
    }

    Ok(BoundView { sql: view.sql.clone(), tables })
}
