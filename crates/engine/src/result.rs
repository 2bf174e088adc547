// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::system::{DescribeRow, ShowTablesRow, TablesRow, ViewsRow};

/// Outcome of one executed statement. DDL variants render the
/// `(ok, summary)` row; introspection variants carry their result rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    CreateView { schema: String, view: String, replaced: bool },
    DropView { schema: String, view: String },
    Describe { rows: Vec<DescribeRow> },
    ShowTables { rows: Vec<ShowTablesRow> },
    Views { rows: Vec<ViewsRow> },
    Tables { rows: Vec<TablesRow> },
    /// A statement-scoped failure; the session stays healthy.
    Failure { summary: String },
}

impl ExecutionResult {
    pub fn ok(&self) -> bool {
        !matches!(self, ExecutionResult::Failure { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            ExecutionResult::CreateView { schema, view, replaced: false } => {
                format!("View '{}' created successfully in '{}' schema", view, schema)
            }
            ExecutionResult::CreateView { schema, view, replaced: true } => {
                format!("View '{}' replaced successfully in '{}' schema", view, schema)
            }
            ExecutionResult::DropView { schema, view } => {
                format!("View [{}] deleted successfully from schema [{}].", view, schema)
            }
            ExecutionResult::Describe { rows } => format!("{} rows", rows.len()),
            ExecutionResult::ShowTables { rows } => format!("{} rows", rows.len()),
            ExecutionResult::Views { rows } => format!("{} rows", rows.len()),
            ExecutionResult::Tables { rows } => format!("{} rows", rows.len()),
            ExecutionResult::Failure { summary } => summary.clone(),
        }
    }
}
