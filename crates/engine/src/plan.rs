// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::schema::SchemaPath;
use opal_core::Span;
use opal_core::interface::{QueryShape, TableReference};

/// A planned statement against the view catalog, as handed over by the
/// parser/planner collaborator.
#[derive(Debug, Clone)]
pub enum Plan {
    CreateView(CreateViewPlan),
    DropView(DropViewPlan),
    Describe(DescribePlan),
    ShowTables(ShowTablesPlan),
    InformationSchemaViews,
    InformationSchemaTables,
}

#[derive(Debug, Clone)]
pub struct CreateViewPlan {
    pub span: Option<Span>,
    /// Target schema path expression; empty means the session default.
    pub schema: SchemaPath,
    pub name: String,
    pub field_list: Option<Vec<String>>,
    pub query: QueryShape,
    pub replace: bool,
}

#[derive(Debug, Clone)]
pub struct DropViewPlan {
    pub span: Option<Span>,
    pub schema: SchemaPath,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct DescribePlan {
    pub span: Option<Span>,
    /// Possibly-qualified view reference.
    pub target: TableReference,
}

#[derive(Debug, Clone)]
pub struct ShowTablesPlan {
    /// Schema to list; empty means the session default.
    pub schema: SchemaPath,
    pub like: Option<String>,
}
