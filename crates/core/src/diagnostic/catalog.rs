// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Diagnostic, Span};

pub fn schema_not_found(span: Option<Span>, schema: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_001".to_string(),
        statement: None,
        message: format!(
            "Schema [{}] is not valid with respect to either root schema or current default schema",
            schema
        ),
        span,
        label: Some("schema does not exist".to_string()),
        help: Some("verify the schema path or change the current default schema".to_string()),
        notes: vec![],
    }
}

pub fn schema_immutable(span: Option<Span>, schema: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_002".to_string(),
        statement: None,
        message: format!("Schema [{}] is immutable.", schema),
        span,
        label: Some("DDL is not allowed in this schema".to_string()),
        help: Some("use a mutable workspace schema instead".to_string()),
        notes: vec![],
    }
}

pub fn table_already_exists(span: Option<Span>, schema: &str, table: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_003".to_string(),
        statement: None,
        message: format!(
            "A non-view table with given name [{}] already exists in schema [{}]",
            table, schema
        ),
        span,
        label: Some("name is taken by a table".to_string()),
        help: Some("a table cannot be replaced by CREATE OR REPLACE VIEW".to_string()),
        notes: vec![],
    }
}

pub fn duplicate_column(span: Option<Span>, column: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_004".to_string(),
        statement: None,
        message: format!("Duplicate column name [{}]", column),
        span,
        label: Some("column names must be unique, ignoring case".to_string()),
        help: Some("alias the column to a distinct name".to_string()),
        notes: vec![],
    }
}

pub fn column_count_mismatch(span: Option<Span>, expected: usize, actual: usize) -> Diagnostic {
    Diagnostic {
        code: "CA_005".to_string(),
        statement: None,
        message: "view's field list and the view's query field list have different counts."
            .to_string(),
        span,
        label: Some("field list does not match the query output".to_string()),
        help: None,
        notes: vec![format!("field list has {} columns, query produces {}", expected, actual)],
    }
}

pub fn wildcard_with_field_list(span: Option<Span>) -> Diagnostic {
    Diagnostic {
        code: "CA_006".to_string(),
        statement: None,
        message:
            "view's query field list has a '*', which is invalid when view's field list is specified."
                .to_string(),
        span,
        label: Some("wildcard projection cannot be renamed".to_string()),
        help: Some("drop the field list or project explicit columns".to_string()),
        notes: vec![],
    }
}

pub fn view_already_exists(span: Option<Span>, schema: &str, view: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_007".to_string(),
        statement: None,
        message: format!(
            "A view with given name [{}] already exists in schema [{}]",
            view, schema
        ),
        span,
        label: Some("view name is taken".to_string()),
        help: Some("use CREATE OR REPLACE VIEW to overwrite it".to_string()),
        notes: vec![],
    }
}

pub fn view_not_found(span: Option<Span>, schema: &str, view: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_008".to_string(),
        statement: None,
        message: format!("Unknown view [{}] in schema [{}].", view, schema),
        span,
        label: Some("no such view".to_string()),
        help: None,
        notes: vec![],
    }
}

pub fn not_a_view(span: Option<Span>, schema: &str, name: &str) -> Diagnostic {
    Diagnostic {
        code: "CA_009".to_string(),
        statement: None,
        message: format!("[{}] is not a VIEW in schema [{}]", name, schema),
        span,
        label: Some("entry exists but is a table".to_string()),
        help: Some("use DROP TABLE for tables".to_string()),
        notes: vec![],
    }
}
