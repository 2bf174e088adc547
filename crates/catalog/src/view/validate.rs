// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashSet;

use opal_core::diagnostic::catalog::{
    column_count_mismatch, duplicate_column, wildcard_with_field_list,
};
use opal_core::interface::QueryShape;
use opal_core::{Span, return_error};

use crate::view::ViewColumn;

/// Derives and validates a view's final column list from an optional
/// explicit field list and the query's output shape.
///
/// The final names are the explicit list when present, else each output
/// column's derived alias. Names must be unique ignoring case; the
/// duplicate is reported exactly as written at its second occurrence.
pub fn validate_columns(
    span: Option<&Span>,
    field_list: Option<&[String]>,
    query: &QueryShape,
) -> crate::Result<Vec<ViewColumn>> {
    if let Some(fields) = field_list {
        if query.is_wildcard {
            return_error!(wildcard_with_field_list(span.cloned()));
        }
        if fields.len() != query.columns.len() {
            return_error!(column_count_mismatch(
                span.cloned(),
                fields.len(),
                query.columns.len()
            ));
        }
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(query.columns.len());
    let mut columns = Vec::with_capacity(query.columns.len());

    for (index, output) in query.columns.iter().enumerate() {
        let name = match field_list {
            Some(fields) => fields[index].as_str(),
            None => output.name.as_str(),
        };

        if !seen.insert(name.to_lowercase()) {
            return_error!(duplicate_column(span.cloned(), name));
        }

        columns.push(ViewColumn::new(name, output.ty, output.nullable));
    }

    Ok(columns)
}
