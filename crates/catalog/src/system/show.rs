// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::schema::SchemaPath;
use crate::store::CatalogStore;

/// One row of `SHOW TABLES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowTablesRow {
    pub table_schema: String,
    pub table_name: String,
}

/// Entries of one schema, views included, optionally filtered by a SQL
/// `LIKE` pattern.
pub fn show_tables<S: ViewStorage>(
    store: &CatalogStore<S>,
    schema: &SchemaPath,
    like: Option<&str>,
) -> Vec<ShowTablesRow> {
    let schema_name = schema.to_string();
    store
        .list(schema)
        .into_iter()
        .filter(|entry| like.is_none_or(|pattern| like_matches(pattern, entry.name())))
        .map(|entry| ShowTablesRow {
            table_schema: schema_name.clone(),
            table_name: entry.name().to_string(),
        })
        .collect()
}

/// SQL LIKE over `%` (any run) and `_` (any one character).
fn like_matches(pattern: &str, input: &str) -> bool {
    fn matches(pattern: &[char], input: &[char]) -> bool {
        match pattern.split_first() {
            None => input.is_empty(),
            Some((&'%', rest)) => {
                (0..=input.len()).any(|skip| matches(rest, &input[skip..]))
            }
            Some((&'_', rest)) => !input.is_empty() && matches(rest, &input[1..]),
            Some((ch, rest)) => {
                input.first() == Some(ch) && matches(rest, &input[1..])
            }
        }
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let input: Vec<char> = input.chars().collect();
    matches(&pattern, &input)
}
