// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Reference resolution.
//!
//! Resolves possibly-qualified table references through the schema tree
//! and binds stored view bodies against their defining schema.

mod view;

use opal_core::interface::TableReference;

pub use view::{BoundView, bind_view};

use crate::schema::{SchemaNodeId, SchemaPath, SchemaTree};

/// A table reference resolved to a concrete schema node and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTable {
    pub schema: SchemaNodeId,
    pub name: String,
}

/// Resolves a table reference against a default schema. An unqualified
/// reference resolves entirely within the default; a qualified one goes
/// through the schema tree's resolution order.
pub fn resolve_table_reference(
    tree: &SchemaTree,
    reference: &TableReference,
    default: &SchemaPath,
) -> crate::Result<ResolvedTable> {
    let schema_expr = SchemaPath::new(reference.schema_segments().to_vec());
    let schema = tree.resolve(&schema_expr, default)?;

    Ok(ResolvedTable { schema, name: reference.name().to_string() })
}

#[cfg(test)]
mod tests {
    use opal_core::interface::TableReference;

    use super::resolve_table_reference;
    use crate::test_utils::test_tree;

    #[test]
    fn test_unqualified_reference_uses_default() {
        let tree = test_tree();

        let resolved = resolve_table_reference(
            &tree,
            &TableReference::new(["region.json"]),
            &"dfs.tmp".into(),
        )
        .unwrap();

        assert_eq!(tree.path_of(resolved.schema).to_string(), "dfs.tmp");
        assert_eq!(resolved.name, "region.json");
    }

    #[test]
    fn test_qualified_reference_ignores_default() {
        let tree = test_tree();

        let resolved = resolve_table_reference(
            &tree,
            &TableReference::new(["cp", "region.json"]),
            &"dfs.tmp".into(),
        )
        .unwrap();

        assert_eq!(tree.path_of(resolved.schema).to_string(), "cp");
    }

    #[test]
    fn test_unknown_schema() {
        let tree = test_tree();

        let err = resolve_table_reference(
            &tree,
            &TableReference::new(["warehouse", "orders"]),
            &"dfs.tmp".into(),
        )
        .unwrap_err();

        assert_eq!(err.diagnostic().code, "CA_001");
    }
}
