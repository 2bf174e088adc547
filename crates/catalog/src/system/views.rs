// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::store::CatalogStore;
use crate::system::CATALOG_NAME;
use crate::view::CatalogEntry;

/// One row of `INFORMATION_SCHEMA.VIEWS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewsRow {
    pub table_catalog: String,
    pub table_schema: String,
    pub table_name: String,
    pub view_definition: String,
}

/// Every committed view, ordered by schema then name.
pub fn views<S: ViewStorage>(store: &CatalogStore<S>) -> Vec<ViewsRow> {
    store
        .list_all()
        .into_iter()
        .filter_map(|(schema, entry)| match entry {
            CatalogEntry::View(view) => Some(ViewsRow {
                table_catalog: CATALOG_NAME.to_string(),
                table_schema: schema,
                table_name: view.name,
                view_definition: view.sql,
            }),
            CatalogEntry::Table { .. } => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use opal_core::Type;

    use super::views;
    use crate::test_utils::{test_store, test_tree, view_to_create};

    #[test]
    fn test_views_rows() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();
        store.register_table(&tree, tmp, "monkey", None).unwrap();

        let rows = views(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].table_catalog, "OPAL");
        assert_eq!(rows[0].table_schema, "dfs.tmp");
        assert_eq!(rows[0].table_name, "prices");
        assert!(rows[0].view_definition.starts_with("SELECT"));
    }
}
