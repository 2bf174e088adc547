// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::Span;
use opal_core::diagnostic::catalog::{table_already_exists, view_already_exists};
use opal_core::interface::ViewStorage;
use opal_core::return_error;

use crate::schema::{SchemaNodeId, SchemaTree};
use crate::store::CatalogStore;
use crate::view::CatalogEntry;

impl<S: ViewStorage> CatalogStore<S> {
    /// Records a table name in the shared per-schema namespace so that
    /// cross-kind collision checks see it. Table data itself lives with
    /// the storage engine, not in this catalog.
    pub fn register_table(
        &self,
        tree: &SchemaTree,
        schema: SchemaNodeId,
        name: &str,
        span: Option<Span>,
    ) -> crate::Result<()> {
        let path = self.mutable_path(tree, schema, span.as_ref())?;

        let _guard = self.write_lock.lock();

        let key = Self::entry_key(&path, name);
        match self.entries.get(&key).map(|entry| entry.value().clone()) {
            Some(CatalogEntry::Table { name }) => {
                return_error!(table_already_exists(span, &path, &name));
            }
            Some(CatalogEntry::View(view)) => {
                return_error!(view_already_exists(span, &path, &view.name));
            }
            None => {}
        }

        self.entries.insert(key, CatalogEntry::Table { name: name.to_string() });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use opal_core::Type;

    use crate::test_utils::{test_store, test_tree, view_to_create};

    #[test]
    fn test_register_table() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store.register_table(&tree, tmp, "monkey", None).unwrap();

        let err = store.register_table(&tree, tmp, "monkey", None).unwrap_err();
        assert_eq!(err.diagnostic().code, "CA_003");
    }

    #[test]
    fn test_register_table_collides_with_view() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();

        let err = store.register_table(&tree, tmp, "prices", None).unwrap_err();
        assert_eq!(err.diagnostic().code, "CA_007");
    }

    #[test]
    fn test_register_table_in_immutable_schema() {
        let tree = test_tree();
        let store = test_store();
        let cp = tree.resolve(&"cp".into(), &"".into()).unwrap();

        let err = store.register_table(&tree, cp, "monkey", None).unwrap_err();
        assert_eq!(err.diagnostic().code, "CA_002");
    }
}
