// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::Span;
use opal_core::diagnostic::catalog::{table_already_exists, view_already_exists};
use opal_core::interface::{TableReference, ViewStorage};
use opal_core::return_error;
use tracing::debug;

use crate::schema::{SchemaNodeId, SchemaTree};
use crate::store::{CatalogStore, storage_failure};
use crate::view::{CatalogEntry, ViewColumn, ViewDefinition};

#[derive(Debug, Clone)]
pub struct ViewToCreate {
    pub span: Option<Span>,
    pub name: String,
    pub columns: Vec<ViewColumn>,
    pub sql: String,
    pub tables: Vec<TableReference>,
}

impl<S: ViewStorage> CatalogStore<S> {
    /// Creates a view, or replaces an existing one when `allow_replace`
    /// is set. A name held by a table always collides, replace flag
    /// notwithstanding. Replace preserves the defining schema path and
    /// bumps the version stamp.
    pub fn create_view(
        &self,
        tree: &SchemaTree,
        schema: SchemaNodeId,
        to_create: ViewToCreate,
        allow_replace: bool,
    ) -> crate::Result<ViewDefinition> {
        let path = self.mutable_path(tree, schema, to_create.span.as_ref())?;

        let _guard = self.write_lock.lock();

        let key = Self::entry_key(&path, &to_create.name);
        let version = match self.entries.get(&key).map(|entry| entry.value().clone()) {
            Some(CatalogEntry::Table { name }) => {
                return_error!(table_already_exists(to_create.span, &path, &name));
            }
            Some(CatalogEntry::View(existing)) if !allow_replace => {
                return_error!(view_already_exists(to_create.span, &path, &existing.name));
            }
            Some(CatalogEntry::View(existing)) => existing.version + 1,
            None => 1,
        };

        let replaced = version > 1;
        let definition = ViewDefinition {
            name: to_create.name,
            schema: tree.path_of(schema),
            columns: to_create.columns,
            sql: to_create.sql,
            tables: to_create.tables,
            version,
        };

        // Persist before publishing; a storage failure leaves the
        // in-memory index untouched.
        self.storage
            .put(&Self::store_key(&path, &definition.name), definition.encode()?)
            .map_err(storage_failure)?;

        self.entries.insert(key, CatalogEntry::View(definition.clone()));

        debug!(schema = %path, view = %definition.name, version, replaced, "view committed");

        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use opal_core::Type;

    use crate::store::CatalogStore;
    use crate::test_utils::{UnreliableStorage, test_store, test_tree, view_to_create};
    use crate::view::EntryKind;

    #[test]
    fn test_create_view() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        let view = store
            .create_view(&tree, tmp, view_to_create("prices", &[("region_id", Type::BigInt)]), false)
            .unwrap();

        assert_eq!(view.name, "prices");
        assert_eq!(view.schema.to_string(), "dfs.tmp");
        assert_eq!(view.version, 1);
        assert_eq!(store.find_view(&"dfs.tmp".into(), "prices").unwrap(), view);
    }

    #[test]
    fn test_create_existing_view_fails_without_replace() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();

        let err = store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap_err();
        let diagnostic = err.diagnostic();
        assert_eq!(diagnostic.code, "CA_007");
        assert_eq!(
            diagnostic.message,
            "A view with given name [prices] already exists in schema [dfs.tmp]"
        );
    }

    #[test]
    fn test_replace_bumps_version_and_keeps_schema() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();
        let replaced = store
            .create_view(&tree, tmp, view_to_create("prices", &[("b", Type::Varchar)]), true)
            .unwrap();

        assert_eq!(replaced.version, 2);
        assert_eq!(replaced.schema.to_string(), "dfs.tmp");
        assert_eq!(replaced.columns[0].name, "b");

        let found = store.find_view(&"dfs.tmp".into(), "prices").unwrap();
        assert_eq!(found, replaced);
    }

    #[test]
    fn test_table_name_always_collides() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store.register_table(&tree, tmp, "monkey", None).unwrap();

        for allow_replace in [false, true] {
            let err = store
                .create_view(
                    &tree,
                    tmp,
                    view_to_create("monkey", &[("a", Type::BigInt)]),
                    allow_replace,
                )
                .unwrap_err();
            let diagnostic = err.diagnostic();
            assert_eq!(diagnostic.code, "CA_003");
            assert_eq!(
                diagnostic.message,
                "A non-view table with given name [monkey] already exists in schema [dfs.tmp]"
            );
        }
    }

    #[test]
    fn test_create_in_immutable_schema() {
        let tree = test_tree();
        let store = test_store();
        let cp = tree.resolve(&"cp".into(), &"".into()).unwrap();

        let err = store
            .create_view(&tree, cp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap_err();
        let diagnostic = err.diagnostic();
        assert_eq!(diagnostic.code, "CA_002");
        assert_eq!(diagnostic.message, "Schema [cp] is immutable.");

        // Nothing was committed.
        assert!(store.find_view(&"cp".into(), "prices").is_none());
    }

    #[test]
    fn test_storage_failure_publishes_nothing() {
        let tree = test_tree();
        let store = CatalogStore::new(UnreliableStorage::new());
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        store.storage().fail_writes(true);

        let err = store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap_err();
        assert_eq!(err.diagnostic().code, "ST_001");
        assert!(store.find_view(&"dfs.tmp".into(), "prices").is_none());

        // Once the store is writable again the same statement succeeds.
        store.storage().fail_writes(false);
        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();
        assert!(store.find_view(&"dfs.tmp".into(), "prices").is_some());
    }

    #[test]
    fn test_concurrent_create_has_single_winner() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();

        let successes = AtomicUsize::new(0);
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let result = store.create_view(
                        &tree,
                        tmp,
                        view_to_create("prices", &[("a", Type::BigInt)]),
                        false,
                    );
                    if result.is_ok() {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(store.find_view(&"dfs.tmp".into(), "prices").unwrap().version, 1);
    }

    #[test]
    fn test_same_name_in_different_schemas() {
        let tree = test_tree();
        let store = test_store();
        let tmp = tree.resolve(&"dfs.tmp".into(), &"".into()).unwrap();
        let sandbox = tree.resolve(&"dfs.sandbox".into(), &"".into()).unwrap();

        store
            .create_view(&tree, tmp, view_to_create("prices", &[("a", Type::BigInt)]), false)
            .unwrap();
        store
            .create_view(&tree, sandbox, view_to_create("prices", &[("b", Type::Varchar)]), false)
            .unwrap();

        assert_eq!(store.find_view(&"dfs.tmp".into(), "prices").unwrap().columns[0].name, "a");
        assert_eq!(store.find_view(&"dfs.sandbox".into(), "prices").unwrap().columns[0].name, "b");

        assert_eq!(store.list(&"dfs.tmp".into()).len(), 1);
        assert_eq!(store.list_all().len(), 2);

        let entry = &store.list(&"dfs.tmp".into())[0];
        assert_eq!(entry.kind(), EntryKind::View);
    }
}
