// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod catalog;
mod query;

use opal_catalog::schema::SchemaTree;
use opal_catalog::store::CatalogStore;
use opal_core::interface::ViewStorage;
use tracing::debug;

use crate::plan::Plan;
use crate::result::ExecutionResult;
use crate::session::SessionContext;

pub struct Executor<S: ViewStorage> {
    tree: SchemaTree,
    store: CatalogStore<S>,
}

impl<S: ViewStorage> Executor<S> {
    pub fn new(tree: SchemaTree, storage: S) -> Self {
        Self { tree, store: CatalogStore::new(storage) }
    }

    /// Rehydrates the catalog from storage; called once at startup.
    pub fn load_catalog(&self) -> crate::Result<usize> {
        self.store.load()
    }

    pub fn tree(&self) -> &SchemaTree {
        &self.tree
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Executes one planned statement. Validation and collision errors
    /// become a failure result for that statement alone; nothing about
    /// the session or other catalog entries is disturbed.
    pub fn execute(&self, session: &SessionContext, plan: Plan) -> ExecutionResult {
        let result = match plan {
            Plan::CreateView(plan) => self.create_view(session, plan),
            Plan::DropView(plan) => self.drop_view(session, plan),
            Plan::Describe(plan) => self.describe(session, plan),
            Plan::ShowTables(plan) => self.show_tables(session, plan),
            Plan::InformationSchemaViews => self.information_schema_views(),
            Plan::InformationSchemaTables => self.information_schema_tables(),
        };

        match result {
            Ok(result) => result,
            Err(error) => {
                let diagnostic = error.diagnostic();
                debug!(code = %diagnostic.code, "statement failed");
                ExecutionResult::Failure { summary: format!("Error: {}", diagnostic.message) }
            }
        }
    }
}
