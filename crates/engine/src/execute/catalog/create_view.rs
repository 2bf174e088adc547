// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::store::ViewToCreate;
use opal_catalog::view::validate_columns;
use opal_core::interface::ViewStorage;

use crate::execute::Executor;
use crate::plan::CreateViewPlan;
use crate::result::ExecutionResult;
use crate::session::SessionContext;

impl<S: ViewStorage> Executor<S> {
    pub(crate) fn create_view(
        &self,
        session: &SessionContext,
        plan: CreateViewPlan,
    ) -> crate::Result<ExecutionResult> {
        let schema = self.tree.resolve_with_span(
            &plan.schema,
            &session.current_schema,
            plan.span.clone(),
        )?;

        let columns = validate_columns(plan.span.as_ref(), plan.field_list.as_deref(), &plan.query)?;

        let view = self.store.create_view(
            &self.tree,
            schema,
            ViewToCreate {
                span: plan.span,
                name: plan.name,
                columns,
                sql: plan.query.sql,
                tables: plan.query.tables,
            },
            plan.replace,
        )?;

        Ok(ExecutionResult::CreateView {
            schema: self.tree.path_of(schema).to_string(),
            view: view.name,
            replaced: view.version > 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use opal_core::Type;
    use opal_storage::Memory;

    use crate::execute::Executor;
    use crate::plan::{CreateViewPlan, Plan};
    use crate::session::SessionContext;

    use opal_catalog::test_utils::{query_shape, test_tree};

    fn executor() -> Executor<Memory> {
        Executor::new(test_tree(), Memory::new())
    }

    fn create_plan(schema: &str, name: &str) -> CreateViewPlan {
        CreateViewPlan {
            span: None,
            schema: schema.into(),
            name: name.to_string(),
            field_list: None,
            query: query_shape(
                &[("region_id", Type::BigInt, true)],
                &[&["cp", "region.json"]],
            ),
            replace: false,
        }
    }

    #[test]
    fn test_create_view_summary() {
        let executor = executor();
        let session = SessionContext::new();

        let result = executor.execute(&session, Plan::CreateView(create_plan("dfs.tmp", "prices")));
        assert!(result.ok());
        assert_eq!(result.summary(), "View 'prices' created successfully in 'dfs.tmp' schema");
    }

    #[test]
    fn test_replace_view_summary() {
        let executor = executor();
        let session = SessionContext::new();

        executor.execute(&session, Plan::CreateView(create_plan("dfs.tmp", "prices")));

        let mut plan = create_plan("dfs.tmp", "prices");
        plan.replace = true;
        let result = executor.execute(&session, Plan::CreateView(plan));
        assert!(result.ok());
        assert_eq!(result.summary(), "View 'prices' replaced successfully in 'dfs.tmp' schema");
    }

    #[test]
    fn test_schema_resolved_against_session_default() {
        let executor = executor();
        let mut session = SessionContext::new();
        session.use_schema("dfs");

        // "tmp" resolves relative to the default "dfs".
        let result = executor.execute(&session, Plan::CreateView(create_plan("tmp", "prices")));
        assert!(result.ok());
        assert!(executor.store().find_view(&"dfs.tmp".into(), "prices").is_some());
    }

    #[test]
    fn test_unknown_schema_is_statement_failure() {
        let executor = executor();
        let session = SessionContext::new();

        let result =
            executor.execute(&session, Plan::CreateView(create_plan("warehouse", "prices")));
        assert!(!result.ok());
        assert!(result.summary().starts_with("Error: Schema [warehouse] is not valid"));
    }

    #[test]
    fn test_immutable_schema_summary() {
        let executor = executor();
        let session = SessionContext::new();

        let result = executor.execute(&session, Plan::CreateView(create_plan("cp", "prices")));
        assert!(!result.ok());
        assert_eq!(result.summary(), "Error: Schema [cp] is immutable.");
    }
}
