// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::system::show_tables;
use opal_core::interface::ViewStorage;

use crate::execute::Executor;
use crate::plan::ShowTablesPlan;
use crate::result::ExecutionResult;
use crate::session::SessionContext;

impl<S: ViewStorage> Executor<S> {
    pub(crate) fn show_tables(
        &self,
        session: &SessionContext,
        plan: ShowTablesPlan,
    ) -> crate::Result<ExecutionResult> {
        let schema = self.tree.resolve(&plan.schema, &session.current_schema)?;
        let path = self.tree.path_of(schema);

        Ok(ExecutionResult::ShowTables {
            rows: show_tables(&self.store, &path, plan.like.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use opal_core::Type;
    use opal_storage::Memory;

    use crate::execute::Executor;
    use crate::plan::{CreateViewPlan, Plan, ShowTablesPlan};
    use crate::result::ExecutionResult;
    use crate::session::SessionContext;

    use opal_catalog::test_utils::{query_shape, test_tree};

    #[test]
    fn test_show_tables_in_default_schema() {
        let executor = Executor::new(test_tree(), Memory::new());
        let mut session = SessionContext::new();
        session.use_schema("dfs.tmp");

        executor.execute(
            &session,
            Plan::CreateView(CreateViewPlan {
                span: None,
                schema: "".into(),
                name: "prices".to_string(),
                field_list: None,
                query: query_shape(&[("a", Type::BigInt, true)], &[&["cp", "region.json"]]),
                replace: false,
            }),
        );

        let result = executor.execute(
            &session,
            Plan::ShowTables(ShowTablesPlan { schema: "".into(), like: Some("pri%".to_string()) }),
        );

        let ExecutionResult::ShowTables { rows } = result else {
            panic!("expected show tables rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].table_schema, "dfs.tmp");
        assert_eq!(rows[0].table_name, "prices");
    }
}
