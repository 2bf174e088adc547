// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::resolve::resolve_table_reference;
use opal_catalog::system::describe_view;
use opal_catalog::view::CatalogEntry;
use opal_core::diagnostic::catalog::{not_a_view, view_not_found};
use opal_core::interface::ViewStorage;
use opal_core::return_error;

use crate::execute::Executor;
use crate::plan::DescribePlan;
use crate::result::ExecutionResult;
use crate::session::SessionContext;

impl<S: ViewStorage> Executor<S> {
    pub(crate) fn describe(
        &self,
        session: &SessionContext,
        plan: DescribePlan,
    ) -> crate::Result<ExecutionResult> {
        let resolved =
            resolve_table_reference(&self.tree, &plan.target, &session.current_schema)?;
        let path = self.tree.path_of(resolved.schema);

        match self.store.find_entry(&path, &resolved.name) {
            Some(CatalogEntry::View(view)) => {
                Ok(ExecutionResult::Describe { rows: describe_view(&view) })
            }
            Some(CatalogEntry::Table { name }) => {
                return_error!(not_a_view(plan.span, &path.to_string(), &name))
            }
            None => return_error!(view_not_found(plan.span, &path.to_string(), &resolved.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use opal_core::Type;
    use opal_core::interface::TableReference;
    use opal_storage::Memory;

    use crate::execute::Executor;
    use crate::plan::{CreateViewPlan, DescribePlan, Plan};
    use crate::result::ExecutionResult;
    use crate::session::SessionContext;

    use opal_catalog::test_utils::{query_shape, test_tree};

    #[test]
    fn test_describe_view() {
        let executor = Executor::new(test_tree(), Memory::new());
        let mut session = SessionContext::new();
        session.use_schema("dfs.tmp");

        executor.execute(
            &session,
            Plan::CreateView(CreateViewPlan {
                span: None,
                schema: "".into(),
                name: "customers".to_string(),
                field_list: None,
                query: query_shape(
                    &[("cust_id", Type::BigInt, true), ("country", Type::Varchar, false)],
                    &[&["cp", "customer.json"]],
                ),
                replace: false,
            }),
        );

        // Unqualified DESCRIBE goes through the session default.
        let result = executor.execute(
            &session,
            Plan::Describe(DescribePlan { span: None, target: TableReference::new(["customers"]) }),
        );

        let ExecutionResult::Describe { rows } = result else {
            panic!("expected describe rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(
            (rows[0].column_name.as_str(), rows[0].data_type.as_str(), rows[0].is_nullable.as_str()),
            ("cust_id", "BIGINT", "YES")
        );
        assert_eq!(
            (rows[1].column_name.as_str(), rows[1].data_type.as_str(), rows[1].is_nullable.as_str()),
            ("country", "VARCHAR", "NO")
        );
    }

    #[test]
    fn test_describe_unknown_view() {
        let executor = Executor::new(test_tree(), Memory::new());
        let session = SessionContext::new();

        let result = executor.execute(
            &session,
            Plan::Describe(DescribePlan {
                span: None,
                target: TableReference::new(["dfs", "tmp", "ghost"]),
            }),
        );

        assert!(!result.ok());
        assert_eq!(result.summary(), "Error: Unknown view [ghost] in schema [dfs.tmp].");
    }
}
