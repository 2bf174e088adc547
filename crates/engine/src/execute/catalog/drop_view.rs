// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_core::interface::ViewStorage;

use crate::execute::Executor;
use crate::plan::DropViewPlan;
use crate::result::ExecutionResult;
use crate::session::SessionContext;

impl<S: ViewStorage> Executor<S> {
    pub(crate) fn drop_view(
        &self,
        session: &SessionContext,
        plan: DropViewPlan,
    ) -> crate::Result<ExecutionResult> {
        let schema = self.tree.resolve_with_span(
            &plan.schema,
            &session.current_schema,
            plan.span.clone(),
        )?;

        self.store.drop_view(&self.tree, schema, &plan.name, plan.span)?;

        Ok(ExecutionResult::DropView {
            schema: self.tree.path_of(schema).to_string(),
            view: plan.name,
        })
    }
}
