// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::resolve::{BoundView, bind_view, resolve_table_reference};
use opal_core::diagnostic::catalog::view_not_found;
use opal_core::interface::{TableReference, ViewStorage};
use opal_core::return_error;

use crate::execute::Executor;
use crate::session::SessionContext;

impl<S: ViewStorage> Executor<S> {
    /// Expands a stored view for query execution. The reference to the
    /// view itself resolves against the session's current schema; the
    /// references *inside* the body resolve against the view's defining
    /// schema. Binding is re-derived on every call.
    pub fn expand_view(
        &self,
        session: &SessionContext,
        reference: &TableReference,
    ) -> crate::Result<BoundView> {
        let resolved = resolve_table_reference(&self.tree, reference, &session.current_schema)?;
        let path = self.tree.path_of(resolved.schema);

        let Some(view) = self.store.find_view(&path, &resolved.name) else {
            return_error!(view_not_found(None, &path.to_string(), &resolved.name));
        };

        bind_view(&self.tree, &view)
    }
}
