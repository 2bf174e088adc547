// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use opal_catalog::system::{tables, views};
use opal_core::interface::ViewStorage;

use crate::execute::Executor;
use crate::result::ExecutionResult;

impl<S: ViewStorage> Executor<S> {
    pub(crate) fn information_schema_views(&self) -> crate::Result<ExecutionResult> {
        Ok(ExecutionResult::Views { rows: views(&self.store) })
    }

    pub(crate) fn information_schema_tables(&self) -> crate::Result<ExecutionResult> {
        Ok(ExecutionResult::Tables { rows: tables(&self.store) })
    }
}
