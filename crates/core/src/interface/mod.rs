// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Interfaces to the collaborators surrounding the view catalog: the
//! parser/planner that shapes a view-defining query and the persistent
//! store that keeps view definitions durable.

mod query;
mod storage;

pub use query::{OutputColumn, QueryShape, TableReference};
pub use storage::{StorageError, StoreKey, ViewStorage};
