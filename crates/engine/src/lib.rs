// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use opal_core::Error;

pub mod execute;
mod plan;
mod result;
mod session;

pub use execute::Executor;
pub use plan::{CreateViewPlan, DescribePlan, DropViewPlan, Plan, ShowTablesPlan};
pub use result::ExecutionResult;
pub use session::SessionContext;

pub type Result<T> = std::result::Result<T, Error>;
