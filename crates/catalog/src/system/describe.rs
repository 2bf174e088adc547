// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::view::ViewDefinition;

/// One row of `DESCRIBE <view>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRow {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
}

/// Projects a view's column list into DESCRIBE rows, order-preserving.
pub fn describe_view(view: &ViewDefinition) -> Vec<DescribeRow> {
    view.columns
        .iter()
        .map(|column| DescribeRow {
            column_name: column.name.clone(),
            data_type: column.ty.to_string(),
            is_nullable: if column.nullable { "YES" } else { "NO" }.to_string(),
        })
        .collect()
}
