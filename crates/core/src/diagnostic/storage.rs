// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Diagnostic;

pub fn storage_error(cause: impl Into<String>) -> Diagnostic {
    Diagnostic {
        code: "ST_001".to_string(),
        statement: None,
        message: format!("storage failure: {}", cause.into()),
        span: None,
        label: Some("the persistent store reported an error".to_string()),
        help: Some("the statement was not applied; it is safe to retry".to_string()),
        notes: vec![],
    }
}
