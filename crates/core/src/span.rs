// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A fragment of statement text together with its position, carried
/// by plans into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Column offset of the fragment within its line, starting at 0.
    pub column: u32,
    /// Line number of the fragment, starting at 1.
    pub line: u32,
    pub fragment: String,
}

impl AsRef<str> for Span {
    fn as_ref(&self) -> &str {
        self.fragment.as_str()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.fragment, f)
    }
}

impl Span {
    pub fn testing(s: impl Into<String>) -> Self {
        Self { column: 0, line: 1, fragment: s.into() }
    }
}
