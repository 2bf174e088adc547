// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod catalog;
pub mod storage;

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub statement: Option<String>,
    pub message: String,

    pub span: Option<Span>,
    pub label: Option<String>,
    pub help: Option<String>,
    pub notes: Vec<String>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.code))
    }
}

pub trait DiagnosticRenderer {
    fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
    fn render(&self, d: &Diagnostic) -> String {
        let mut output = String::new();

        let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

        if let Some(span) = &d.span {
            let _ = writeln!(
                &mut output,
                " {}:{} │ {}",
                span.line, span.column, span.fragment
            );
        }

        if let Some(label) = &d.label {
            let _ = writeln!(&mut output, " = {}", label);
        }

        if let Some(help) = &d.help {
            let _ = writeln!(&mut output, " help: {}", help);
        }

        for note in &d.notes {
            let _ = writeln!(&mut output, " note: {}", note);
        }

        output
    }
}
