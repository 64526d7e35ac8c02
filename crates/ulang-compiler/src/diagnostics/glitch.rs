//! A single reported issue: what went wrong and where.

use std::fmt;

use ulang_core::{TextPosition, TextRange};

use crate::ast::{Ast, AstId};
use crate::syntax::{NodeId, SyntaxTree};

use super::catalog::{DiagnosticKind, Severity, format_message};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlitchResult {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl GlitchResult {
    /// Result carrying the catalog description as its message.
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            message: kind.description().to_owned(),
        }
    }

    pub fn with_message(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }
}

/// Where it went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlitchLocus {
    pub snippet_path: String,
    pub range: TextRange,
    pub result_position: TextPosition,
    pub node: Option<NodeId>,
}

impl GlitchLocus {
    /// Locus of a syntax node. The path comes from the nearest enclosing
    /// snippet, or else the nearest module or package file.
    pub fn from_syntax(tree: &SyntaxTree, node: NodeId) -> Self {
        let range = tree.range(node);
        Self {
            snippet_path: tree.snippet_path(node).unwrap_or_default().to_owned(),
            range,
            result_position: range.begin,
            node: Some(node),
        }
    }

    /// Locus of an AST node through its mapped syntax node; empty when unmapped.
    pub fn from_ast(ast: &Ast, tree: &SyntaxTree, id: AstId) -> Self {
        match ast.mapped_syntax(id) {
            Some(node) => Self::from_syntax(tree, node),
            None => Self::default(),
        }
    }
}

/// One diagnostic occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glitch {
    pub result: GlitchResult,
    pub locus: GlitchLocus,
}

impl Glitch {
    pub fn new(result: GlitchResult, locus: GlitchLocus) -> Self {
        Self { result, locus }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.result.kind
    }

    pub fn severity(&self) -> Severity {
        self.result.severity()
    }

    pub fn message(&self) -> &str {
        &self.result.message
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    pub fn as_formatted_string(&self) -> String {
        format_message(
            &self.result.message,
            &self.locus.snippet_path,
            self.locus.range,
            self.severity(),
            self.result.kind,
        )
    }
}

impl fmt::Display for Glitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_formatted_string())
    }
}
