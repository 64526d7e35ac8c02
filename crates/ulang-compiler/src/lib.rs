//! ulang compiler front-end: syntax tree to AST desugaring.
//!
//! - `syntax` - concrete syntax tree built by the parser, with roles and attributes
//! - `ast` - abstract syntax tree produced by desugaring
//! - `mapping` - two-way links between syntax and AST nodes
//! - `desugar` - the lowering pass and its configuration
//! - `diagnostics` - glitch catalog, collection and rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod desugar;
pub mod diagnostics;
mod invariants;
pub mod mapping;
pub mod syntax;

#[cfg(test)]
mod mapping_tests;
#[cfg(test)]
pub mod test_utils;

/// Result type for passes that produce both output and diagnostics.
///
/// Diagnostics about the input travel alongside the output; only problems
/// that prevent the pass from running use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use ast::{Ast, AstId, AstKind};
pub use desugar::{DesugarBuilder, DesugarConfig, Desugared};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use syntax::{NodeId, SyntaxKind, SyntaxTree};
pub use ulang_core::{Symbol, SymbolTable};

/// Errors that stop a pass.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("invalid desugar configuration: {0}")]
    InvalidConfig(String),

    #[error("desugaring failed with {} errors", .0.error_count())]
    DesugarFailed(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
