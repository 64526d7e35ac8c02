//! Syntax tree to AST lowering.
//!
//! One recursive walk turns every syntax node into an AST subtree, or into an
//! explicit `Error` node plus a diagnostic when the input is malformed. The
//! walk records a mapping between each syntax node and the AST node it
//! produced (see [`crate::mapping`]).
//!
//! A project is lowered package by package; the packages are then grouped
//! into compilation units, one per strongly connected component of the
//! dependency graph, emitted in dependency order.

mod config;
mod definitions;
mod dependencies;
mod flow;
mod invariants;
mod lists;
mod literals;
mod localize;
mod operators;
mod project;

#[cfg(test)]
mod definitions_tests;
#[cfg(test)]
mod localize_tests;

use ulang_core::{Symbol, SymbolTable};

use crate::PassResult;
use crate::ast::{Ast, AstId, AstKind, IdentifierKind};
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics, GlitchLocus};
use crate::mapping::{add_mapping, set_non_reciprocal};
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

pub use config::{DesugarConfig, fn_version, verse_version};

use invariants::unexpected_node_kind;

/// Output of a desugaring run.
#[derive(Debug, Clone)]
pub struct Desugared {
    pub ast: Ast,
    pub symbols: SymbolTable,
    /// AST node produced for the syntax root.
    pub root: AstId,
}

impl Desugared {
    pub fn dump(&self) -> String {
        self.ast.printer(&self.symbols, self.root).dump()
    }
}

/// Entry point: configure, then lower the tree under `root`.
///
/// The syntax tree is borrowed mutably because each syntax node records the
/// AST node it maps to.
pub struct DesugarBuilder<'t> {
    tree: &'t mut SyntaxTree,
    root: NodeId,
    symbols: SymbolTable,
    config: DesugarConfig,
}

impl<'t> DesugarBuilder<'t> {
    pub fn new(tree: &'t mut SyntaxTree, root: NodeId) -> Self {
        Self {
            tree,
            root,
            symbols: SymbolTable::new(),
            config: DesugarConfig::default(),
        }
    }

    /// Keep interning into an existing table.
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_config(mut self, config: DesugarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_verse_version_window(mut self, minimum: u32, maximum: u32) -> Self {
        self.config.minimum_verse_version = minimum;
        self.config.maximum_verse_version = maximum;
        self
    }

    pub fn with_default_verse_version(mut self, version: u32) -> Self {
        self.config.default_verse_version = version;
        self
    }

    /// Lower the tree. Diagnostics are returned alongside the output; only an
    /// invalid configuration fails the pass.
    pub fn desugar(self) -> PassResult<Desugared> {
        self.config.validate()?;
        let Self {
            tree,
            root,
            mut symbols,
            config,
        } = self;

        log::debug!("desugaring {} node {}", tree.kind(root).name(), root.index());
        let mut desugarer = Desugarer::new(tree, &mut symbols, &config);
        let root = desugarer.desugar_root(root);
        let (ast, diagnostics) = desugarer.finish();
        log::debug!(
            "desugared into {} AST nodes with {} errors",
            ast.len(),
            diagnostics.error_count()
        );

        Ok((Desugared { ast, symbols, root }, diagnostics))
    }

    /// Like [`desugar`](Self::desugar), but any error diagnostic fails the pass.
    pub fn desugar_valid(self) -> crate::Result<Desugared> {
        let (output, diagnostics) = self.desugar()?;
        if diagnostics.has_errors() {
            return Err(crate::Error::DesugarFailed(diagnostics));
        }
        Ok(output)
    }
}

/// Version facts of the package being lowered.
#[derive(Debug, Clone, Copy)]
struct PackageContext {
    effective_verse_version: u32,
    uploaded_at_fn_version: u32,
}

pub(crate) struct Desugarer<'a> {
    tree: &'a mut SyntaxTree,
    ast: Ast,
    symbols: &'a mut SymbolTable,
    diag: Diagnostics,
    config: &'a DesugarConfig,
    package: Option<PackageContext>,
}

impl<'a> Desugarer<'a> {
    fn new(
        tree: &'a mut SyntaxTree,
        symbols: &'a mut SymbolTable,
        config: &'a DesugarConfig,
    ) -> Self {
        Self {
            tree,
            ast: Ast::new(),
            symbols,
            diag: Diagnostics::new(),
            config,
            package: None,
        }
    }

    fn finish(self) -> (Ast, Diagnostics) {
        (self.ast, self.diag)
    }

    /// The root may be any node; context nodes are accepted here only.
    fn desugar_root(&mut self, root: NodeId) -> AstId {
        match self.tree.kind(root) {
            SyntaxKind::Project { .. } => self.desugar_project(root),
            SyntaxKind::Package(_) => self.desugar_package(root),
            _ => self.desugar_expr(root),
        }
    }

    fn add(&mut self, kind: AstKind) -> AstId {
        self.ast.add(kind)
    }

    /// Claim `node` for `id`.
    fn map(&mut self, node: NodeId, id: AstId) -> AstId {
        add_mapping(self.tree, &mut self.ast, node, id);
        id
    }

    /// Claim `node` for `id` unless `id` already came from another node.
    ///
    /// Used where the result may be a child passed through unchanged.
    fn map_unclaimed(&mut self, node: NodeId, id: AstId) -> AstId {
        if self.ast.mapped_syntax(id).is_none_or(|mapped| mapped == node) {
            self.map(node, id)
        } else {
            id
        }
    }

    /// Point `id` at `node` without claiming it.
    fn non_recip(&mut self, node: NodeId, id: AstId) -> AstId {
        set_non_reciprocal(&mut self.ast, node, id);
        id
    }

    fn attach(&mut self, node: NodeId, id: AstId, reciprocal: bool) -> AstId {
        if reciprocal {
            self.map(node, id)
        } else {
            self.non_recip(node, id)
        }
    }

    /// An `Error` node claiming `node`.
    fn error_at(&mut self, node: NodeId, can_fail: bool) -> AstId {
        let error = self.add(AstKind::Error {
            children: Vec::new(),
            can_fail,
        });
        self.map(node, error)
    }

    fn report(&mut self, kind: DiagnosticKind, node: NodeId) -> DiagnosticBuilder<'_> {
        self.diag.report(kind, GlitchLocus::from_syntax(self.tree, node))
    }

    /// Intern `text`, truncating and reporting it at `node` when it is too long.
    fn verify_symbol(&mut self, node: NodeId, text: &str) -> Symbol {
        let (symbol, truncated) = self.symbols.intern_truncated(text);
        if truncated {
            log::trace!("truncated identifier of {} bytes at node {}", text.len(), node.index());
            self.report(DiagnosticKind::TooLongIdentifier, node).emit();
        }
        symbol
    }

    /// Symbol for the source text of an atom-like node.
    fn symbol_of(&mut self, node: NodeId) -> Symbol {
        let text = self.tree.text(node).unwrap_or_default().to_owned();
        self.verify_symbol(node, &text)
    }

    fn identifier(&mut self, symbol: Symbol) -> AstId {
        self.add(AstKind::Identifier {
            kind: IdentifierKind::Unresolved,
            symbol,
            context: None,
            qualifier: None,
            unrestricted_access: false,
        })
    }

    /// Identifier of a built-in that user code may not normally reach.
    fn unrestricted_identifier(&mut self, name: &str, origin: NodeId) -> AstId {
        let symbol = self.symbols.intern(name);
        let id = self.add(AstKind::Identifier {
            kind: IdentifierKind::Unresolved,
            symbol,
            context: None,
            qualifier: None,
            unrestricted_access: true,
        });
        self.non_recip(origin, id)
    }

    fn desugar_vst(&mut self, node: NodeId) -> AstId {
        match self.tree.kind(node) {
            SyntaxKind::Project { .. } => self.desugar_project(node),
            SyntaxKind::Package(_) => self.desugar_package(node),
            SyntaxKind::Module { .. } => self.desugar_module(node),
            SyntaxKind::Snippet { .. } => self.desugar_snippet(node),
            SyntaxKind::Where => self.desugar_where(node),
            SyntaxKind::Mutation { keyword } => {
                let keyword = *keyword;
                self.desugar_mutation(node, keyword)
            }
            SyntaxKind::Definition => self.desugar_definition(node),
            SyntaxKind::Assignment { op } => {
                let op = *op;
                self.desugar_assignment(node, op)
            }
            SyntaxKind::LogicalOr => self.desugar_logical(node, false),
            SyntaxKind::LogicalAnd => self.desugar_logical(node, true),
            SyntaxKind::PrefixNot => self.desugar_not(node),
            SyntaxKind::Compare { op } => {
                let op = *op;
                self.desugar_compare(node, op)
            }
            SyntaxKind::AddSub | SyntaxKind::MulDivInfix => self.desugar_binary_op(node),
            SyntaxKind::Range => self.desugar_range(node),
            SyntaxKind::Arrow => self.desugar_arrow(node),
            SyntaxKind::TypeSpec => self.desugar_type_spec(node),
            SyntaxKind::PrePostCall => self.desugar_pre_post_call(node),
            SyntaxKind::Identifier { .. } => self.desugar_identifier(node, None),
            SyntaxKind::FlowIf => self.desugar_flow_if(node),
            SyntaxKind::IntLiteral { .. } => self.desugar_number(node, false),
            SyntaxKind::FloatLiteral { .. } => self.desugar_number(node, true),
            SyntaxKind::CharLiteral { format, .. } => {
                let format = *format;
                self.desugar_char(node, format)
            }
            SyntaxKind::StringLiteral { .. } => self.desugar_string(node),
            SyntaxKind::PathLiteral { .. } => self.desugar_path(node),
            SyntaxKind::InterpolatedString => self.desugar_interpolated_string(node),
            SyntaxKind::Lambda => self.desugar_lambda(node),
            SyntaxKind::Control { keyword } => {
                let keyword = *keyword;
                self.desugar_control(node, keyword)
            }
            SyntaxKind::Macro => self.desugar_macro(node),
            SyntaxKind::Parens { form } => {
                let form = *form;
                self.desugar_list_as_expression(node, form, true)
            }
            SyntaxKind::Commas => self.desugar_commas(node),
            SyntaxKind::Placeholder => {
                let placeholder = self.add(AstKind::Placeholder);
                self.map(node, placeholder)
            }
            SyntaxKind::Escape => {
                self.report(DiagnosticKind::Unsupported, node)
                    .message("Escaped syntax is not yet supported.")
                    .emit();
                self.error_at(node, false)
            }
            kind @ (SyntaxKind::Operator { .. }
            | SyntaxKind::Interpolant
            | SyntaxKind::Clause { .. }
            | SyntaxKind::ParseError { .. }
            | SyntaxKind::Comment { .. }) => unexpected_node_kind(kind.name(), node),
        }
    }

    /// Lower a node that must produce a value, attaching its attributes.
    fn desugar_expr(&mut self, node: NodeId) -> AstId {
        let id = self.desugar_vst(node);
        if !self.ast.kind(id).is_expression() {
            self.report(DiagnosticKind::ExpectedExpression, node).emit();
            let error = self.add(AstKind::Error {
                children: vec![id],
                can_fail: false,
            });
            return self.map(node, error);
        }
        if self.tree.has_attributes(node) {
            let attributes = self.desugar_attributes(node);
            self.ast.set_attributes(id, attributes);
        }
        id
    }
}
