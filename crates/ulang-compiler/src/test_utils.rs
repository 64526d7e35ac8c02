//! Syntax tree builders and dump helpers for desugaring tests.

use crate::desugar::{DesugarBuilder, DesugarConfig, Desugared};
use crate::diagnostics::Diagnostics;
use crate::syntax::{
    CharFormat, ClauseForm, FloatFormat, NodeId, PackageInfo, SyntaxKind, SyntaxTree,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds syntax trees the way the parser would.
#[derive(Default)]
pub struct TreeBuilder {
    pub tree: SyntaxTree,
    pub config: DesugarConfig,
}

impl TreeBuilder {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    pub fn ident(&mut self, name: &str) -> NodeId {
        self.tree.add(SyntaxKind::identifier(name))
    }

    pub fn int(&mut self, text: &str) -> NodeId {
        self.tree.add(SyntaxKind::IntLiteral {
            text: text.to_owned(),
        })
    }

    pub fn float(&mut self, text: &str) -> NodeId {
        self.tree.add(SyntaxKind::FloatLiteral {
            text: text.to_owned(),
            format: FloatFormat::Unspecified,
        })
    }

    pub fn string(&mut self, text: &str) -> NodeId {
        self.tree.add(SyntaxKind::string(text))
    }

    pub fn char(&mut self, text: &str, format: CharFormat) -> NodeId {
        self.tree.add(SyntaxKind::CharLiteral {
            text: text.to_owned(),
            format,
        })
    }

    /// A node of `kind` owning `children` in order.
    pub fn node(&mut self, kind: SyntaxKind, children: &[NodeId]) -> NodeId {
        let node = self.tree.add(kind);
        self.tree.append_children(node, children.iter().copied());
        node
    }

    pub fn clause(&mut self, form: ClauseForm, children: &[NodeId]) -> NodeId {
        self.node(SyntaxKind::clause(form), children)
    }

    /// `{a, b}` or a bare `a`.
    pub fn braces(&mut self, children: &[NodeId]) -> NodeId {
        self.clause(ClauseForm::NoSemicolonOrNewline, children)
    }

    /// `{a; b}` or an indented block.
    pub fn block(&mut self, children: &[NodeId]) -> NodeId {
        self.clause(ClauseForm::HasSemicolonOrNewline, children)
    }

    /// `callee(args)`
    pub fn call(&mut self, callee: NodeId, args: &[NodeId]) -> NodeId {
        let call = self.tree.add(SyntaxKind::PrePostCall);
        self.tree.append_call_expression(call, callee);
        let args = self.braces(args);
        self.tree.append_call_args(call, args, false);
        call
    }

    /// Attach `<name>` to `node`.
    pub fn attribute(&mut self, node: NodeId, name: &str) -> NodeId {
        let expr = self.ident(name);
        self.tree.add_attribute(node, expr)
    }

    /// `lhs:ty`, or `:ty` without a left side.
    pub fn type_spec(&mut self, lhs: Option<NodeId>, ty: NodeId) -> NodeId {
        let children: Vec<NodeId> = lhs.into_iter().chain([ty]).collect();
        self.node(SyntaxKind::TypeSpec, &children)
    }

    pub fn definition(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.node(SyntaxKind::Definition, &[lhs, rhs])
    }

    pub fn snippet(&mut self, path: &str, members: &[NodeId]) -> NodeId {
        self.node(
            SyntaxKind::Snippet {
                path: path.to_owned(),
                form: ClauseForm::HasSemicolonOrNewline,
            },
            members,
        )
    }

    pub fn package(&mut self, info: PackageInfo, members: &[NodeId]) -> NodeId {
        self.node(SyntaxKind::Package(Box::new(info)), members)
    }

    pub fn project(&mut self, name: &str, packages: &[NodeId]) -> NodeId {
        self.node(
            SyntaxKind::Project {
                name: name.to_owned(),
                file_path: format!("{name}.vproject"),
            },
            packages,
        )
    }

    pub fn desugar(&mut self, root: NodeId) -> (Desugared, Diagnostics) {
        DesugarBuilder::new(&mut self.tree, root)
            .with_config(self.config)
            .desugar()
            .expect("test configuration is valid")
    }

    /// AST dump, followed by the rendered diagnostics when there are any.
    pub fn dump(&mut self, root: NodeId) -> String {
        let (output, diagnostics) = self.desugar(root);
        with_diagnostics(output.dump(), &diagnostics)
    }

    /// Like [`dump`](Self::dump), with `[=N]`/`[~N]` syntax mappings on each node.
    pub fn dump_with_mapping(&mut self, root: NodeId) -> String {
        let (output, diagnostics) = self.desugar(root);
        let dump = output
            .ast
            .printer(&output.symbols, output.root)
            .with_mapping(true)
            .dump();
        with_diagnostics(dump, &diagnostics)
    }
}

fn with_diagnostics(mut dump: String, diagnostics: &Diagnostics) -> String {
    if !diagnostics.is_empty() {
        dump.push_str("---\n");
        dump.push_str(&diagnostics.render());
    }
    dump
}
