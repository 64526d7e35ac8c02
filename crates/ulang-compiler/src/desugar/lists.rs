//! Clauses, expression lists, comma lists and attributes.

use crate::ast::{AstId, AstKind, Attribute, AttributeKind};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{ClauseForm, NodeId, SyntaxKind};

use super::Desugarer;
use super::invariants::{assert_comma_list, expect_clause_form, invalid_attribute_wrapper};

const MIXED_SEPARATORS_MESSAGE: &str = "Mixing commas with semicolons/newlines in a clause wraps the comma-separated \
subexpressions in a 'block{...}' in the version of Verse you are targeting, but this behavior will change in a \
future version of Verse. You can preserve the current behavior in future versions of Verse by wrapping the \
comma-separated subexpressions in a block{...}.
For example, instead of writing this:
    A
    B,
    C
Write this:
    A
    block:
        B,
        C";

impl Desugarer<'_> {
    /// Lower every non-comment child of `parent` as an expression.
    pub(super) fn desugar_children(&mut self, parent: NodeId) -> Vec<AstId> {
        let children = self.tree.non_comment_children(parent);
        let mut exprs = Vec::with_capacity(children.len());
        for child in children {
            exprs.push(self.desugar_expr(child));
        }
        exprs
    }

    pub(super) fn wrap_in_tuple(
        &mut self,
        elements: Vec<AstId>,
        origin: NodeId,
        reciprocal: bool,
    ) -> AstId {
        let tuple = self.add(AstKind::MakeTuple { elements });
        self.attach(origin, tuple, reciprocal)
    }

    fn wrap_in_code_block(&mut self, exprs: Vec<AstId>, origin: NodeId, reciprocal: bool) -> AstId {
        let block = self.add(AstKind::CodeBlock { exprs });
        self.attach(origin, block, reciprocal)
    }

    /// A single expression stands for itself; more become a tuple when written
    /// with commas only, and a code block otherwise.
    pub(super) fn expression_from_list(
        &mut self,
        exprs: Vec<AstId>,
        form: ClauseForm,
        origin: NodeId,
        reciprocal: bool,
    ) -> AstId {
        if let [single] = exprs.as_slice() {
            return *single;
        }
        match form {
            ClauseForm::NoSemicolonOrNewline => self.wrap_in_tuple(exprs, origin, reciprocal),
            _ => self.wrap_in_code_block(exprs, origin, reciprocal),
        }
    }

    pub(super) fn desugar_list_as_expression(
        &mut self,
        node: NodeId,
        form: ClauseForm,
        reciprocal: bool,
    ) -> AstId {
        let exprs = self.desugar_children(node);
        self.expression_from_list(exprs, form, node, reciprocal)
    }

    /// Lower a clause that is used for its value: a lone subexpression stands
    /// for itself, anything else becomes a code block.
    pub(super) fn desugar_clause_as_expression(&mut self, node: NodeId) -> AstId {
        if !matches!(self.tree.kind(node), SyntaxKind::Clause { .. }) {
            return self.desugar_expr(node);
        }
        if let [single] = self.tree.non_comment_children(node)[..] {
            return self.desugar_expr(single);
        }
        self.desugar_clause_as_code_block(node)
    }

    /// Lower a clause into a code block claiming it.
    ///
    /// Comma-only clauses keep their elements together as one tuple.
    pub(super) fn desugar_clause_as_code_block(&mut self, clause: NodeId) -> AstId {
        let form = expect_clause_form(self.tree, clause);
        let mut exprs = self.desugar_children(clause);
        if exprs.len() > 1 && form == ClauseForm::NoSemicolonOrNewline {
            let tuple = self.wrap_in_tuple(exprs, clause, false);
            exprs = vec![tuple];
        }
        self.wrap_in_code_block(exprs, clause, true)
    }

    /// `a, b` becomes a tuple. Inside a clause that also uses semicolons or
    /// newlines, older packages get the tuple wrapped in a block plus a warning.
    pub(super) fn desugar_commas(&mut self, node: NodeId) -> AstId {
        let exprs = self.desugar_children(node);
        assert_comma_list(node, exprs.len());
        let tuple = self.wrap_in_tuple(exprs, node, true);

        let forbids_mixing = match self.package {
            None => true,
            Some(package) => self.config.forbids_mixed_separators(
                package.effective_verse_version,
                package.uploaded_at_fn_version,
            ),
        };
        if forbids_mixing {
            return tuple;
        }

        self.report(DiagnosticKind::StricterErrorCheck, node)
            .message(MIXED_SEPARATORS_MESSAGE)
            .emit();
        self.wrap_in_code_block(vec![tuple], node, false)
    }

    /// Lower the attribute wrappers of `node`, in source order.
    pub(super) fn desugar_attributes(&mut self, node: NodeId) -> Vec<Attribute> {
        let wrappers = self.tree.attribute_wrappers(node).to_vec();
        let mut attributes = Vec::with_capacity(wrappers.len());
        for wrapper in wrappers {
            let kind = match self.tree.kind(wrapper).clause_form() {
                Some(ClauseForm::PrependAttributeHolder) => AttributeKind::Attribute,
                Some(ClauseForm::AppendAttributeHolder) => AttributeKind::Specifier,
                _ => invalid_attribute_wrapper(self.tree.kind(wrapper).name(), wrapper),
            };
            let expr = self.tree.attribute_expr(wrapper);
            let expr = self.desugar_expr(expr);
            attributes.push(Attribute { kind, expr });
        }
        attributes
    }
}
