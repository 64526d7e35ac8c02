//! Definitions, type specs, identifiers and pre/postfix calls.

use ulang_core::Symbol;

use crate::ast::{AstId, AstKind, CallStyle, IdentifierKind};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{CallRole, NodeId, Role, SyntaxKind};

use super::Desugarer;
use super::invariants::{invalid_call_role, missing_call_expression, required_child};

impl Desugarer<'_> {
    /// `lhs := rhs` or `lhs:type = rhs`.
    ///
    /// A named parameter `?x := v` with no type becomes `MakeNamed`.
    pub(super) fn desugar_definition(&mut self, node: NodeId) -> AstId {
        if let Some(localized) = self.try_desugar_localizable(node) {
            return localized;
        }

        let lhs = required_child(self.tree, node, 0);
        let rhs = required_child(self.tree, node, 1);
        let mut name = None;
        let (element, value_domain) = if matches!(self.tree.kind(lhs), SyntaxKind::TypeSpec) {
            let (spec_lhs, spec_rhs) = self.type_spec_operands(lhs);
            let element = spec_lhs.map(|element| self.desugar_maybe_named(element, &mut name));
            let value_domain = self.desugar_expr(spec_rhs);
            (element, Some(value_domain))
        } else {
            (Some(self.desugar_maybe_named(lhs, &mut name)), None)
        };
        let value = self.desugar_clause_as_expression(rhs);

        let definition = match (name, value_domain) {
            (Some(name), None) => AstKind::MakeNamed { name, value },
            _ => AstKind::Definition {
                element,
                value_domain,
                value: Some(value),
                name,
            },
        };
        let definition = self.add(definition);
        self.map(node, definition)
    }

    /// `lhs:type` without a value, or `:type` alone.
    pub(super) fn desugar_type_spec(&mut self, node: NodeId) -> AstId {
        let (lhs, rhs) = self.type_spec_operands(node);
        let mut name = None;
        let element = lhs.map(|element| self.desugar_maybe_named(element, &mut name));
        let value_domain = self.desugar_expr(rhs);
        let definition = self.add(AstKind::Definition {
            element,
            value_domain: Some(value_domain),
            value: None,
            name,
        });
        self.map(node, definition)
    }

    /// The optional left side and the type of a `TypeSpec`.
    pub(super) fn type_spec_operands(&self, node: NodeId) -> (Option<NodeId>, NodeId) {
        match *self.tree.children(node) {
            [lhs, rhs, ..] => (Some(lhs), rhs),
            _ => (None, required_child(self.tree, node, 0)),
        }
    }

    /// Lower a definition target. `?x` is a named parameter: its name goes to
    /// `name` and the target is lowered as if the `?` were absent.
    fn desugar_maybe_named(&mut self, node: NodeId, name: &mut Option<Symbol>) -> AstId {
        if !self.is_named_parameter(node) {
            return self.desugar_expr(node);
        }

        let identifier = required_child(self.tree, node, 1);
        if let Some(qualifier) = self.tree.child(identifier, 0) {
            self.report(DiagnosticKind::Unsupported, qualifier)
                .message("Qualifiers are not yet supported on named parameters.")
                .emit();
        }
        *name = Some(self.symbol_of(identifier));

        let option = self.tree.take_child_at(node, 0, None);
        let element = self.desugar_expr(node);
        self.tree.insert_child_at(node, 0, option);
        element
    }

    fn is_named_parameter(&self, node: NodeId) -> bool {
        if !matches!(self.tree.kind(node), SyntaxKind::PrePostCall) {
            return false;
        }
        let [option, identifier, ..] = *self.tree.children(node) else {
            return false;
        };
        self.tree.role(option) == Role::Call(CallRole::Option)
            && matches!(self.tree.kind(option), SyntaxKind::Clause { .. })
            && self.tree.role(identifier) == Role::Call(CallRole::Expression)
            && matches!(self.tree.kind(identifier), SyntaxKind::Identifier { .. })
    }

    /// Apply postfix operations left to right starting at the expression, then
    /// prefix operations right to left.
    pub(super) fn desugar_pre_post_call(&mut self, node: NodeId) -> AstId {
        let children = self.tree.children(node).to_vec();
        let expression = children
            .iter()
            .position(|&c| self.tree.role(c) == Role::Call(CallRole::Expression))
            .unwrap_or_else(|| missing_call_expression(node));

        let mut result = self.desugar_expr(children[expression]);
        for &child in &children[expression + 1..] {
            result = match self.tree.role(child) {
                Role::Call(CallRole::Expression) => self.desugar_expr(child),
                Role::Call(CallRole::Option) => {
                    let query = self.add(AstKind::QueryValue { operand: result });
                    self.map(child, query)
                }
                Role::Call(CallRole::Pointer) => {
                    let reference = self.add(AstKind::PointerToReference { operand: result });
                    self.map(child, reference)
                }
                Role::Call(CallRole::DotIdentifier) => {
                    let member = self.desugar_identifier(child, Some(result));
                    if self.tree.has_attributes(child) {
                        let attributes = self.desugar_attributes(child);
                        self.ast.set_attributes(member, attributes);
                    }
                    member
                }
                Role::Call(CallRole::SureCall) => self.desugar_call(child, result, false),
                Role::Call(CallRole::FailCall) => self.desugar_call(child, result, true),
                role => invalid_call_role(role, child),
            };
        }

        for &child in children[..expression].iter().rev() {
            result = match self.tree.role(child) {
                Role::Call(CallRole::Pointer) => {
                    self.report(DiagnosticKind::Unsupported, child)
                        .message("Non-unique pointers are not supported yet")
                        .emit();
                    self.error_at(child, false)
                }
                Role::Call(CallRole::Option) => {
                    let option = self.add(AstKind::OptionTypeFormer { element: result });
                    self.map(child, option)
                }
                Role::Call(CallRole::FailCall) if self.tree.child_count(child) > 0 => {
                    let mut keys = Vec::new();
                    for key in self.tree.children(child).to_vec() {
                        keys.push(self.desugar_expr(key));
                    }
                    let map = self.add(AstKind::MapTypeFormer {
                        keys,
                        value: result,
                    });
                    self.map(child, map)
                }
                Role::Call(CallRole::FailCall) => {
                    let array = self.add(AstKind::ArrayTypeFormer { element: result });
                    self.map(child, array)
                }
                Role::Call(CallRole::SureCall) => {
                    self.report(DiagnosticKind::Unsupported, child)
                        .message("Unsupported: prefix'()' not supported yet")
                        .emit();
                    self.error_at(child, false)
                }
                role => invalid_call_role(role, child),
            };
        }
        result
    }

    /// `callee(args)` or `callee[args]`; the invocation claims the argument clause.
    fn desugar_call(&mut self, args: NodeId, callee: AstId, fallible: bool) -> AstId {
        let form = self.tree.kind(args).clause_form().unwrap_or_default();
        let argument = self.desugar_list_as_expression(args, form, false);
        let style = if fallible {
            CallStyle::SquareBrackets
        } else {
            CallStyle::Parentheses
        };
        let invocation = self.add(AstKind::Invocation {
            style,
            callee,
            argument,
        });
        self.map(args, invocation)
    }

    /// An identifier, optionally qualified by its single child and reached
    /// through `context` when written as `.name`.
    pub(super) fn desugar_identifier(&mut self, node: NodeId, context: Option<AstId>) -> AstId {
        let qualifiers = self.tree.children(node).to_vec();
        if let [first, _, ..] = qualifiers[..] {
            self.report(DiagnosticKind::ExpectedSingleExpression, first)
                .message("Only one qualifying expression is allowed.")
                .emit();
            return self.error_at(first, false);
        }

        let symbol = self.symbol_of(node);
        let qualifier = qualifiers.first().map(|&q| self.desugar_expr(q));
        let identifier = self.add(AstKind::Identifier {
            kind: IdentifierKind::Unresolved,
            symbol,
            context,
            qualifier,
            unrestricted_access: false,
        });
        self.map(node, identifier)
    }
}
