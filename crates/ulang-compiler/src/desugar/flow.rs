//! `if`, control keywords, macros, `where`, `var`/`set` and lambdas.

use crate::ast::{AstId, AstKind, MacroClause, MacroClauseTag};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{ControlKeyword, IfClause, Keyword, MutationKeyword, NodeId, Role, SyntaxKind};

use super::Desugarer;
use super::invariants::{invalid_if_role, required_child};

impl Desugarer<'_> {
    /// Fold the clauses of an `if` from the right, so that
    /// `if (c1) t1 else if (c2) t2 else e` nests as `If(c1, t1, If(c2, t2, e))`.
    pub(super) fn desugar_flow_if(&mut self, node: NodeId) -> AstId {
        let clauses = self.tree.children(node).to_vec();
        let mut index = clauses.len();
        let mut result = None;

        if let Some(&last) = clauses.last()
            && self.tree.role(last) == Role::If(IfClause::ElseBody)
        {
            result = Some(self.desugar_clause_as_code_block(last));
            index -= 1;
        }

        while index > 0 {
            let clause = clauses[index - 1];
            match self.tree.role(clause) {
                Role::If(IfClause::IfIdentifier) => index -= 1,
                Role::If(IfClause::ThenBody) => {
                    let previous = index.checked_sub(2).map(|i| clauses[i]);
                    match previous {
                        Some(condition)
                            if self.tree.role(condition) == Role::If(IfClause::Condition) =>
                        {
                            let condition = self.desugar_clause_as_code_block(condition);
                            let then = self.desugar_clause_as_code_block(clause);
                            result = Some(self.add(AstKind::If {
                                condition,
                                then: Some(then),
                                else_: result,
                            }));
                            index -= 2;
                        }
                        _ => {
                            let at = previous.unwrap_or(clause);
                            self.report(DiagnosticKind::MalformedConditional, at)
                                .message("Expected condition.")
                                .emit();
                            result = Some(self.add(AstKind::Error {
                                children: result.into_iter().collect(),
                                can_fail: false,
                            }));
                            index -= 1;
                        }
                    }
                }
                Role::If(IfClause::Condition) => {
                    let condition = self.desugar_clause_as_code_block(clause);
                    result = Some(self.add(AstKind::If {
                        condition,
                        then: None,
                        else_: result,
                    }));
                    index -= 1;
                }
                Role::If(IfClause::ElseBody) => {
                    self.report(DiagnosticKind::MalformedConditional, clause)
                        .message("Expected then clause or condition while parsing `if`.")
                        .emit();
                    result = Some(self.add(AstKind::Error {
                        children: result.into_iter().collect(),
                        can_fail: false,
                    }));
                    index = index.saturating_sub(2);
                }
                role => invalid_if_role(role, clause),
            }
        }

        let Some(result) = result else {
            self.report(DiagnosticKind::MalformedConditional, node)
                .message("Expected condition.")
                .emit();
            return self.error_at(node, false);
        };
        self.map_unclaimed(node, result)
    }

    pub(super) fn desugar_control(&mut self, node: NodeId, keyword: ControlKeyword) -> AstId {
        let operands = self.tree.non_comment_children(node);
        let control = match keyword {
            ControlKeyword::Return => match operands[..] {
                [] => AstKind::Return { result: None },
                [operand] => {
                    let result = self.desugar_expr(operand);
                    AstKind::Return {
                        result: Some(result),
                    }
                }
                _ => {
                    self.report(DiagnosticKind::UnexpectedNumberOfArguments, node)
                        .message(
                            "`return` may only have a single sub-expression when returning a result.",
                        )
                        .emit();
                    return self.error_at(node, false);
                }
            },
            ControlKeyword::Break => {
                if !operands.is_empty() {
                    self.report(DiagnosticKind::UnexpectedNumberOfArguments, node)
                        .message(
                            "`break` may not have any sub-expressions - it does not return a result.",
                        )
                        .emit();
                    return self.error_at(node, false);
                }
                AstKind::Break
            }
            ControlKeyword::Yield | ControlKeyword::Continue => {
                self.report(DiagnosticKind::Unimplemented, node).emit();
                return self.error_at(node, false);
            }
        };
        let control = self.add(control);
        self.map(node, control)
    }

    /// `name{...} of {...} do {...}`. Attributes on the clauses move to the macro call.
    pub(super) fn desugar_macro(&mut self, node: NodeId) -> AstId {
        let children = self.tree.children(node).to_vec();
        let Some((&name, clause_nodes)) = children.split_first() else {
            self.report(DiagnosticKind::MalformedMacro, node)
                .message("Malformed macro: expected a macro name")
                .emit();
            return self.error_at(node, false);
        };

        let name = self.desugar_expr(name);
        let mut clauses = Vec::with_capacity(clause_nodes.len());
        let mut attributes = Vec::new();
        for &clause in clause_nodes {
            let SyntaxKind::Clause { form, .. } = *self.tree.kind(clause) else {
                self.report(DiagnosticKind::MalformedMacro, clause)
                    .message("Malformed macro: expected a macro clause")
                    .emit();
                continue;
            };
            if let Some(&wrapper) = self.tree.attribute_wrappers(clause).first() {
                self.report(DiagnosticKind::AttributeNotAllowed, wrapper).emit();
            }

            let tag = match self.tree.role(clause) {
                Role::None | Role::Keyword(Keyword::None) => MacroClauseTag::None,
                Role::Keyword(Keyword::Of) => MacroClauseTag::Of,
                Role::Keyword(Keyword::Do) => MacroClauseTag::Do,
                _ => {
                    self.report(DiagnosticKind::MalformedMacro, clause)
                        .message("Malformed macro: reserved word invalid in macro clause")
                        .emit();
                    MacroClauseTag::None
                }
            };

            let exprs = self.desugar_children(clause);
            clauses.push(MacroClause { tag, form, exprs });
            if self.tree.has_attributes(clause) {
                attributes.extend(self.desugar_attributes(clause));
            }
        }

        let call = self.add(AstKind::MacroCall { name, clauses });
        self.ast.append_attributes(call, attributes);
        self.map(node, call)
    }

    pub(super) fn desugar_where(&mut self, node: NodeId) -> AstId {
        let children = self.tree.children(node).to_vec();
        let lhs = required_child(self.tree, node, 0);
        let lhs = self.desugar_expr(lhs);
        let mut rhs = Vec::with_capacity(children.len().saturating_sub(1));
        for &constraint in &children[1..] {
            rhs.push(self.desugar_expr(constraint));
        }
        let where_ = self.add(AstKind::Where { lhs, rhs });
        self.map(node, where_)
    }

    pub(super) fn desugar_mutation(&mut self, node: NodeId, keyword: MutationKeyword) -> AstId {
        let operand = required_child(self.tree, node, 0);
        let operand = self.desugar_expr(operand);
        let mutation = match keyword {
            MutationKeyword::Var => AstKind::Var { operand },
            MutationKeyword::Set => AstKind::Set { operand },
        };
        let mutation = self.add(mutation);
        self.map(node, mutation)
    }

    /// `domain => body`
    pub(super) fn desugar_lambda(&mut self, node: NodeId) -> AstId {
        let domain = required_child(self.tree, node, 0);
        let range = required_child(self.tree, node, 1);
        let domain = self.desugar_expr(domain);
        let range = self.desugar_clause_as_expression(range);
        let lambda = self.add(AstKind::FunctionLiteral { domain, range });
        self.map(node, lambda)
    }
}
