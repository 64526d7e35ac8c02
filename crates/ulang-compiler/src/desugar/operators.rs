//! Logical, comparison, arithmetic, range and arrow operators.

use crate::ast::{ArithmeticOp, AstId, AstKind, CallStyle, UnaryOp};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{AssignmentOp, CompareOp, NodeId, SyntaxKind};

use super::Desugarer;
use super::invariants::required_child;

impl Desugarer<'_> {
    /// `a and b and c` folds from the right into `And(a, And(b, c))`.
    pub(super) fn desugar_logical(&mut self, node: NodeId, is_and: bool) -> AstId {
        let operands = self.tree.children(node).to_vec();
        let Some((&last, rest)) = operands.split_last() else {
            self.report(DiagnosticKind::BinaryOpNoOperands, node).emit();
            return self.error_at(node, true);
        };

        let mut result = self.desugar_expr(last);
        for &operand in rest.iter().rev() {
            let lhs = self.desugar_expr(operand);
            let kind = if is_and {
                AstKind::ShortCircuitAnd { lhs, rhs: result }
            } else {
                AstKind::ShortCircuitOr { lhs, rhs: result }
            };
            result = self.add(kind);
        }
        self.map_unclaimed(node, result)
    }

    pub(super) fn desugar_not(&mut self, node: NodeId) -> AstId {
        let Some(operand) = self.tree.child(node, 0) else {
            self.report(DiagnosticKind::PrefixOpNoOperand, node).emit();
            return self.error_at(node, true);
        };
        let operand = self.desugar_expr(operand);
        let not = self.add(AstKind::LogicalNot { operand });
        self.map(node, not)
    }

    pub(super) fn desugar_compare(&mut self, node: NodeId, op: CompareOp) -> AstId {
        let operands = self.tree.children(node).to_vec();
        let [lhs, rhs] = operands[..] else {
            self.report(DiagnosticKind::BinaryOpExpectedTwoOperands, node).emit();
            return self.error_at(node, true);
        };
        let lhs = self.desugar_expr(lhs);
        let rhs = self.desugar_expr(rhs);
        let argument = self.wrap_in_tuple(vec![lhs, rhs], node, false);
        let comparison = self.add(AstKind::Comparison { op, argument });
        self.map(node, comparison)
    }

    /// Lower an operand/operator chain into left-associative binary calls.
    ///
    /// Single-character operators become arithmetic; an identifier operator
    /// `x` becomes a call to `operator'x'`. A leading `-` negates the first
    /// operand and a leading `+` is dropped.
    pub(super) fn desugar_binary_op(&mut self, node: NodeId) -> AstId {
        let is_add_sub = matches!(self.tree.kind(node), SyntaxKind::AddSub);
        let children = self.tree.children(node).to_vec();
        let Some(&first) = children.first() else {
            self.report(DiagnosticKind::BinaryOpNoOperands, node).emit();
            return self.error_at(node, false);
        };

        let leading_operator =
            matches!(self.tree.kind(first), SyntaxKind::Operator { .. }) && children.len() > 1;
        let mut lhs = if leading_operator {
            let operand = self.desugar_expr(children[1]);
            if self.tree.text(first) == Some("-") {
                let negate = self.add(AstKind::UnaryArithmetic {
                    op: UnaryOp::Negate,
                    operand,
                });
                self.map(node, negate)
            } else {
                operand
            }
        } else {
            self.desugar_expr(first)
        };

        let start = if leading_operator { 2 } else { 1 };
        for i in (start..children.len()).step_by(2) {
            let operator = children[i];
            let Some(&operand) = children.get(i + 1) else {
                self.report(DiagnosticKind::Internal, operator)
                    .message("Binary operator is missing its right-hand operand.")
                    .emit();
                break;
            };
            let rhs = self.desugar_expr(operand);
            lhs = self.desugar_binary_step(operator, is_add_sub, lhs, rhs);
        }
        lhs
    }

    fn desugar_binary_step(
        &mut self,
        operator: NodeId,
        is_add_sub: bool,
        lhs: AstId,
        rhs: AstId,
    ) -> AstId {
        match self.tree.kind(operator) {
            SyntaxKind::Operator { text } if text.len() == 1 => {
                let op = match (is_add_sub, text.as_str()) {
                    (true, "+") => ArithmeticOp::Add,
                    (true, _) => ArithmeticOp::Sub,
                    (false, "*") => ArithmeticOp::Mul,
                    (false, _) => ArithmeticOp::Div,
                };
                let argument = self.wrap_in_tuple(vec![lhs, rhs], operator, false);
                let arithmetic = self.add(AstKind::BinaryArithmetic { op, argument });
                self.map(operator, arithmetic)
            }
            SyntaxKind::Identifier { name } => {
                let name = format!("operator'{name}'");
                let argument = self.wrap_in_tuple(vec![lhs, rhs], operator, false);
                let symbol = self.verify_symbol(operator, &name);
                let callee = self.identifier(symbol);
                let invocation = self.add(AstKind::Invocation {
                    style: CallStyle::Parentheses,
                    callee,
                    argument,
                });
                self.map(operator, invocation)
            }
            _ => self.add(AstKind::Error {
                children: vec![lhs, rhs],
                can_fail: false,
            }),
        }
    }

    pub(super) fn desugar_range(&mut self, node: NodeId) -> AstId {
        let lhs = required_child(self.tree, node, 0);
        let rhs = required_child(self.tree, node, 1);
        let lhs = self.desugar_expr(lhs);
        let rhs = self.desugar_expr(rhs);
        let range = self.add(AstKind::MakeRange { lhs, rhs });
        self.map(node, range)
    }

    pub(super) fn desugar_arrow(&mut self, node: NodeId) -> AstId {
        let domain = required_child(self.tree, node, 0);
        let range = required_child(self.tree, node, 1);
        let domain = self.desugar_expr(domain);
        let range = self.desugar_expr(range);
        let arrow = self.add(AstKind::ArrowTypeFormer { domain, range });
        self.map(node, arrow)
    }

    pub(super) fn desugar_assignment(&mut self, node: NodeId, op: AssignmentOp) -> AstId {
        let lhs = required_child(self.tree, node, 0);
        let rhs = required_child(self.tree, node, 1);
        let lhs = self.desugar_expr(lhs);
        let rhs = self.desugar_clause_as_expression(rhs);
        let assignment = self.add(AstKind::Assignment { op, lhs, rhs });
        self.map(node, assignment)
    }
}
