//! Role-aware construction helpers.
//!
//! Operator, call, `if` and macro nodes interpret their children by role.
//! These helpers attach a child and set its role in one step.

use super::{
    CallRole, ClauseForm, IfClause, Keyword, NodeId, OperandRole, Role, SyntaxKind, SyntaxTree,
};

impl SyntaxTree {
    fn append_with_role(&mut self, parent: NodeId, child: NodeId, role: Role) {
        self.set_role(child, role);
        self.append_child(parent, child);
    }

    pub fn append_operand(&mut self, op_node: NodeId, operand: NodeId) {
        self.append_with_role(op_node, operand, Role::BinaryOp(OperandRole::Operand));
    }

    /// Append an `Operator` node spelled `text`. Returns the new operator node.
    pub fn append_operator(&mut self, op_node: NodeId, text: &str) -> NodeId {
        let operator = self.add(SyntaxKind::Operator {
            text: text.to_owned(),
        });
        self.append_with_role(op_node, operator, Role::BinaryOp(OperandRole::Operator));
        operator
    }

    /// Append `+ operand`.
    pub fn append_add_operation(&mut self, op_node: NodeId, operand: NodeId) {
        self.append_operator(op_node, "+");
        self.append_operand(op_node, operand);
    }

    /// Append `- operand`.
    pub fn append_sub_operation(&mut self, op_node: NodeId, operand: NodeId) {
        self.append_operator(op_node, "-");
        self.append_operand(op_node, operand);
    }

    /// Append `* operand`.
    pub fn append_mul_operation(&mut self, op_node: NodeId, operand: NodeId) {
        self.append_operator(op_node, "*");
        self.append_operand(op_node, operand);
    }

    /// Append `/ operand`.
    pub fn append_div_operation(&mut self, op_node: NodeId, operand: NodeId) {
        self.append_operator(op_node, "/");
        self.append_operand(op_node, operand);
    }

    pub fn append_call_expression(&mut self, call: NodeId, expr: NodeId) {
        self.append_with_role(call, expr, Role::Call(CallRole::Expression));
    }

    /// Append a `?` marker. Returns the marker node.
    pub fn append_option(&mut self, call: NodeId) -> NodeId {
        let marker = self.add(SyntaxKind::clause(ClauseForm::Synthetic));
        self.append_with_role(call, marker, Role::Call(CallRole::Option));
        marker
    }

    /// Append a `^` marker. Returns the marker node.
    pub fn append_pointer(&mut self, call: NodeId) -> NodeId {
        let marker = self.add(SyntaxKind::clause(ClauseForm::Synthetic));
        self.append_with_role(call, marker, Role::Call(CallRole::Pointer));
        marker
    }

    /// Append an argument clause: `[...]` when `fallible`, `(...)` otherwise.
    pub fn append_call_args(&mut self, call: NodeId, clause: NodeId, fallible: bool) {
        let role = if fallible {
            CallRole::FailCall
        } else {
            CallRole::SureCall
        };
        self.append_with_role(call, clause, Role::Call(role));
    }

    pub fn append_dot_identifier(&mut self, call: NodeId, identifier: NodeId) {
        self.append_with_role(call, identifier, Role::Call(CallRole::DotIdentifier));
    }

    /// Detach the last argument clause of a call, if the last child is one.
    pub fn take_last_call_args(&mut self, call: NodeId) -> Option<NodeId> {
        let last = *self.children(call).last()?;
        match self.role(last) {
            Role::Call(CallRole::SureCall | CallRole::FailCall) => {
                let index = self.child_count(call) - 1;
                Some(self.take_child_at(call, index, None))
            }
            _ => None,
        }
    }

    /// Append the `if` keyword identifier.
    pub fn add_if_identifier(&mut self, flow_if: NodeId) -> NodeId {
        let keyword = self.add(SyntaxKind::identifier("if"));
        self.append_with_role(flow_if, keyword, Role::If(IfClause::IfIdentifier));
        keyword
    }

    pub fn add_condition(&mut self, flow_if: NodeId, clause: NodeId) {
        self.append_with_role(flow_if, clause, Role::If(IfClause::Condition));
    }

    pub fn add_then_body(&mut self, flow_if: NodeId, clause: NodeId) {
        self.append_with_role(flow_if, clause, Role::If(IfClause::ThenBody));
    }

    pub fn add_else_body(&mut self, flow_if: NodeId, clause: NodeId) {
        self.append_with_role(flow_if, clause, Role::If(IfClause::ElseBody));
    }

    /// Append a clause to a macro, tagged with the reserved word that introduced it.
    pub fn add_macro_clause(&mut self, macro_node: NodeId, clause: NodeId, keyword: Keyword) {
        self.append_with_role(macro_node, clause, Role::Keyword(keyword));
    }
}
