use super::*;

#[test]
fn arithmetic_helpers_alternate_roles() {
    let mut tree = SyntaxTree::new();
    let sum = tree.add(SyntaxKind::AddSub);
    let a = tree.add(SyntaxKind::identifier("a"));
    let b = tree.add(SyntaxKind::identifier("b"));
    let c = tree.add(SyntaxKind::identifier("c"));

    tree.append_operand(sum, a);
    tree.append_add_operation(sum, b);
    tree.append_sub_operation(sum, c);

    let roles: Vec<Role> = tree.children(sum).iter().map(|&n| tree.role(n)).collect();
    let operand = Role::BinaryOp(OperandRole::Operand);
    let operator = Role::BinaryOp(OperandRole::Operator);
    assert_eq!(roles, vec![operand, operator, operand, operator, operand]);
    assert_eq!(tree.text(tree.children(sum)[1]), Some("+"));
    assert_eq!(tree.text(tree.children(sum)[3]), Some("-"));
}

#[test]
fn call_helpers_tag_children() {
    let mut tree = SyntaxTree::new();
    let call = tree.add(SyntaxKind::PrePostCall);
    let callee = tree.add(SyntaxKind::identifier("f"));
    let sure = tree.add(SyntaxKind::clause(ClauseForm::NoSemicolonOrNewline));
    let fail = tree.add(SyntaxKind::clause(ClauseForm::NoSemicolonOrNewline));

    let option = tree.append_option(call);
    tree.append_call_expression(call, callee);
    tree.append_call_args(call, sure, false);
    tree.append_call_args(call, fail, true);

    assert_eq!(tree.role(option), Role::Call(CallRole::Option));
    assert_eq!(tree.role(callee), Role::Call(CallRole::Expression));
    assert_eq!(tree.role(sure), Role::Call(CallRole::SureCall));

    assert_eq!(tree.take_last_call_args(call), Some(fail));
    assert_eq!(tree.take_last_call_args(call), Some(sure));
    assert_eq!(tree.take_last_call_args(call), None);
    assert_eq!(tree.child_count(call), 2);
}

#[test]
fn if_helpers_build_clause_sequence() {
    let mut tree = SyntaxTree::new();
    let flow = tree.add(SyntaxKind::FlowIf);
    let cond = tree.add(SyntaxKind::clause(ClauseForm::NoSemicolonOrNewline));
    let then = tree.add(SyntaxKind::clause(ClauseForm::HasSemicolonOrNewline));
    let els = tree.add(SyntaxKind::clause(ClauseForm::HasSemicolonOrNewline));

    let keyword = tree.add_if_identifier(flow);
    tree.add_condition(flow, cond);
    tree.add_then_body(flow, then);
    tree.add_else_body(flow, els);

    assert_eq!(tree.text(keyword), Some("if"));
    let roles: Vec<Role> = tree.children(flow).iter().map(|&n| tree.role(n)).collect();
    assert_eq!(
        roles,
        vec![
            Role::If(IfClause::IfIdentifier),
            Role::If(IfClause::Condition),
            Role::If(IfClause::ThenBody),
            Role::If(IfClause::ElseBody),
        ]
    );
}

#[test]
fn macro_clause_keeps_keyword() {
    let mut tree = SyntaxTree::new();
    let mac = tree.add(SyntaxKind::Macro);
    let name = tree.add(SyntaxKind::identifier("for"));
    let clause = tree.add(SyntaxKind::clause(ClauseForm::NoSemicolonOrNewline));
    tree.append_child(mac, name);

    tree.add_macro_clause(mac, clause, Keyword::Do);

    assert_eq!(tree.role(clause), Role::Keyword(Keyword::Do));
    assert_eq!(tree.child(mac, 1), Some(clause));
}
