use ulang_core::MAX_SYMBOL_LENGTH;

use crate::ast::AstKind;
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{CallRole, NodeId, Role, SyntaxKind};
use crate::test_utils::TreeBuilder;

/// `?name`
fn named(t: &mut TreeBuilder, name: &str) -> NodeId {
    let call = t.tree.add(SyntaxKind::PrePostCall);
    t.tree.append_option(call);
    let name = t.ident(name);
    t.tree.append_call_expression(call, name);
    call
}

#[test]
fn plain_definition() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    let one = t.int("1");
    let node = t.definition(x, one);

    insta::assert_snapshot!(t.dump(node), @r"
    Definition
      Identifier x
      _
      Number 1
    ");
}

#[test]
fn typed_definition_with_block_value() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    let int = t.ident("int");
    let lhs = t.type_spec(Some(x), int);
    let f = t.ident("f");
    let one = t.int("1");
    let value = t.block(&[f, one]);
    let node = t.definition(lhs, value);

    insta::assert_snapshot!(t.dump(node), @r"
    Definition
      Identifier x
      Identifier int
      CodeBlock
        Identifier f
        Number 1
    ");
}

#[test]
fn attributes_stay_on_the_element() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    t.attribute(x, "public");
    let one = t.int("1");
    let node = t.definition(x, one);

    insta::assert_snapshot!(t.dump(node), @r"
    Definition
      Identifier x
        @attribute
          Identifier public
      _
      Number 1
    ");
}

#[test]
fn type_spec_without_value() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    let int = t.ident("int");
    let with_name = t.type_spec(Some(x), int);
    let logic = t.ident("logic");
    let bare = t.type_spec(None, logic);
    let root = t.node(SyntaxKind::Commas, &[with_name, bare]);

    insta::assert_snapshot!(t.dump(root), @r"
    MakeTuple
      Definition
        Identifier x
        Identifier int
        _
      Definition
        _
        Identifier logic
        _
    ");
}

#[test]
fn untyped_named_parameter_becomes_make_named() {
    let mut t = TreeBuilder::new();
    let lhs = named(&mut t, "x");
    let one = t.int("1");
    let node = t.definition(lhs, one);

    insta::assert_snapshot!(t.dump(node), @r"
    MakeNamed x
      Number 1
    ");

    let children = t.tree.children(lhs).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(t.tree.role(children[0]), Role::Call(CallRole::Option));
    assert_eq!(t.tree.role(children[1]), Role::Call(CallRole::Expression));
}

#[test]
fn typed_named_parameter_keeps_its_name() {
    let mut t = TreeBuilder::new();
    let target = named(&mut t, "x");
    let int = t.ident("int");
    let lhs = t.type_spec(Some(target), int);
    let one = t.int("1");
    let node = t.definition(lhs, one);

    insta::assert_snapshot!(t.dump(node), @r"
    Definition x
      Identifier x
      Identifier int
      Number 1
    ");
}

#[test]
fn qualified_named_parameter_is_unsupported() {
    let mut t = TreeBuilder::new();
    let lhs = named(&mut t, "x");
    let identifier = t.tree.child(lhs, 1).expect("identifier");
    let qualifier = t.ident("M");
    t.tree.append_child(identifier, qualifier);
    let int = t.ident("int");
    let lhs = t.type_spec(Some(lhs), int);
    let one = t.int("1");
    let node = t.definition(lhs, one);

    let (_, diagnostics) = t.desugar(node);

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::Unsupported]);
}

#[test]
fn calls_with_parentheses_and_brackets() {
    let mut t = TreeBuilder::new();
    let f = t.ident("f");
    let a = t.ident("a");
    let b = t.ident("b");
    let sure = t.call(f, &[a, b]);

    let g = t.ident("g");
    let c = t.ident("c");
    let fail = t.tree.add(SyntaxKind::PrePostCall);
    t.tree.append_call_expression(fail, g);
    let args = t.braces(&[c]);
    t.tree.append_call_args(fail, args, true);

    let root = t.node(SyntaxKind::Commas, &[sure, fail]);

    insta::assert_snapshot!(t.dump(root), @r"
    MakeTuple
      Invocation ()
        Identifier f
        MakeTuple
          Identifier a
          Identifier b
      Invocation []
        Identifier g
        Identifier c
    ");
}

#[test]
fn invocation_claims_argument_clause() {
    let mut t = TreeBuilder::new();
    let f = t.ident("f");
    let node = t.call(f, &[]);

    insta::assert_snapshot!(t.dump_with_mapping(node), @r"
    Invocation () [=2]
      Identifier f [=0]
      MakeTuple [~2]
    ");
}

#[test]
fn postfix_operations_apply_left_to_right() {
    let mut t = TreeBuilder::new();
    let call = t.tree.add(SyntaxKind::PrePostCall);
    let x = t.ident("x");
    t.tree.append_call_expression(call, x);
    t.tree.append_pointer(call);
    let y = t.ident("y");
    t.tree.append_dot_identifier(call, y);
    t.tree.append_option(call);

    insta::assert_snapshot!(t.dump(call), @r"
    QueryValue
      Identifier y
        PointerToReference
          Identifier x
    ");
}

#[test]
fn prefix_type_formers_apply_right_to_left() {
    let mut t = TreeBuilder::new();
    let call = t.tree.add(SyntaxKind::PrePostCall);
    t.tree.append_option(call);
    let string = t.ident("string");
    let keys = t.braces(&[string]);
    t.tree.append_call_args(call, keys, true);
    let empty = t.braces(&[]);
    t.tree.append_call_args(call, empty, true);
    let int = t.ident("int");
    t.tree.append_call_expression(call, int);

    insta::assert_snapshot!(t.dump(call), @r"
    OptionTypeFormer
      MapTypeFormer
        Identifier string
        ArrayTypeFormer
          Identifier int
    ");
}

#[test]
fn prefix_pointer_and_parentheses_are_unsupported() {
    let mut t = TreeBuilder::new();
    let call = t.tree.add(SyntaxKind::PrePostCall);
    t.tree.append_pointer(call);
    let empty = t.braces(&[]);
    t.tree.append_call_args(call, empty, false);
    let int = t.ident("int");
    t.tree.append_call_expression(call, int);

    let (output, diagnostics) = t.desugar(call);

    insta::assert_snapshot!(output.dump(), @"Error");
    assert_eq!(
        diagnostics.kinds(),
        vec![DiagnosticKind::Unsupported, DiagnosticKind::Unsupported]
    );
}

#[test]
fn qualified_identifier() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    let module = t.ident("M");
    t.tree.append_child(x, module);

    insta::assert_snapshot!(t.dump(x), @r"
    Identifier x
      Identifier M
    ");
}

#[test]
fn two_qualifiers_are_reported() {
    let mut t = TreeBuilder::new();
    let x = t.ident("x");
    let a = t.ident("A");
    let b = t.ident("B");
    t.tree.append_children(x, [a, b]);

    insta::assert_snapshot!(t.dump(x), @r"
    Error
    ---
    (0,0, 0,0): error 3030: Only one qualifying expression is allowed.
    ");
}

#[test]
fn long_identifier_is_truncated() {
    let mut t = TreeBuilder::new();
    let name = "n".repeat(MAX_SYMBOL_LENGTH + 10);
    let x = t.ident(&name);

    let (output, diagnostics) = t.desugar(x);

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::TooLongIdentifier]);
    let AstKind::Identifier { symbol, .. } = *output.ast.kind(output.root) else {
        panic!("expected an identifier");
    };
    assert_eq!(output.symbols.resolve(symbol).len(), MAX_SYMBOL_LENGTH - 1);
}
