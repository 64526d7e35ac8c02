use super::*;

#[test]
fn attributes_and_specifiers_share_the_aux_clause() {
    let mut tree = SyntaxTree::new();
    let class = tree.add(SyntaxKind::identifier("c"));
    let native = tree.add(SyntaxKind::identifier("native"));
    let public = tree.add(SyntaxKind::identifier("public"));

    assert!(!tree.has_attributes(class));
    let attr = tree.add_attribute(class, native);
    let spec = tree.add_specifier(class, public);

    assert!(tree.has_attributes(class));
    assert_eq!(tree.attribute_wrappers(class), &[attr, spec]);
    assert_eq!(
        tree.kind(attr).clause_form(),
        Some(ClauseForm::PrependAttributeHolder)
    );
    assert_eq!(
        tree.kind(spec).clause_form(),
        Some(ClauseForm::AppendAttributeHolder)
    );
    assert_eq!(tree.attribute_expr(spec), public);
    assert_eq!(tree.parent(tree.aux(class).unwrap()), Some(class));
}

#[test]
fn prepend_aux_goes_first() {
    let mut tree = SyntaxTree::new();
    let node = tree.add(SyntaxKind::identifier("f"));
    let later = tree.add(SyntaxKind::identifier("later"));
    let first = tree.add(SyntaxKind::identifier("first"));
    let later_wrapper = tree.add_attribute(node, later);

    let wrapper = tree.add(SyntaxKind::clause(ClauseForm::PrependAttributeHolder));
    tree.append_child(wrapper, first);
    tree.prepend_aux(node, wrapper);

    assert_eq!(tree.attribute_wrappers(node), &[wrapper, later_wrapper]);
}

#[test]
fn attribute_presence_matches_plain_and_called_names() {
    let mut tree = SyntaxTree::new();
    let def = tree.add(SyntaxKind::Definition);
    let plain = tree.add(SyntaxKind::identifier("localizes"));
    tree.add_attribute(def, plain);

    let other = tree.add(SyntaxKind::Definition);
    let call = tree.add(SyntaxKind::PrePostCall);
    let callee = tree.add(SyntaxKind::identifier("editable"));
    let args = tree.add(SyntaxKind::clause(ClauseForm::NoSemicolonOrNewline));
    tree.append_call_expression(call, callee);
    tree.append_call_args(call, args, false);
    tree.add_attribute(other, call);

    assert!(tree.is_attribute_present(def, "localizes"));
    assert!(!tree.is_attribute_present(def, "editable"));
    assert!(tree.is_attribute_present(other, "editable"));

    let wrappers = tree.attribute_wrappers(other).to_vec();
    assert_eq!(tree.attribute_identifier(wrappers[0]), Some("editable"));

    let bare = tree.add(SyntaxKind::Definition);
    assert!(!tree.is_attribute_present(bare, "localizes"));
}

#[test]
fn first_attribute_of_kind_finds_wrapper() {
    let mut tree = SyntaxTree::new();
    let node = tree.add(SyntaxKind::identifier("x"));
    let ident = tree.add(SyntaxKind::identifier("a"));
    let text = tree.add(SyntaxKind::string("doc"));
    tree.add_attribute(node, ident);
    let wanted = tree.add_attribute(node, text);

    let found =
        tree.first_attribute_of_kind(node, |k| matches!(k, SyntaxKind::StringLiteral { .. }));

    assert_eq!(found, Some(wanted));
    assert_eq!(
        tree.first_attribute_of_kind(node, |k| matches!(k, SyntaxKind::Placeholder)),
        None
    );
}

#[test]
fn set_aux_swaps_container() {
    let mut tree = SyntaxTree::new();
    let node = tree.add(SyntaxKind::identifier("x"));
    let attr = tree.add(SyntaxKind::identifier("a"));
    tree.add_attribute(node, attr);
    let old = tree.aux(node).unwrap();

    let replaced = tree.set_aux(node, None);

    assert_eq!(replaced, Some(old));
    assert_eq!(tree.parent(old), None);
    assert!(!tree.has_attributes(node));
}

#[test]
#[should_panic(expected = "exactly one child")]
fn malformed_wrapper_panics() {
    let mut tree = SyntaxTree::new();
    let wrapper = tree.add(SyntaxKind::clause(ClauseForm::PrependAttributeHolder));
    tree.attribute_expr(wrapper);
}
