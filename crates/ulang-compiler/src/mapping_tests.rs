use crate::ast::{Ast, AstKind, SyntaxMapping};
use crate::mapping::{add_mapping, remove_mapping, set_ir_mapping, set_non_reciprocal};
use crate::syntax::{SyntaxKind, SyntaxTree};

#[test]
fn add_mapping_links_both_ways() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);

    add_mapping(&mut tree, &mut ast, node, id);

    assert_eq!(tree.mapped_ast(node), Some(id));
    assert_eq!(ast.mapping(id), SyntaxMapping::Reciprocal(node));
    assert_eq!(ast.mapped_syntax(id), Some(node));
}

#[test]
fn add_mapping_is_idempotent() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);

    add_mapping(&mut tree, &mut ast, node, id);
    add_mapping(&mut tree, &mut ast, node, id);

    assert_eq!(tree.mapped_ast(node), Some(id));
    assert_eq!(ast.mapping(id), SyntaxMapping::Reciprocal(node));
}

#[test]
fn remapping_demotes_previous_claim() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let old = ast.add(AstKind::Placeholder);
    let new = ast.add(AstKind::Break);

    add_mapping(&mut tree, &mut ast, node, old);
    add_mapping(&mut tree, &mut ast, node, new);

    assert_eq!(tree.mapped_ast(node), Some(new));
    assert_eq!(ast.mapping(new), SyntaxMapping::Reciprocal(node));
    assert_eq!(ast.mapping(old), SyntaxMapping::NonReciprocal(node));
    assert_eq!(ast.mapped_syntax(old), Some(node));
}

#[test]
fn non_reciprocal_is_promoted() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);

    set_non_reciprocal(&mut ast, node, id);
    assert_eq!(ast.mapping(id), SyntaxMapping::NonReciprocal(node));
    assert_eq!(tree.mapped_ast(node), None);

    add_mapping(&mut tree, &mut ast, node, id);
    assert_eq!(ast.mapping(id), SyntaxMapping::Reciprocal(node));
    assert_eq!(tree.mapped_ast(node), Some(id));
}

#[test]
fn non_reciprocal_never_downgrades_own_claim() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);

    add_mapping(&mut tree, &mut ast, node, id);
    set_non_reciprocal(&mut ast, node, id);

    assert_eq!(ast.mapping(id), SyntaxMapping::Reciprocal(node));
}

#[test]
#[should_panic(expected = "already claims syntax node")]
fn claiming_two_syntax_nodes_panics() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let first = tree.add(SyntaxKind::Placeholder);
    let second = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);

    add_mapping(&mut tree, &mut ast, first, id);
    add_mapping(&mut tree, &mut ast, second, id);
}

#[test]
fn remove_mapping_clears_both_sides() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let id = ast.add(AstKind::Placeholder);
    add_mapping(&mut tree, &mut ast, node, id);

    assert_eq!(remove_mapping(&mut tree, &mut ast, node), Some(id));
    assert_eq!(tree.mapped_ast(node), None);
    assert_eq!(ast.mapping(id), SyntaxMapping::None);
    assert_eq!(remove_mapping(&mut tree, &mut ast, node), None);
}

#[test]
fn ir_mapping_points_without_claiming() {
    let mut tree = SyntaxTree::new();
    let mut ast = Ast::new();
    let node = tree.add(SyntaxKind::Placeholder);
    let array = ast.add(AstKind::Placeholder);
    let id = ast.add(AstKind::IrArrayLength { array });

    set_ir_mapping(&mut ast, node, id);

    assert_eq!(ast.mapping(id), SyntaxMapping::Ir(node));
    assert_eq!(ast.mapped_syntax(id), Some(node));
    assert_eq!(tree.mapped_ast(node), None);
}
