//! Two-way links between syntax nodes and AST nodes.
//!
//! A syntax node maps to at most one AST node. An AST node mapped to a syntax
//! node is `Reciprocal` when the syntax node maps back to it and
//! `NonReciprocal` otherwise. Many AST nodes may point at the same syntax
//! node; only one of them claims it.

use crate::ast::{Ast, AstId, SyntaxMapping};
use crate::invariants::assert_not_claimed_elsewhere;
use crate::syntax::{NodeId, SyntaxTree};

/// Make `node` and `ast_id` map to each other.
///
/// The AST node previously claiming `node` is demoted to non-reciprocal and
/// keeps pointing at `node`. Re-applying an existing pair changes nothing.
///
/// # Panics
/// Panics when `ast_id` already reciprocally claims a different syntax node.
pub fn add_mapping(tree: &mut SyntaxTree, ast: &mut Ast, node: NodeId, ast_id: AstId) {
    assert_not_claimed_elsewhere(ast, ast_id, node);

    if let Some(previous) = tree.mapped_ast(node)
        && previous != ast_id
    {
        ast.set_mapping(previous, SyntaxMapping::NonReciprocal(node));
    }
    tree.set_mapped_ast(node, Some(ast_id));
    ast.set_mapping(ast_id, SyntaxMapping::Reciprocal(node));
}

/// Point `ast_id` at `node` without claiming it.
///
/// Nodes synthesised from a piece of syntax use this so diagnostics about
/// them still find a location.
pub fn set_non_reciprocal(ast: &mut Ast, node: NodeId, ast_id: AstId) {
    assert_not_claimed_elsewhere(ast, ast_id, node);
    if ast.mapping(ast_id) != SyntaxMapping::Reciprocal(node) {
        ast.set_mapping(ast_id, SyntaxMapping::NonReciprocal(node));
    }
}

/// Point a lowered node at the syntax it was produced from.
pub fn set_ir_mapping(ast: &mut Ast, node: NodeId, ast_id: AstId) {
    ast.set_mapping(ast_id, SyntaxMapping::Ir(node));
}

/// Drop the mapping of `node` in both directions. Returns the AST node it mapped to.
pub fn remove_mapping(tree: &mut SyntaxTree, ast: &mut Ast, node: NodeId) -> Option<AstId> {
    let ast_id = tree.mapped_ast(node)?;
    tree.set_mapped_ast(node, None);
    if ast.mapping(ast_id) == SyntaxMapping::Reciprocal(node) {
        ast.set_mapping(ast_id, SyntaxMapping::None);
    }
    Some(ast_id)
}
