//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ast::{Ast, AstId, SyntaxMapping};
use crate::syntax::NodeId;

#[inline]
pub(crate) fn assert_not_claimed_elsewhere(ast: &Ast, ast_id: AstId, node: NodeId) {
    if let SyntaxMapping::Reciprocal(other) = ast.mapping(ast_id)
        && other != node
    {
        panic!(
            "mapping: {} {ast_id:?} already claims syntax node {other:?}, cannot map it to {node:?}",
            ast.kind(ast_id).name()
        );
    }
}
