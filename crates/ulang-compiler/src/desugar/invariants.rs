//! Invariant checks excluded from coverage reports.
//!
//! The parser guarantees these shapes; breaking one is a toolchain bug, not
//! a user error.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::syntax::{ClauseForm, NodeId, PackageInfo, Role, SyntaxKind, SyntaxTree};

#[cold]
pub(super) fn unexpected_node_kind(kind: &str, node: NodeId) -> ! {
    panic!("desugar: {kind} {node:?} cannot be lowered on its own")
}

#[inline]
pub(super) fn expect_package(tree: &SyntaxTree, node: NodeId) -> &PackageInfo {
    tree.package_info(node).unwrap_or_else(|| {
        panic!(
            "desugar: projects may only contain packages, found {} {node:?}",
            tree.kind(node).name()
        )
    })
}

#[cold]
pub(super) fn invalid_package_member(kind: &str, node: NodeId) -> ! {
    panic!("desugar: packages may only contain modules and snippets, found {kind} {node:?}")
}

#[inline]
pub(super) fn expect_clause_form(tree: &SyntaxTree, node: NodeId) -> ClauseForm {
    match tree.kind(node) {
        SyntaxKind::Clause { form, .. } => *form,
        kind => panic!("desugar: expected a Clause at {node:?}, found {}", kind.name()),
    }
}

#[inline]
pub(super) fn assert_comma_list(node: NodeId, len: usize) {
    assert!(
        len > 1,
        "desugar: comma list {node:?} must hold at least two expressions, found {len}"
    );
}

#[cold]
pub(super) fn invalid_attribute_wrapper(kind: &str, wrapper: NodeId) -> ! {
    panic!("desugar: attribute wrapper {wrapper:?} must be an attribute-holder clause, found {kind}")
}

/// The `index`-th child of `node`, which the node's kind requires.
#[inline]
pub(super) fn required_child(tree: &SyntaxTree, node: NodeId, index: usize) -> NodeId {
    tree.child(node, index).unwrap_or_else(|| {
        panic!(
            "desugar: {} {node:?} needs a child at index {index}, it has {}",
            tree.kind(node).name(),
            tree.child_count(node)
        )
    })
}

#[cold]
pub(super) fn missing_call_expression(node: NodeId) -> ! {
    panic!("desugar: PrePostCall {node:?} has no expression child")
}

#[cold]
pub(super) fn invalid_call_role(role: Role, node: NodeId) -> ! {
    panic!("desugar: {role:?} is not valid at {node:?} in a PrePostCall")
}

#[cold]
pub(super) fn invalid_if_role(role: Role, node: NodeId) -> ! {
    panic!("desugar: {role:?} is not valid at {node:?} in a FlowIf")
}

#[inline]
pub(super) fn expect_interpolant_clause(tree: &SyntaxTree, interpolant: NodeId) -> NodeId {
    match tree.child(interpolant, 0) {
        Some(clause) if matches!(tree.kind(clause), SyntaxKind::Clause { .. }) => clause,
        _ => panic!("desugar: interpolant {interpolant:?} must wrap a Clause"),
    }
}

#[inline]
pub(super) fn assert_package_mapped(package: Option<NodeId>) -> NodeId {
    package.unwrap_or_else(|| panic!("desugar: package AST node lost its syntax mapping"))
}
