//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{NodeId, SyntaxTree};

#[inline]
pub(super) fn assert_attachable(tree: &SyntaxTree, parent: NodeId, child: NodeId) {
    assert!(
        parent != child,
        "syntax: cannot attach {child:?} to itself"
    );
    if let Some(current) = tree.parent(child) {
        panic!(
            "syntax: {} {child:?} already belongs to {} {current:?} (detach it first)",
            tree.kind(child).name(),
            tree.kind(current).name(),
        );
    }
    assert!(
        !tree.contains(child, parent),
        "syntax: attaching {child:?} under {parent:?} would create a cycle"
    );
}

#[inline]
pub(super) fn assert_child_index(tree: &SyntaxTree, parent: NodeId, index: usize, inserting: bool) {
    let len = tree.child_count(parent);
    let limit = if inserting { len + 1 } else { len };
    assert!(
        index < limit,
        "syntax: child index {index} out of range for {} {parent:?} with {len} children",
        tree.kind(parent).name(),
    );
}

#[inline]
pub(super) fn ensure_child_position(tree: &SyntaxTree, parent: NodeId, node: NodeId) -> usize {
    tree.children(parent)
        .iter()
        .position(|&c| c == node)
        .unwrap_or_else(|| {
            panic!(
                "syntax: {node:?} points at parent {parent:?} but is not among its children \
                 (aux entries and comments cannot be replaced)"
            )
        })
}

#[inline]
pub(super) fn assert_comment(tree: &SyntaxTree, node: NodeId) {
    assert!(
        tree.kind(node).is_comment(),
        "syntax: expected a Comment node, found {}",
        tree.kind(node).name()
    );
}

#[inline]
pub(super) fn ensure_attribute_expr(tree: &SyntaxTree, wrapper: NodeId) -> NodeId {
    let is_holder = tree
        .kind(wrapper)
        .clause_form()
        .is_some_and(|form| form.is_attribute_holder());
    assert!(
        is_holder && tree.child_count(wrapper) == 1,
        "syntax: attribute wrapper {wrapper:?} must be an attribute-holder clause with exactly one child"
    );
    tree.children(wrapper)[0]
}
