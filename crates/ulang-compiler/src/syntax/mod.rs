//! Concrete syntax tree.
//!
//! The tree keeps everything the parser saw: comments, formatting hints and
//! attribute wrappers. Nodes live in an arena owned by [`SyntaxTree`] and are
//! addressed by [`NodeId`]. Ownership is expressed by the parent's child list;
//! the `parent` field is a plain back index.
//!
//! Invariant: `parent(children(n)[i]) == Some(n)` for every node `n`.
//! Attaching a node that already has a parent panics.

mod attributes;
mod build;
mod invariants;
mod kind;
mod position;
mod tree;

#[cfg(test)]
mod attributes_tests;
#[cfg(test)]
mod build_tests;

use ulang_core::TextRange;

use crate::ast::AstId;

pub use kind::{
    AssignmentOp, CallRole, CharFormat, ClauseForm, ClausePunctuation, CommentStyle, CompareOp,
    ControlKeyword, FloatFormat, IfClause, Keyword, MutationKeyword, OperandRole, PackageInfo,
    PackageRole, Role, SyntaxKind, VerseScope,
};

/// Stable handle of a node in a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    aux: Option<NodeId>,
    pre_comments: Vec<NodeId>,
    post_comments: Vec<NodeId>,
    range: TextRange,
    role: Role,
    newlines_before: u32,
    newlines_after: u32,
    mapped_ast: Option<AstId>,
}

impl SyntaxNode {
    fn new(kind: SyntaxKind, range: TextRange) -> Self {
        Self {
            kind,
            children: Vec::new(),
            parent: None,
            aux: None,
            pre_comments: Vec::new(),
            post_comments: Vec::new(),
            range,
            role: Role::None,
            newlines_before: 0,
            newlines_after: 0,
            mapped_ast: None,
        }
    }

    pub fn kind(&self) -> &SyntaxKind {
        &self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn aux(&self) -> Option<NodeId> {
        self.aux
    }

    pub fn pre_comments(&self) -> &[NodeId] {
        &self.pre_comments
    }

    pub fn post_comments(&self) -> &[NodeId] {
        &self.post_comments
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn newlines_before(&self) -> u32 {
        self.newlines_before
    }

    pub fn newlines_after(&self) -> u32 {
        self.newlines_after
    }

    pub fn mapped_ast(&self) -> Option<AstId> {
        self.mapped_ast
    }
}

/// Arena holding every node of one or more syntax trees.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached node without a source range.
    pub fn add(&mut self, kind: SyntaxKind) -> NodeId {
        self.add_with_range(kind, TextRange::INVALID)
    }

    pub fn add_with_range(&mut self, kind: SyntaxKind, range: TextRange) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode::new(kind, range));
        id
    }

    /// All node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &SyntaxKind {
        &self.node(id).kind
    }

    /// Mutable access to the payload. The variant itself is expected to stay the same.
    pub fn kind_mut(&mut self, id: NodeId) -> &mut SyntaxKind {
        &mut self.node_mut(id).kind
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn range(&self, id: NodeId) -> TextRange {
        self.node(id).range
    }

    pub fn set_range(&mut self, id: NodeId, range: TextRange) {
        self.node_mut(id).range = range;
    }

    pub fn role(&self, id: NodeId) -> Role {
        self.node(id).role
    }

    pub fn set_role(&mut self, id: NodeId, role: Role) {
        self.node_mut(id).role = role;
    }

    pub fn set_newlines(&mut self, id: NodeId, before: u32, after: u32) {
        let node = self.node_mut(id);
        node.newlines_before = before;
        node.newlines_after = after;
    }

    pub fn aux(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).aux
    }

    pub fn mapped_ast(&self, id: NodeId) -> Option<AstId> {
        self.node(id).mapped_ast
    }

    pub(crate) fn set_mapped_ast(&mut self, id: NodeId, ast: Option<AstId>) {
        self.node_mut(id).mapped_ast = ast;
    }

    /// Source text of atom-like nodes (identifiers, operators, literals, comments).
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.kind(id).text()
    }
}
