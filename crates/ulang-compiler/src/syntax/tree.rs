//! Structural edits and structural queries.
//!
//! Every edit keeps the parent links consistent with the child lists.

use super::invariants::{
    assert_attachable, assert_child_index, assert_comment, ensure_child_position,
};
use super::{NodeId, PackageInfo, Role, SyntaxKind, SyntaxTree};

impl SyntaxTree {
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert_attachable(self, parent, child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    pub fn append_children(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) {
        for child in children {
            self.append_child(parent, child);
        }
    }

    /// Insert the given nodes in order before the current first child.
    pub fn prepend_children(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) {
        for (i, child) in children.into_iter().enumerate() {
            self.insert_child_at(parent, i, child);
        }
    }

    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        assert_attachable(self, parent, child);
        assert_child_index(self, parent, index, true);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(index, child);
    }

    /// Replace the child at `index`, returning the detached previous child.
    pub fn set_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) -> NodeId {
        self.take_child_at(parent, index, Some(child))
    }

    /// Detach the child at `index`, optionally putting `replacement` in its slot.
    pub fn take_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        replacement: Option<NodeId>,
    ) -> NodeId {
        assert_child_index(self, parent, index, false);
        let old = match replacement {
            Some(new) => {
                assert_attachable(self, parent, new);
                self.node_mut(new).parent = Some(parent);
                std::mem::replace(&mut self.node_mut(parent).children[index], new)
            }
            None => self.node_mut(parent).children.remove(index),
        };
        self.node_mut(old).parent = None;
        old
    }

    /// Detach and return all children.
    pub fn take_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.node_mut(parent).children);
        for &child in &children {
            self.node_mut(child).parent = None;
        }
        children
    }

    /// Move every child of `from` to the end of `to`'s child list.
    pub fn transfer_children(&mut self, from: NodeId, to: NodeId) {
        let children = self.take_children(from);
        self.append_children(to, children);
    }

    /// Detach `node` from whatever holds it: a child list, an aux slot or a comment list.
    ///
    /// Returns `false` when the node was already detached.
    pub fn remove_from_parent(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.parent(node) else {
            return false;
        };
        let holder = self.node_mut(parent);
        if let Some(index) = holder.children.iter().position(|&c| c == node) {
            holder.children.remove(index);
        } else if holder.aux == Some(node) {
            holder.aux = None;
        } else {
            holder.pre_comments.retain(|&c| c != node);
            holder.post_comments.retain(|&c| c != node);
        }
        self.node_mut(node).parent = None;
        true
    }

    /// Put `replacement` where `node` is in its parent's child list.
    ///
    /// Under an operator node the operand/operator role moves to the
    /// replacement so the positional meaning survives. Returns `false` when
    /// `node` has no parent.
    pub fn replace_self_with(&mut self, node: NodeId, replacement: NodeId) -> bool {
        let Some(parent) = self.parent(node) else {
            return false;
        };
        let index = ensure_child_position(self, parent, node);
        if self.kind(parent).is_operator_node() {
            let role = self.role(node);
            if matches!(role, Role::BinaryOp(_)) {
                self.set_role(replacement, role);
            }
        }
        self.take_child_at(parent, index, Some(replacement));
        true
    }

    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let index = self.index_in_parent(node)?;
        let parent = self.parent(node)?;
        index.checked_sub(1).map(|i| self.children(parent)[i])
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let index = self.index_in_parent(node)?;
        let parent = self.parent(node)?;
        self.child(parent, index + 1)
    }

    /// Ancestors of `node`, nearest first, excluding `node` itself.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        std::iter::successors(self.parent(node), |&n| self.parent(n))
    }

    pub fn root(&self, node: NodeId) -> NodeId {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Whether `node` is `ancestor` or lies below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Path of the source file `node` came from.
    ///
    /// Taken from the nearest snippet, or else the nearest module or package file.
    pub fn snippet_path(&self, node: NodeId) -> Option<&str> {
        let mut fallback = None;
        for id in std::iter::once(node).chain(self.ancestors(node)) {
            match self.kind(id) {
                SyntaxKind::Snippet { path, .. } => return Some(path),
                SyntaxKind::Module { file_path, .. } if fallback.is_none() => {
                    fallback = Some(file_path.as_str())
                }
                SyntaxKind::Package(info) if fallback.is_none() => {
                    fallback = Some(info.file_path.as_str())
                }
                _ => {}
            }
        }
        fallback.filter(|p| !p.is_empty())
    }

    /// Find the snippet with `path` among the projects, packages and modules under `root`.
    pub fn find_snippet_by_path(&self, root: NodeId, path: &str) -> Option<NodeId> {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                SyntaxKind::Snippet { path: p, .. } if p == path => return Some(id),
                SyntaxKind::Project { .. }
                | SyntaxKind::Package(_)
                | SyntaxKind::Module { .. } => {
                    stack.extend(self.children(id).iter().rev());
                }
                _ => {}
            }
        }
        None
    }

    /// Package metadata of a `Package` node.
    pub fn package_info(&self, package: NodeId) -> Option<&PackageInfo> {
        match self.kind(package) {
            SyntaxKind::Package(info) => Some(info),
            _ => None,
        }
    }

    /// Direct module child of a package or module with the given name.
    pub fn find_module(&self, container: NodeId, name: &str) -> Option<NodeId> {
        self.children(container)
            .iter()
            .copied()
            .find(|&c| matches!(self.kind(c), SyntaxKind::Module { name: n, .. } if n == name))
    }

    pub fn find_or_add_module(&mut self, container: NodeId, name: &str, file_path: &str) -> NodeId {
        if let Some(module) = self.find_module(container, name) {
            return module;
        }
        let module = self.add(SyntaxKind::Module {
            name: name.to_owned(),
            file_path: file_path.to_owned(),
        });
        self.append_child(container, module);
        module
    }

    /// Detach the project's packages whose names are listed. Returns how many were removed.
    pub fn remove_packages_named(&mut self, project: NodeId, names: &[&str]) -> usize {
        let doomed: Vec<NodeId> = self
            .children(project)
            .iter()
            .copied()
            .filter(|&c| {
                self.package_info(c)
                    .is_some_and(|info| names.contains(&info.name.as_str()))
            })
            .collect();
        for &package in &doomed {
            self.remove_from_parent(package);
        }
        doomed.len()
    }

    pub fn pre_comments(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).pre_comments
    }

    pub fn post_comments(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).post_comments
    }

    pub fn append_pre_comment(&mut self, node: NodeId, comment: NodeId) {
        assert_comment(self, comment);
        assert_attachable(self, node, comment);
        self.node_mut(comment).parent = Some(node);
        self.node_mut(node).pre_comments.push(comment);
    }

    pub fn append_post_comment(&mut self, node: NodeId, comment: NodeId) {
        assert_comment(self, comment);
        assert_attachable(self, node, comment);
        self.node_mut(comment).parent = Some(node);
        self.node_mut(node).post_comments.push(comment);
    }

    /// Move the prefix comments of `from` in front of those already on `to`.
    pub fn transfer_prefix_comments(&mut self, from: NodeId, to: NodeId) {
        let mut moved = std::mem::take(&mut self.node_mut(from).pre_comments);
        for &comment in &moved {
            self.node_mut(comment).parent = Some(to);
        }
        let target = self.node_mut(to);
        moved.append(&mut target.pre_comments);
        target.pre_comments = moved;
    }

    /// Move the postfix comments of `from` after those already on `to`.
    pub fn transfer_postfix_comments(&mut self, from: NodeId, to: NodeId) {
        let moved = std::mem::take(&mut self.node_mut(from).post_comments);
        for &comment in &moved {
            self.node_mut(comment).parent = Some(to);
        }
        self.node_mut(to).post_comments.extend(moved);
    }

    /// Children that are not comments.
    pub fn non_comment_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&c| !self.kind(c).is_comment())
            .collect()
    }
}
