//! Attribute and specifier wrappers stored in a node's aux slot.
//!
//! The aux slot holds a synthetic clause. Each of its children is a wrapper:
//! a one-child clause whose form says whether it is a prepended attribute
//! (`<attr>` before the name) or an appended specifier.

use super::invariants::{assert_attachable, ensure_attribute_expr};
use super::{ClauseForm, NodeId, SyntaxKind, SyntaxTree};

impl SyntaxTree {
    fn ensure_aux(&mut self, node: NodeId) -> NodeId {
        if let Some(aux) = self.aux(node) {
            return aux;
        }
        let aux = self.add(SyntaxKind::clause(ClauseForm::Synthetic));
        self.node_mut(aux).parent = Some(node);
        self.node_mut(node).aux = Some(aux);
        aux
    }

    /// Put an attribute wrapper in front of the existing ones.
    pub fn prepend_aux(&mut self, node: NodeId, wrapper: NodeId) {
        let aux = self.ensure_aux(node);
        self.insert_child_at(aux, 0, wrapper);
    }

    /// Put an attribute wrapper after the existing ones.
    pub fn append_aux(&mut self, node: NodeId, wrapper: NodeId) {
        let aux = self.ensure_aux(node);
        self.append_child(aux, wrapper);
    }

    /// Replace the whole aux container, returning the previous one detached.
    pub fn set_aux(&mut self, node: NodeId, aux: Option<NodeId>) -> Option<NodeId> {
        if let Some(new) = aux {
            assert_attachable(self, node, new);
            self.node_mut(new).parent = Some(node);
        }
        let old = std::mem::replace(&mut self.node_mut(node).aux, aux);
        if let Some(old) = old {
            self.node_mut(old).parent = None;
        }
        old
    }

    /// Wrap `expr` as a prepended attribute of `node`. Returns the wrapper.
    pub fn add_attribute(&mut self, node: NodeId, expr: NodeId) -> NodeId {
        let wrapper = self.wrap_attribute(expr, ClauseForm::PrependAttributeHolder);
        self.append_aux(node, wrapper);
        wrapper
    }

    /// Wrap `expr` as an appended specifier of `node`. Returns the wrapper.
    pub fn add_specifier(&mut self, node: NodeId, expr: NodeId) -> NodeId {
        let wrapper = self.wrap_attribute(expr, ClauseForm::AppendAttributeHolder);
        self.append_aux(node, wrapper);
        wrapper
    }

    fn wrap_attribute(&mut self, expr: NodeId, form: ClauseForm) -> NodeId {
        let wrapper = self.add(SyntaxKind::clause(form));
        self.append_child(wrapper, expr);
        wrapper
    }

    pub fn has_attributes(&self, node: NodeId) -> bool {
        self.aux(node).is_some_and(|aux| self.child_count(aux) > 0)
    }

    /// Wrapper clauses in source order.
    pub fn attribute_wrappers(&self, node: NodeId) -> &[NodeId] {
        match self.aux(node) {
            Some(aux) => self.children(aux),
            None => &[],
        }
    }

    /// The expression inside a wrapper.
    pub fn attribute_expr(&self, wrapper: NodeId) -> NodeId {
        ensure_attribute_expr(self, wrapper)
    }

    /// Name of the attribute in `wrapper`, for plain `<name>` and called `<name(...)>` forms.
    pub fn attribute_identifier(&self, wrapper: NodeId) -> Option<&str> {
        let expr = self.attribute_expr(wrapper);
        let named = match self.kind(expr) {
            SyntaxKind::PrePostCall => self.child(expr, 0)?,
            _ => expr,
        };
        match self.kind(named) {
            SyntaxKind::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Whether `node` carries `name` or `name(...)` as an attribute.
    pub fn is_attribute_present(&self, node: NodeId, name: &str) -> bool {
        self.attribute_wrappers(node).iter().any(|&wrapper| {
            let Some(&expr) = self.children(wrapper).first() else {
                return false;
            };
            self.names_identifier(expr, name)
                || (matches!(self.kind(expr), SyntaxKind::PrePostCall)
                    && self
                        .child(expr, 0)
                        .is_some_and(|first| self.names_identifier(first, name)))
        })
    }

    /// First wrapper whose expression satisfies `pred`.
    pub fn first_attribute_of_kind(
        &self,
        node: NodeId,
        pred: impl Fn(&SyntaxKind) -> bool,
    ) -> Option<NodeId> {
        self.attribute_wrappers(node).iter().copied().find(|&wrapper| {
            self.children(wrapper)
                .first()
                .is_some_and(|&expr| pred(self.kind(expr)))
        })
    }

    fn names_identifier(&self, node: NodeId, name: &str) -> bool {
        matches!(self.kind(node), SyntaxKind::Identifier { name: n } if n == name)
    }
}
