//! Position queries used by editor tooling.

use ulang_core::TextPosition;

use super::{NodeId, SyntaxTree};

impl SyntaxTree {
    /// Innermost node under `node` whose range contains `position`.
    ///
    /// Children are searched before the node itself, so the deepest match wins.
    pub fn find_child_by_position(&self, node: NodeId, position: TextPosition) -> Option<NodeId> {
        for &child in self.children(node) {
            if let Some(found) = self.find_child_by_position(child, position) {
                return Some(found);
            }
        }
        self.range(node).contains(position).then_some(node)
    }

    /// Node under `node` whose range is closest to `position`.
    ///
    /// Distance is measured with [`TextRange::signed_distance`]; ties keep the
    /// node visited first in a pre-order walk. Nodes without a usable range are
    /// skipped.
    ///
    /// [`TextRange::signed_distance`]: ulang_core::TextRange::signed_distance
    pub fn find_closest_child(
        &self,
        node: NodeId,
        position: TextPosition,
        source: &str,
    ) -> Option<NodeId> {
        let mut best: Option<(u32, NodeId)> = None;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(distance) = self.range(id).signed_distance(position, source) {
                let distance = distance.unsigned_abs();
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, id));
                }
            }
            stack.extend(self.children(id).iter().rev());
        }
        best.map(|(_, id)| id)
    }
}
