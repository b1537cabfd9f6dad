//! Arena holding every node created during a solve.

use std::ops::Index;

use super::node::{BranchDecision, NodeId, SearchNode};
use crate::model::VariableBound;

/// Branch-and-bound tree stored as an arena.
///
/// Nodes are addressed by [`NodeId`], which is also their creation order.
/// The tree keeps every node, fathomed or branched, so it can be traversed
/// read-only after a solve (e.g. for visualization).
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Creates the root. The tree must be empty.
    pub(crate) fn add_root(&mut self) -> NodeId {
        debug_assert!(self.nodes.is_empty());
        let id = self.nodes.len();
        self.nodes.push(SearchNode::root(id));
        id
    }

    /// Creates a child of `parent` carrying one more bound.
    ///
    /// Does not link the child from the parent; see [`set_children`](Self::set_children).
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        bound: VariableBound,
        decision: BranchDecision,
    ) -> NodeId {
        let id = self.nodes.len();
        let child = self.nodes[parent].child(id, bound, decision);
        self.nodes.push(child);
        id
    }

    pub(crate) fn set_children(&mut self, parent: NodeId, left: NodeId, right: NodeId) {
        self.nodes[parent].set_children(left, right);
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> Option<&SearchNode> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Both children of a node, if it branched.
    pub fn children(&self, id: NodeId) -> Option<(&SearchNode, &SearchNode)> {
        let (left, right) = self.nodes.get(id)?.children?;
        Some((&self.nodes[left], &self.nodes[right]))
    }

    /// Node ids from `id` up to the root, inclusive.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.nodes.get(id).map(|n| n.id());
        while let Some(cur) = current {
            path.push(cur);
            current = self.nodes[cur].parent();
        }
        path
    }

    /// Nodes without children.
    pub fn leaves(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Largest depth of any node.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(SearchNode::depth).max().unwrap_or(0)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }
}
