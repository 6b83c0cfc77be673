//! Node arena: every node created during a search, addressed by [`NodeId`].
//!
//! Parents are referenced by index, so a node's ancestry is an O(depth)
//! walk through the arena and no node owns another.

use std::ops::Index;

use crate::node::{NodeId, NodeRef, SearchNode};

#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> SearchTree<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node and return its id.
    pub fn insert(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id.index())
    }

    /// A [`NodeRef`] for an id, if it exists.
    #[must_use]
    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_, S, A>> {
        self.get(id).map(|node| NodeRef { id, node })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node with its id, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_, S, A>> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeRef {
                id: NodeId::new(index),
                node,
            })
    }
}

impl<S, A: Clone> SearchTree<S, A> {
    /// Actions along the path from the root to `id`, in root-to-node order.
    ///
    /// The root contributes nothing, so a node at depth `d` yields `d` actions.
    #[must_use]
    pub fn solution_path(&self, id: NodeId) -> Vec<A> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            if let Some(action) = node.action() {
                path.push(action.clone());
            }
            current = node.parent().and_then(|p| self.get(p));
        }
        path.reverse();
        path
    }
}

impl<S, A> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for SearchTree<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
