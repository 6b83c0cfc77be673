//! Core search node, node references, and the frontier ordering key.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Index of a node in its [`crate::tree::SearchTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// Ties a state to its provenance: the parent it was expanded from, the
/// action that produced it, its path cost `g` and evaluation cost `f`.
/// `depth` is always derived from the parent and cannot be supplied.
///
/// # Identity
///
/// Equality and hashing look at the state only, so two nodes that reach the
/// same state along different paths are the same key in a set. Ordering by
/// cost is explicit ([`SearchNode::cmp_by_f`]) rather than an `Ord` impl,
/// since an `f`-based `Ord` would disagree with state-based `Eq`.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    g_cost: u64,
    f_cost: u64,
    depth: u32,
}

impl<S, A> SearchNode<S, A> {
    /// The root node: no parent, no action, `g = f = 0`, depth 0.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g_cost: 0,
            f_cost: 0,
            depth: 0,
        }
    }

    /// A node reached from `parent` by applying `action`.
    #[must_use]
    pub fn child(parent: NodeRef<'_, S, A>, state: S, action: A, g_cost: u64, f_cost: u64) -> Self {
        Self {
            state,
            parent: Some(parent.id),
            action: Some(action),
            g_cost,
            f_cost,
            depth: parent.node.depth + 1,
        }
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Arena id of the parent (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Cumulative path cost.
    #[must_use]
    pub fn g_cost(&self) -> u64 {
        self.g_cost
    }

    /// Evaluation cost (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.f_cost
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Strict greater-than on `f`.
    #[must_use]
    pub fn is_costlier_than(&self, other: &Self) -> bool {
        self.f_cost > other.f_cost
    }

    /// Total order on `f` alone.
    #[must_use]
    pub fn cmp_by_f(&self, other: &Self) -> Ordering {
        self.f_cost.cmp(&other.f_cost)
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: Hash, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// A node together with its arena id.
///
/// Handed to problem expansion so children can record their parent link.
#[derive(Debug)]
pub struct NodeRef<'a, S, A> {
    pub id: NodeId,
    pub node: &'a SearchNode<S, A>,
}

impl<S, A> Clone for NodeRef<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for NodeRef<'_, S, A> {}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first, then older `creation_order`. The counter keeps the
/// order total without ever comparing node internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
