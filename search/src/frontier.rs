//! Best-first frontier: a min-heap of node ids keyed on `f`.
//!
//! The frontier holds ids only; nodes live in the [`crate::tree::SearchTree`]
//! arena. It does no duplicate detection of its own: the same state may be
//! enqueued more than once if it is reached along different paths before
//! it is first expanded.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

/// A frontier entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_creation_order: u64,
    high_water: usize,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node under `f_cost`, stamping it with the next creation order.
    pub fn push(&mut self, node_id: NodeId, f_cost: u64) {
        let key = FrontierKey {
            f_cost,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the lowest-`f` node, oldest first on ties.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total number of pushes so far.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_creation_order
    }
}
