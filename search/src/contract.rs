//! Search problem contract trait.

use std::fmt::Debug;
use std::hash::Hash;

use qanit_kernel::proof::hash::ContentHash;

use crate::node::{NodeRef, SearchNode};

/// Trait for problems that support best-first search.
///
/// # Contract
///
/// - Enumeration and expansion must be deterministic: same state → same
///   actions and children in the same order.
/// - `state_fingerprint` must be a canonical key: equal states give equal
///   fingerprints, and the engine treats equal fingerprints as the same
///   explored state.
/// - The reachable state space must be finite (expansion must prune), since
///   the engine only bounds work by its solution cutoff and depth bound.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;
    /// Ranking key among goal nodes; lower is better.
    type Rank: Ord;

    fn initial_state(&self) -> &Self::State;

    /// Test whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All actions applicable in `state`, in a deterministic order.
    fn get_valid_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Children of `parent`, with `f` composed per the two switches.
    fn expand_node(
        &self,
        parent: NodeRef<'_, Self::State, Self::Action>,
        use_cost: bool,
        use_heuristic: bool,
    ) -> Vec<SearchNode<Self::State, Self::Action>>;

    /// Estimated remaining cost from `state`.
    fn heuristic(&self, state: &Self::State) -> u64;

    /// `(g if use_cost) + (h(state) if use_heuristic)`.
    fn get_total_cost(
        &self,
        g_cost: u64,
        state: &Self::State,
        use_heuristic: bool,
        use_cost: bool,
    ) -> u64 {
        let g = if use_cost { g_cost } else { 0 };
        let h = if use_heuristic {
            self.heuristic(state)
        } else {
            0
        };
        g.saturating_add(h)
    }

    /// Canonical key for explored-set membership.
    fn state_fingerprint(&self, state: &Self::State) -> ContentHash;

    fn solution_rank(&self, state: &Self::State) -> Self::Rank;

    /// Human-readable label for an action.
    fn action_label(&self, action: &Self::Action) -> String;
}
