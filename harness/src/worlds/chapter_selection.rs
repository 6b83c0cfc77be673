//! `ChapterSelection`: pick chapters whose verse total lands in a target band.
//!
//! Implements `SearchProblem` over [`SelectionState`]. Each action appends
//! one unselected chapter. The path cost `g` is the verse total; the
//! heuristic is the distance to the goal, with overshoot charged double.
//!
//! Goal band: `[goal, goal + tolerance]` inclusive.
//! Pruning bound: children above `goal + prune_multiplier * tolerance` are
//! never emitted, which keeps the reachable state space finite.

use qanit_kernel::carrier::catalog::{Catalog, ItemId};
use qanit_kernel::carrier::selection::SelectionState;
use qanit_kernel::proof::hash::ContentHash;

use qanit_search::contract::SearchProblem;
use qanit_search::node::{NodeRef, SearchNode};

/// Width of the goal band above the target.
pub const DEFAULT_TOLERANCE: u64 = 5;

/// Multiple of the tolerance a child may overshoot the target before it is pruned.
pub const DEFAULT_PRUNE_MULTIPLIER: u64 = 2;

/// Weight applied to overshoot in the heuristic.
///
/// This makes the heuristic inadmissible past the target; it steers the
/// search toward the band rather than guaranteeing an optimal `g`.
const OVERSHOOT_WEIGHT: u64 = 2;

/// Search-capable chapter selection world.
#[derive(Debug, Clone)]
pub struct ChapterSelection<'c> {
    initial_state: SelectionState,
    goal_quantity: u64,
    catalog: &'c Catalog,
    tolerance: u64,
    prune_multiplier: u64,
}

impl<'c> ChapterSelection<'c> {
    /// A world starting from the empty selection with default tolerance
    /// and pruning.
    #[must_use]
    pub fn new(catalog: &'c Catalog, goal_quantity: u64) -> Self {
        Self {
            initial_state: SelectionState::empty(),
            goal_quantity,
            catalog,
            tolerance: DEFAULT_TOLERANCE,
            prune_multiplier: DEFAULT_PRUNE_MULTIPLIER,
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: u64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_prune_multiplier(mut self, prune_multiplier: u64) -> Self {
        self.prune_multiplier = prune_multiplier;
        self
    }

    /// Start from a non-empty selection.
    #[must_use]
    pub fn with_initial_state(mut self, state: SelectionState) -> Self {
        self.initial_state = state;
        self
    }

    #[must_use]
    pub fn goal_quantity(&self) -> u64 {
        self.goal_quantity
    }

    #[must_use]
    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Inclusive upper edge of the goal band.
    #[must_use]
    pub fn band_upper(&self) -> u64 {
        self.goal_quantity.saturating_add(self.tolerance)
    }

    /// Largest quantity a child may carry without being pruned.
    #[must_use]
    pub fn prune_bound(&self) -> u64 {
        self.goal_quantity
            .saturating_add(self.prune_multiplier.saturating_mul(self.tolerance))
    }
}

impl SearchProblem for ChapterSelection<'_> {
    type State = SelectionState;
    type Action = ItemId;
    /// `(distance from goal, side cost)`.
    type Rank = (u64, u64);

    fn initial_state(&self) -> &SelectionState {
        &self.initial_state
    }

    fn is_goal(&self, state: &SelectionState) -> bool {
        (self.goal_quantity..=self.band_upper()).contains(&state.quantity())
    }

    fn get_valid_actions(&self, state: &SelectionState) -> Vec<ItemId> {
        self.catalog
            .item_ids()
            .filter(|id| !state.contains(*id))
            .collect()
    }

    fn expand_node(
        &self,
        parent: NodeRef<'_, SelectionState, ItemId>,
        use_cost: bool,
        use_heuristic: bool,
    ) -> Vec<SearchNode<SelectionState, ItemId>> {
        let state = parent.node.state();
        let bound = self.prune_bound();

        self.get_valid_actions(state)
            .into_iter()
            .filter_map(|item_id| {
                let entry = self.catalog.get(item_id)?;
                if state.quantity().saturating_add(entry.quantity) > bound {
                    return None;
                }
                let next = state.with_item(item_id, entry);
                let g_cost = parent.node.g_cost().saturating_add(entry.quantity);
                let f_cost = self.get_total_cost(g_cost, &next, use_heuristic, use_cost);
                Some(SearchNode::child(parent, next, item_id, g_cost, f_cost))
            })
            .collect()
    }

    fn heuristic(&self, state: &SelectionState) -> u64 {
        let quantity = state.quantity();
        if quantity > self.goal_quantity {
            (quantity - self.goal_quantity).saturating_mul(OVERSHOOT_WEIGHT)
        } else {
            self.goal_quantity - quantity
        }
    }

    fn state_fingerprint(&self, state: &SelectionState) -> ContentHash {
        state.fingerprint()
    }

    fn solution_rank(&self, state: &SelectionState) -> (u64, u64) {
        (
            state.quantity().abs_diff(self.goal_quantity),
            state.side_cost(),
        )
    }

    fn action_label(&self, action: &ItemId) -> String {
        self.catalog
            .label(*action)
            .map_or_else(|| action.to_string(), str::to_string)
    }
}
