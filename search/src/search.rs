//! Search entry point and expansion loop.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeId, SearchNode};
use crate::policy::{FrontierOrdering, SearchPolicy};
use crate::tree::SearchTree;

/// Why the expansion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Frontier emptied before the cutoff was reached.
    FrontierExhausted,
    /// `solution_cutoff` goal nodes were collected.
    SolutionCutoffReached,
    /// `max_expansions` nodes were expanded before the cutoff was reached.
    ExpansionBudgetExhausted,
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontierExhausted => "frontier_exhausted",
            Self::SolutionCutoffReached => "solution_cutoff_reached",
            Self::ExpansionBudgetExhausted => "expansion_budget_exhausted",
        }
    }
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub pops: u64,
    /// Nodes handed to `expand_node`.
    pub expansions: u64,
    /// Nodes pushed onto the frontier (root included).
    pub nodes_enqueued: u64,
    /// Children dropped because their state was already explored.
    pub duplicates_suppressed: u64,
    /// Nodes popped past `max_depth` and discarded.
    pub depth_limited: u64,
    pub solutions_found: u64,
    pub frontier_high_water: u64,
    pub termination: TerminationReason,
}

/// Everything a finished exploration produced, before a winner is chosen.
#[derive(Debug, Clone)]
pub struct SearchRun<S, A> {
    /// Arena of every enqueued node.
    pub tree: SearchTree<S, A>,
    /// Goal nodes in the order they were popped.
    pub solutions: Vec<NodeId>,
    pub stats: SearchStats,
}

/// The selected solution with its reconstructed path.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    pub tree: SearchTree<S, A>,
    /// The best-ranked goal node.
    pub solution_id: NodeId,
    /// Every goal node collected, in pop order.
    pub candidates: Vec<NodeId>,
    /// Actions from root to the solution.
    pub path: Vec<A>,
    /// Labels for `path`, same order.
    pub labels: Vec<String>,
    pub stats: SearchStats,
}

impl<S, A> SearchOutcome<S, A> {
    /// The selected goal node.
    #[must_use]
    pub fn solution(&self) -> &SearchNode<S, A> {
        &self.tree[self.solution_id]
    }
}

/// Best-first search engine over a [`SearchProblem`].
///
/// The strategy is resolved into a [`FrontierOrdering`] when the engine is
/// built, so an unsupported policy fails before any node exists.
pub struct SearchEngine<'p, P: SearchProblem> {
    problem: &'p P,
    policy: SearchPolicy,
    ordering: FrontierOrdering,
}

impl<'p, P: SearchProblem> SearchEngine<'p, P> {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(problem: &'p P, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        let ordering = policy.strategy.ordering();
        Ok(Self {
            problem,
            policy,
            ordering,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Explore and select the best solution.
    ///
    /// Returns `None` when the frontier empties without reaching a goal.
    #[must_use]
    pub fn run(&self) -> Option<SearchOutcome<P::State, P::Action>> {
        select_best(self.problem, self.explore())
    }

    /// Run the expansion loop and collect goal nodes up to the cutoff.
    ///
    /// With `max_expansions` set, the loop also stops once that many nodes
    /// have been expanded; goals collected so far are kept.
    ///
    /// Goal nodes are recorded and never expanded. The explored set is
    /// consulted for children only, never at pop time, so a state can sit
    /// in the frontier more than once until its first copy is expanded.
    #[must_use]
    pub fn explore(&self) -> SearchRun<P::State, P::Action> {
        let FrontierOrdering {
            use_cost,
            use_heuristic,
        } = self.ordering;

        let mut tree = SearchTree::new();
        let mut frontier = BestFirstFrontier::new();
        let mut explored = BTreeSet::new();
        let mut solutions: Vec<NodeId> = Vec::new();
        let mut pops = 0u64;
        let mut expansions = 0u64;
        let mut duplicates_suppressed = 0u64;
        let mut depth_limited = 0u64;
        let mut termination = TerminationReason::FrontierExhausted;

        let root = SearchNode::root(self.problem.initial_state().clone());
        let root_f = root.f_cost();
        let root_id = tree.insert(root);
        frontier.push(root_id, root_f);

        loop {
            if solutions.len() >= self.policy.solution_cutoff {
                termination = TerminationReason::SolutionCutoffReached;
                break;
            }
            if self.policy.max_expansions.is_some_and(|max| expansions >= max) {
                termination = TerminationReason::ExpansionBudgetExhausted;
                break;
            }
            let Some(node_id) = frontier.pop() else {
                break;
            };
            pops += 1;

            let node = &tree[node_id];
            debug!(
                action = ?node.action(),
                depth = node.depth(),
                f_cost = node.f_cost(),
                "frontier pop"
            );

            if self.problem.is_goal(node.state()) {
                info!(
                    state = ?node.state(),
                    depth = node.depth(),
                    g_cost = node.g_cost(),
                    "goal reached"
                );
                solutions.push(node_id);
                continue;
            }

            if self.policy.max_depth.is_some_and(|max| node.depth() > max) {
                depth_limited += 1;
                continue;
            }

            explored.insert(self.problem.state_fingerprint(node.state()));

            let Some(parent) = tree.node_ref(node_id) else {
                break;
            };
            let children = self.problem.expand_node(parent, use_cost, use_heuristic);
            expansions += 1;

            for child in children {
                if explored.contains(&self.problem.state_fingerprint(child.state())) {
                    duplicates_suppressed += 1;
                    continue;
                }
                let f_cost = child.f_cost();
                let child_id = tree.insert(child);
                frontier.push(child_id, f_cost);
            }
        }

        let stats = SearchStats {
            pops,
            expansions,
            nodes_enqueued: frontier.pushed(),
            duplicates_suppressed,
            depth_limited,
            solutions_found: solutions.len() as u64,
            frontier_high_water: frontier.high_water() as u64,
            termination,
        };
        debug!(?stats, "search loop finished");

        SearchRun {
            tree,
            solutions,
            stats,
        }
    }
}

/// Pick the lowest-ranked goal node and reconstruct its path and labels.
///
/// Ties on rank keep the earliest-found solution. Returns `None` when the
/// run collected no solutions.
#[must_use]
pub fn select_best<P: SearchProblem>(
    problem: &P,
    run: SearchRun<P::State, P::Action>,
) -> Option<SearchOutcome<P::State, P::Action>> {
    let SearchRun {
        tree,
        solutions,
        stats,
    } = run;

    let solution_id = solutions
        .iter()
        .copied()
        .min_by_key(|id| problem.solution_rank(tree[*id].state()))?;

    let path = tree.solution_path(solution_id);
    let labels = path.iter().map(|a| problem.action_label(a)).collect();

    let solution = &tree[solution_id];
    info!(
        solutions = solutions.len(),
        state = ?solution.state(),
        g_cost = solution.g_cost(),
        f_cost = solution.f_cost(),
        "selected best solution"
    );

    Some(SearchOutcome {
        tree,
        solution_id,
        candidates: solutions,
        path,
        labels,
        stats,
    })
}

/// Run a search with the strategy given by name.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedStrategy`] for an unrecognized
/// `strategy`, before any node is created. A search that finds nothing
/// returns `Ok(None)`.
pub fn search<P: SearchProblem>(
    problem: &P,
    strategy: &str,
    max_depth: Option<u32>,
) -> Result<Option<SearchOutcome<P::State, P::Action>>, SearchError> {
    let policy = SearchPolicy::for_strategy(strategy, max_depth)?;
    let engine = SearchEngine::new(problem, policy)?;
    Ok(engine.run())
}
