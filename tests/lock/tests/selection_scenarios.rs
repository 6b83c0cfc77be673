//! End-to-end selection scenarios on small hand-built catalogs.
//!
//! Each scenario pins the exact outcome: which goal nodes were collected,
//! in which order, and which one was selected.

use std::cell::Cell;

use qanit_harness::config::RunConfig;
use qanit_harness::runner::{run_selection, RunError};
use qanit_harness::worlds::chapter_selection::ChapterSelection;
use qanit_kernel::carrier::catalog::{Catalog, CatalogRecord, ItemId};
use qanit_kernel::carrier::selection::SelectionState;
use qanit_kernel::proof::hash::ContentHash;
use qanit_search::contract::SearchProblem;
use qanit_search::error::SearchError;
use qanit_search::node::{NodeRef, SearchNode};
use qanit_search::policy::SearchPolicy;
use qanit_search::search::{search, SearchEngine, TerminationReason};

fn catalog(rows: &[(ItemId, &str, u64, u64)]) -> Catalog {
    Catalog::from_records(rows.iter().map(|&(item_id, label, quantity, side_cost)| {
        CatalogRecord {
            item_id,
            label: label.into(),
            quantity,
            side_cost,
        }
    }))
    .expect("valid catalog")
}

fn abc() -> Catalog {
    catalog(&[(1, "A", 10, 5), (2, "B", 15, 7), (3, "C", 3, 2)])
}

/// Delegates to `ChapterSelection`, counting expansions.
struct Counting<'c> {
    inner: ChapterSelection<'c>,
    expansions: Cell<u64>,
}

impl SearchProblem for Counting<'_> {
    type State = SelectionState;
    type Action = ItemId;
    type Rank = (u64, u64);

    fn initial_state(&self) -> &SelectionState {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &SelectionState) -> bool {
        self.inner.is_goal(state)
    }

    fn get_valid_actions(&self, state: &SelectionState) -> Vec<ItemId> {
        self.inner.get_valid_actions(state)
    }

    fn expand_node(
        &self,
        parent: NodeRef<'_, SelectionState, ItemId>,
        use_cost: bool,
        use_heuristic: bool,
    ) -> Vec<SearchNode<SelectionState, ItemId>> {
        self.expansions.set(self.expansions.get() + 1);
        self.inner.expand_node(parent, use_cost, use_heuristic)
    }

    fn heuristic(&self, state: &SelectionState) -> u64 {
        self.inner.heuristic(state)
    }

    fn state_fingerprint(&self, state: &SelectionState) -> ContentHash {
        self.inner.state_fingerprint(state)
    }

    fn solution_rank(&self, state: &SelectionState) -> (u64, u64) {
        self.inner.solution_rank(state)
    }

    fn action_label(&self, action: &ItemId) -> String {
        self.inner.action_label(action)
    }
}

#[test]
fn exact_hit_selected_over_earlier_and_overshooting_goals() {
    let catalog = abc();
    let world = ChapterSelection::new(&catalog, 13);
    let outcome = search(&world, "A*", None)
        .expect("A* is supported")
        .expect("goal band is reachable");

    let collected: Vec<Vec<ItemId>> = outcome
        .candidates
        .iter()
        .map(|id| outcome.tree[*id].state().selected().to_vec())
        .collect();
    assert_eq!(collected, vec![vec![1, 3], vec![3, 1], vec![2], vec![3, 2]]);

    assert_eq!(outcome.path, vec![1, 3]);
    assert_eq!(outcome.labels, vec!["A", "C"]);
    let solution = outcome.solution();
    assert_eq!(solution.g_cost(), 13);
    assert_eq!(solution.f_cost(), 13);
    assert_eq!(solution.depth(), 2);

    let stats = outcome.stats;
    assert_eq!(stats.pops, 7);
    assert_eq!(stats.expansions, 3);
    assert_eq!(stats.nodes_enqueued, 7);
    assert_eq!(stats.solutions_found, 4);
    assert_eq!(stats.frontier_high_water, 4);
    assert_eq!(stats.termination, TerminationReason::FrontierExhausted);
}

#[test]
fn zero_target_is_met_by_the_empty_selection() {
    let catalog = abc();
    let counting = Counting {
        inner: ChapterSelection::new(&catalog, 0).with_tolerance(0),
        expansions: Cell::new(0),
    };
    let outcome = search(&counting, "A*", None)
        .expect("A* is supported")
        .expect("root is a goal");
    assert!(outcome.labels.is_empty());
    assert_eq!(outcome.solution().depth(), 0);
    assert_eq!(counting.expansions.get(), 0);

    let config = RunConfig {
        tolerance: Some(0),
        ..RunConfig::default()
    };
    let report = run_selection(&catalog, 0, &config)
        .expect("run succeeds")
        .expect("root is a goal");
    assert!(report.labels.is_empty());
    assert_eq!(report.quantity, 0);
}

#[test]
fn no_selection_within_bound_returns_none() {
    let catalog = catalog(&[(1, "Long", 50, 900)]);
    let world = ChapterSelection::new(&catalog, 10);
    assert!(search(&world, "A*", None).expect("A* is supported").is_none());

    let report = run_selection(&catalog, 10, &RunConfig::default()).expect("run succeeds");
    assert!(report.is_none());
}

#[test]
fn unsupported_strategy_fails_before_expanding() {
    let catalog = abc();
    let counting = Counting {
        inner: ChapterSelection::new(&catalog, 13),
        expansions: Cell::new(0),
    };
    for name in ["BFS", "DFS", "a*", "astar", ""] {
        let err = search(&counting, name, None).expect_err("only A* is supported");
        assert_eq!(
            err,
            SearchError::UnsupportedStrategy {
                requested: name.to_string()
            }
        );
    }
    assert_eq!(counting.expansions.get(), 0);

    let config = RunConfig {
        strategy: Some("BFS".into()),
        ..RunConfig::default()
    };
    assert!(matches!(
        run_selection(&catalog, 13, &config),
        Err(RunError::Search(SearchError::UnsupportedStrategy { .. }))
    ));
}

#[test]
fn side_cost_decides_between_equally_close_selections() {
    let catalog = catalog(&[(1, "Heavy", 5, 100), (2, "Light", 5, 10)]);
    let world = ChapterSelection::new(&catalog, 5).with_tolerance(0);
    let outcome = search(&world, "A*", None)
        .expect("A* is supported")
        .expect("goal band is reachable");

    // Heavy is found first; Light wins on side cost.
    assert_eq!(outcome.candidates.len(), 2);
    assert_eq!(outcome.tree[outcome.candidates[0]].state().selected(), &[1]);
    assert_eq!(outcome.labels, vec!["Light"]);
}

#[test]
fn cutoff_of_one_keeps_the_first_goal() {
    let catalog = abc();
    let world = ChapterSelection::new(&catalog, 13);
    let policy = SearchPolicy {
        solution_cutoff: 1,
        ..SearchPolicy::default()
    };
    let outcome = SearchEngine::new(&world, policy)
        .expect("valid policy")
        .run()
        .expect("goal band is reachable");
    assert_eq!(outcome.labels, vec!["A", "C"]);
    assert_eq!(outcome.stats.solutions_found, 1);
    assert_eq!(outcome.stats.termination, TerminationReason::SolutionCutoffReached);
}

#[test]
fn depth_bound_discards_deeper_nodes_but_keeps_goals() {
    let catalog = abc();
    let world = ChapterSelection::new(&catalog, 13);
    let outcome = search(&world, "A*", Some(0))
        .expect("A* is supported")
        .expect("a single chapter reaches the band");

    // Depth-1 nodes are still checked for the goal before the bound applies.
    assert_eq!(outcome.labels, vec!["B"]);
    assert_eq!(outcome.stats.expansions, 1);
    assert_eq!(outcome.stats.depth_limited, 2);
}

#[test]
fn root_already_in_band_is_the_answer() {
    let catalog = abc();
    let start = SelectionState::from_selection(&catalog, &[2]).expect("known item");
    let world = ChapterSelection::new(&catalog, 13).with_initial_state(start);
    let outcome = search(&world, "A*", None)
        .expect("A* is supported")
        .expect("root is a goal");
    assert!(outcome.path.is_empty());
    assert!(outcome.labels.is_empty());
    assert_eq!(outcome.stats.expansions, 0);
}
