//! Structural invariants over every node a selection search creates.
//!
//! Runs the fixture catalog at several targets and walks the whole search
//! tree, not just the selected path.

use std::collections::BTreeSet;
use std::path::Path;

use qanit_harness::loader::{load_catalog, CatalogColumns};
use qanit_harness::worlds::chapter_selection::ChapterSelection;
use qanit_kernel::carrier::catalog::Catalog;
use qanit_search::contract::SearchProblem;
use qanit_search::policy::SearchPolicy;
use qanit_search::search::SearchEngine;

fn fixture_catalog() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/chapters.csv");
    load_catalog(path, &CatalogColumns::default()).expect("fixture catalog loads")
}

fn check_tree(catalog: &Catalog, goal: u64, tolerance: u64) {
    let world = ChapterSelection::new(catalog, goal).with_tolerance(tolerance);
    let engine = SearchEngine::new(&world, SearchPolicy::default()).expect("default policy");
    let run = engine.explore();
    assert!(!run.tree.is_empty(), "goal {goal}: tree has a root");

    for node_ref in run.tree.iter() {
        let node = node_ref.node;
        let state = node.state();
        let selected = state.selected();

        // Accumulators match the catalog totals of the selected items.
        let quantity: u64 = selected
            .iter()
            .map(|id| catalog.get(*id).expect("selected ids are catalog ids").quantity)
            .sum();
        let side_cost: u64 = selected
            .iter()
            .map(|id| catalog.get(*id).expect("selected ids are catalog ids").side_cost)
            .sum();
        assert_eq!(state.quantity(), quantity, "goal {goal}: quantity of {selected:?}");
        assert_eq!(state.side_cost(), side_cost, "goal {goal}: side cost of {selected:?}");

        // No chapter is selected twice.
        let unique: BTreeSet<_> = selected.iter().collect();
        assert_eq!(unique.len(), selected.len(), "goal {goal}: repeated id in {selected:?}");

        // Pruning bound holds for every created node.
        assert!(
            state.quantity() <= world.prune_bound(),
            "goal {goal}: {selected:?} exceeds the pruning bound"
        );

        // Path and depth agree with the selection.
        let path = run.tree.solution_path(node_ref.id);
        assert_eq!(path, selected, "goal {goal}: path differs from selection");
        assert_eq!(node.depth() as usize, selected.len());

        // g is the accumulated quantity; f = g + h under A*.
        if !node.is_root() {
            assert_eq!(node.g_cost(), state.quantity());
            assert_eq!(node.f_cost(), node.g_cost() + world.heuristic(state));
        }

        // Heuristic is a pure function of the state.
        assert_eq!(world.heuristic(state), world.heuristic(&state.clone()));
    }

    // Goal nodes are exactly the recorded solutions' band members.
    for id in &run.solutions {
        let quantity = run.tree[*id].state().quantity();
        assert!(
            (goal..=goal + tolerance).contains(&quantity),
            "goal {goal}: solution quantity {quantity} outside band"
        );
    }
    assert!(run.solutions.len() <= SearchPolicy::default().solution_cutoff);
}

#[test]
fn invariants_hold_across_targets() {
    let catalog = fixture_catalog();
    for goal in [3, 10, 20] {
        check_tree(&catalog, goal, 5);
    }
}

#[test]
fn invariants_hold_with_zero_tolerance() {
    let catalog = fixture_catalog();
    for goal in [7, 12, 25] {
        check_tree(&catalog, goal, 0);
    }
}

#[test]
fn each_selection_sequence_is_created_once() {
    let catalog = fixture_catalog();
    let world = ChapterSelection::new(&catalog, 20);
    let run = SearchEngine::new(&world, SearchPolicy::default())
        .expect("default policy")
        .explore();

    let mut seen = BTreeSet::new();
    for node_ref in run.tree.iter() {
        assert!(
            seen.insert(node_ref.node.state().fingerprint()),
            "selection {:?} was created twice",
            node_ref.node.state().selected()
        );
    }
}
