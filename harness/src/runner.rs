//! Harness runner: builds a selection world, runs the engine, packages the
//! result as a [`SelectionReport`].
//!
//! ```text
//! RunConfig::resolve() → ChapterSelection → SearchEngine::explore()
//!   → select_best() → SelectionReport
//! ```

use std::time::Instant;

use qanit_kernel::carrier::catalog::{Catalog, CatalogError};
use qanit_search::error::SearchError;
use qanit_search::search::{select_best, SearchEngine};
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::report::SelectionReport;
use crate::worlds::chapter_selection::ChapterSelection;

/// Error during a selection run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("catalog digest failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Select chapters whose verse total lands in `[goal, goal + tolerance]`.
///
/// Returns `Ok(None)` when no selection reaches the band. A goal above the
/// catalog's total quantity returns `Ok(None)` without searching.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an unsupported strategy or invalid
/// policy (before any node is created), and [`RunError::Catalog`] if the
/// catalog cannot be digested.
pub fn run_selection(
    catalog: &Catalog,
    goal_quantity: u64,
    config: &RunConfig,
) -> Result<Option<SelectionReport>, RunError> {
    let resolved = config.resolve()?;
    if goal_quantity > catalog.total_quantity() {
        warn!(
            goal_quantity,
            total_quantity = catalog.total_quantity(),
            "goal exceeds the whole catalog"
        );
        return Ok(None);
    }

    let world = ChapterSelection::new(catalog, goal_quantity)
        .with_tolerance(resolved.tolerance)
        .with_prune_multiplier(resolved.prune_multiplier);
    let engine = SearchEngine::new(&world, resolved.search_policy)?;

    let started = Instant::now();
    let run = engine.explore();
    let stats = run.stats;
    info!(
        goal_quantity,
        tolerance = resolved.tolerance,
        strategy = %engine.policy().strategy,
        pops = stats.pops,
        expansions = stats.expansions,
        solutions = stats.solutions_found,
        termination = stats.termination.as_str(),
        elapsed = ?started.elapsed(),
        "selection search finished"
    );

    let Some(outcome) = select_best(&world, run) else {
        warn!(goal_quantity, "no chapter selection reaches the goal band");
        return Ok(None);
    };

    let solution = outcome.solution();
    let state = solution.state();
    Ok(Some(SelectionReport {
        goal_quantity,
        tolerance: resolved.tolerance,
        labels: outcome.labels.clone(),
        items: outcome.path.clone(),
        quantity: state.quantity(),
        side_cost: state.side_cost(),
        g_cost: solution.g_cost(),
        f_cost: solution.f_cost(),
        solutions_found: outcome.candidates.len() as u64,
        stats: outcome.stats,
        catalog_digest: catalog.digest()?,
    }))
}
