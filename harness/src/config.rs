//! Run configuration: optional overrides resolved against defaults.
//!
//! Callers (CLI flags, the HTTP service, tests) fill in only what they want
//! to change; [`RunConfig::resolve`] is the one place defaults are applied
//! and the strategy name is validated.

use qanit_search::error::SearchError;
use qanit_search::policy::{SearchPolicy, StrategyKind, DEFAULT_SOLUTION_CUTOFF};

use crate::worlds::chapter_selection::{DEFAULT_PRUNE_MULTIPLIER, DEFAULT_TOLERANCE};

/// Verse target used when a request does not name one.
pub const DEFAULT_GOAL_QUANTITY: u64 = 100;

/// Overrides for a selection run. `None` uses the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Width of the goal band. Default [`DEFAULT_TOLERANCE`].
    pub tolerance: Option<u64>,
    /// Overshoot pruning multiple of the tolerance. Default [`DEFAULT_PRUNE_MULTIPLIER`].
    pub prune_multiplier: Option<u64>,
    /// Goal nodes to collect before stopping. Default [`DEFAULT_SOLUTION_CUTOFF`].
    pub solution_cutoff: Option<usize>,
    /// Depth bound; `None` is unbounded.
    pub max_depth: Option<u32>,
    /// Expansion budget; `None` is unbounded.
    pub max_expansions: Option<u64>,
    /// Strategy name. Default `"A*"`.
    pub strategy: Option<String>,
}

/// A [`RunConfig`] with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRunConfig {
    pub tolerance: u64,
    pub prune_multiplier: u64,
    pub search_policy: SearchPolicy,
}

impl RunConfig {
    /// Apply defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedStrategy`] for an unknown strategy
    /// name and [`SearchError::InvalidPolicy`] for a zero solution cutoff or
    /// expansion budget.
    pub fn resolve(&self) -> Result<ResolvedRunConfig, SearchError> {
        let strategy = match &self.strategy {
            Some(name) => name.parse()?,
            None => StrategyKind::default(),
        };
        let search_policy = SearchPolicy {
            strategy,
            max_depth: self.max_depth,
            solution_cutoff: self.solution_cutoff.unwrap_or(DEFAULT_SOLUTION_CUTOFF),
            max_expansions: self.max_expansions,
        };
        search_policy.validate()?;

        Ok(ResolvedRunConfig {
            tolerance: self.tolerance.unwrap_or(DEFAULT_TOLERANCE),
            prune_multiplier: self.prune_multiplier.unwrap_or(DEFAULT_PRUNE_MULTIPLIER),
            search_policy,
        })
    }
}
