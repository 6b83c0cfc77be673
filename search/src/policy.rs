//! Search policy types.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Number of goal-reaching nodes collected before the search stops.
pub const DEFAULT_SOLUTION_CUTOFF: usize = 10;

/// Frontier-ordering strategy.
///
/// Resolved once when the engine is built; see [`StrategyKind::ordering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Order by `g + h`.
    #[default]
    AStar,
}

impl StrategyKind {
    /// Canonical request string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "A*",
        }
    }

    /// Which cost terms make up `f` under this strategy.
    #[must_use]
    pub const fn ordering(self) -> FrontierOrdering {
        match self {
            Self::AStar => FrontierOrdering {
                use_cost: true,
                use_heuristic: true,
            },
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A*" => Ok(Self::AStar),
            other => Err(SearchError::UnsupportedStrategy {
                requested: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent switches for the two terms of `f`.
///
/// With both off every node gets `f = 0` and the frontier degenerates to
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierOrdering {
    pub use_cost: bool,
    pub use_heuristic: bool,
}

/// Search bounds and strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: StrategyKind,
    /// Nodes deeper than this are popped but never expanded. `None` is unbounded.
    pub max_depth: Option<u32>,
    /// Stop once this many goal nodes have been collected.
    pub solution_cutoff: usize,
    /// Stop once this many nodes have been expanded. `None` is unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Policy for a strategy given by name.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedStrategy`] naming the rejected value.
    pub fn for_strategy(strategy: &str, max_depth: Option<u32>) -> Result<Self, SearchError> {
        Ok(Self {
            strategy: strategy.parse()?,
            max_depth,
            ..Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `solution_cutoff` or
    /// `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.solution_cutoff == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "solution_cutoff must be at least 1".into(),
            });
        }
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::AStar,
            max_depth: None,
            solution_cutoff: DEFAULT_SOLUTION_CUTOFF,
            max_expansions: None,
        }
    }
}
