//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only: they are returned
//! before the root node is created, so no exploration has happened. Running
//! out of frontier without a solution is not an error; it is reported as an
//! absent outcome.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The requested frontier-ordering strategy is not supported.
    #[error("unsupported search strategy: {requested}")]
    UnsupportedStrategy { requested: String },
    /// The policy carries a value the engine cannot run with.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
