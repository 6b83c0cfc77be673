//! Qanit Search: best-first search over an arena of immutable nodes.
//!
//! This crate provides the search layer. It depends only on
//! `qanit_kernel`; it does NOT depend on `qanit_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! qanit_kernel  ←  qanit_search  ←  qanit_harness  ←  qanit_cli
//! (catalog, state)  (frontier, nodes)  (world, loader)   (binary)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] -- state plus provenance, depth derived from the parent
//! - [`tree::SearchTree`] -- node arena; parents are referenced by [`node::NodeId`]
//! - [`frontier::BestFirstFrontier`] -- min-heap on `(f, creation_order)`
//! - [`contract::SearchProblem`] -- trait for problems the engine can search
//! - [`policy::SearchPolicy`] -- strategy, depth bound, solution cutoff
//! - [`search::SearchEngine`] -- expansion loop and solution selection

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;
