//! Qanit Kernel: the data the selection search runs over.
//!
//! # API Surface
//!
//! - [`carrier::catalog::Catalog`] -- read-only `ItemId → (quantity, side_cost, label)` lookup
//! - [`carrier::selection::SelectionState`] -- accumulated quantity/side cost plus ordered selection
//! - [`proof::hash::canonical_hash`] and [`proof::canon::canonical_json_bytes`] -- deterministic digests
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier`
//!
//! One-way only. `carrier` hashes through `proof`; `proof` imports nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
