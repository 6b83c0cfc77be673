//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing internal. `carrier` hashes through this module.

pub mod canon;
pub mod hash;
pub mod hash_domain;
