//! Carrier module: the catalog and the selection state built from it.

pub mod catalog;
pub mod selection;
