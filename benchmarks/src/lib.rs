//! Shared helpers for qanit benchmark suites.

use qanit_kernel::carrier::catalog::{Catalog, CatalogRecord, ItemId};

/// A deterministic catalog of `size` chapters.
///
/// Verse counts cycle through 3..=13 and word counts through 10..=96, so
/// small targets have many in-band selections at shallow depth.
///
/// # Panics
///
/// Panics if `size` does not fit in an [`ItemId`]. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn synthetic_catalog(size: usize) -> Catalog {
    let count = ItemId::try_from(size).expect("catalog size fits in ItemId");
    let records = (1..=count).map(|item_id| CatalogRecord {
        item_id,
        label: format!("chapter-{item_id}"),
        quantity: 3 + u64::from(item_id * 7 % 11),
        side_cost: 10 + u64::from(item_id * 13 % 87),
    });
    Catalog::from_records(records).expect("synthetic ids are unique")
}

/// Named target regimes for the macro benchmarks.
///
/// Each entry is `(name, catalog size, goal quantity, tolerance)`.
pub const REGIMES: &[(&str, usize, u64, u64)] = &[
    ("shallow_wide_band", 30, 15, 5),
    ("shallow_exact", 30, 15, 0),
    ("depth_three", 30, 30, 5),
    ("unreachable_small", 6, 200, 5),
];
