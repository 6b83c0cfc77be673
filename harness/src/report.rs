//! Selection report: the caller-facing result of a run.

use qanit_kernel::carrier::catalog::ItemId;
use qanit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use qanit_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use qanit_search::search::SearchStats;

/// The selected chapter sequence and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    pub goal_quantity: u64,
    pub tolerance: u64,
    /// Chapter labels in selection order.
    pub labels: Vec<String>,
    /// Chapter ids in selection order.
    pub items: Vec<ItemId>,
    /// Verse total of the selection.
    pub quantity: u64,
    /// Word total of the selection.
    pub side_cost: u64,
    pub g_cost: u64,
    pub f_cost: u64,
    /// Goal nodes collected before selection.
    pub solutions_found: u64,
    pub stats: SearchStats,
    /// Digest of the catalog the run was computed on.
    pub catalog_digest: ContentHash,
}

impl SelectionReport {
    /// JSON form. Keys are emitted unsorted; use
    /// [`to_canonical_json_bytes`](Self::to_canonical_json_bytes) for stable bytes.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "goal_quantity": self.goal_quantity,
            "tolerance": self.tolerance,
            "labels": self.labels,
            "items": self.items,
            "quantity": self.quantity,
            "side_cost": self.side_cost,
            "g_cost": self.g_cost,
            "f_cost": self.f_cost,
            "solutions_found": self.solutions_found,
            "catalog_digest": self.catalog_digest.as_str(),
            "stats": {
                "pops": self.stats.pops,
                "expansions": self.stats.expansions,
                "nodes_enqueued": self.stats.nodes_enqueued,
                "duplicates_suppressed": self.stats.duplicates_suppressed,
                "depth_limited": self.stats.depth_limited,
                "solutions_found": self.stats.solutions_found,
                "frontier_high_water": self.stats.frontier_high_water,
                "termination": self.stats.termination.as_str(),
            },
        })
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SelectionReport, &bytes))
    }
}
