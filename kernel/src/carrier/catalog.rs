//! Chapter catalog: the static `ItemId → (quantity, side_cost, label)` lookup.
//!
//! The catalog is fixed for the lifetime of a search. Entries are stored in
//! a `BTreeMap` so iteration (and therefore action enumeration) is in
//! ascending `ItemId` order on every run.

use std::collections::BTreeMap;

use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Identifier of a catalog item (a chapter number).
pub type ItemId = u32;

/// Per-item contribution to a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// Quantity contributed (verses).
    pub quantity: u64,
    /// Side cost contributed (words).
    pub side_cost: u64,
    /// Display label.
    pub label: String,
}

/// One parsed catalog row, before it is keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub item_id: ItemId,
    pub label: String,
    pub quantity: u64,
    pub side_cost: u64,
}

/// Error type for catalog construction and selection validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An item id appeared more than once in the input records.
    #[error("item {item_id} appears more than once in the catalog")]
    DuplicateItem { item_id: ItemId },
    /// A selection referenced an id the catalog does not contain.
    #[error("item {item_id} is not in the catalog")]
    UnknownItem { item_id: ItemId },
    /// A selection listed the same id twice.
    #[error("item {item_id} is selected more than once")]
    RepeatedSelection { item_id: ItemId },
    /// Canonical JSON serialization failed.
    #[error("catalog canonicalization failed: {detail}")]
    Canonicalization { detail: String },
}

/// Read-only catalog keyed by [`ItemId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<ItemId, CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] if two records share an id.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut entries = BTreeMap::new();
        for record in records {
            if entries.contains_key(&record.item_id) {
                return Err(CatalogError::DuplicateItem {
                    item_id: record.item_id,
                });
            }
            entries.insert(
                record.item_id,
                CatalogEntry {
                    quantity: record.quantity,
                    side_cost: record.side_cost,
                    label: record.label,
                },
            );
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, item_id: ItemId) -> Option<&CatalogEntry> {
        self.entries.get(&item_id)
    }

    /// Label for an item, if present.
    #[must_use]
    pub fn label(&self, item_id: ItemId) -> Option<&str> {
        self.entries.get(&item_id).map(|e| e.label.as_str())
    }

    /// Iterate entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &CatalogEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Iterate ids in ascending order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all item quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .values()
            .fold(0u64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Canonical JSON bytes: `{"items":[[id,"label",quantity,side_cost],...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Canonicalization`] if serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        let items: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|(id, e)| serde_json::json!([id, e.label, e.quantity, e.side_cost]))
            .collect();
        canonical_json_bytes(&serde_json::json!({ "items": items })).map_err(|e| {
            CatalogError::Canonicalization {
                detail: e.to_string(),
            }
        })
    }

    /// Content digest of the catalog snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`Catalog::canonical_bytes`] failures.
    pub fn digest(&self) -> Result<ContentHash, CatalogError> {
        let bytes = self.canonical_bytes()?;
        Ok(canonical_hash(HashDomain::CatalogSnapshot, &bytes))
    }
}
