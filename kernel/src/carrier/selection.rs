//! `SelectionState`: accumulated verses, accumulated words, and the ordered
//! list of chosen chapters.
//!
//! # Invariants
//!
//! - `selected` never contains the same id twice.
//! - `quantity` and `side_cost` equal the sums of the catalog entries for
//!   every id in `selected`.
//!
//! Fields are private; the only ways to build a state are
//! [`SelectionState::empty`], [`SelectionState::with_item`] and
//! [`SelectionState::from_selection`], all of which keep the accumulators in
//! step with the selection.
//!
//! # Equality semantics
//!
//! Equality and hashing cover all three components, and the selection is
//! order-sensitive: `[1, 3]` and `[3, 1]` are distinct states.

use crate::carrier::catalog::{Catalog, CatalogEntry, CatalogError, ItemId};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionState {
    quantity: u64,
    side_cost: u64,
    selected: Vec<ItemId>,
}

impl SelectionState {
    /// The empty selection (quantity 0, side cost 0).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild a state from an ordered id list, recomputing both accumulators.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] for ids missing from `catalog`
    /// and [`CatalogError::RepeatedSelection`] for repeated ids.
    pub fn from_selection(catalog: &Catalog, selected: &[ItemId]) -> Result<Self, CatalogError> {
        let mut state = Self::empty();
        for &item_id in selected {
            let entry = catalog
                .get(item_id)
                .ok_or(CatalogError::UnknownItem { item_id })?;
            if state.contains(item_id) {
                return Err(CatalogError::RepeatedSelection { item_id });
            }
            state = state.with_item(item_id, entry);
        }
        Ok(state)
    }

    /// The successor state after appending `item_id`.
    ///
    /// `item_id` must not already be selected.
    #[must_use]
    pub fn with_item(&self, item_id: ItemId, entry: &CatalogEntry) -> Self {
        debug_assert!(!self.contains(item_id), "item {item_id} already selected");
        let mut selected = Vec::with_capacity(self.selected.len() + 1);
        selected.extend_from_slice(&self.selected);
        selected.push(item_id);
        Self {
            quantity: self.quantity.saturating_add(entry.quantity),
            side_cost: self.side_cost.saturating_add(entry.side_cost),
            selected,
        }
    }

    /// Accumulated quantity (verses).
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Accumulated side cost (words).
    #[must_use]
    pub const fn side_cost(&self) -> u64 {
        self.side_cost
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    #[must_use]
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.selected.contains(&item_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Order-sensitive canonical encoding:
    /// `quantity_le64 || side_cost_le64 || len_le32 || id_le32...`.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(20 + self.selected.len() * 4);
        buf.extend_from_slice(&self.quantity.to_le_bytes());
        buf.extend_from_slice(&self.side_cost.to_le_bytes());
        #[allow(clippy::cast_possible_truncation)]
        buf.extend_from_slice(&(self.selected.len() as u32).to_le_bytes());
        for id in &self.selected {
            buf.extend_from_slice(&id.to_le_bytes());
        }
        buf
    }

    /// Content hash of [`canonical_bytes`](Self::canonical_bytes).
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::SelectionState, &self.canonical_bytes())
    }
}
