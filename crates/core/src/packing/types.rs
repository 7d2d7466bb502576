//! Packing-list data types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tripmate_shared::types::{PackingItemId, TripId, UserId};

use super::error::PackingError;

/// Whether an item is per-person or shared group gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackingCategory {
    /// Everyone brings their own (passport, toothbrush).
    Personal,
    /// One claimer brings it for the group (hair dryer, adapter).
    /// Stored as "public" in the remote rows.
    #[serde(rename = "public")]
    Shared,
}

/// The P/J packing-temperament toggle members flip on the packing
/// screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingStyle {
    /// Plans ahead and packs early.
    #[serde(rename = "J")]
    #[default]
    Judger,
    /// Packs the night before.
    #[serde(rename = "P")]
    Perceiver,
}

impl PackingStyle {
    /// The other temperament; flipping is the only mutation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Judger => Self::Perceiver,
            Self::Perceiver => Self::Judger,
        }
    }
}

/// A packing-list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    /// Item ID.
    pub id: PackingItemId,
    /// Trip the item belongs to.
    pub trip_id: TripId,
    /// What to pack.
    pub name: String,
    /// Per-person or shared.
    pub category: PackingCategory,
    /// Who claimed a shared item; always `None` for personal items.
    pub claimed_by: Option<UserId>,
}

/// Input for adding a packing-list item.
#[derive(Debug, Clone)]
pub struct CreatePackingItemInput {
    /// Trip the item belongs to.
    pub trip_id: TripId,
    /// What to pack.
    pub name: String,
    /// Per-person or shared.
    pub category: PackingCategory,
}

impl CreatePackingItemInput {
    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns `PackingError::EmptyItemName` for a blank name.
    pub fn validate(&self) -> Result<(), PackingError> {
        if self.name.trim().is_empty() {
            return Err(PackingError::EmptyItemName);
        }
        Ok(())
    }

    /// Builds the item record, assigning a fresh ID and no claimer.
    ///
    /// # Errors
    ///
    /// Propagates validation failures; no record is produced on error.
    pub fn into_item(self) -> Result<PackingItem, PackingError> {
        self.validate()?;
        Ok(PackingItem {
            id: PackingItemId::new(),
            trip_id: self.trip_id,
            name: self.name,
            category: self.category,
            claimed_by: None,
        })
    }
}

/// Which members have checked off which personal items.
///
/// Mirrors the remote check rows keyed by item and user; membership in
/// the set means checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    checks: HashSet<(PackingItemId, UserId)>,
}

impl ChecklistState {
    /// Builds the state from already-fetched check rows.
    #[must_use]
    pub fn from_checks(checks: impl IntoIterator<Item = (PackingItemId, UserId)>) -> Self {
        Self {
            checks: checks.into_iter().collect(),
        }
    }

    /// Returns true if `user` has checked off `item`.
    #[must_use]
    pub fn is_checked(&self, item: PackingItemId, user: UserId) -> bool {
        self.checks.contains(&(item, user))
    }

    /// Flips one member's check mark; returns the new state.
    pub fn toggle(&mut self, item: PackingItemId, user: UserId) -> bool {
        if self.checks.remove(&(item, user)) {
            false
        } else {
            self.checks.insert((item, user));
            true
        }
    }
}
