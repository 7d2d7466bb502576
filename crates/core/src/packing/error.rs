//! Packing error types.

use thiserror::Error;
use tripmate_shared::AppError;
use tripmate_shared::types::{PackingItemId, UserId};

/// Packing-related errors.
#[derive(Debug, Error)]
pub enum PackingError {
    /// Item name cannot be empty.
    #[error("Item name cannot be empty")]
    EmptyItemName,

    /// Only shared items can be claimed.
    #[error("Item {0} is personal and cannot be claimed")]
    NotShared(PackingItemId),

    /// Someone else already claimed the item.
    #[error("Item {item} is already claimed by {claimed_by}")]
    ClaimedByOther {
        /// The contested item.
        item: PackingItemId,
        /// Who holds the claim.
        claimed_by: UserId,
    },
}

impl From<PackingError> for AppError {
    fn from(err: PackingError) -> Self {
        match err {
            PackingError::ClaimedByOther { .. } => Self::Conflict(err.to_string()),
            PackingError::EmptyItemName | PackingError::NotShared(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
