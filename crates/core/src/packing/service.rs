//! Packing-list business rules.

use tripmate_shared::types::UserId;

use super::error::PackingError;
use super::types::{ChecklistState, PackingCategory, PackingItem};

/// A member's progress through the personal checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingProgress {
    /// Personal items this member has checked off.
    pub packed: usize,
    /// Personal items on the list.
    pub total: usize,
}

impl PackingProgress {
    /// Returns true when everything personal is checked off.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.packed == self.total
    }
}

/// Packing service for business logic.
pub struct PackingService;

impl PackingService {
    /// Claims or releases a shared item on behalf of `actor`.
    ///
    /// First claim wins: an unclaimed item becomes `actor`'s, the
    /// current claimer may release, and anyone else is refused.
    /// Returns the new claimer.
    ///
    /// # Errors
    ///
    /// Returns `PackingError::NotShared` for personal items and
    /// `PackingError::ClaimedByOther` when someone else holds the claim.
    pub fn toggle_claim(
        item: &PackingItem,
        actor: UserId,
    ) -> Result<Option<UserId>, PackingError> {
        if item.category != PackingCategory::Shared {
            return Err(PackingError::NotShared(item.id));
        }
        match item.claimed_by {
            None => Ok(Some(actor)),
            Some(claimer) if claimer == actor => Ok(None),
            Some(claimer) => Err(PackingError::ClaimedByOther {
                item: item.id,
                claimed_by: claimer,
            }),
        }
    }

    /// Computes `user`'s progress through the personal items.
    #[must_use]
    pub fn progress(
        items: &[PackingItem],
        state: &ChecklistState,
        user: UserId,
    ) -> PackingProgress {
        let personal = items
            .iter()
            .filter(|item| item.category == PackingCategory::Personal);
        let mut packed = 0;
        let mut total = 0;
        for item in personal {
            total += 1;
            if state.is_checked(item.id, user) {
                packed += 1;
            }
        }
        PackingProgress { packed, total }
    }
}
