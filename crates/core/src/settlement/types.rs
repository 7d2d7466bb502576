//! Settlement data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripmate_shared::types::UserId;

/// A trip participant as the settlement calculation sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier for the trip's lifetime.
    pub user_id: UserId,
    /// Human-readable label; not guaranteed unique.
    pub display_name: String,
}

/// One member's line in the settled ledger.
///
/// Derived, never persisted; recomputed wholesale from the current
/// member and expense snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// Member identifier.
    pub user_id: UserId,
    /// Display name copied from the member record.
    pub display_name: String,
    /// Total this member fronted.
    pub paid: Decimal,
    /// The member's even share of the total cost.
    pub share: Decimal,
    /// `paid - share`. Positive = is owed money, negative = owes money.
    pub balance: Decimal,
}

/// The settled ledger for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// One entry per member, sorted non-increasing by balance
    /// (largest creditor first); ties keep member input order.
    pub balances: Vec<MemberBalance>,
    /// Sum of all expense amounts, including orphaned-payer expenses.
    pub total_cost: Decimal,
    /// The even share every member carries. With no members this equals
    /// `total_cost` (degenerate but defined).
    pub share: Decimal,
}
