//! Snapshot aggregate types.

use serde_json::Value;
use tripmate_shared::AppResult;
use tripmate_shared::types::Money;

use crate::expense::Expense;
use crate::settlement::{Member, MemberBalance, SettlementService};
use crate::trip::Trip;

use super::rows;

/// Everything the budget screen needs, decoded in one pass.
///
/// The caller fetches fresh rows before building a snapshot and builds
/// a new one after any write; nothing here is cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSnapshot {
    /// The trip record.
    pub trip: Trip,
    /// Current members.
    pub members: Vec<Member>,
    /// Recorded expenses.
    pub expenses: Vec<Expense>,
}

/// A settled ledger tagged with the trip's base currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSettlement {
    /// Ranked balances, largest creditor first.
    pub balances: Vec<MemberBalance>,
    /// Sum of all recorded expenses.
    pub total_cost: Money,
    /// The even share each member carries.
    pub share: Money,
}

impl TripSnapshot {
    /// Decodes a full snapshot from raw rows.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any row is malformed; the snapshot
    /// is all-or-nothing.
    pub fn from_rows(
        trip_row: &Value,
        member_rows: &[Value],
        expense_rows: &[Value],
    ) -> AppResult<Self> {
        Ok(Self {
            trip: rows::trip_from_row(trip_row)?,
            members: member_rows
                .iter()
                .map(rows::member_from_row)
                .collect::<AppResult<_>>()?,
            expenses: expense_rows
                .iter()
                .map(rows::expense_from_row)
                .collect::<AppResult<_>>()?,
        })
    }

    /// Runs the settlement calculation over this snapshot and tags the
    /// totals with the trip's base currency.
    ///
    /// # Errors
    ///
    /// Propagates settlement validation failures.
    pub fn settle(&self) -> AppResult<TripSettlement> {
        let settlement = SettlementService::compute(&self.members, &self.expenses)?;
        let currency = self.trip.base_currency;
        Ok(TripSettlement {
            balances: settlement.balances,
            total_cost: Money::new(settlement.total_cost, currency),
            share: Money::new(settlement.share, currency),
        })
    }
}
