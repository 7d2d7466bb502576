//! Even-split settlement calculation.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tripmate_shared::types::UserId;

use crate::expense::Expense;

use super::error::SettlementError;
use super::types::{Member, MemberBalance, Settlement};

/// Settlement calculator.
///
/// A pure function over already-fetched snapshots: no state, no I/O,
/// reentrant. Callers fetch fresh rows and recompute after every write.
pub struct SettlementService;

impl SettlementService {
    /// Computes the even-split ledger for a snapshot of members and expenses.
    ///
    /// Every member carries an identical share of the total cost,
    /// regardless of who benefited from which expense. An expense whose
    /// payer is not in the member set still raises the total (and thus
    /// everyone's share) but credits nobody's `paid` - the group
    /// socializes it as unattributed cost. With members present and no
    /// such orphans, the resulting balances sum to zero.
    ///
    /// # Errors
    ///
    /// Returns `SettlementError::DuplicateMember` if `members` lists the
    /// same `user_id` twice, `SettlementError::NegativeAmount` for a
    /// negative expense. Either way no partial ledger is produced.
    pub fn compute(
        members: &[Member],
        expenses: &[Expense],
    ) -> Result<Settlement, SettlementError> {
        let mut seen = HashSet::with_capacity(members.len());
        for member in members {
            if !seen.insert(member.user_id) {
                return Err(SettlementError::DuplicateMember(member.user_id));
            }
        }
        for expense in expenses {
            if expense.amount.is_sign_negative() {
                return Err(SettlementError::NegativeAmount {
                    payer: expense.payer_id,
                    amount: expense.amount,
                });
            }
        }

        let total_cost: Decimal = expenses.iter().map(|e| e.amount).sum();

        // Floor the divisor at 1 so an empty trip yields share == total_cost
        // instead of a division by zero.
        let member_count = members.len().max(1);
        let share = total_cost / Decimal::from(member_count as u64);

        let mut paid_by: HashMap<UserId, Decimal> = members
            .iter()
            .map(|m| (m.user_id, Decimal::ZERO))
            .collect();
        let mut orphaned = Decimal::ZERO;
        for expense in expenses {
            match paid_by.get_mut(&expense.payer_id) {
                Some(paid) => *paid += expense.amount,
                None => orphaned += expense.amount,
            }
        }
        if !orphaned.is_zero() {
            tracing::warn!(
                %orphaned,
                "expenses from payers outside the member set were socialized across the group"
            );
        }

        let mut balances: Vec<MemberBalance> = members
            .iter()
            .map(|member| {
                let paid = paid_by[&member.user_id];
                MemberBalance {
                    user_id: member.user_id,
                    display_name: member.display_name.clone(),
                    paid,
                    share,
                    balance: paid - share,
                }
            })
            .collect();

        // Largest creditor first; the sort is stable, so equal balances
        // keep member input order.
        balances.sort_by(|a, b| b.balance.cmp(&a.balance));

        Ok(Settlement {
            balances,
            total_cost,
            share,
        })
    }
}
