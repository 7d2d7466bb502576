//! Property-based tests for the settlement calculator.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tripmate_shared::types::{ExpenseId, TripId, UserId};

use crate::expense::Expense;

use super::service::SettlementService;
use super::types::Member;

/// Division by the member count is exact only when it terminates;
/// otherwise the quotient is truncated to `Decimal`'s 28 significant
/// digits. Sums over it are therefore compared within this slack.
fn tolerance() -> Decimal {
    Decimal::new(1, 20)
}

fn make_members(count: usize) -> Vec<Member> {
    (0..count)
        .map(|i| Member {
            user_id: UserId::new(),
            display_name: format!("member-{i}"),
        })
        .collect()
}

fn make_expense(payer_id: UserId, cents: i64) -> Expense {
    Expense {
        id: ExpenseId::new(),
        trip_id: TripId::new(),
        payer_id,
        description: "prop".to_string(),
        amount: Decimal::new(cents, 2),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
    }
}

/// Strategy: a member count plus expenses assigned to member indices.
fn members_and_expenses() -> impl Strategy<Value = (usize, Vec<(usize, i64)>)> {
    (1usize..=6).prop_flat_map(|count| {
        (
            Just(count),
            proptest::collection::vec((0..count, 0i64..100_000_000), 0..12),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Zero-sum ledger: when every expense's payer is a member, the
    /// balances sum to zero (to the decimal precision of the division).
    #[test]
    fn prop_zero_sum_ledger((count, assignments) in members_and_expenses()) {
        let members = make_members(count);
        let expenses: Vec<Expense> = assignments
            .iter()
            .map(|&(idx, cents)| make_expense(members[idx].user_id, cents))
            .collect();

        let settlement = SettlementService::compute(&members, &expenses).unwrap();
        let sum: Decimal = settlement.balances.iter().map(|b| b.balance).sum();

        prop_assert!(
            sum.abs() <= tolerance(),
            "balances should sum to zero, got {sum}"
        );
    }

    /// Orphan accounting: the ledger is short by exactly the sum of
    /// amounts whose payer is not in the member set.
    #[test]
    fn prop_orphans_shift_the_ledger(
        (count, assignments) in members_and_expenses(),
        orphan_cents in proptest::collection::vec(0i64..100_000_000, 1..4),
    ) {
        let members = make_members(count);
        let mut expenses: Vec<Expense> = assignments
            .iter()
            .map(|&(idx, cents)| make_expense(members[idx].user_id, cents))
            .collect();
        let mut orphan_total = Decimal::ZERO;
        for &cents in &orphan_cents {
            orphan_total += Decimal::new(cents, 2);
            expenses.push(make_expense(UserId::new(), cents));
        }

        let settlement = SettlementService::compute(&members, &expenses).unwrap();
        let sum: Decimal = settlement.balances.iter().map(|b| b.balance).sum();

        prop_assert!(
            (sum + orphan_total).abs() <= tolerance(),
            "balances should sum to -{orphan_total}, got {sum}"
        );
    }

    /// Even split: every member's share is identical and covers the
    /// whole total.
    #[test]
    fn prop_share_is_even((count, assignments) in members_and_expenses()) {
        let members = make_members(count);
        let expenses: Vec<Expense> = assignments
            .iter()
            .map(|&(idx, cents)| make_expense(members[idx].user_id, cents))
            .collect();

        let settlement = SettlementService::compute(&members, &expenses).unwrap();

        for balance in &settlement.balances {
            prop_assert_eq!(balance.share, settlement.share);
        }
        let covered = settlement.share * Decimal::from(count as u64);
        prop_assert!((covered - settlement.total_cost).abs() <= tolerance());
    }

    /// Sort order: the ledger is non-increasing in balance.
    #[test]
    fn prop_ledger_is_ranked((count, assignments) in members_and_expenses()) {
        let members = make_members(count);
        let expenses: Vec<Expense> = assignments
            .iter()
            .map(|&(idx, cents)| make_expense(members[idx].user_id, cents))
            .collect();

        let settlement = SettlementService::compute(&members, &expenses).unwrap();

        for pair in settlement.balances.windows(2) {
            prop_assert!(pair[0].balance >= pair[1].balance);
        }
    }
}
