//! Settlement error types.

use rust_decimal::Decimal;
use thiserror::Error;
use tripmate_shared::AppError;
use tripmate_shared::types::UserId;

/// Settlement-related errors.
///
/// The calculation is all-or-nothing: any of these means no ledger was
/// produced.
#[derive(Debug, Error)]
pub enum SettlementError {
    /// The member list contains the same user twice.
    #[error("Duplicate member in settlement input: {0}")]
    DuplicateMember(UserId),

    /// An expense carries a negative amount.
    #[error("Expense amount cannot be negative: {amount} (payer {payer})")]
    NegativeAmount {
        /// Who the malformed expense is attributed to.
        payer: UserId,
        /// The offending amount.
        amount: Decimal,
    },
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        Self::Validation(err.to_string())
    }
}
