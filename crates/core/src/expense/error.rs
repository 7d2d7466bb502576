//! Expense error types.

use rust_decimal::Decimal;
use thiserror::Error;
use tripmate_shared::AppError;

/// Expense-related errors.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Description cannot be empty.
    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        Self::Validation(err.to_string())
    }
}
