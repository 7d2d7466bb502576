//! Expense data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripmate_shared::types::{ExpenseId, TripId, UserId};

use super::error::ExpenseError;

/// A single recorded payment someone fronted for the group.
///
/// Amounts are in the trip's base currency; the currency itself lives on
/// the trip record, not on every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Trip this expense belongs to.
    pub trip_id: TripId,
    /// Member who fronted the money.
    pub payer_id: UserId,
    /// What the money was spent on.
    pub description: String,
    /// Non-negative amount in the trip's base currency.
    pub amount: Decimal,
    /// Day the expense was incurred.
    pub date: NaiveDate,
}

/// Input for recording a new expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Trip the expense belongs to.
    pub trip_id: TripId,
    /// Member who paid.
    pub payer_id: UserId,
    /// What the money was spent on.
    pub description: String,
    /// Amount in the trip's base currency.
    pub amount: Decimal,
    /// Day the expense was incurred.
    pub date: NaiveDate,
}

impl CreateExpenseInput {
    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NegativeAmount` if the amount is negative,
    /// `ExpenseError::EmptyDescription` if the description is blank.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.amount.is_sign_negative() {
            return Err(ExpenseError::NegativeAmount(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }
        Ok(())
    }

    /// Builds the expense record, assigning a fresh ID.
    ///
    /// # Errors
    ///
    /// Propagates validation failures; no record is produced on error.
    pub fn into_expense(self) -> Result<Expense, ExpenseError> {
        self.validate()?;
        Ok(Expense {
            id: ExpenseId::new(),
            trip_id: self.trip_id,
            payer_id: self.payer_id,
            description: self.description,
            amount: self.amount,
            date: self.date,
        })
    }
}
