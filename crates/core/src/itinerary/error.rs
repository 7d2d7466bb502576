//! Itinerary error types.

use rust_decimal::Decimal;
use thiserror::Error;
use tripmate_shared::AppError;

/// Itinerary-related errors.
#[derive(Debug, Error)]
pub enum ItineraryError {
    /// Activity name cannot be empty.
    #[error("Activity name cannot be empty")]
    EmptyActivityName,

    /// Trip days are numbered from 1.
    #[error("Trip day must be at least 1, got {0}")]
    InvalidDay(u32),

    /// An entry must take some time.
    #[error("Entry duration must be positive")]
    NonPositiveDuration,

    /// Costs cannot be negative.
    #[error("Activity cost cannot be negative: {0}")]
    NegativeCost(Decimal),
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        Self::Validation(err.to_string())
    }
}
