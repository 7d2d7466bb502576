//! Trip error types.

use chrono::NaiveDate;
use thiserror::Error;
use tripmate_shared::AppError;

/// Trip-related errors.
#[derive(Debug, Error)]
pub enum TripError {
    /// Trip name cannot be empty.
    #[error("Trip name cannot be empty")]
    EmptyName,

    /// The trip ends before it starts.
    #[error("Trip ends before it starts: {start} to {end}")]
    InvalidDateRange {
        /// First day of the trip.
        start: NaiveDate,
        /// Last day of the trip.
        end: NaiveDate,
    },

    /// The cover-image catalog is empty.
    #[error("Cover-image catalog is empty")]
    EmptyCoverCatalog,
}

impl From<TripError> for AppError {
    fn from(err: TripError) -> Self {
        Self::Validation(err.to_string())
    }
}
