//! Trip data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripmate_shared::types::{Currency, TripId, UserId};

use crate::packing::PackingStyle;

use super::error::TripError;

/// A member's role within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Created the trip; may manage members.
    Owner,
    /// Joined via invite; full participant.
    Member,
    /// Read-only participant.
    Viewer,
}

impl Role {
    /// The role the trip creator receives.
    #[must_use]
    pub const fn for_creator() -> Self {
        Self::Owner
    }

    /// The role assigned when someone joins through an invite link.
    #[must_use]
    pub const fn for_joiner() -> Self {
        Self::Member
    }
}

/// A trip record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip ID.
    pub id: TripId,
    /// Trip name.
    pub name: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub total_days: u32,
    /// Currency all expenses are recorded in.
    pub base_currency: Currency,
    /// User who created the trip.
    pub created_by: UserId,
}

/// A participant in a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripMember {
    /// Trip the membership belongs to.
    pub trip_id: TripId,
    /// The member's user ID.
    pub user_id: UserId,
    /// The member's role.
    pub role: Role,
    /// Display name from the member's profile.
    pub display_name: String,
    /// Packing temperament toggle shown on the packing screen.
    pub packing_style: PackingStyle,
}

/// Where a trip stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Departure is still ahead.
    Upcoming {
        /// Whole days until departure.
        days_left: i64,
    },
    /// Departure day is today.
    DepartingToday,
    /// The departure date has passed.
    Ended,
}

impl Trip {
    /// Classifies the trip against `today`.
    ///
    /// Keys off the departure date only, the way the dashboard counts
    /// down; the caller supplies `today` so the core stays clock-free.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> TripStatus {
        let days_left = (self.start_date - today).num_days();
        match days_left {
            d if d < 0 => TripStatus::Ended,
            0 => TripStatus::DepartingToday,
            d => TripStatus::Upcoming { days_left: d },
        }
    }
}

/// Inclusive day count between two dates, floored at zero for inverted
/// ranges (rows that bypassed form validation).
#[must_use]
pub fn total_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days.max(0)).unwrap_or(0)
}

/// Input for creating a new trip.
#[derive(Debug, Clone)]
pub struct CreateTripInput {
    /// Trip name.
    pub name: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Currency all expenses will be recorded in.
    pub base_currency: Currency,
    /// User creating the trip.
    pub created_by: UserId,
}

impl CreateTripInput {
    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns `TripError::EmptyName` for a blank name,
    /// `TripError::InvalidDateRange` when the trip ends before it starts.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.name.trim().is_empty() {
            return Err(TripError::EmptyName);
        }
        if self.end_date < self.start_date {
            return Err(TripError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Builds the trip record, assigning a fresh ID and the computed
    /// day count.
    ///
    /// # Errors
    ///
    /// Propagates validation failures; no record is produced on error.
    pub fn into_trip(self) -> Result<Trip, TripError> {
        self.validate()?;
        let total_days = total_days(self.start_date, self.end_date);
        Ok(Trip {
            id: TripId::new(),
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            total_days,
            base_currency: self.base_currency,
            created_by: self.created_by,
        })
    }
}
