//! Itinerary data types.

use chrono::{NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripmate_shared::types::{ItineraryEntryId, TripId};

use super::error::ItineraryError;
use super::period::DayPeriod;

/// What kind of activity an itinerary entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Seeing the sights.
    Sightseeing,
    /// Breakfast, lunch, dinner, snacks.
    Meal,
    /// Getting from A to B.
    Transport,
    /// Shopping.
    Shopping,
    /// Check-in, check-out, hotel time.
    Accommodation,
    /// Anything else.
    Other,
}

/// One scheduled activity on one day of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    /// Entry ID.
    pub id: ItineraryEntryId,
    /// Trip this entry belongs to.
    pub trip_id: TripId,
    /// Day of the trip, numbered from 1.
    pub trip_day: u32,
    /// When the activity starts.
    pub start_time: NaiveTime,
    /// When the activity ends.
    pub end_time: NaiveTime,
    /// Activity classification.
    pub activity_type: ActivityType,
    /// What the activity is.
    pub activity_name: String,
    /// Where it happens.
    pub location: Option<String>,
    /// How to get there.
    pub transportation: Option<String>,
    /// Travel time in minutes.
    pub transport_time_mins: Option<u32>,
    /// Expected cost in the trip's base currency.
    pub activity_cost: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl ItineraryEntry {
    /// The display section this entry falls into.
    #[must_use]
    pub fn period(&self) -> DayPeriod {
        DayPeriod::of_time(self.start_time)
    }
}

/// Input for creating a new itinerary entry.
///
/// The planner usually only picks a period; an explicit clock time wins
/// when given.
#[derive(Debug, Clone)]
pub struct CreateItineraryInput {
    /// Trip the entry belongs to.
    pub trip_id: TripId,
    /// Day of the trip, numbered from 1.
    pub trip_day: u32,
    /// What the activity is.
    pub activity_name: String,
    /// Activity classification.
    pub activity_type: ActivityType,
    /// Explicit start time, if the planner set one.
    pub start_time: Option<NaiveTime>,
    /// Period used to assign a start time when none is given.
    pub period: DayPeriod,
    /// How long the activity runs.
    pub duration: TimeDelta,
    /// Where it happens.
    pub location: Option<String>,
    /// How to get there.
    pub transportation: Option<String>,
    /// Travel time in minutes.
    pub transport_time_mins: Option<u32>,
    /// Expected cost in the trip's base currency.
    pub activity_cost: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl CreateItineraryInput {
    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidDay` for day 0,
    /// `ItineraryError::EmptyActivityName` for a blank name,
    /// `ItineraryError::NonPositiveDuration` for a zero or negative
    /// duration, `ItineraryError::NegativeCost` for a negative cost.
    pub fn validate(&self) -> Result<(), ItineraryError> {
        if self.trip_day == 0 {
            return Err(ItineraryError::InvalidDay(self.trip_day));
        }
        if self.activity_name.trim().is_empty() {
            return Err(ItineraryError::EmptyActivityName);
        }
        if self.duration <= TimeDelta::zero() {
            return Err(ItineraryError::NonPositiveDuration);
        }
        if let Some(cost) = self.activity_cost {
            if cost.is_sign_negative() {
                return Err(ItineraryError::NegativeCost(cost));
            }
        }
        Ok(())
    }

    /// The start and end times the entry will be stored with: the
    /// explicit start when given, otherwise the period's canonical
    /// start; the end is the start plus the duration.
    #[must_use]
    pub fn window(&self) -> (NaiveTime, NaiveTime) {
        match self.start_time {
            Some(start) => (start, start.overflowing_add_signed(self.duration).0),
            None => self.period.default_window(self.duration),
        }
    }

    /// Builds the entry record, assigning a fresh ID and the derived
    /// time window.
    ///
    /// # Errors
    ///
    /// Propagates validation failures; no record is produced on error.
    pub fn into_entry(self) -> Result<ItineraryEntry, ItineraryError> {
        self.validate()?;
        let (start_time, end_time) = self.window();
        Ok(ItineraryEntry {
            id: ItineraryEntryId::new(),
            trip_id: self.trip_id,
            trip_day: self.trip_day,
            start_time,
            end_time,
            activity_type: self.activity_type,
            activity_name: self.activity_name,
            location: self.location,
            transportation: self.transportation,
            transport_time_mins: self.transport_time_mins,
            activity_cost: self.activity_cost,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::itinerary::period::DaySchedule;

    fn input(period: DayPeriod) -> CreateItineraryInput {
        CreateItineraryInput {
            trip_id: TripId::new(),
            trip_day: 2,
            activity_name: "Fushimi Inari".to_string(),
            activity_type: ActivityType::Sightseeing,
            start_time: None,
            period,
            duration: TimeDelta::hours(2),
            location: Some("Kyoto".to_string()),
            transportation: None,
            transport_time_mins: None,
            activity_cost: None,
            notes: None,
        }
    }

    #[test]
    fn test_period_only_entry_gets_canonical_times() {
        let entry = input(DayPeriod::Morning).into_entry().unwrap();
        assert_eq!(entry.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(entry.end_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(entry.period(), DayPeriod::Morning);
    }

    #[test]
    fn test_explicit_start_time_wins() {
        let mut with_time = input(DayPeriod::Morning);
        with_time.start_time = NaiveTime::from_hms_opt(13, 30, 0);
        let entry = with_time.into_entry().unwrap();
        assert_eq!(entry.start_time, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        assert_eq!(entry.end_time, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
        assert_eq!(entry.period(), DayPeriod::Afternoon);
    }

    #[test]
    fn test_day_zero_rejected() {
        let mut bad = input(DayPeriod::Morning);
        bad.trip_day = 0;
        assert!(matches!(bad.validate(), Err(ItineraryError::InvalidDay(0))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut bad = input(DayPeriod::Morning);
        bad.activity_name = " ".to_string();
        assert!(matches!(
            bad.validate(),
            Err(ItineraryError::EmptyActivityName)
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut bad = input(DayPeriod::Morning);
        bad.duration = TimeDelta::zero();
        assert!(matches!(
            bad.validate(),
            Err(ItineraryError::NonPositiveDuration)
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut bad = input(DayPeriod::Morning);
        bad.activity_cost = Some(dec!(-5));
        assert!(matches!(
            bad.validate(),
            Err(ItineraryError::NegativeCost(_))
        ));
    }

    #[test]
    fn test_day_schedule_grouping() {
        let morning = input(DayPeriod::Morning).into_entry().unwrap();
        let afternoon = input(DayPeriod::Afternoon).into_entry().unwrap();
        let evening_a = input(DayPeriod::Evening).into_entry().unwrap();
        let evening_b = input(DayPeriod::Evening).into_entry().unwrap();

        let schedule = DaySchedule::group(vec![
            evening_a.clone(),
            morning.clone(),
            afternoon.clone(),
            evening_b.clone(),
        ]);

        assert_eq!(schedule.morning, vec![morning]);
        assert_eq!(schedule.afternoon, vec![afternoon]);
        // Order within a section follows input order.
        assert_eq!(schedule.evening, vec![evening_a, evening_b]);
    }
}
