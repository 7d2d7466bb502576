//! Time-of-day bucketing for itinerary entries.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use super::types::ItineraryEntry;

/// The three fixed periods a day is planned around.
///
/// Boundaries: 12:00 is afternoon, not morning; 18:00 is evening, not
/// afternoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// Before 12:00.
    Morning,
    /// 12:00 through 17:59.
    Afternoon,
    /// 18:00 onward.
    Evening,
}

impl DayPeriod {
    /// Buckets an hour of day (0-23) into its period.
    #[must_use]
    pub const fn of_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Buckets a clock time into its period.
    #[must_use]
    pub fn of_time(time: NaiveTime) -> Self {
        Self::of_hour(time.hour())
    }

    /// The canonical start time assigned when an entry is created with
    /// only a period selected.
    #[must_use]
    pub fn default_start(self) -> NaiveTime {
        let hour = match self {
            Self::Morning => 9,
            Self::Afternoon => 14,
            Self::Evening => 19,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// The canonical start plus a caller-supplied duration, wrapping at
    /// midnight.
    #[must_use]
    pub fn default_window(self, duration: TimeDelta) -> (NaiveTime, NaiveTime) {
        let start = self.default_start();
        (start, start.overflowing_add_signed(duration).0)
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Afternoon => write!(f, "afternoon"),
            Self::Evening => write!(f, "evening"),
        }
    }
}

/// One day's entries partitioned into display sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Entries starting before 12:00.
    pub morning: Vec<ItineraryEntry>,
    /// Entries starting 12:00-17:59.
    pub afternoon: Vec<ItineraryEntry>,
    /// Entries starting 18:00 onward.
    pub evening: Vec<ItineraryEntry>,
}

impl DaySchedule {
    /// Partitions entries into the three sections, preserving order
    /// within each.
    #[must_use]
    pub fn group(entries: Vec<ItineraryEntry>) -> Self {
        let mut schedule = Self::default();
        for entry in entries {
            match DayPeriod::of_time(entry.start_time) {
                DayPeriod::Morning => schedule.morning.push(entry),
                DayPeriod::Afternoon => schedule.afternoon.push(entry),
                DayPeriod::Evening => schedule.evening.push(entry),
            }
        }
        schedule
    }
}
