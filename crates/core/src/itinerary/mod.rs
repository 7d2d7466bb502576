//! Day-by-day itinerary planning and time-of-day bucketing.

pub mod error;
pub mod period;
pub mod types;

pub use error::ItineraryError;
pub use period::{DayPeriod, DaySchedule};
pub use types::{ActivityType, CreateItineraryInput, ItineraryEntry};
