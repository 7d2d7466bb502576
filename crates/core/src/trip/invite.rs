//! Shareable invite links.
//!
//! Membership is invitation-by-link: anyone holding the link can join
//! the trip (as `Role::for_joiner()`); access control past that point
//! is the remote store's row-level security.

use tripmate_shared::types::TripId;

/// Builds the shareable join link for a trip.
#[must_use]
pub fn invite_link(base_url: &str, trip_id: TripId) -> String {
    format!("{}/trips/{trip_id}/join", base_url.trim_end_matches('/'))
}
