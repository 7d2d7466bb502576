//! Deterministic trip cover selection.
//!
//! The same trip always shows the same cover across reloads without
//! persisting a choice: the trip id hashes onto a fixed catalog.

use super::error::TripError;

/// Picks the cover image for a trip from `catalog`.
///
/// Sums the code points of `trip_id` and indexes the catalog with the
/// sum modulo its length. Pure: a fixed id and catalog always select
/// the same entry.
///
/// # Errors
///
/// Returns `TripError::EmptyCoverCatalog` when `catalog` is empty.
pub fn select_cover<'a>(trip_id: &str, catalog: &'a [String]) -> Result<&'a str, TripError> {
    if catalog.is_empty() {
        return Err(TripError::EmptyCoverCatalog);
    }
    let hash = trip_id
        .chars()
        .fold(0usize, |acc, c| acc.wrapping_add(c as usize));
    Ok(&catalog[hash % catalog.len()])
}

/// Formats the hosted URL for a catalog image id.
#[must_use]
pub fn cover_url(image_id: &str) -> String {
    format!("https://images.unsplash.com/{image_id}?q=80&w=800&auto=format&fit=crop")
}
