//! Typed boundary over loosely-typed remote store rows.
//!
//! The hosted backend returns rows as untyped JSON. Everything is
//! coerced and validated here, once, so ambiguity never reaches the
//! pure calculations: snapshot in, snapshot out.

pub mod rows;
pub mod types;

pub use rows::{decimal_field, expense_from_row, member_from_row, trip_from_row};
pub use types::{TripSettlement, TripSnapshot};
