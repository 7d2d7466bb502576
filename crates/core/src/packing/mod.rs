//! Packing checklist with per-person and claimable shared items.

pub mod error;
pub mod service;
pub mod types;


pub use error::PackingError;
pub use service::{PackingProgress, PackingService};
pub use types::{
    ChecklistState, CreatePackingItemInput, PackingCategory, PackingItem, PackingStyle,
};
