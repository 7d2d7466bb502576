//! Even-split expense settlement.
//!
//! Converts a snapshot of trip members and recorded expenses into a
//! ranked ledger of who is owed and who owes.

pub mod error;
pub mod service;
pub mod types;


#[cfg(test)]
mod service_props;

pub use error::SettlementError;
pub use service::SettlementService;
pub use types::{Member, MemberBalance, Settlement};
