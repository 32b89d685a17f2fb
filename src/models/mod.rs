//! Decoded records and their building blocks

/// Fixed-point monetary amount
pub mod amount;
/// Decode results and failure reasons
pub mod record;

pub use amount::Amount;
pub use record::{DecodedRecord, InvalidReason, ValidationOutcome};
