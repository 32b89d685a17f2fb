//! Masked numeric input
//!
//! The state machine behind a 48-digit input field:
//! - Key parsing (digits, deletion and caret keys)
//! - Edit planning against the digit ceiling
//! - Masked rendering of the typed digits

/// Digit buffer and change notification
pub mod buffer;
/// Edit events and rejection reasons
pub mod edit;
/// Key names accepted by the field
pub mod key;
/// Display template and rendering
pub mod mask;

pub use buffer::{InputBuffer, ListenerId};
pub use edit::{Edit, EditEffect, EditRejected};
pub use key::Key;
pub use mask::{MASK_TEMPLATE, render_hint, render_masked};
