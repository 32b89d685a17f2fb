//! RustBoleto - masked entry and decoding of payment slip digitable lines
//!
//! A 48-digit collection-slip line is typed into a masked field, then split
//! into four check-digit protected groups and decoded into typed fields.
//! Designed to sit under any presentation layer: the field state machine
//! never needs a UI and the decoder is a pure function.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tunables
pub mod config;
/// Line layout, check digits and the decoder
pub mod decoder;
/// Masked input state machine
pub mod input;
/// Segment and company display names
pub mod lookup;
/// Core data structures (DecodedRecord, Amount, ValidationOutcome)
pub mod models;
/// Batch decoding
pub mod pipeline;
/// Helpers shared by the command-line tool
pub mod tools;

mod debug;

pub use decoder::layout::LINE_LEN;
pub use decoder::normalize_line;
pub use input::{Edit, EditEffect, EditRejected, InputBuffer, Key, MASK_TEMPLATE};
pub use lookup::{BuiltinNames, CompanyTable, NameLookup};
pub use models::{Amount, DecodedRecord, InvalidReason, ValidationOutcome};

use decoder::line_decoder::LineDecoder;

/// Decode a 48-digit line using the built-in name tables
///
/// # Arguments
/// * `line` - Exactly 48 ASCII digits, no separators
///
/// # Returns
/// `Valid` with every field, or the first reason the line failed
pub fn decode(line: &str) -> ValidationOutcome {
    LineDecoder::decode(line, &BuiltinNames)
}

/// Decode a 48-digit line resolving names through `names`
pub fn decode_with(line: &str, names: &dyn NameLookup) -> ValidationOutcome {
    LineDecoder::decode(line, names)
}

/// Input field that decodes itself once the last digit arrives
pub struct SlipEntry<L: NameLookup = BuiltinNames> {
    buffer: InputBuffer,
    names: L,
}

impl SlipEntry<BuiltinNames> {
    /// Empty field using the built-in name tables
    pub fn new() -> Self {
        Self::with_names(BuiltinNames)
    }
}

impl Default for SlipEntry<BuiltinNames> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: NameLookup> SlipEntry<L> {
    /// Empty field resolving names through `names`
    pub fn with_names(names: L) -> Self {
        Self {
            buffer: InputBuffer::new(),
            names,
        }
    }

    /// Apply one edit to the underlying buffer
    pub fn apply(&mut self, edit: Edit) -> Result<EditEffect, EditRejected> {
        self.buffer.apply(edit)
    }

    /// Reset to an empty field
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The field state
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Mutable access, e.g. to subscribe listeners
    pub fn buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.buffer
    }

    /// Decode result, `None` while the field is incomplete
    pub fn outcome(&self) -> Option<ValidationOutcome> {
        self.buffer
            .is_complete()
            .then(|| LineDecoder::decode(self.buffer.digits(), &self.names))
    }
}
