//! Digitable line decoding modules
//!
//! Everything that happens once a line is complete:
//! - Layout of the 48-digit line and the 44-digit payload
//! - Modulus-10 check digits (modulus-11 is recognised but not implemented)
//! - Field extraction into a [`crate::DecodedRecord`]

/// Check digit algorithms
pub mod checksum;
/// Group sizes and payload field offsets
pub mod layout;
/// Main decoder that runs the validation pipeline
pub mod line_decoder;

/// Strip display separators (spaces, `-`, `.`) from a pasted or rendered
/// line so the masked form can be decoded directly.
pub fn normalize_line(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '\t'))
        .collect()
}
