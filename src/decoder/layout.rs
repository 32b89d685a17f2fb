use std::ops::Range;

/// Digits in a complete digitable line
pub const LINE_LEN: usize = 48;
/// Checksum-protected groups in a line
pub const GROUP_COUNT: usize = 4;
/// Characters per group (data digits + check digit)
pub const GROUP_LEN: usize = 12;
/// Data digits per group
pub const GROUP_DATA_LEN: usize = 11;
/// Digits in the canonical payload (checksum digits removed)
pub const PAYLOAD_LEN: usize = GROUP_COUNT * GROUP_DATA_LEN;

/// Field offsets inside the 44-digit canonical payload.
pub mod field {
    use std::ops::Range;

    /// Product identifier, `8` for collection slips
    pub const PRODUCT: Range<usize> = 0..1;
    /// Segment code
    pub const SEGMENT: Range<usize> = 1..2;
    /// Value type, selects the check digit algorithm
    pub const VALUE_TYPE: Range<usize> = 2..3;
    /// General check digit over the payload
    pub const ERROR_CHECK: Range<usize> = 3..4;
    /// Amount in cents, zero padded
    pub const VALUE: Range<usize> = 4..15;
    /// Company or agency identifier
    pub const COMPANY: Range<usize> = 15..19;
    /// Issuer-defined remainder
    pub const FREE_FIELD: Range<usize> = 19..44;
}

/// Product digit of collection slips
pub const PRODUCT_COLLECTION: char = '8';

/// Character range of group `index` inside the 48-digit line
pub fn group_range(index: usize) -> Range<usize> {
    let start = index * GROUP_LEN;
    start..start + GROUP_LEN
}

/// Build the canonical payload by dropping each group's check digit.
///
/// `line` must be [`LINE_LEN`] ASCII digits.
pub(crate) fn payload_of(line: &str) -> String {
    (0..GROUP_COUNT)
        .map(|g| &line[group_range(g)][..GROUP_DATA_LEN])
        .collect()
}
