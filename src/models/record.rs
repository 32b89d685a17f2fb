use serde::Serialize;
use thiserror::Error;

use super::Amount;

/// Fields of a verified digitable line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    /// Product identifier, always `'8'` for collection slips
    pub product: char,
    /// Segment the issuer belongs to (utilities, telecom, ...)
    pub segment_code: char,
    /// Segment label, when known
    pub segment_name: Option<String>,
    /// Selects the check digit algorithm
    pub value_type: char,
    /// General check digit over the barcode; echoed, not re-validated
    pub error_check_digit: char,
    /// Amount due
    pub value: Amount,
    /// 4-digit issuer identifier
    pub company_id: String,
    /// Company label from the active name table
    pub company_name: Option<String>,
    /// Issuer-defined, opaque
    pub free_field: String,
    /// 44-digit canonical payload (group check digits removed)
    pub payload: String,
    /// Verified check digit of each group
    pub group_check_digits: [char; 4],
}

/// Why a line failed to decode
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidReason {
    /// Line is not 48 characters long
    #[error("expected 48 digits, found {found}")]
    WrongLength {
        /// Characters present
        found: usize,
    },
    /// Line holds something other than a digit
    #[error("non-digit character at position {index}")]
    NonDigit {
        /// Character position of the first offender
        index: usize,
    },
    /// First digit is not `8`
    #[error("product digit is {found:?}, expected '8'")]
    BadProduct {
        /// Product digit present
        found: char,
    },
    /// Value type outside 6-9
    #[error("value type {found:?} does not select a check digit algorithm")]
    UnknownValueType {
        /// Value type digit present
        found: char,
    },
    /// Value type 8 or 9 (modulus-11)
    #[error("modulus-11 check digits are not supported")]
    UnsupportedChecksum,
    /// A group's check digit is wrong. Groups are checked in order, so this
    /// is the first failing one.
    #[error("check digit of group {group} is {found:?}, expected {expected:?}")]
    ChecksumMismatch {
        /// Group index, 0 to 3
        group: usize,
        /// Computed check digit
        expected: char,
        /// Check digit present in the line
        found: char,
    },
}

/// Outcome of decoding one line. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every check passed
    Valid(DecodedRecord),
    /// First failing check
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    /// True for [`ValidationOutcome::Valid`]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// Decoded fields, if valid
    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            ValidationOutcome::Valid(record) => Some(record),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// Failure reason, if invalid
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` for use with `?`
    pub fn into_result(self) -> Result<DecodedRecord, InvalidReason> {
        match self {
            ValidationOutcome::Valid(record) => Ok(record),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<DecodedRecord, InvalidReason>> for ValidationOutcome {
    fn from(result: Result<DecodedRecord, InvalidReason>) -> Self {
        match result {
            Ok(record) => ValidationOutcome::Valid(record),
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}
