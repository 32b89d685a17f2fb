use super::checksum::{ChecksumKind, GroupCheck, verify_group};
use super::layout::{
    GROUP_COUNT, GROUP_LEN, LINE_LEN, PRODUCT_COLLECTION, field, group_range, payload_of,
};
use crate::lookup::NameLookup;
use crate::models::{Amount, DecodedRecord, InvalidReason, ValidationOutcome};

/// Turns a 48-digit line into a verified [`DecodedRecord`]
pub struct LineDecoder;

impl LineDecoder {
    /// Decode and verify `line`.
    ///
    /// Checks run in a fixed order and the first failure wins: length,
    /// digits only, product digit, value type, then the four group check
    /// digits from left to right.
    pub fn decode(line: &str, names: &dyn NameLookup) -> ValidationOutcome {
        let outcome: ValidationOutcome = Self::decode_inner(line, names).into();
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            if let ValidationOutcome::Invalid(reason) = &outcome {
                eprintln!("DECODE: rejected {:?}: {}", line, reason);
            }
        }
        outcome
    }

    fn decode_inner(line: &str, names: &dyn NameLookup) -> Result<DecodedRecord, InvalidReason> {
        let found = line.chars().count();
        if found != LINE_LEN {
            return Err(InvalidReason::WrongLength { found });
        }
        if let Some(index) = line.chars().position(|c| !c.is_ascii_digit()) {
            return Err(InvalidReason::NonDigit { index });
        }

        // All ASCII from here, so byte offsets are character offsets.
        let payload = payload_of(line);
        let at = |range: std::ops::Range<usize>| &payload[range];
        let first = |range: std::ops::Range<usize>| payload.as_bytes()[range.start] as char;

        let product = first(field::PRODUCT);
        if product != PRODUCT_COLLECTION {
            return Err(InvalidReason::BadProduct { found: product });
        }

        let value_type = first(field::VALUE_TYPE);
        match ChecksumKind::from_value_type(value_type) {
            Some(ChecksumKind::Modulo10) => {}
            // TODO: modulus-11 weighting is not defined yet; reject until it is.
            Some(ChecksumKind::Modulo11) => return Err(InvalidReason::UnsupportedChecksum),
            None => return Err(InvalidReason::UnknownValueType { found: value_type }),
        }
        let group_check_digits = Self::verify_groups(line)?;

        let segment_code = first(field::SEGMENT);
        let error_check_digit = first(field::ERROR_CHECK);
        let company_id = at(field::COMPANY).to_string();
        let free_field = at(field::FREE_FIELD).to_string();
        let value = Amount::parse_digits(at(field::VALUE)).unwrap_or_default();

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "DECODE: segment={} company={} value={}",
                segment_code, company_id, value
            );
        }

        Ok(DecodedRecord {
            product,
            segment_code,
            segment_name: names.segment_name(segment_code).map(str::to_string),
            value_type,
            error_check_digit,
            value,
            company_name: names.company_name(&company_id).map(str::to_string),
            company_id,
            free_field,
            group_check_digits,
            payload,
        })
    }

    fn verify_groups(line: &str) -> Result<[char; GROUP_COUNT], InvalidReason> {
        let mut checks = ['0'; GROUP_COUNT];
        for (group, check) in checks.iter_mut().enumerate() {
            let text = &line[group_range(group)];
            match verify_group(text) {
                Some(GroupCheck::Pass) => *check = text.as_bytes()[GROUP_LEN - 1] as char,
                Some(GroupCheck::Mismatch { expected, found }) => {
                    return Err(InvalidReason::ChecksumMismatch {
                        group,
                        expected,
                        found,
                    });
                }
                // Unreachable after the digit check; treat like a bad digit.
                None => {
                    return Err(InvalidReason::NonDigit {
                        index: group * GROUP_LEN,
                    });
                }
            }
        }
        Ok(checks)
    }
}
