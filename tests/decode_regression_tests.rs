//! Integration tests for digitable line decoding regression testing
//!
//! These tests drive the public API end to end: typing a line into the
//! masked field, decoding it, and checking each rejection path. They
//! protect the field offsets and the check digit order.

use rust_boleto::{
    Amount, CompanyTable, Edit, InputBuffer, InvalidReason, Key, LINE_LEN, MASK_TEMPLATE,
    ValidationOutcome, decode, decode_with, normalize_line,
};

/// Sample slip as printed; the check digit of its third group does not
/// match the modulus-10 rule.
const PRINTED_SAMPLE: &str = "846700000009699001090116033141666515101001037833";

/// Same slip with the third group's check digit recomputed.
const VALID_SAMPLE: &str = "846700000009699001090116033141666512101001037833";

fn with_digit(line: &str, index: usize, digit: char) -> String {
    let mut out = line.to_string();
    out.replace_range(index..index + 1, &digit.to_string());
    out
}

#[test]
fn test_type_and_decode_sample() {
    let mut buffer = InputBuffer::new();
    for c in VALID_SAMPLE.chars() {
        assert!(buffer.apply(Edit::digit(c)).is_ok());
    }
    assert!(buffer.is_complete());
    assert_eq!(buffer.len(), LINE_LEN);

    let record = decode(buffer.digits()).into_result().expect("sample should decode");
    assert_eq!(record.product, '8');
    assert_eq!(record.segment_code, '4');
    assert_eq!(record.value_type, '6');
    assert_eq!(record.company_id, "0109");
    assert_eq!(record.company_name.as_deref(), Some("Live TIM"));
    assert_eq!(record.value, Amount::from_minor_units(6990));
    assert_eq!(record.value.to_string(), "69.90");
    assert_eq!(&record.payload[4..15], "00000006990");
}

#[test]
fn test_printed_sample_fails_on_third_group() {
    assert_eq!(
        decode(PRINTED_SAMPLE),
        ValidationOutcome::Invalid(InvalidReason::ChecksumMismatch {
            group: 2,
            expected: '2',
            found: '5'
        })
    );
}

#[test]
fn test_47_digits_is_wrong_length() {
    assert_eq!(
        decode(&VALID_SAMPLE[..47]),
        ValidationOutcome::Invalid(InvalidReason::WrongLength { found: 47 })
    );
}

#[test]
fn test_product_nine_is_bad_product() {
    assert_eq!(
        decode(&with_digit(VALID_SAMPLE, 0, '9')),
        ValidationOutcome::Invalid(InvalidReason::BadProduct { found: '9' })
    );
}

#[test]
fn test_altered_data_digit_reports_its_group() {
    // (line index, group) pairs away from the check digits
    for (index, group) in [(7, 0), (14, 1), (29, 2), (40, 3)] {
        let original = VALID_SAMPLE.as_bytes()[index] as char;
        let replacement = if original == '1' { '2' } else { '1' };
        let line = with_digit(VALID_SAMPLE, index, replacement);
        match decode(&line) {
            ValidationOutcome::Invalid(InvalidReason::ChecksumMismatch { group: g, .. }) => {
                assert_eq!(g, group, "edit at {index}")
            }
            other => panic!("edit at {index}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_decode_is_deterministic() {
    for line in [VALID_SAMPLE, PRINTED_SAMPLE, &VALID_SAMPLE[..10]] {
        assert_eq!(decode(line), decode(line));
    }
}

#[test]
fn test_masked_text_round_trips_through_normalize() {
    let mut buffer = InputBuffer::new();
    buffer.type_str(VALID_SAMPLE);
    let masked = buffer.masked();
    assert_eq!(masked.len(), MASK_TEMPLATE.len());
    assert!(decode(&normalize_line(&masked)).is_valid());
}

#[test]
fn test_clear_after_partial_and_full_input() {
    for fill in [0, 1, 11, 12, 30, 48] {
        let mut buffer = InputBuffer::new();
        buffer.type_str(&VALID_SAMPLE[..fill]);
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.masked(), " ".repeat(MASK_TEMPLATE.len()));
    }
}

#[test]
fn test_correcting_a_typo_mid_line() {
    let mut buffer = InputBuffer::new();
    buffer.type_str(PRINTED_SAMPLE);
    assert!(!decode(buffer.digits()).is_valid());

    // select the bad check digit of group 2 and overtype it
    buffer.apply(Edit::digit('2').selecting(35..36)).unwrap();
    assert!(decode(buffer.digits()).is_valid());

    // delete it, then re-insert at the caret
    buffer.apply(Edit::key(Key::Backspace).at(36)).unwrap();
    assert!(!buffer.is_complete());
    buffer.apply(Edit::digit('2').at(35)).unwrap();
    assert_eq!(buffer.digits(), VALID_SAMPLE);
}

#[test]
fn test_custom_company_table() {
    let table = CompanyTable::parse("0109\tTIM Celular\n").unwrap();
    let record = decode_with(VALID_SAMPLE, &table).into_result().unwrap();
    assert_eq!(record.company_name.as_deref(), Some("TIM Celular"));
    assert_eq!(record.segment_name.as_deref(), Some("Telecomunicações"));
}

#[test]
fn test_outcome_json() {
    let json = serde_json::to_value(decode(VALID_SAMPLE)).unwrap();
    assert_eq!(json["status"], "valid");
    assert_eq!(json["detail"]["company_id"], "0109");
    assert_eq!(json["detail"]["value"], "69.90");
}
