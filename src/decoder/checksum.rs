/// Check digit algorithm selected by the value-type digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    /// Weights 2,1,2,1... with digit sums (value types 6 and 7)
    Modulo10,
    /// Value types 8 and 9. Not implemented: lines using it are rejected.
    Modulo11,
}

impl ChecksumKind {
    /// Algorithm for a value-type digit, `None` for digits outside 6-9
    pub fn from_value_type(digit: char) -> Option<Self> {
        match digit {
            '6' | '7' => Some(ChecksumKind::Modulo10),
            '8' | '9' => Some(ChecksumKind::Modulo11),
            _ => None,
        }
    }
}

/// Modulus-10 check digit over ASCII `digits`.
///
/// Digits at even positions (0-based, left to right) are doubled and the
/// decimal digits of every product are summed. The check digit is the
/// distance from the total to the next multiple of ten.
pub fn mod10_check_digit(digits: &str) -> Option<u8> {
    let mut total = 0u32;
    for (i, c) in digits.chars().enumerate() {
        let d = c.to_digit(10)?;
        let product = if i % 2 == 0 { d * 2 } else { d };
        total += product / 10 + product % 10;
    }
    let remainder = (total % 10) as u8;
    Some(if remainder == 0 { 0 } else { 10 - remainder })
}

/// Result of checking one 12-character group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCheck {
    /// Check digit matches the data digits.
    Pass,
    /// Check digit differs from the one computed over the data digits.
    Mismatch {
        /// Digit the modulus-10 rule produces.
        expected: char,
        /// Digit present in the group.
        found: char,
    },
}

/// Verify a group of data digits followed by its check digit.
///
/// Returns `None` when the group is empty or holds non-digits, the check
/// digit included.
pub fn verify_group(group: &str) -> Option<GroupCheck> {
    let (data, check) = group.split_at_checked(group.len().checked_sub(1)?)?;
    let found = check.chars().next().filter(char::is_ascii_digit)?;
    let expected = char::from(b'0' + mod10_check_digit(data)?);
    Some(if expected == found {
        GroupCheck::Pass
    } else {
        GroupCheck::Mismatch { expected, found }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_groups() {
        assert_eq!(mod10_check_digit("84670000000"), Some(9));
        assert_eq!(mod10_check_digit("69900109011"), Some(6));
        assert_eq!(mod10_check_digit("03314166651"), Some(2));
        assert_eq!(mod10_check_digit("10100103783"), Some(3));
    }

    #[test]
    fn test_zero_remainder() {
        assert_eq!(mod10_check_digit("00000000000"), Some(0));
        // 5*2 = 10 -> 1, plus 9 -> total 10
        assert_eq!(mod10_check_digit("59"), Some(0));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(mod10_check_digit("12a"), None);
        assert_eq!(verify_group(""), None);
        assert_eq!(verify_group("1234x"), None);
    }

    #[test]
    fn test_non_digit_check_position_is_not_a_mismatch() {
        assert_eq!(verify_group("84670000000x"), None);
        assert_eq!(verify_group("84670000000-"), None);
        assert_eq!(verify_group("84670000000 "), None);
        assert_eq!(verify_group("x"), None);
    }

    #[test]
    fn test_verify_group() {
        assert_eq!(verify_group("846700000009"), Some(GroupCheck::Pass));
        assert_eq!(
            verify_group("033141666515"),
            Some(GroupCheck::Mismatch {
                expected: '2',
                found: '5'
            })
        );
    }

    #[test]
    fn test_every_single_substitution_is_detected() {
        let data = "84670000000";
        for pos in 0..data.len() {
            for d in '0'..='9' {
                if data.as_bytes()[pos] as char == d {
                    continue;
                }
                let mut altered = data.to_string();
                altered.replace_range(pos..pos + 1, &d.to_string());
                assert_ne!(
                    mod10_check_digit(&altered),
                    mod10_check_digit(data),
                    "substitution at {pos} with {d} went unnoticed"
                );
            }
        }
    }

    #[test]
    fn test_adjacent_09_transposition_is_not_detected() {
        // 0*2 + 9 and 9*2 -> 1+8 + 0 both sum to 9
        assert_eq!(
            mod10_check_digit("09000000000"),
            mod10_check_digit("90000000000")
        );
    }

    #[test]
    fn test_kind_from_value_type() {
        assert_eq!(
            ChecksumKind::from_value_type('6'),
            Some(ChecksumKind::Modulo10)
        );
        assert_eq!(
            ChecksumKind::from_value_type('9'),
            Some(ChecksumKind::Modulo11)
        );
        assert_eq!(ChecksumKind::from_value_type('3'), None);
    }
}
