/// Display template: 48 digit slots (`X`) grouped as 11 data digits,
/// a dash, the group check digit and a trailing space.
pub const MASK_TEMPLATE: &str = "XXXXXXXXXXX-X XXXXXXXXXXX-X XXXXXXXXXXX-X XXXXXXXXXXX-X ";

/// Number of characters in [`MASK_TEMPLATE`]
pub const MASK_LEN: usize = 56;

/// Slot marker inside the template
pub const SLOT: u8 = b'X';

/// Render `digits` through the template.
///
/// Each digit fills the next slot and is followed by the literals that sit
/// between it and the following slot. Everything after the last digit is
/// blank, so the result is always [`MASK_LEN`] characters long.
///
/// Input is expected to be at most 48 ASCII digits. Characters past the last
/// slot are dropped.
pub fn render_masked(digits: &str) -> String {
    let template = MASK_TEMPLATE.as_bytes();
    let mut out = String::with_capacity(MASK_LEN);
    let mut digits = digits.chars();
    let mut pos = 0;

    // Template starts with a slot, and the inner loop always stops on one.
    while pos < template.len() {
        let Some(d) = digits.next() else {
            break;
        };
        out.push(d);
        pos += 1;
        while pos < template.len() && template[pos] != SLOT {
            out.push(template[pos] as char);
            pos += 1;
        }
    }

    // pos counts characters written, not bytes
    out.extend(std::iter::repeat_n(' ', MASK_LEN - pos));
    out
}

/// Overlay hint: the part of the display already covered by typed digits is
/// blanked and the rest of the template shows through.
pub fn render_hint(digit_count: usize) -> String {
    let covered = display_width(digit_count);
    let mut out = " ".repeat(covered);
    out.push_str(&MASK_TEMPLATE[covered..]);
    out
}

/// Display columns taken by `digit_count` digits, separators included.
pub fn display_width(digit_count: usize) -> usize {
    if digit_count == 0 {
        return 0;
    }
    let template = MASK_TEMPLATE.as_bytes();
    let mut seen = 0;
    for (pos, &c) in template.iter().enumerate() {
        if c == SLOT {
            seen += 1;
            if seen == digit_count {
                let mut end = pos + 1;
                while end < template.len() && template[end] != SLOT {
                    end += 1;
                }
                return end;
            }
        }
    }
    MASK_LEN
}
