//! Gobbling of hexadecimal escape bodies.
//!
//! After a backslash, the grammar admits one to six hex digits followed by
//! an optional terminating space. The gobbler consumes the longest digit
//! run up to six, folds it into a code point as digits arrive, and
//! swallows a single trailing ASCII space when present.

use crate::code_point;

/// Longest digit run a hex escape may carry.
const MAX_HEX_DIGITS: usize = 6;

/// A resolved hex escape: the decoded character and how many input bytes
/// the escape body consumed. The count covers the digits and the optional
/// terminating space, not the introducing backslash.
pub(crate) struct HexEscape {
    pub ch: char,
    pub consumed: usize,
}

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

/// Gobbles a hex escape body from the text following a backslash.
///
/// Returns `None` when the text does not start with a hex digit; the
/// caller then treats the escape as a single-character escape.
pub(crate) fn gobble(rest: &str) -> Option<HexEscape> {
    let bytes = rest.as_bytes();
    let mut acc: u32 = 0;
    let mut digits = 0;

    while digits < MAX_HEX_DIGITS {
        let Some(d) = bytes.get(digits).copied().and_then(hex_val) else {
            break;
        };
        acc = (acc << 4) | d;
        digits += 1;
    }

    if digits == 0 {
        return None;
    }

    // One space after the digit run terminates the escape and is consumed
    // with it. Other whitespace is left for the caller.
    let mut consumed = digits;
    if bytes.get(consumed) == Some(&b' ') {
        consumed += 1;
    }

    Some(HexEscape {
        ch: code_point::resolve(acc),
        consumed,
    })
}

#[cfg(test)]
mod tests {
    use super::gobble;

    #[test]
    fn basic_decoding() {
        let esc = gobble("41").unwrap();
        assert_eq!(esc.ch, 'A');
        assert_eq!(esc.consumed, 2);
    }

    #[test]
    fn mixed_case_hex() {
        let esc = gobble("AbCd").unwrap();
        assert_eq!(esc.ch, char::from_u32(0xABCD).unwrap());
        assert_eq!(esc.consumed, 4);
    }

    #[test]
    fn stops_at_first_non_digit() {
        let esc = gobble("4g").unwrap();
        assert_eq!(esc.ch, '\u{4}');
        assert_eq!(esc.consumed, 1);
    }

    #[test]
    fn caps_at_six_digits() {
        let esc = gobble("01F600AB").unwrap();
        assert_eq!(esc.ch, '\u{1F600}');
        assert_eq!(esc.consumed, 6);
    }

    #[test]
    fn space_terminates_and_is_consumed() {
        let esc = gobble("41 B").unwrap();
        assert_eq!(esc.ch, 'A');
        assert_eq!(esc.consumed, 3);
    }

    #[test]
    fn space_after_six_digits_is_consumed() {
        let esc = gobble("01F600 x").unwrap();
        assert_eq!(esc.ch, '\u{1F600}');
        assert_eq!(esc.consumed, 7);
    }

    #[test]
    fn other_whitespace_is_not_a_terminator() {
        let esc = gobble("41\tB").unwrap();
        assert_eq!(esc.ch, 'A');
        assert_eq!(esc.consumed, 2);
    }

    #[test]
    fn no_digits_is_not_a_hex_escape() {
        assert!(gobble("g").is_none());
        assert!(gobble("").is_none());
        assert!(gobble(" 41").is_none());
    }

    #[test]
    fn surrogate_decodes_to_replacement() {
        let esc = gobble("d800").unwrap();
        assert_eq!(esc.ch, '\u{FFFD}');
        assert_eq!(esc.consumed, 4);
    }

    #[test]
    fn digit_run_extends_through_hex_letters() {
        // "d" keeps the run going; "i" stops it.
        let esc = gobble("e9dition").unwrap();
        assert_eq!(esc.ch, '\u{E9D}');
        assert_eq!(esc.consumed, 3);
    }

    #[test]
    fn multibyte_after_digits_is_untouched() {
        let esc = gobble("41\u{E9}").unwrap();
        assert_eq!(esc.ch, 'A');
        assert_eq!(esc.consumed, 2);
    }
}
