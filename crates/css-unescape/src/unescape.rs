//! The decode loop: verbatim runs, escape resolution, borrowed fast path.

use alloc::{borrow::Cow, string::String};

use bstr::ByteSlice;

use crate::hex_escape;

/// Decodes CSS escape sequences in `input`.
///
/// Hex escapes resolve to the code point they name, with U+FFFD standing
/// in for zero, surrogates, and values above U+10FFFF. A backslash before
/// a non-hex character escapes that character itself, and a lone backslash
/// at the end of the input is kept literally.
///
/// Input without a backslash is returned borrowed, without allocating.
///
/// ```rust
/// use css_unescape::unescape;
///
/// assert_eq!(unescape(r"\41 BC"), "ABC");
/// assert_eq!(unescape(r"\0"), "\u{FFFD}");
/// assert_eq!(unescape(r"a\.b"), "a.b");
/// ```
#[must_use]
pub fn unescape(input: &str) -> Cow<'_, str> {
    let Some(at) = input.as_bytes().find_byte(b'\\') else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..at]);
    decode(&input[at..], &mut out);
    Cow::Owned(out)
}

/// Appends the decoded form of `input` to `out`.
///
/// Same transform as [`unescape`], writing into a caller-owned scratch
/// buffer so a loop over many tokens can reuse one allocation.
///
/// ```rust
/// use css_unescape::unescape_into;
///
/// let mut scratch = String::new();
/// for token in [r"\31 23", r"a\.b"] {
///     scratch.clear();
///     unescape_into(token, &mut scratch);
/// }
/// assert_eq!(scratch, "a.b");
/// ```
pub fn unescape_into(input: &str, out: &mut String) {
    out.reserve(input.len());
    decode(input, out);
}

fn decode(input: &str, out: &mut String) {
    let mut rest = input;
    while let Some(at) = rest.as_bytes().find_byte(b'\\') {
        out.push_str(&rest[..at]);
        rest = resolve_escape(&rest[at + 1..], out);
    }
    out.push_str(rest);
}

/// Resolves one escape, with `rest` starting right after the backslash.
/// Returns the unconsumed remainder.
fn resolve_escape<'a>(rest: &'a str, out: &mut String) -> &'a str {
    if let Some(esc) = hex_escape::gobble(rest) {
        out.push(esc.ch);
        return &rest[esc.consumed..];
    }
    match rest.chars().next() {
        // Not a hex digit: the escaped character stands for itself. This
        // also retains one backslash of an escaped pair.
        Some(ch) => {
            out.push(ch);
            &rest[ch.len_utf8()..]
        }
        // A lone backslash at the end of the input is kept literally.
        None => {
            out.push('\\');
            rest
        }
    }
}
