//! Decoder for CSS escape sequences.
//!
//! CSS selectors, identifiers, and string literals may carry backslash
//! escapes in two forms: hexadecimal code-point escapes such as `\2764`,
//! optionally terminated by a space, and single-character escapes such as
//! `\.` or `\\`. [`unescape`] resolves both following the CSS Syntax rules
//! for consuming an escaped code point, substituting U+FFFD for code
//! points that are zero, in the surrogate range, or above U+10FFFF.
//!
//! Decoding is total. Malformed escapes degrade to a defined substitute
//! (the replacement character, a literal backslash, or the escaped
//! character itself) instead of failing, mirroring the permissive error
//! recovery of the CSS grammar.
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! use css_unescape::unescape;
//!
//! assert_eq!(unescape(r"\26 B"), "&B");
//! assert_eq!(unescape(r"hello\.world"), "hello.world");
//!
//! // Escape-free input is returned borrowed, without allocating.
//! assert!(matches!(unescape("p > a.btn"), Cow::Borrowed(_)));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_point;
mod hex_escape;
mod unescape;

pub use code_point::REPLACEMENT_CHARACTER;
pub use unescape::{unescape, unescape_into};
