#![no_main]
use std::borrow::Cow;

use css_unescape::{unescape, unescape_into};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let decoded = unescape(data);

    // Escape-free input must round-trip borrowed.
    if !data.contains('\\') {
        assert!(matches!(decoded, Cow::Borrowed(s) if s == data));
    }

    // Decoding never grows the number of scalar values.
    assert!(decoded.chars().count() <= data.chars().count());

    // The scratch-buffer variant agrees with the allocating one.
    let mut scratch = String::new();
    unescape_into(data, &mut scratch);
    assert_eq!(scratch, decoded);
});
