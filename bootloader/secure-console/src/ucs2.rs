//! Helpers for null-terminated UCS-2 text.

/// Encodes an ASCII string as UCS-2 followed by a zero terminator.
///
/// Meant for constants: `N` must be `text.len() + 1` and the text must be
/// ASCII without interior NULs, otherwise evaluation panics (at compile time
/// when used in a `const`).
pub const fn encode<const N: usize>(text: &str) -> [u16; N] {
    let bytes = text.as_bytes();
    assert!(bytes.len() + 1 == N, "buffer must fit the text and its terminator");

    let mut units = [0u16; N];
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii() && bytes[i] != 0, "text must be ASCII without NULs");
        units[i] = bytes[i] as u16;
        i += 1;
    }
    units
}

/// Builds a `&'static [u16; N]` null-terminated UCS-2 literal from ASCII.
#[macro_export]
macro_rules! ucs2 {
    ($text:expr) => {{
        const TEXT: &str = $text;
        const UNITS: [u16; TEXT.len() + 1] = $crate::ucs2::encode(TEXT);
        &UNITS
    }};
}

/// The code units before the first zero, or the whole slice if it has none.
pub fn terminated(units: &[u16]) -> &[u16] {
    match units.iter().position(|&unit| unit == 0) {
        Some(end) => &units[..end],
        None => units,
    }
}

/// Length in code units, terminator excluded.
pub fn len(units: &[u16]) -> usize {
    terminated(units).len()
}
