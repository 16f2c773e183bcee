use crate::compat::String;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query-value percent-encode set.
///
/// Everything outside the RFC 3986 unreserved characters
/// (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`) is encoded as `%XX` with
/// uppercase hex digits. Space becomes `%20`, never `+`.
pub const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Write percent-encoded string directly to buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Exact length of `input` after percent-encoding with `encode_set`.
///
/// ASCII bytes outside the set pass through as one byte, everything else
/// (including all non-ASCII bytes, which `utf8_percent_encode` always
/// escapes) expands to three.
pub fn encoded_len(input: &str, encode_set: &'static AsciiSet) -> usize {
    utf8_percent_encode(input, encode_set)
        .map(str::len)
        .sum()
}
