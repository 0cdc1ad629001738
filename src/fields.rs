//! Delimiter-based field splitting and lenient year parsing.
//!
//! Both functions are total: any input produces a value, never an error.
//! Malformed content surfaces later as a skipped record, not a failure.

use memchr::memchr_iter;

/// Split a line into fields on every occurrence of `delimiter`.
///
/// Empty fields are preserved and no whitespace is trimmed, so a
/// non-empty line always yields (delimiter count) + 1 fields. An empty
/// line yields no fields at all.
pub fn split_fields(line: &str, delimiter: u8) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }

    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;

    for pos in memchr_iter(delimiter, bytes) {
        fields.push(&line[start..pos]);
        start = pos + 1;
    }
    fields.push(&line[start..]);

    fields
}

/// Parse a year with C `atoi` semantics.
///
/// Skips leading ASCII whitespace, accepts an optional sign, then
/// consumes a digit prefix and stops at the first non-digit. Anything
/// without a leading digit parses as 0; `str::parse` would reject
/// inputs like `"1950ad"` outright, so the prefix scan is spelled out.
pub fn parse_year(field: &str) -> i32 {
    let bytes = field.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut value: i32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as i32;
        value = value.saturating_mul(10).saturating_add(digit);
        i += 1;
    }

    if negative {
        -value
    } else {
        value
    }
}
