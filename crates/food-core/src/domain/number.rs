//! Loose numeric conversion for form and server strings.
//!
//! Mirrors how a browser converts a text field to a number: surrounding
//! whitespace is ignored, a blank string is zero, and `0x`/`0o`/`0b`
//! prefixes are read as integers. Non-finite results are rejected.

/// Parse a user- or server-supplied string as a number
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }

    if let Some(v) = parse_prefixed(t) {
        return Some(v);
    }

    // f64::from_str also accepts "inf" and "nan" spellings
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_prefixed(t: &str) -> Option<f64> {
    let (radix, digits) = match t.get(..2)? {
        "0x" | "0X" => (16, &t[2..]),
        "0o" | "0O" => (8, &t[2..]),
        "0b" | "0B" => (2, &t[2..]),
        _ => return None,
    };
    // from_str_radix tolerates a leading sign; prefixed literals never carry one
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}
