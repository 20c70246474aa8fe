//! Field access for comma separated response lines.
//!
//! The modem answers on the AT socket with one buffer holding the
//! information text followed by the final result code, e.g.
//! `+CESQ: 99,99,255,255,31,62\r\nOK\r\n`. Parsers only look at the first
//! non-empty line of such a buffer.

/// First non-empty line of a response buffer, trimmed.
pub fn first_line(text: &str) -> &str {
    text.split(|c| c == '\r' || c == '\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Field `index` of a comma separated line, trimmed.
pub fn field(line: &str, index: usize) -> Option<&str> {
    line.split(',').nth(index).map(str::trim)
}

/// Integer value of the leading digits of `field`, `atoi` style.
///
/// Returns `None` when `field` holds no digits at all.
pub fn leading_int(field: &str) -> Option<i32> {
    let s = field.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i32 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `field` with one pair of surrounding double quotes removed, if present.
pub fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}
