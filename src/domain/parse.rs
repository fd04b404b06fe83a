//! Lenient integer parsing for query parameters

/// Leading integer of a query value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntPrefix<'a> {
    Value(i64),
    /// Signed digits that do not fit in an `i64`
    Overflow(&'a str),
}

impl IntPrefix<'_> {
    /// The value, clamped to `i64::MIN`/`i64::MAX` on overflow
    pub fn saturating(self) -> i64 {
        match self {
            Self::Value(n) => n,
            Self::Overflow(digits) if digits.starts_with('-') => i64::MIN,
            Self::Overflow(_) => i64::MAX,
        }
    }
}

/// Read the leading base-10 integer of `input`
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"42abc"` yields 42. Returns `None` only when no
/// digits lead the input.
pub fn read_int_prefix(input: &str) -> Option<IntPrefix<'_>> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'-' | b'+')));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    let signed = &trimmed[..sign_len + digits_len];

    Some(match signed.parse() {
        Ok(n) => IntPrefix::Value(n),
        Err(_) => IntPrefix::Overflow(signed),
    })
}

/// Leading integer, `None` when absent or outside `i64`
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    match read_int_prefix(input)? {
        IntPrefix::Value(n) => Some(n),
        IntPrefix::Overflow(_) => None,
    }
}

/// Leading integer clamped to `i64`, `None` only when absent
pub fn parse_int_prefix_saturating(input: &str) -> Option<i64> {
    read_int_prefix(input).map(IntPrefix::saturating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_int_prefix("123"), Some(123));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("+9"), Some(9));
    }

    #[test]
    fn test_prefix_and_whitespace() {
        assert_eq!(parse_int_prefix("  42"), Some(42));
        assert_eq!(parse_int_prefix("5abc"), Some(5));
        assert_eq!(parse_int_prefix("1.9"), Some(1));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("x12"), None);
        assert_eq!(read_int_prefix("+x"), None);
    }

    #[test]
    fn test_i64_bounds_are_exact() {
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_overflow_keeps_its_digits() {
        assert_eq!(
            read_int_prefix(" 99999999999999999999xyz"),
            Some(IntPrefix::Overflow("99999999999999999999"))
        );
        assert_eq!(
            read_int_prefix("-99999999999999999999"),
            Some(IntPrefix::Overflow("-99999999999999999999"))
        );
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
    }

    #[test]
    fn test_saturating_clamps_overflow() {
        assert_eq!(parse_int_prefix_saturating("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix_saturating("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix_saturating("12"), Some(12));
        assert_eq!(parse_int_prefix_saturating("abc"), None);
    }
}
