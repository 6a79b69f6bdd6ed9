// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bounded Integer Grammar
//!
//! The single integer grammar used everywhere a numeric token is decoded:
//! an optional leading `-` followed by one or more ASCII digits, nothing
//! else. Redundant leading zeros are tolerated and stripped, and accepted
//! values lie in the closed window `[-10^18, 10^18]`.
//!
//! The window boundary is enforced textually rather than by overflow
//! detection: after normalization the rendered length decides, so the only
//! 20-character rendering accepted is exactly `-10^18` and the only
//! non-negative 19-character rendering accepted is exactly `10^18`. Every
//! accepted value therefore fits an `i64` with room to spare, and the
//! accumulation loop below cannot overflow.

use crate::text::truncate::truncate;

/// The magnitude bound of the integer grammar, `10^18`.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000_000_000_000;

/// A token that does not match the bounded integer grammar.
///
/// The offending token is stored pre-truncated so the error can be held
/// and displayed without bounding it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerParseError {
    token: String,
}

impl IntegerParseError {
    fn new(token: &str) -> Self {
        Self {
            token: truncate(token),
        }
    }

    /// The offending token, truncated for display.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for IntegerParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not an integer in range: {}", self.token)
    }
}

impl std::error::Error for IntegerParseError {}

/// Decodes a token as an integer in `[-10^18, 10^18]`.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits
/// and nothing else; the empty string fails. Leading zeros are stripped
/// before the window check, so `010111` parses to `10111` and both `-0`
/// and `-0000` parse to `0`.
pub fn parse_bounded_int(token: &str) -> Result<i64, IntegerParseError> {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
        return Err(IntegerParseError::new(token));
    }

    // Strip redundant leading zeros; a lone zero survives.
    let mut start = 0;
    while start + 1 < digits.len() && digits[start] == b'0' {
        start += 1;
    }
    let digits = &digits[start..];

    // The window is decided on the normalized rendering, sign included.
    let rendered_len = digits.len() + usize::from(negative);
    let is_pow18 = digits.len() == 19 && digits[0] == b'1' && digits[1..].iter().all(|&b| b == b'0');
    if rendered_len > 20 {
        return Err(IntegerParseError::new(token));
    }
    if rendered_len == 20 && !(negative && is_pow18) {
        return Err(IntegerParseError::new(token));
    }
    if rendered_len == 19 && !negative && !is_pow18 {
        return Err(IntegerParseError::new(token));
    }

    let mut value: i64 = 0;
    for &b in digits {
        value = value * 10 + i64::from(b - b'0');
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow18() -> String {
        format!("1{}", "0".repeat(18))
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(parse_bounded_int("0"), Ok(0));
        assert_eq!(parse_bounded_int("0000"), Ok(0));
        assert_eq!(parse_bounded_int("-0"), Ok(0));
        assert_eq!(parse_bounded_int("-0000"), Ok(0));
    }

    #[test]
    fn test_leading_zeros_are_stripped() {
        assert_eq!(parse_bounded_int("-10"), Ok(-10));
        assert_eq!(parse_bounded_int("-010"), Ok(-10));
        assert_eq!(parse_bounded_int("010111"), Ok(10111));
        assert_eq!(parse_bounded_int("00009"), Ok(9));
    }

    #[test]
    fn test_window_boundaries_accepted() {
        assert_eq!(parse_bounded_int(&pow18()), Ok(MAX_MAGNITUDE));
        assert_eq!(parse_bounded_int(&format!("000{}", pow18())), Ok(MAX_MAGNITUDE));
        assert_eq!(parse_bounded_int(&format!("-{}", pow18())), Ok(-MAX_MAGNITUDE));
        assert_eq!(
            parse_bounded_int(&format!("-000{}", pow18())),
            Ok(-MAX_MAGNITUDE)
        );
    }

    #[test]
    fn test_values_just_past_the_window_fail() {
        let above = format!("1{}1", "0".repeat(17));
        let below = format!("-1{}1", "0".repeat(17));
        assert_eq!(
            parse_bounded_int(&above).unwrap_err().to_string(),
            format!("Not an integer in range: {above}")
        );
        assert_eq!(
            parse_bounded_int(&below).unwrap_err().to_string(),
            format!("Not an integer in range: {below}")
        );
    }

    #[test]
    fn test_equal_length_magnitudes_are_rejected() {
        // Any other 19-digit non-negative or 20-character negative
        // rendering is outside the window.
        assert!(parse_bounded_int(&"9".repeat(19)).is_err());
        assert!(parse_bounded_int(&format!("-{}", "9".repeat(19))).is_err());
        // But 18-digit magnitudes sit safely inside it.
        assert_eq!(
            parse_bounded_int(&"9".repeat(18)),
            Ok(999_999_999_999_999_999)
        );
        assert_eq!(
            parse_bounded_int(&format!("-{}", "9".repeat(18))),
            Ok(-999_999_999_999_999_999)
        );
    }

    #[test]
    fn test_non_integers_fail() {
        assert_eq!(
            parse_bounded_int("").unwrap_err().to_string(),
            "Not an integer in range: "
        );
        assert_eq!(
            parse_bounded_int("a").unwrap_err().to_string(),
            "Not an integer in range: a"
        );
        assert_eq!(
            parse_bounded_int("1a1").unwrap_err().to_string(),
            "Not an integer in range: 1a1"
        );
        assert_eq!(
            parse_bounded_int("0x10").unwrap_err().to_string(),
            "Not an integer in range: 0x10"
        );
        assert_eq!(
            parse_bounded_int("1.0").unwrap_err().to_string(),
            "Not an integer in range: 1.0"
        );
        assert!(parse_bounded_int("-").is_err());
        assert!(parse_bounded_int("--1").is_err());
        assert!(parse_bounded_int("+1").is_err());
        assert!(parse_bounded_int(" 1").is_err());
    }

    #[test]
    fn test_error_embeds_truncated_token() {
        let long = "7".repeat(80);
        let err = parse_bounded_int(&format!("{long}z")).unwrap_err();
        assert_eq!(err.token().chars().count(), 50);
        assert!(err.token().ends_with("..."));
    }
}
