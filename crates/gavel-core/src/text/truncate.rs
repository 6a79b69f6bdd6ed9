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

/// Maximum number of characters of untrusted text that a diagnostic
/// message will embed.
pub const TRUNCATE_LIMIT: usize = 50;

/// Bounds a string for inclusion in a diagnostic message.
///
/// Strings of at most [`TRUNCATE_LIMIT`] characters are returned
/// unchanged; longer ones are cut to the first `TRUNCATE_LIMIT - 3`
/// characters with a `...` suffix marking the cut. Operates on characters,
/// not bytes, so multi-byte input is never split mid-character.
pub fn truncate(s: &str) -> String {
    if s.chars().count() <= TRUNCATE_LIMIT {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(TRUNCATE_LIMIT - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_unchanged() {
        assert_eq!(truncate(""), "");
    }

    #[test]
    fn test_short_string_is_unchanged() {
        assert_eq!(truncate("helloworld"), "helloworld");
    }

    #[test]
    fn test_limit_length_string_is_unchanged() {
        let s = "x".repeat(50);
        assert_eq!(truncate(&s), s);
    }

    #[test]
    fn test_long_string_is_cut_with_marker() {
        let s = "x".repeat(51);
        assert_eq!(truncate(&s), format!("{}...", "x".repeat(47)));
    }

    #[test]
    fn test_truncated_output_never_exceeds_limit() {
        let s = "y".repeat(200);
        assert_eq!(truncate(&s).chars().count(), TRUNCATE_LIMIT);
    }

    #[test]
    fn test_multibyte_input_is_cut_on_character_boundaries() {
        let s = "é".repeat(60);
        let r = truncate(&s);
        assert_eq!(r.chars().count(), TRUNCATE_LIMIT);
        assert!(r.ends_with("..."));
    }
}
