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

//! Problem input loader.
//!
//! The input file is judge-side data: one integer `T`, then `T` records
//! of two integers `N C`, the element count and the reference
//! transformation cost of each case. Tokens are whitespace-delimited
//! and line breaks carry no meaning, so the loader scans tokens through
//! a small buffered scanner instead of reading line-structured text.
//! Every token still goes through the bounded integer grammar; a
//! corrupted input file should fail loudly, not judge nonsense.

use gavel_core::text::integer::{IntegerParseError, parse_bounded_int};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The parameters of one case: element count `N` and reference cost `C`.
///
/// Immutable after parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseInput {
    n: i64,
    c: i64,
}

impl CaseInput {
    /// Creates a new `CaseInput`.
    #[inline]
    pub fn new(n: i64, c: i64) -> Self {
        Self { n, c }
    }

    /// The number of elements in the case's array.
    #[inline]
    pub fn n(&self) -> i64 {
        self.n
    }

    /// The transformation cost the case asks for.
    #[inline]
    pub fn c(&self) -> i64 {
        self.c
    }
}

/// The error type of the input-loading process.
#[derive(Debug)]
pub enum InputLoadError {
    /// An I/O error occurred while reading the stream.
    Io(std::io::Error),
    /// The stream ended before all announced records were read.
    UnexpectedEof,
    /// The leading case count was negative.
    InvalidCaseCount(i64),
    /// A token was not a valid bounded integer.
    Integer(IntegerParseError),
}

impl std::fmt::Display for InputLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => {
                write!(f, "Unexpected end of file while parsing input")
            }
            Self::InvalidCaseCount(t) => {
                write!(f, "Case count must be a non-negative integer, got: {t}")
            }
            Self::Integer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InputLoadError {}

impl From<std::io::Error> for InputLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<IntegerParseError> for InputLoadError {
    fn from(e: IntegerParseError) -> Self {
        Self::Integer(e)
    }
}

/// Reads the case inputs announced by the leading count.
pub fn read_case_inputs<R: BufRead>(reader: R) -> Result<Vec<CaseInput>, InputLoadError> {
    let mut scanner = TokenScanner::new(reader);
    let count = scanner.next_int()?;
    if count < 0 {
        return Err(InputLoadError::InvalidCaseCount(count));
    }
    let mut inputs = Vec::new();
    for _ in 0..count {
        let n = scanner.next_int()?;
        let c = scanner.next_int()?;
        inputs.push(CaseInput::new(n, c));
    }
    Ok(inputs)
}

/// Reads case inputs from a generic reader.
#[inline]
pub fn read_case_inputs_from_reader<R: Read>(reader: R) -> Result<Vec<CaseInput>, InputLoadError> {
    read_case_inputs(BufReader::new(reader))
}

/// Reads case inputs from a file path.
#[inline]
pub fn read_case_inputs_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CaseInput>, InputLoadError> {
    let file = File::open(path)?;
    read_case_inputs(BufReader::new(file))
}

/// Reads case inputs from a string slice.
#[inline]
pub fn read_case_inputs_from_str(s: &str) -> Result<Vec<CaseInput>, InputLoadError> {
    read_case_inputs(s.as_bytes())
}

/// A helper that pulls whitespace-delimited integer tokens from a
/// buffered reader, one line at a time.
struct TokenScanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> TokenScanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. `Ok(false)` means end of input.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, InputLoadError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Reads the next token and decodes it through the bounded grammar.
    fn next_int(&mut self) -> Result<i64, InputLoadError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Err(InputLoadError::UnexpectedEof);
            }

            while let Some(c) = self.buf[self.pos..].chars().next() {
                if !c.is_whitespace() {
                    break;
                }
                self.pos += c.len_utf8();
            }
            if self.pos >= self.buf.len() {
                continue;
            }

            let start = self.pos;
            while let Some(c) = self.buf[self.pos..].chars().next() {
                if c.is_whitespace() {
                    break;
                }
                self.pos += c.len_utf8();
            }
            return Ok(parse_bounded_int(&self.buf[start..self.pos])?);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_announced_records() {
        let inputs = read_case_inputs_from_str("2\n4 6\n2 1\n").unwrap();
        assert_eq!(inputs, [CaseInput::new(4, 6), CaseInput::new(2, 1)]);
    }

    #[test]
    fn test_line_breaks_carry_no_meaning() {
        let inputs = read_case_inputs_from_str("  2 4\n6\n\n 2\t1").unwrap();
        assert_eq!(inputs, [CaseInput::new(4, 6), CaseInput::new(2, 1)]);
    }

    #[test]
    fn test_zero_cases() {
        assert!(read_case_inputs_from_str("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_negative_case_count_fails() {
        let err = read_case_inputs_from_str("-3\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Case count must be a non-negative integer, got: -3"
        );
    }

    #[test]
    fn test_truncated_stream_fails() {
        let err = read_case_inputs_from_str("2\n4 6\n2\n").unwrap_err();
        assert!(matches!(err, InputLoadError::UnexpectedEof));
        assert_eq!(
            err.to_string(),
            "Unexpected end of file while parsing input"
        );
    }

    #[test]
    fn test_empty_stream_fails() {
        assert!(matches!(
            read_case_inputs_from_str("").unwrap_err(),
            InputLoadError::UnexpectedEof
        ));
    }

    #[test]
    fn test_bad_token_reports_the_grammar_error() {
        let err = read_case_inputs_from_str("1\n4 six\n").unwrap_err();
        assert_eq!(err.to_string(), "Not an integer in range: six");
    }

    #[test]
    fn test_accessors() {
        let input = CaseInput::new(7, 21);
        assert_eq!(input.n(), 7);
        assert_eq!(input.c(), 21);
    }
}
