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

//! Domain output parser.
//!
//! Reduces each split case to its claimed answer: either the literal
//! `impossible` sentinel or a whitespace-separated sequence of integers.
//! Exactly one content line is permitted per case, and every decoded
//! value must fit a signed 32-bit integer. Whether the sequence is a
//! legal permutation is not decided here; that is the judge's call.

use crate::splitter::{Case, CaseSplitError, split_cases};
use gavel_core::text::integer::{IntegerParseError, parse_bounded_int};
use gavel_core::text::tokenize::read_token_lines;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The token contestants print when they claim no solution exists.
/// Tokenization lowercases, so matching against this constant is
/// case-insensitive by construction.
pub const IMPOSSIBLE_KEYWORD: &str = "impossible";

/// The claimed answer of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutput {
    /// The contestant claims no solution exists.
    Impossible,
    /// A claimed permutation of `1..=N`, in contestant order.
    Sequence(Vec<i32>),
}

impl CaseOutput {
    /// Whether this output is the `impossible` sentinel.
    #[inline]
    pub fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible)
    }
}

/// The error type of per-case output parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputParseError {
    /// The case did not hold exactly one content line.
    WrongLineCount,
    /// The single content line held no tokens.
    EmptyOutput,
    /// A value parsed but exceeds the signed 32-bit range.
    OutOfRange,
    /// A token was not a valid bounded integer.
    Integer(IntegerParseError),
}

impl std::fmt::Display for OutputParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLineCount => write!(f, "Wrong number of lines in case output"),
            Self::EmptyOutput => write!(f, "Case output is empty"),
            Self::OutOfRange => {
                write!(f, "Number is outside signed 32-bit integer range")
            }
            Self::Integer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for OutputParseError {}

impl From<IntegerParseError> for OutputParseError {
    fn from(e: IntegerParseError) -> Self {
        Self::Integer(e)
    }
}

/// Parses the claimed answer of one split case.
pub fn parse_case_output(case: &Case) -> Result<CaseOutput, OutputParseError> {
    let lines = case.lines();
    if lines.len() != 1 {
        return Err(OutputParseError::WrongLineCount);
    }
    let line = &lines[0];
    if line.is_empty() {
        return Err(OutputParseError::EmptyOutput);
    }
    if line.len() == 1 && line[0] == IMPOSSIBLE_KEYWORD {
        return Ok(CaseOutput::Impossible);
    }

    let mut values = Vec::with_capacity(line.len());
    for token in line {
        let wide = parse_bounded_int(token)?;
        let value = i32::try_from(wide).map_err(|_| OutputParseError::OutOfRange)?;
        values.push(value);
    }
    Ok(CaseOutput::Sequence(values))
}

/// The error type of whole-file output loading.
#[derive(Debug)]
pub enum OutputLoadError {
    /// An I/O error occurred while reading the stream.
    Io(std::io::Error),
    /// The file did not split into sequentially numbered cases.
    Split(CaseSplitError),
    /// A case's content was not a valid claimed answer.
    Case(OutputParseError),
}

impl std::fmt::Display for OutputLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Split(e) => write!(f, "{e}"),
            Self::Case(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for OutputLoadError {}

impl From<std::io::Error> for OutputLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CaseSplitError> for OutputLoadError {
    fn from(e: CaseSplitError) -> Self {
        Self::Split(e)
    }
}

impl From<OutputParseError> for OutputLoadError {
    fn from(e: OutputParseError) -> Self {
        Self::Case(e)
    }
}

/// Reads a whole output file: tokenize, split into cases, and parse
/// each case's claimed answer, in file order.
pub fn read_case_outputs<R: BufRead>(reader: R) -> Result<Vec<CaseOutput>, OutputLoadError> {
    let lines = read_token_lines(reader)?;
    let cases = split_cases(lines)?;
    cases
        .iter()
        .map(|case| parse_case_output(case).map_err(Into::into))
        .collect()
}

/// Reads case outputs from a generic reader.
#[inline]
pub fn read_case_outputs_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<CaseOutput>, OutputLoadError> {
    read_case_outputs(BufReader::new(reader))
}

/// Reads case outputs from a file path.
#[inline]
pub fn read_case_outputs_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CaseOutput>, OutputLoadError> {
    let file = File::open(path)?;
    read_case_outputs(BufReader::new(file))
}

/// Reads case outputs from a string slice.
#[inline]
pub fn read_case_outputs_from_str(s: &str) -> Result<Vec<CaseOutput>, OutputLoadError> {
    read_case_outputs(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_output() {
        let outputs = read_case_outputs_from_str("Case #1: 1 2 3\n").unwrap();
        assert_eq!(outputs, [CaseOutput::Sequence(vec![1, 2, 3])]);
    }

    #[test]
    fn test_impossible_is_case_insensitive() {
        let outputs = read_case_outputs_from_str("Case #1: IMPOSSIBLE\n").unwrap();
        assert_eq!(outputs, [CaseOutput::Impossible]);
        assert!(outputs[0].is_impossible());

        let outputs = read_case_outputs_from_str("Case #1: impossible\n").unwrap();
        assert_eq!(outputs, [CaseOutput::Impossible]);
    }

    #[test]
    fn test_content_may_follow_on_its_own_line() {
        let outputs = read_case_outputs_from_str("Case #1:\n4 2 1 3\nCase #2:\n1 2\n").unwrap();
        assert_eq!(
            outputs,
            [
                CaseOutput::Sequence(vec![4, 2, 1, 3]),
                CaseOutput::Sequence(vec![1, 2]),
            ]
        );
    }

    #[test]
    fn test_multiple_content_lines_fail() {
        let err = read_case_outputs_from_str("Case #1: 1 2\n3 4\n").unwrap_err();
        assert_eq!(err.to_string(), "Wrong number of lines in case output");
    }

    #[test]
    fn test_header_only_case_fails_as_empty() {
        let err = read_case_outputs_from_str("Case #1:\n").unwrap_err();
        assert_eq!(err.to_string(), "Case output is empty");
    }

    #[test]
    fn test_32_bit_bounds() {
        let outputs =
            read_case_outputs_from_str("Case #1: 2147483647 -2147483648\n").unwrap();
        assert_eq!(
            outputs,
            [CaseOutput::Sequence(vec![i32::MAX, i32::MIN])]
        );

        let err = read_case_outputs_from_str("Case #1: 2147483648\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number is outside signed 32-bit integer range"
        );
        let err = read_case_outputs_from_str("Case #1: -2147483649\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number is outside signed 32-bit integer range"
        );
    }

    #[test]
    fn test_impossible_next_to_other_tokens_is_not_a_sentinel() {
        let err = read_case_outputs_from_str("Case #1: impossible impossible\n").unwrap_err();
        assert_eq!(err.to_string(), "Not an integer in range: impossible");
    }

    #[test]
    fn test_split_errors_pass_through() {
        let err = read_case_outputs_from_str("1 2 3\n").unwrap_err();
        assert_eq!(err.to_string(), "First line doesn't start with case #1:");
    }
}
