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

//! # Case Splitter
//!
//! Groups an ordered stream of token lines into sequentially numbered
//! cases. A case opens at a header line (any line whose second token
//! begins with `#`) and collects every following line until the next
//! header or end of input.
//!
//! ## Header grammar
//!
//! The `#`-token must read `#<digits>:` with at least one character
//! between the marker and the colon, the digits following the bounded
//! integer grammar of `gavel_core` (so leading zeros and surrounding
//! whitespace are tolerated). The first token of a header line is
//! consumed but deliberately not validated; label words other than
//! `case` are accepted as long as the `#`-token is well formed.
//!
//! ## Sequencing
//!
//! Headers must number their cases `1, 2, 3, ...` in file order. The
//! machine is a two-state enum, [`SplitterState::AwaitingFirstCase`]
//! until the first header and [`SplitterState::InCase`] after it, so the
//! sequencing invariant lives in one visible place instead of an implicit
//! counter.

use crate::index::CaseNumber;
use gavel_core::text::integer::{IntegerParseError, parse_bounded_int};
use gavel_core::text::truncate::truncate;

/// One tokenized line; may be empty.
pub type TokenLine = Vec<String>;

/// The lines of one case, tagged with its 1-based number.
///
/// Invariant: numbers are contiguous from 1 in file order, and the lines
/// are exactly those between this case's header and the next (or end of
/// input), with any tokens trailing the header marker forming the first
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    number: CaseNumber,
    lines: Vec<TokenLine>,
}

impl Case {
    /// The 1-based number of this case.
    #[inline]
    pub fn number(&self) -> CaseNumber {
        self.number
    }

    /// The content lines of this case, in file order.
    #[inline]
    pub fn lines(&self) -> &[TokenLine] {
        &self.lines
    }

    /// Consumes the case, returning its content lines.
    #[inline]
    pub fn into_lines(self) -> Vec<TokenLine> {
        self.lines
    }
}

/// The error type of the case-splitting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSplitError {
    /// A header marker was malformed (too short or missing the colon).
    BadHeader,
    /// A header numbered its case out of sequence.
    OutOfSequence {
        /// The raw header body, truncated for display.
        found: String,
        /// The case number the sequence required.
        expected: usize,
    },
    /// A content line appeared before any valid header.
    ContentBeforeFirstCase,
    /// The header body was not a valid bounded integer.
    Integer(IntegerParseError),
}

impl std::fmt::Display for CaseSplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadHeader => write!(f, "Bad format in case line"),
            Self::OutOfSequence { found, expected } => {
                write!(f, "Found case: {found}, expected: {expected}")
            }
            Self::ContentBeforeFirstCase => {
                write!(f, "First line doesn't start with case #1:")
            }
            Self::Integer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CaseSplitError {}

impl From<IntegerParseError> for CaseSplitError {
    fn from(e: IntegerParseError) -> Self {
        Self::Integer(e)
    }
}

/// The two states of the splitting machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterState {
    /// No header has been seen yet; any content line is an error.
    AwaitingFirstCase,
    /// Collecting lines into the case with the given number.
    InCase(CaseNumber),
}

/// Incremental case splitter.
///
/// Feed token lines in file order with [`push_line`](Self::push_line),
/// then take the grouped cases with [`finish`](Self::finish). The
/// convenience wrapper [`split_cases`] does both over an iterator.
#[derive(Debug, Clone)]
pub struct CaseSplitter {
    state: SplitterState,
    cases: Vec<Case>,
}

impl CaseSplitter {
    /// Creates a splitter awaiting its first header.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: SplitterState::AwaitingFirstCase,
            cases: Vec::new(),
        }
    }

    /// The current state of the machine.
    #[inline]
    pub fn state(&self) -> SplitterState {
        self.state
    }

    /// Consumes one token line.
    ///
    /// Header lines open the next case after validation; all other lines
    /// (empty ones included) append to the current case.
    pub fn push_line(&mut self, tokens: TokenLine) -> Result<(), CaseSplitError> {
        if is_case_header(&tokens) {
            return self.open_case(tokens);
        }
        match self.state {
            SplitterState::AwaitingFirstCase => Err(CaseSplitError::ContentBeforeFirstCase),
            SplitterState::InCase(_) => {
                debug_assert!(
                    !self.cases.is_empty(),
                    "splitter is in a case but holds no cases"
                );
                let last = self.cases.len() - 1;
                self.cases[last].lines.push(tokens);
                Ok(())
            }
        }
    }

    /// Returns the collected cases.
    #[inline]
    pub fn finish(self) -> Vec<Case> {
        self.cases
    }

    fn open_case(&mut self, tokens: TokenLine) -> Result<(), CaseSplitError> {
        let marker = tokens[1].as_str();
        if marker.len() < 3 || !marker.ends_with(':') {
            return Err(CaseSplitError::BadHeader);
        }

        // `#` and `:` are single bytes, so the body slice is safe even
        // for multi-byte text in between.
        let body = &marker[1..marker.len() - 1];
        let found = parse_bounded_int(body)?;
        let expected = self.cases.len() + 1;
        if found != expected as i64 {
            return Err(CaseSplitError::OutOfSequence {
                found: truncate(body),
                expected,
            });
        }

        let number = CaseNumber::new(expected);
        let first_line: TokenLine = tokens.into_iter().skip(2).collect();
        self.cases.push(Case {
            number,
            lines: vec![first_line],
        });
        self.state = SplitterState::InCase(number);
        Ok(())
    }
}

impl Default for CaseSplitter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Splits an ordered sequence of token lines into cases.
pub fn split_cases<I>(lines: I) -> Result<Vec<Case>, CaseSplitError>
where
    I: IntoIterator<Item = TokenLine>,
{
    let mut splitter = CaseSplitter::new();
    for line in lines {
        splitter.push_line(line)?;
    }
    Ok(splitter.finish())
}

/// A line is a case header iff it has at least two tokens and the second
/// begins with `#`. One-token lines are always content.
#[inline]
fn is_case_header(tokens: &[String]) -> bool {
    tokens.len() >= 2 && tokens[1].starts_with('#')
}
