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

//! End-to-end judging sessions.
//!
//! A session reads the three files to completion (input first, then the
//! contestant attempt, then the reference) and only then judges, so a
//! malformed attempt file surfaces its own parse error even when the
//! reference is also broken. Parsing is never interleaved with
//! verification.

use crate::harness::{CaseJudge, HarnessError, Verdict, judge_all_cases};
use gavel_model::{
    input::{CaseInput, InputLoadError, read_case_inputs},
    output::{CaseOutput, OutputLoadError, read_case_outputs},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// The error type of a judging session.
///
/// Each variant displays its inner diagnostic unchanged; which file it
/// came from is available programmatically.
#[derive(Debug)]
pub enum SessionError {
    /// The problem input file failed to load.
    Input(InputLoadError),
    /// The contestant attempt file failed to load.
    Attempt(OutputLoadError),
    /// The reference output file failed to load.
    Reference(OutputLoadError),
    /// The attempt's case count did not match the input.
    Harness(HarnessError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Attempt(e) | Self::Reference(e) => write!(f, "{e}"),
            Self::Harness(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<HarnessError> for SessionError {
    fn from(e: HarnessError) -> Self {
        Self::Harness(e)
    }
}

/// Judges a session given one reader per file.
///
/// # Panics
///
/// Panics if the reference file parses to a different case count than
/// the input file announces; both are judge-side data and must agree.
pub fn judge_readers<J, I, A, R>(
    judge: &J,
    input: I,
    attempt: A,
    reference: R,
) -> Result<Verdict, SessionError>
where
    J: CaseJudge<Input = CaseInput, Output = CaseOutput>,
    I: BufRead,
    A: BufRead,
    R: BufRead,
{
    let inputs = read_case_inputs(input).map_err(SessionError::Input)?;
    debug!(cases = inputs.len(), "parsed problem input");
    let attempts = read_case_outputs(attempt).map_err(SessionError::Attempt)?;
    debug!(cases = attempts.len(), "parsed contestant attempt");
    let reference = read_case_outputs(reference).map_err(SessionError::Reference)?;
    debug!(cases = reference.len(), "parsed reference output");

    let verdict = judge_all_cases(judge, &inputs, &reference, &attempts)?;
    debug!(accepted = verdict.is_accepted(), "session judged");
    Ok(verdict)
}

/// Judges a session given one path per file.
///
/// # Panics
///
/// See [`judge_readers`].
pub fn judge_files<J>(
    judge: &J,
    input: impl AsRef<Path>,
    attempt: impl AsRef<Path>,
    reference: impl AsRef<Path>,
) -> Result<Verdict, SessionError>
where
    J: CaseJudge<Input = CaseInput, Output = CaseOutput>,
{
    let input = open(input).map_err(|e| SessionError::Input(e.into()))?;
    let attempt = open(attempt).map_err(|e| SessionError::Attempt(e.into()))?;
    let reference = open(reference).map_err(|e| SessionError::Reference(e.into()))?;
    judge_readers(judge, input, attempt, reference)
}

#[inline]
fn open(path: impl AsRef<Path>) -> std::io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}
