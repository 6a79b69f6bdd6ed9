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

//! Generic per-case judging harness.
//!
//! The harness aligns inputs, reference outputs, and attempt outputs by
//! case index and delegates the actual decision to a pluggable
//! [`CaseJudge`]. It enforces the at-most-one-reported-failure contract:
//! the first rejecting case short-circuits the loop, and later cases are
//! never evaluated.

use gavel_model::index::CaseNumber;

/// A per-case judging capability.
///
/// Implementations receive one case's input, the reference answer, and
/// the contestant's attempt, and return `None` to accept or a displayable
/// reason to reject. The harness stays generic over all three types so
/// that domain judges are swappable without touching the loop.
pub trait CaseJudge {
    /// The per-case problem parameters.
    type Input;
    /// The per-case answer representation.
    type Output;
    /// The rejection reason; its `Display` text is user-visible.
    type Reason: std::fmt::Display;

    /// Judges one case. `None` means accepted.
    fn judge_case(
        &self,
        input: &Self::Input,
        reference: &Self::Output,
        attempt: &Self::Output,
    ) -> Option<Self::Reason>;
}

/// A rejection, pinned to the case that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    case: CaseNumber,
    reason: String,
}

impl Rejection {
    /// Creates a new `Rejection`.
    #[inline]
    pub fn new(case: CaseNumber, reason: String) -> Self {
        Self { case, reason }
    }

    /// The 1-based number of the rejected case.
    #[inline]
    pub fn case(&self) -> CaseNumber {
        self.case
    }

    /// The bare rejection reason, without the case prefix.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case #{}: {}", self.case, self.reason)
    }
}

/// The overall result of a judging session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every case was accepted.
    Accepted,
    /// The first failing case, with its reason.
    Rejected(Rejection),
}

impl Verdict {
    /// Whether the session was accepted as a whole.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The error type of the harness itself, as opposed to a per-case
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The attempt file holds a different number of cases than the input.
    CountMismatch {
        /// Cases found in the attempt.
        found: usize,
        /// Cases announced by the input.
        expected: usize,
    },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { found, expected } => write!(
                f,
                "Wrong number of cases in attempt: {found}, expected: {expected}"
            ),
        }
    }
}

impl std::error::Error for HarnessError {}

/// Judges every case in order, stopping at the first rejection.
///
/// The reference outputs are judge-side data and must align with the
/// inputs; the attempt count is contestant data and is checked, with a
/// mismatch reported as [`HarnessError::CountMismatch`].
///
/// # Panics
///
/// Panics if `reference` and `inputs` have different lengths.
pub fn judge_all_cases<J>(
    judge: &J,
    inputs: &[J::Input],
    reference: &[J::Output],
    attempts: &[J::Output],
) -> Result<Verdict, HarnessError>
where
    J: CaseJudge,
{
    assert_eq!(
        reference.len(),
        inputs.len(),
        "called `judge_all_cases` with inconsistent reference length: inputs.len() = {}, reference.len() = {}",
        inputs.len(),
        reference.len()
    );

    if attempts.len() != inputs.len() {
        return Err(HarnessError::CountMismatch {
            found: attempts.len(),
            expected: inputs.len(),
        });
    }

    for (i, (input, (reference, attempt))) in
        inputs.iter().zip(reference.iter().zip(attempts)).enumerate()
    {
        if let Some(reason) = judge.judge_case(input, reference, attempt) {
            return Ok(Verdict::Rejected(Rejection::new(
                CaseNumber::new(i + 1),
                reason.to_string(),
            )));
        }
    }
    Ok(Verdict::Accepted)
}
