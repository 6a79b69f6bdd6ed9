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

//! The domain judge.
//!
//! A case is accepted when the contestant either matches the reference
//! `impossible` claim or presents a structurally legal permutation of
//! `1..=N` whose reversal cost equals the reference cost `C`. Legality
//! is checked before the cost is derived (length, then element range,
//! then duplicates), so the cost sweep only ever runs on a true
//! permutation.

use crate::harness::CaseJudge;
use crate::reversort::reversort_cost;
use fixedbitset::FixedBitSet;
use gavel_model::{input::CaseInput, output::CaseOutput};

/// Why a case was rejected. The `Display` text is user-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The contestant printed `impossible`, but the reference solved it.
    ImpossibleClaim,
    /// The attempt's element count is not `N`.
    WrongLength,
    /// An element lies outside `[1, N]`.
    ElementOutOfRange,
    /// The attempt repeats an element.
    DuplicateElement,
    /// The attempt is a legal permutation, but its cost is not `C`.
    WrongCost,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImpossibleClaim => write!(
                f,
                "Contestant claims a solution does not exist while judge finds a solution"
            ),
            Self::WrongLength => write!(
                f,
                "Solution length does not match the number of elements in the array."
            ),
            Self::ElementOutOfRange => {
                write!(f, "Output elements should be from 1 to N.")
            }
            Self::DuplicateElement => {
                write!(f, "Duplicate elements found in the output.")
            }
            Self::WrongCost => write!(f, "Solution does not generate cost C."),
        }
    }
}

/// Judges reversal-sort cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversortJudge;

impl ReversortJudge {
    /// Creates a new `ReversortJudge`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl CaseJudge for ReversortJudge {
    type Input = CaseInput;
    type Output = CaseOutput;
    type Reason = RejectReason;

    fn judge_case(
        &self,
        input: &CaseInput,
        reference: &CaseOutput,
        attempt: &CaseOutput,
    ) -> Option<RejectReason> {
        let values = match attempt {
            CaseOutput::Impossible => {
                return if reference.is_impossible() {
                    None
                } else {
                    Some(RejectReason::ImpossibleClaim)
                };
            }
            CaseOutput::Sequence(values) => values,
        };

        if values.len() as i64 != input.n() {
            return Some(RejectReason::WrongLength);
        }

        let n = values.len();
        if values.iter().any(|&x| x < 1 || x as usize > n) {
            return Some(RejectReason::ElementOutOfRange);
        }

        // Range is established, so every element maps into the bitset.
        let mut seen = FixedBitSet::with_capacity(n);
        for &x in values {
            let slot = (x - 1) as usize;
            if seen.contains(slot) {
                return Some(RejectReason::DuplicateElement);
            }
            seen.insert(slot);
        }

        if reversort_cost(values) as i64 != input.c() {
            return Some(RejectReason::WrongCost);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judge(input: (i64, i64), reference: CaseOutput, attempt: CaseOutput) -> Option<RejectReason> {
        ReversortJudge::new().judge_case(&CaseInput::new(input.0, input.1), &reference, &attempt)
    }

    fn seq(values: &[i32]) -> CaseOutput {
        CaseOutput::Sequence(values.to_vec())
    }

    #[test]
    fn test_impossible_claim_against_a_solvable_case() {
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), CaseOutput::Impossible),
            Some(RejectReason::ImpossibleClaim)
        );
    }

    #[test]
    fn test_matching_impossible_claims_are_accepted() {
        assert_eq!(
            judge((3, 1), CaseOutput::Impossible, CaseOutput::Impossible),
            None
        );
    }

    #[test]
    fn test_solution_where_reference_claims_impossible_is_cost_checked() {
        // The reference's claim does not bind the contestant; the attempt
        // stands or falls on its own cost.
        assert_eq!(
            judge((3, 1), CaseOutput::Impossible, seq(&[1, 2, 3])),
            Some(RejectReason::WrongCost)
        );
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), seq(&[1])),
            Some(RejectReason::WrongLength)
        );
    }

    #[test]
    fn test_element_out_of_range() {
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), seq(&[1, 3])),
            Some(RejectReason::ElementOutOfRange)
        );
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), seq(&[0, 1])),
            Some(RejectReason::ElementOutOfRange)
        );
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), seq(&[-1, 1])),
            Some(RejectReason::ElementOutOfRange)
        );
    }

    #[test]
    fn test_duplicate_elements() {
        assert_eq!(
            judge((2, 1), seq(&[1, 2]), seq(&[2, 2])),
            Some(RejectReason::DuplicateElement)
        );
    }

    #[test]
    fn test_accepted_identity_permutation() {
        assert_eq!(judge((2, 1), seq(&[1, 2]), seq(&[1, 2])), None);
    }

    #[test]
    fn test_wrong_cost() {
        assert_eq!(
            judge((3, 3), seq(&[2, 1, 3]), seq(&[3, 2, 1])),
            Some(RejectReason::WrongCost)
        );
    }

    #[test]
    fn test_any_permutation_with_the_required_cost_is_accepted() {
        assert_eq!(judge((4, 6), seq(&[4, 3, 2, 1]), seq(&[4, 2, 1, 3])), None);
        assert_eq!(judge((4, 6), seq(&[4, 2, 1, 3]), seq(&[4, 3, 2, 1])), None);
    }

    #[test]
    fn test_reason_texts() {
        assert_eq!(
            RejectReason::ImpossibleClaim.to_string(),
            "Contestant claims a solution does not exist while judge finds a solution"
        );
        assert_eq!(
            RejectReason::WrongLength.to_string(),
            "Solution length does not match the number of elements in the array."
        );
        assert_eq!(
            RejectReason::ElementOutOfRange.to_string(),
            "Output elements should be from 1 to N."
        );
        assert_eq!(
            RejectReason::DuplicateElement.to_string(),
            "Duplicate elements found in the output."
        );
        assert_eq!(
            RejectReason::WrongCost.to_string(),
            "Solution does not generate cost C."
        );
    }
}
