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

//! # Gavel Judge
//!
//! The verdict machinery of the gavel output judge.
//!
//! ## Modules
//!
//! - `harness`: The generic per-case judging loop. A [`harness::CaseJudge`]
//!   implementation is invoked once per case, in order, and the first
//!   non-empty reason becomes the session's one reported failure.
//! - `reversort`: The cost accumulator for the select-minimum /
//!   reverse-prefix sorting procedure, generic over `num_traits::PrimInt`.
//! - `judge`: The domain judge. Validates a claimed permutation's
//!   structural legality, re-derives its cost, and compares it against
//!   the reference cost.
//! - `session`: End-to-end runs: parse the three session files and hand
//!   them to the harness.

pub mod harness;
pub mod judge;
pub mod reversort;
pub mod session;
