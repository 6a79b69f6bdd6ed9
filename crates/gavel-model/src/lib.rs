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

//! # Gavel Model
//!
//! **The case-structured data model of the gavel output judge.**
//!
//! This crate turns the three whitespace-delimited text files of a judging
//! session into typed, immutable values: per-case problem parameters from
//! the input file and per-case claimed answers from the attempt and
//! reference files. It sits between the text primitives of `gavel_core`
//! and the verdict machinery of `gavel_judge`.
//!
//! ## Architecture
//!
//! * **`index`**: The 1-based [`index::CaseNumber`], kept distinct from raw
//!   `usize` positions so file-order indices and user-facing case numbers
//!   cannot be mixed up.
//! * **`splitter`**: The case-splitting state machine. Consumes token
//!   lines and groups them into sequentially numbered cases, enforcing the
//!   header grammar as it goes.
//! * **`input`**: Loader for the trusted problem input file (`T` records
//!   of `N C`).
//! * **`output`**: The domain output parser, reducing each split case to
//!   either the `impossible` sentinel or a sequence of 32-bit integers.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-fast**: The first malformed token aborts the parse with a
//!    diagnostic that embeds the (bounded) offending text.
//! 2. **Immutability**: Every parsed value is constructed once and only
//!    read afterwards; nothing in this crate mutates after load.
//! 3. **Exact diagnostics**: `Display` output of every error here is part
//!    of the judge's observable contract and is covered by tests.

pub mod index;
pub mod input;
pub mod output;
pub mod splitter;
