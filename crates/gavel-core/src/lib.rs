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

//! # Gavel Core
//!
//! Text and token primitives for the gavel output-judging ecosystem. This
//! crate consolidates the low-level building blocks that the parsing and
//! judging crates share: diagnostic-safe truncation, a strict bounded
//! integer grammar, and whitespace tokenization.
//!
//! ## Modules
//!
//! - `text`: Truncation for embedding untrusted tokens in diagnostics,
//!   the canonical bounded integer parser, and the lowercasing tokenizer
//!   with buffered line-level helpers.
//!
//! ## Purpose
//!
//! Contest output files are adversarial input. Everything in this crate is
//! written so that a malformed byte stream can only ever produce a precise,
//! bounded diagnostic, never a panic or an unbounded message.

pub mod text;
