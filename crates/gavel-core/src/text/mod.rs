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

//! # Text Primitives
//!
//! The textual foundation of the judge. Output files arrive as free-form
//! bytes written by contestants; these submodules normalize them into the
//! small vocabulary the rest of the pipeline understands.
//!
//! ## Submodules
//!
//! - `truncate`: Bounds untrusted text before it is embedded in a
//!   diagnostic message.
//! - `integer`: The canonical integer grammar shared by every layer that
//!   decodes a numeric token, with a hard `[-10^18, 10^18]` window.
//! - `tokenize`: Lowercasing whitespace tokenization for single lines and
//!   buffered readers.

pub mod integer;
pub mod tokenize;
pub mod truncate;
