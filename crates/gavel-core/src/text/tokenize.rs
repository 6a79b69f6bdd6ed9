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

use std::io::{self, BufRead};

/// Splits a line into lowercased tokens.
///
/// Tokens are the maximal runs of non-whitespace characters; splitting
/// uses the language's default whitespace classes, so spaces, tabs, and
/// stray carriage returns all delimit. The iterator is lazy and finite;
/// calling `tokenize` again on the same line restarts it. An empty or
/// all-whitespace line yields nothing.
#[inline]
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(str::to_lowercase)
}

/// Reads every line of `reader`, tokenizes it, and keeps the non-empty
/// token lines in file order.
///
/// Blank and all-whitespace lines vanish here; downstream consumers only
/// ever see lines that carry at least one token.
pub fn read_token_lines<R: BufRead>(reader: R) -> io::Result<Vec<Vec<String>>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let tokens: Vec<String> = tokenize(&line?).collect();
        if !tokens.is_empty() {
            lines.push(tokens);
        }
    }
    Ok(lines)
}
