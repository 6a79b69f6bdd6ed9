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

//! Built-in smoke suite behind `--self-test`.
//!
//! A deployment sanity check, not the unit-test suite: a handful of
//! representative checks across the text primitives, the cost
//! accumulator, and two end-to-end sessions. Failures accumulate in an
//! explicit runner value; nothing here touches process-wide state.

use gavel_core::text::integer::parse_bounded_int;
use gavel_core::text::tokenize::tokenize;
use gavel_core::text::truncate::truncate;
use gavel_judge::harness::Verdict;
use gavel_judge::judge::ReversortJudge;
use gavel_judge::reversort::reversort_cost;
use gavel_judge::session::judge_readers;

struct SelfTest {
    failures: Vec<String>,
}

impl SelfTest {
    fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    fn check(&mut self, name: &str, ok: bool) {
        if !ok {
            self.failures.push(format!("self-test failed: {name}"));
        }
    }

    fn finish(self) -> Result<(), String> {
        match self.failures.into_iter().next() {
            None => Ok(()),
            Some(first) => Err(first),
        }
    }
}

/// Runs the smoke suite, reporting the first failing check.
pub fn run() -> Result<(), String> {
    let mut t = SelfTest::new();

    t.check("truncate keeps short tokens", truncate("helloworld") == "helloworld");
    t.check(
        "truncate marks long tokens",
        truncate(&"x".repeat(51)) == format!("{}...", "x".repeat(47)),
    );

    t.check(
        "integer parser strips leading zeros",
        parse_bounded_int("010111") == Ok(10111),
    );
    t.check(
        "integer parser rejects values past the window",
        parse_bounded_int("1000000000000000001").is_err(),
    );

    t.check(
        "tokenizer lowercases and splits",
        tokenize("AbC \t 234").collect::<Vec<_>>() == ["abc", "234"],
    );

    t.check("reversort cost of a descending run", reversort_cost(&[4, 3, 2, 1]) == 6);
    t.check(
        "reversort cost is shared across arrangements",
        reversort_cost(&[4, 2, 1, 3]) == 6,
    );

    let verdict = judge_readers(
        &ReversortJudge,
        "1\n2 1\n".as_bytes(),
        "Case #1: 1 2\n".as_bytes(),
        "Case #1: 1 2\n".as_bytes(),
    );
    t.check(
        "end-to-end acceptance",
        matches!(verdict, Ok(Verdict::Accepted)),
    );

    let verdict = judge_readers(
        &ReversortJudge,
        "1\n2 1\n".as_bytes(),
        "Case #1: IMPOSSIBLE\n".as_bytes(),
        "Case #1: 1 2\n".as_bytes(),
    );
    t.check(
        "end-to-end impossible claim",
        match verdict {
            Ok(Verdict::Rejected(rejection)) => {
                rejection.to_string()
                    == "Case #1: Contestant claims a solution does not exist \
                        while judge finds a solution"
            }
            _ => false,
        },
    );

    t.finish()
}
