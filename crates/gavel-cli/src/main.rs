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

//! The `gavel` binary.
//!
//! `gavel <input> <attempt> <reference>` judges one session: silence and
//! exit status 0 on acceptance, or the single diagnostic on stderr and
//! exit status 1 otherwise. `gavel --self-test` runs the built-in smoke
//! suite instead.

mod selftest;

use clap::Parser;
use gavel_judge::harness::Verdict;
use gavel_judge::judge::ReversortJudge;
use gavel_judge::session::judge_files;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "gavel", version)]
#[command(about = "Grades a contest attempt file against a reference output")]
struct Args {
    /// Problem input file.
    #[arg(required_unless_present = "self_test")]
    input: Option<PathBuf>,

    /// Contestant attempt file.
    #[arg(required_unless_present = "self_test")]
    attempt: Option<PathBuf>,

    /// Reference output file.
    #[arg(required_unless_present = "self_test")]
    reference: Option<PathBuf>,

    /// Run the built-in self-test suite and exit.
    #[arg(long)]
    self_test: bool,

    /// Raise log verbosity to debug.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    if args.self_test {
        return match selftest::run() {
            Ok(()) => {
                eprintln!("All tests passed!");
                ExitCode::SUCCESS
            }
            Err(failure) => {
                eprintln!("{failure}");
                ExitCode::FAILURE
            }
        };
    }

    let (Some(input), Some(attempt), Some(reference)) =
        (args.input, args.attempt, args.reference)
    else {
        // Unreachable per the clap constraints, but exit cleanly anyway.
        return ExitCode::FAILURE;
    };

    match judge_files(&ReversortJudge, &input, &attempt, &reference) {
        Ok(Verdict::Accepted) => {
            debug!("attempt accepted");
            ExitCode::SUCCESS
        }
        Ok(Verdict::Rejected(rejection)) => {
            eprintln!("{rejection}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
