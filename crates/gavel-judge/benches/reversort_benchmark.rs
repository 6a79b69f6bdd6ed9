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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gavel_judge::reversort::reversort_cost;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Deterministic shuffled permutation of `1..=len`.
fn shuffled_permutation(len: usize, seed: u64) -> Vec<i32> {
    let mut values: Vec<i32> = (1..=len as i32).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    values
}

fn bench_reversort_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversort_cost");
    for &len in &[16usize, 256, 1024, 4096] {
        let values = shuffled_permutation(len, 42);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, v| {
            b.iter(|| reversort_cost(black_box(v)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reversort_cost);
criterion_main!(benches);
