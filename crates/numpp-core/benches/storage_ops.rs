// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for view materialization, transpose and dot products.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numpp_core::{all, range_step, Storage};

fn square(n: usize) -> Storage<f64> {
    let values = (0..n * n).map(|i| i as f64).collect();
    Storage::from_vec(values, [n, n]).unwrap()
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");
    for n in [16usize, 64, 256] {
        let s = square(n);
        group.bench_with_input(BenchmarkId::new("every_other_row", n), &s, |b, s| {
            b.iter(|| black_box(s.view(&[range_step(0, -1, 2), all()]).unwrap()))
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for n in [16usize, 64, 256] {
        let s = square(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &s, |b, s| {
            b.iter(|| black_box(s.transpose()))
        });
    }
    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    for n in [8usize, 32, 64] {
        let a = square(n);
        let b_mat = square(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b_mat), |b, (lhs, rhs)| {
            b.iter(|| black_box(lhs.dot(rhs).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_view, bench_transpose, bench_dot);
criterion_main!(benches);
