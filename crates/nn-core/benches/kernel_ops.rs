// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the forward-pass kernels at GPT-2-small sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nn_core::{argmax, matvec, rms_norm, sample, sample_top_p_with, softmax};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIM: usize = 768;
const VOCAB: usize = 50_257;

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

fn bench_matvec(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("matvec");

    for rows in [DIM, 4 * DIM] {
        let x = random_vec(&mut rng, DIM);
        let w = random_vec(&mut rng, rows * DIM);
        let mut out = vec![0.0f32; rows];

        group.bench_with_input(BenchmarkId::from_parameter(format!("{rows}x{DIM}")), &rows, |b, _| {
            b.iter(|| matvec(black_box(&mut out), black_box(&x), black_box(&w)))
        });
    }
    group.finish();
}

fn bench_rms_norm(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let x = random_vec(&mut rng, DIM);
    let weight = random_vec(&mut rng, DIM);
    let mut out = vec![0.0f32; DIM];

    c.bench_function("rms_norm/768", |b| {
        b.iter(|| rms_norm(black_box(&mut out), black_box(&x), black_box(&weight)))
    });
}

fn bench_softmax(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let logits = random_vec(&mut rng, VOCAB);
    let mut buf = logits.clone();

    c.bench_function("softmax/vocab", |b| {
        b.iter(|| {
            buf.copy_from_slice(&logits);
            softmax(black_box(&mut buf));
        })
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut probs = random_vec(&mut rng, VOCAB);
    softmax(&mut probs);
    let mut scratch = Vec::with_capacity(VOCAB);

    let mut group = c.benchmark_group("sampling");
    group.bench_function("argmax", |b| b.iter(|| argmax(black_box(&probs))));
    group.bench_function("sample", |b| b.iter(|| sample(black_box(&probs), &mut rng)));
    group.bench_function("top_p_0.9", |b| {
        b.iter(|| sample_top_p_with(black_box(&probs), 0.9, &mut rng, &mut scratch))
    });
    group.finish();
}

criterion_group!(benches, bench_matvec, bench_rms_norm, bench_softmax, bench_sampling);
criterion_main!(benches);
