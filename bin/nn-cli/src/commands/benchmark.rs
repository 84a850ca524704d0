// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnk benchmark` command: time every kernel on synthetic data.
//!
//! Prints one row per kernel with mean latency and throughput. For
//! statistically rigorous numbers use the criterion benches in `nn-core`.

use std::time::{Duration, Instant};

use nn_core::{argmax, matvec, rms_norm, sample, sample_top_p_with, softmax};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct BenchResult {
    kernel: &'static str,
    shape: String,
    mean: Duration,
}

pub fn execute(dim: usize, rows: usize, vocab: usize, iters: usize) -> anyhow::Result<()> {
    if dim == 0 || rows == 0 || vocab < 2 || iters == 0 {
        anyhow::bail!("dim, rows and iters must be positive and vocab at least 2");
    }

    println!("  Kernels: dim={dim}, rows={rows}, vocab={vocab}, iters={iters}");
    println!();

    let mut rng = StdRng::seed_from_u64(0);
    let x = random_vec(&mut rng, dim);
    let w = random_vec(&mut rng, rows * dim);
    let weight = random_vec(&mut rng, dim);
    let logits = random_vec(&mut rng, vocab);

    let mut results = Vec::new();

    let mut out = vec![0.0f32; rows];
    results.push(BenchResult {
        kernel: "matvec",
        shape: format!("{rows}x{dim}"),
        mean: time(iters, || matvec(&mut out, &x, &w)),
    });

    let mut normed = vec![0.0f32; dim];
    results.push(BenchResult {
        kernel: "rms_norm",
        shape: format!("{dim}"),
        mean: time(iters, || rms_norm(&mut normed, &x, &weight)),
    });

    let mut probs = logits.clone();
    results.push(BenchResult {
        kernel: "softmax",
        shape: format!("{vocab}"),
        mean: time(iters, || {
            probs.copy_from_slice(&logits);
            softmax(&mut probs);
        }),
    });

    results.push(BenchResult {
        kernel: "argmax",
        shape: format!("{vocab}"),
        mean: time(iters, || {
            std::hint::black_box(argmax(&probs));
        }),
    });

    results.push(BenchResult {
        kernel: "sample",
        shape: format!("{vocab}"),
        mean: time(iters, || {
            std::hint::black_box(sample(&probs, &mut rng));
        }),
    });

    let mut scratch = Vec::with_capacity(vocab);
    results.push(BenchResult {
        kernel: "sample_top_p(0.9)",
        shape: format!("{vocab}"),
        mean: time(iters, || {
            std::hint::black_box(sample_top_p_with(&probs, 0.9, &mut rng, &mut scratch));
        }),
    });

    println!("  {:<20} {:>12} {:>12} {:>12}", "Kernel", "Shape", "Mean (µs)", "Calls/s");
    println!("  {}", "-".repeat(60));
    for r in &results {
        let us = r.mean.as_secs_f64() * 1e6;
        let per_sec = if us > 0.0 { 1e6 / us } else { 0.0 };
        println!("  {:<20} {:>12} {:>12.2} {:>12.0}", r.kernel, r.shape, us, per_sec);
    }

    tracing::info!("benchmarked {} kernels", results.len());
    Ok(())
}

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

/// Runs `f` once to warm up, then `iters` times, returning the mean duration.
fn time<F: FnMut()>(iters: usize, mut f: F) -> Duration {
    f();
    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    start.elapsed() / u32::try_from(iters).unwrap_or(u32::MAX)
}
