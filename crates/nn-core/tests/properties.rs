// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for the kernels.
//!
//! Numeric properties run on `f64` so tolerances can stay tight; the `f32`
//! instantiation shares the same code path.

use nn_core::{
    accumulate, argmax, matvec, nucleus, rms_norm, sample, sample_top_p, softmax, FixedSource,
};
use proptest::prelude::*;

// ── Strategies ─────────────────────────────────────────────────

fn logits(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop_oneof![
        prop::collection::vec(-20.0f64..20.0, 2..max_len),
        // Small integers produce exact ties.
        prop::collection::vec((-4i32..4).prop_map(f64::from), 2..max_len),
    ]
}

fn distribution(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    logits(max_len).prop_map(|mut x| {
        softmax(&mut x);
        x
    })
}

// ── Reference implementations ──────────────────────────────────

/// Nucleus without the cutoff pre-filter.
fn brute_force_nucleus(probabilities: &[f64], topp: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));

    let mut cumulative = 0.0;
    for (i, &idx) in order.iter().enumerate() {
        cumulative += probabilities[idx];
        if cumulative > topp {
            return order[..=i].to_vec();
        }
    }
    order
}

fn manual_cdf_pick(probabilities: &[f64], r: f64) -> usize {
    let mut cdf = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cdf += p;
        if r < cdf {
            return i;
        }
    }
    probabilities.len() - 1
}

proptest! {
    #[test]
    fn prop_accumulate_adds_elementwise(
        pairs in prop::collection::vec((-1e6f32..1e6, -1e6f32..1e6), 0..64)
    ) {
        let mut a: Vec<f32> = pairs.iter().map(|p| p.0).collect();
        let b: Vec<f32> = pairs.iter().map(|p| p.1).collect();
        let original = a.clone();

        accumulate(&mut a, &b);

        for i in 0..a.len() {
            prop_assert_eq!(a[i], original[i] + b[i]);
        }
    }

    #[test]
    fn prop_softmax_is_distribution(mut x in logits(64)) {
        softmax(&mut x);

        let sum: f64 = x.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "sum = {}", sum);
        prop_assert!(x.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn prop_softmax_f32_is_distribution(x in prop::collection::vec(-30.0f32..30.0, 1..256)) {
        let mut x = x;
        softmax(&mut x);

        let sum: f32 = x.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-5, "sum = {}", sum);
        prop_assert!(x.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn prop_softmax_shift_invariant(x in logits(32), shift in -50.0f64..50.0) {
        let mut base = x.clone();
        let mut shifted: Vec<f64> = x.iter().map(|v| v + shift).collect();

        softmax(&mut base);
        softmax(&mut shifted);

        for (a, b) in base.iter().zip(&shifted) {
            prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_argmax_is_first_maximum(v in logits(64)) {
        let i = argmax(&v);

        prop_assert!(v.iter().all(|&x| v[i] >= x));
        prop_assert!(v[..i].iter().all(|&x| x < v[i]));
    }

    #[test]
    fn prop_rms_norm_linear_in_weight(
        x in prop::collection::vec(-10.0f64..10.0, 1..64),
        scale in -4.0f64..4.0,
    ) {
        let ones = vec![1.0; x.len()];
        let scaled = vec![scale; x.len()];
        let mut unit = vec![0.0; x.len()];
        let mut out = vec![0.0; x.len()];

        rms_norm(&mut unit, &x, &ones);
        rms_norm(&mut out, &x, &scaled);

        let ms: f64 = x.iter().map(|v| v * v).sum::<f64>() / x.len() as f64;
        let divisor = (ms + 1e-5).sqrt();
        for i in 0..x.len() {
            prop_assert!((unit[i] - x[i] / divisor).abs() < 1e-9);
            prop_assert!((out[i] - scale * unit[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_matvec_identity(x in prop::collection::vec(-100.0f64..100.0, 1..24)) {
        let n = x.len();
        let mut eye = vec![0.0; n * n];
        for i in 0..n {
            eye[i * n + i] = 1.0;
        }
        let mut out = vec![0.0; n];

        matvec(&mut out, &x, &eye);

        prop_assert_eq!(out, x);
    }

    #[test]
    fn prop_matvec_matches_row_dot_products(
        (rows, cols, w, x) in (1usize..8, 1usize..8).prop_flat_map(|(d, n)| (
            Just(d),
            Just(n),
            prop::collection::vec(-5.0f64..5.0, d * n),
            prop::collection::vec(-5.0f64..5.0, n),
        ))
    ) {
        let mut out = vec![0.0; rows];
        matvec(&mut out, &x, &w);

        for i in 0..rows {
            let expected: f64 = (0..cols).map(|j| w[i * cols + j] * x[j]).sum();
            prop_assert!((out[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_sample_matches_manual_cdf(p in distribution(32), u in 0.0f64..1.0) {
        let picked = sample(&p, &mut FixedSource::new(u));
        prop_assert_eq!(picked, manual_cdf_pick(&p, u));
    }

    #[test]
    fn prop_cutoff_never_drops_nucleus_members(p in distribution(64), topp in 0.01f64..=1.0) {
        let mut scratch = Vec::new();
        let pruned: Vec<usize> = nucleus(&p, topp, &mut scratch).indices().collect();

        prop_assert_eq!(pruned, brute_force_nucleus(&p, topp));
    }

    #[test]
    fn prop_top_p_sample_stays_in_nucleus(
        p in distribution(64),
        topp in 0.05f64..=1.0,
        u in 0.0f64..1.0,
    ) {
        let members = brute_force_nucleus(&p, topp);
        let picked = sample_top_p(&p, topp, &mut FixedSource::new(u));

        prop_assert!(members.contains(&picked));
    }

    #[test]
    fn prop_top_p_one_matches_sample_over_sorted_candidates(
        p in distribution(64),
        u in 0.0f64..1.0,
    ) {
        let order = brute_force_nucleus(&p, 1.0);
        let sorted: Vec<f64> = order.iter().map(|&i| p[i]).collect();
        let cumulative: f64 = sorted.iter().sum();

        let expected = order[manual_cdf_pick(&sorted, u * cumulative)];
        prop_assert_eq!(sample_top_p(&p, 1.0, &mut FixedSource::new(u)), expected);
    }
}

#[test]
fn test_top_p_concentrates_as_topp_shrinks() {
    let p = [0.05f64, 0.6, 0.2, 0.15];
    for u in [0.0, 0.25, 0.5, 0.75, 0.999] {
        assert_eq!(sample_top_p(&p, 1e-9, &mut FixedSource::new(u)), 1);
    }
}

#[test]
fn test_sample_extremes() {
    let p = [0.3f64, 0.3, 0.4];
    assert_eq!(sample(&p, &mut FixedSource::new(0.0)), 0);
    assert_eq!(sample(&p, &mut FixedSource::new(1.0)), 2);
}
