// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: a miniature decoding step built from the kernels.
//!
//! These tests run the sequence a transformer forward pass drives per token
//! (normalize → project → residual → select) and check that the kernels
//! and the sampler compose.

use nn_core::{accumulate, matvec, rms_norm, softmax};
use sampler::{Sampler, SamplerConfig, Strategy};

// ── Helpers ────────────────────────────────────────────────────

/// A deterministic `[rows, cols]` weight matrix.
fn weights(rows: usize, cols: usize) -> Vec<f32> {
    (0..rows * cols)
        .map(|i| ((i * 7 + 3) % 11) as f32 / 11.0 - 0.5)
        .collect()
}

/// One toy decoding step: hidden state → logits over `vocab` entries.
fn forward(hidden: &[f32], vocab: usize) -> Vec<f32> {
    let dim = hidden.len();
    let mut normed = vec![0.0f32; dim];
    rms_norm(&mut normed, hidden, &vec![1.0; dim]);

    let mut projected = vec![0.0f32; dim];
    matvec(&mut projected, &normed, &weights(dim, dim));
    accumulate(&mut projected, hidden);

    let mut logits = vec![0.0f32; vocab];
    matvec(&mut logits, &projected, &weights(vocab, dim));
    logits
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn test_greedy_decoding_matches_argmax_of_softmax() {
    let hidden = [0.3f32, -1.2, 0.8, 2.0, -0.1, 0.05, 1.4, -0.7];
    let logits = forward(&hidden, 32);

    let mut probs = logits.clone();
    softmax(&mut probs);
    let expected = nn_core::argmax(&probs);

    let config = SamplerConfig {
        temperature: 0.0,
        ..Default::default()
    };
    let mut sampler = Sampler::<f32>::new(config).unwrap();
    let mut buf = logits;

    assert_eq!(sampler.strategy(), Strategy::Greedy);
    assert_eq!(sampler.select(&mut buf), expected);
}

#[test]
fn test_config_file_to_reproducible_tokens() {
    let config = SamplerConfig::from_toml(
        r#"
temperature = 0.8
top_p = 0.9
seed = 2024
"#,
    )
    .unwrap();

    let run = |config: SamplerConfig| -> Vec<usize> {
        let mut sampler = Sampler::<f32>::new(config).unwrap();
        let mut hidden = vec![0.1f32; 16];
        let mut tokens = Vec::new();
        for step in 0..20 {
            let mut logits = forward(&hidden, 64);
            let token = sampler.select(&mut logits);
            tokens.push(token);
            // Feed the choice back in so later steps depend on earlier ones.
            hidden[step % 16] += token as f32 / 64.0;
        }
        tokens
    };

    let first = run(config.clone());
    let second = run(config);
    assert_eq!(first, second);
    assert!(first.iter().all(|&t| t < 64));
}

#[test]
fn test_stats_track_all_selections() {
    let config = SamplerConfig {
        temperature: 1.0,
        top_p: 0.5,
        seed: Some(5),
    };
    let mut sampler = Sampler::<f64>::new(config).unwrap();

    for _ in 0..200 {
        let mut logits = [4.0f64, 1.0, 0.0, -1.0, -3.0];
        sampler.select(&mut logits);
    }

    let stats = sampler.stats();
    assert_eq!(stats.selections, 200);
    assert_eq!(stats.nucleus, 200);
    // p0 ≈ 0.94 > 0.5, so the nucleus is index 0 alone.
    assert_eq!(stats.mode(), Some(0));
    assert_eq!(stats.frequency(0), 1.0);
}

#[test]
fn test_f32_and_f64_samplers_agree_on_greedy() {
    let logits32 = [0.25f32, -0.5, 0.75, 0.7];
    let logits64 = logits32.map(f64::from);

    let config = SamplerConfig {
        temperature: 0.0,
        ..Default::default()
    };
    let mut s32 = Sampler::<f32>::new(config.clone()).unwrap();
    let mut s64 = Sampler::<f64>::new(config).unwrap();

    assert_eq!(s32.select(&mut logits32.clone()), s64.select(&mut logits64.clone()));
}
