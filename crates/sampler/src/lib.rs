// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # sampler
//!
//! Turns a transformer's output logits into the next token index.
//!
//! The sampler takes:
//! - A [`SamplerConfig`] (temperature, nucleus threshold, optional seed).
//! - A random source (a seeded `StdRng` by default).
//!
//! And, per decoding step, picks one of three `nn-core` strategies:
//! ```text
//! temperature == 0           → argmax
//! top_p outside (0, 1)       → logits / T → softmax → sample
//! otherwise                  → logits / T → softmax → sample_top_p
//! ```
//!
//! Selections are counted in [`SamplingStats`] for reporting.

mod config;
mod error;
mod metrics;
mod sampler;

pub use config::SamplerConfig;
pub use error::SamplerError;
pub use metrics::SamplingStats;
pub use sampler::{Sampler, Strategy};
