// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-step token selection.
//!
//! ```text
//! logits ──► [- max, ÷ temperature] ──► [softmax] ──► argmax | sample | sample_top_p ──► index
//! ```
//!
//! The logits buffer is consumed: after a non-greedy selection it holds the
//! probability distribution that was sampled from.

use std::time::Instant;

use nn_core::{argmax, sample, sample_top_p_with, softmax, Element, ProbIndex, RandomSource, Validator};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{SamplerConfig, SamplerError, SamplingStats};

/// The selection strategy a [`Sampler`] runs.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub enum Strategy {
    /// Always the highest logit.
    Greedy,
    /// Categorical sampling over the full distribution.
    Categorical,
    /// Nucleus sampling with the given threshold.
    Nucleus { top_p: f64 },
}

impl Strategy {
    /// Derives the strategy from a configuration.
    pub fn from_config(config: &SamplerConfig) -> Self {
        if config.temperature == 0.0 {
            Strategy::Greedy
        } else if config.uses_nucleus() {
            Strategy::Nucleus {
                top_p: config.top_p,
            }
        } else {
            Strategy::Categorical
        }
    }

    /// Human-readable name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Categorical => "categorical",
            Strategy::Nucleus { .. } => "nucleus",
        }
    }
}

/// Selects token indices from logits according to a [`SamplerConfig`].
///
/// `T` is the logit element type; `R` the random source, a seeded
/// [`StdRng`] unless one is supplied through [`Sampler::with_rng`].
///
/// # Example
/// ```
/// use sampler::{Sampler, SamplerConfig};
///
/// let config = SamplerConfig { temperature: 0.0, ..Default::default() };
/// let mut sampler = Sampler::<f32>::new(config).unwrap();
/// let mut logits = [0.1, 2.5, -1.0];
/// assert_eq!(sampler.select(&mut logits), 1);
/// ```
pub struct Sampler<T: Element, R: RandomSource = StdRng> {
    config: SamplerConfig,
    strategy: Strategy,
    temperature: T,
    top_p: T,
    rng: R,
    scratch: Vec<ProbIndex<T>>,
    stats: SamplingStats,
}

impl<T: Element> Sampler<T, StdRng> {
    /// Creates a sampler whose random source is seeded from `config.seed`,
    /// or from OS entropy when no seed is set.
    pub fn new(config: SamplerConfig) -> Result<Self, SamplerError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<T: Element, R: RandomSource> Sampler<T, R> {
    /// Creates a sampler drawing from the given random source.
    ///
    /// `config.seed` is ignored; the caller owns the source's state.
    pub fn with_rng(config: SamplerConfig, rng: R) -> Result<Self, SamplerError> {
        config.validate()?;
        let temperature = T::from_f64(config.temperature);
        let mut strategy = Strategy::from_config(&config);
        if strategy != Strategy::Greedy && !temperature.is_normal() {
            // Dividing by a zero or subnormal temperature leaves nothing to sample.
            tracing::warn!(
                "temperature {} is not representable at this precision, using greedy",
                config.temperature
            );
            strategy = Strategy::Greedy;
        }
        tracing::info!(
            "sampler created: {} (temperature {}, top-p {}, seed {:?})",
            strategy.name(),
            config.temperature,
            config.top_p,
            config.seed
        );
        Ok(Self {
            temperature,
            top_p: T::from_f64(config.top_p),
            config,
            strategy,
            rng,
            scratch: Vec::new(),
            stats: SamplingStats::new(),
        })
    }

    /// Returns the configuration this sampler was built from.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns the configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the statistics gathered so far.
    pub fn stats(&self) -> &SamplingStats {
        &self.stats
    }

    /// Clears the gathered statistics.
    pub fn reset_stats(&mut self) {
        self.stats = SamplingStats::new();
    }

    /// Selects one index from `logits`, overwriting them in the process.
    ///
    /// `logits` must be non-empty. A single-logit input under the nucleus
    /// strategy is sampled categorically, since the nucleus needs two
    /// candidates.
    pub fn select(&mut self, logits: &mut [T]) -> usize {
        let start = Instant::now();

        let (strategy, index) = match self.strategy {
            Strategy::Greedy => (Strategy::Greedy, argmax(logits)),
            Strategy::Nucleus { .. } if logits.len() >= 2 => {
                self.to_probabilities(logits);
                let index = sample_top_p_with(logits, self.top_p, &mut self.rng, &mut self.scratch);
                (self.strategy, index)
            }
            Strategy::Nucleus { .. } | Strategy::Categorical => {
                self.to_probabilities(logits);
                (Strategy::Categorical, sample(logits, &mut self.rng))
            }
        };

        self.stats.record(strategy, index, start.elapsed());
        tracing::debug!("selected index {index} via {}", strategy.name());
        index
    }

    /// Checked [`Sampler::select`].
    ///
    /// # Errors
    /// Returns [`SamplerError::Kernel`] if `logits` is empty or holds a
    /// NaN or infinite value. `logits` is left untouched on error.
    pub fn try_select(&mut self, logits: &mut [T]) -> Result<usize, SamplerError> {
        Validator::validate_non_empty("select", logits)?;
        Validator::validate_finite("select", logits)?;
        Ok(self.select(logits))
    }

    /// Scales by the temperature and normalizes into a distribution.
    ///
    /// The maximum is subtracted first, so every scaled logit is at most 0
    /// and the largest is exactly 0. A tiny temperature can only push the
    /// others towards `-inf`, never produce `inf - inf`.
    fn to_probabilities(&self, logits: &mut [T]) {
        let max = logits.iter().copied().fold(logits[0], T::max);
        for l in logits.iter_mut() {
            *l = (*l - max) / self.temperature;
        }
        softmax(logits);
    }
}

impl<T: Element, R: RandomSource> std::fmt::Debug for Sampler<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler")
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .field("selections", &self.stats.selections)
            .finish()
    }
}
