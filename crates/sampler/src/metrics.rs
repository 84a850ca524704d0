// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Selection statistics.
//!
//! [`SamplingStats`] counts how often each strategy ran, which indices were
//! picked and how long selection took in total.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::Strategy;

/// Aggregate statistics over a series of selections.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct SamplingStats {
    /// Total number of selections.
    pub selections: usize,
    /// Selections made greedily.
    pub greedy: usize,
    /// Selections made by categorical sampling.
    pub categorical: usize,
    /// Selections made by nucleus sampling.
    pub nucleus: usize,
    /// How many times each index was selected.
    pub histogram: BTreeMap<usize, usize>,
    /// Total time spent in selection.
    pub total_duration: Duration,
}

impl SamplingStats {
    /// Creates an empty statistics container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one selection.
    pub fn record(&mut self, strategy: Strategy, index: usize, elapsed: Duration) {
        self.selections += 1;
        match strategy {
            Strategy::Greedy => self.greedy += 1,
            Strategy::Categorical => self.categorical += 1,
            Strategy::Nucleus { .. } => self.nucleus += 1,
        }
        *self.histogram.entry(index).or_insert(0) += 1;
        self.total_duration += elapsed;
    }

    /// Returns the most frequently selected index (lowest index on ties).
    pub fn mode(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (&index, &count) in &self.histogram {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Returns the fraction of selections that picked `index`.
    pub fn frequency(&self, index: usize) -> f64 {
        if self.selections == 0 {
            return 0.0;
        }
        self.histogram.get(&index).copied().unwrap_or(0) as f64 / self.selections as f64
    }

    /// Returns selections per second.
    pub fn selections_per_second(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs <= 0.0 || self.selections == 0 {
            return 0.0;
        }
        self.selections as f64 / secs
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "Sampling: {} selections ({} greedy, {} categorical, {} nucleus), \
             {} distinct indices, {:.3}ms total ({:.0} sel/s)",
            self.selections,
            self.greedy,
            self.categorical,
            self.nucleus,
            self.histogram.len(),
            self.total_duration.as_secs_f64() * 1000.0,
            self.selections_per_second(),
        )
    }
}
