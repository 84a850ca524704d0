// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Nucleus ("top-p") sampling.
//!
//! Sampling is restricted to the smallest set of indices, taken in
//! descending probability order, whose cumulative probability exceeds
//! `topp`. Low-probability tail tokens can therefore never be drawn.
//!
//! ```text
//! probabilities ──prune < (1-topp)/(n-1)──► candidates
//!               ──sort desc (ties: index asc)──► walk until cum > topp
//!               ──draw r · cum──► index
//! ```

use std::cmp::Ordering;

use super::RandomSource;
use crate::{Element, KernelError, Validator};

/// A candidate probability together with its position in the distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbIndex<T> {
    /// Probability mass of this candidate.
    pub prob: T,
    /// Index into the original distribution.
    pub index: usize,
}

/// The truncated candidate set produced by [`nucleus`].
#[derive(Debug, Clone, Copy)]
pub struct Nucleus<'a, T> {
    candidates: &'a [ProbIndex<T>],
    cumulative: T,
}

impl<'a, T: Element> Nucleus<'a, T> {
    /// Candidates in descending probability order.
    pub fn candidates(&self) -> &'a [ProbIndex<T>] {
        self.candidates
    }

    /// Sum of the candidates' probabilities, accumulated in order.
    pub fn cumulative_prob(&self) -> T {
        self.cumulative
    }

    /// Number of candidates in the nucleus.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` only for an empty input distribution.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Original indices of the candidates, highest probability first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + 'a {
        self.candidates.iter().map(|c| c.index)
    }

    /// Draws one candidate proportionally to its probability.
    ///
    /// The uniform draw is scaled by the nucleus' own cumulative probability,
    /// so the truncated set is implicitly renormalized. Falls back to the
    /// last candidate if rounding keeps the walk from crossing the draw.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        let r = T::unit_draw(rng.next_unit()) * self.cumulative;
        let mut cdf = T::zero();
        for c in self.candidates {
            cdf += c.prob;
            if r < cdf {
                return c.index;
            }
        }
        self.candidates.last().map_or(0, |c| c.index)
    }
}

/// Computes the nucleus of `probabilities` for threshold `topp`, using
/// `scratch` as the candidate buffer.
///
/// 1. Values below `(1 - topp) / (n - 1)` cannot belong to the nucleus of a
///    distribution summing to 1 and are dropped before sorting. If that drops
///    everything (only possible for `topp < 1/n`) no value is dropped.
/// 2. Candidates are sorted by descending probability; equal probabilities
///    keep ascending index order.
/// 3. The walk stops at the first candidate where the cumulative probability
///    exceeds `topp`, inclusive. If rounding prevents that, every candidate
///    is kept.
///
/// `probabilities` should hold at least two values.
pub fn nucleus<'a, T: Element>(
    probabilities: &[T],
    topp: T,
    scratch: &'a mut Vec<ProbIndex<T>>,
) -> Nucleus<'a, T> {
    debug_assert!(probabilities.len() >= 2, "nucleus: need at least two candidates");

    let cutoff = (T::one() - topp) / T::from_usize(probabilities.len().saturating_sub(1));

    scratch.clear();
    scratch.extend(
        probabilities
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p >= cutoff)
            .map(|(index, &prob)| ProbIndex { prob, index }),
    );
    if scratch.is_empty() {
        scratch.extend(
            probabilities
                .iter()
                .enumerate()
                .map(|(index, &prob)| ProbIndex { prob, index }),
        );
    }

    // Stable, so ties stay in index order.
    scratch.sort_by(descending_prob);

    let mut cumulative = T::zero();
    let mut len = scratch.len();
    for (i, c) in scratch.iter().enumerate() {
        cumulative += c.prob;
        if cumulative > topp {
            len = i + 1;
            break;
        }
    }

    Nucleus {
        candidates: &scratch[..len],
        cumulative,
    }
}

fn descending_prob<T: Element>(a: &ProbIndex<T>, b: &ProbIndex<T>) -> Ordering {
    b.prob.to_f64_lossless().total_cmp(&a.prob.to_f64_lossless())
}

/// Nucleus sampling with a caller-owned candidate buffer.
///
/// Equivalent to [`sample_top_p`] but reuses `scratch` across calls, so a
/// decoding loop allocates the buffer once.
pub fn sample_top_p_with<T, R>(
    probabilities: &[T],
    topp: T,
    rng: &mut R,
    scratch: &mut Vec<ProbIndex<T>>,
) -> usize
where
    T: Element,
    R: RandomSource + ?Sized,
{
    nucleus(probabilities, topp, scratch).draw(rng)
}

/// Samples an index from the smallest set of most-probable indices whose
/// cumulative probability exceeds `topp`.
///
/// `probabilities` must sum to 1 and hold at least two values; `topp` must
/// lie in `(0, 1]`. See [`nucleus`] for how the set is built.
pub fn sample_top_p<T, R>(probabilities: &[T], topp: T, rng: &mut R) -> usize
where
    T: Element,
    R: RandomSource + ?Sized,
{
    let mut scratch = Vec::with_capacity(probabilities.len());
    sample_top_p_with(probabilities, topp, rng, &mut scratch)
}

/// Checked [`sample_top_p`].
///
/// # Errors
/// Returns [`KernelError::TooFewCandidates`] for fewer than two values,
/// [`KernelError::InvalidTopP`] for `topp` outside `(0, 1]`, and the
/// distribution errors of [`Validator::validate_distribution`].
pub fn try_sample_top_p<T, R>(probabilities: &[T], topp: T, rng: &mut R) -> Result<usize, KernelError>
where
    T: Element,
    R: RandomSource + ?Sized,
{
    Validator::validate_min_len(probabilities, 2)?;
    Validator::validate_top_p(topp)?;
    Validator::validate_distribution("sample_top_p", probabilities)?;
    Ok(sample_top_p(probabilities, topp, rng))
}
