// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Categorical (inverse-CDF) sampling.

use super::RandomSource;
use crate::{Element, KernelError, Validator};

/// Samples an index from `probabilities`, which must sum to 1.
///
/// Draws `r` uniformly from `[0, 1)` and returns the first index whose
/// cumulative probability exceeds `r`. If rounding keeps the cumulative sum
/// from ever exceeding `r`, the last index is returned.
///
/// # Panics
/// Panics if `probabilities` is empty.
#[inline]
pub fn sample<T, R>(probabilities: &[T], rng: &mut R) -> usize
where
    T: Element,
    R: RandomSource + ?Sized,
{
    assert!(!probabilities.is_empty(), "sample: empty distribution");

    let r = T::unit_draw(rng.next_unit());
    let mut cdf = T::zero();
    for (i, &p) in probabilities.iter().enumerate() {
        cdf += p;
        if r < cdf {
            return i;
        }
    }
    probabilities.len() - 1
}

/// Checked [`sample`].
///
/// # Errors
/// Returns a [`KernelError`] if `probabilities` is empty, contains a negative
/// or non-finite value, or does not sum to 1 within
/// [`crate::DISTRIBUTION_TOLERANCE`].
pub fn try_sample<T, R>(probabilities: &[T], rng: &mut R) -> Result<usize, KernelError>
where
    T: Element,
    R: RandomSource + ?Sized,
{
    Validator::validate_distribution("sample", probabilities)?;
    Ok(sample(probabilities, rng))
}
