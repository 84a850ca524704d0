// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Softmax activation operation.

use crate::{Element, KernelError, Validator};

/// Computes softmax in place: `x[i] = exp(x[i] - max) / sum(exp(x - max))`.
///
/// Uses the numerically stable variant that subtracts the maximum value
/// before exponentiation to prevent overflow. The exponential is evaluated
/// in double precision (see [`Element::exp_wide`]) and every element is
/// divided by the sum rather than multiplied by its reciprocal.
///
/// # Panics
/// Panics if `x` is empty.
pub fn softmax<T: Element>(x: &mut [T]) {
    // Find max for numerical stability.
    let mut max_val = x[0];
    for &v in x.iter() {
        if v > max_val {
            max_val = v;
        }
    }

    // Compute exp(x - max) and sum.
    let mut sum = T::zero();
    for v in x.iter_mut() {
        *v = (*v - max_val).exp_wide();
        sum += *v;
    }

    // Normalize.
    for v in x.iter_mut() {
        *v /= sum;
    }
}

/// Checked [`softmax`].
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for an empty `x` and
/// [`KernelError::NonFinite`] if any input is NaN or infinite.
pub fn try_softmax<T: Element>(x: &mut [T]) -> Result<(), KernelError> {
    Validator::validate_non_empty("softmax", x)?;
    Validator::validate_finite("softmax", x)?;
    softmax(x);
    Ok(())
}
