// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy (arg-max) selection.

use crate::{Element, KernelError, Validator};

/// Returns the index of the largest value in `v`.
///
/// On ties the lowest index wins: the running maximum only moves on a
/// strictly greater value.
///
/// # Panics
/// Panics if `v` is empty.
#[inline]
pub fn argmax<T: Element>(v: &[T]) -> usize {
    let mut best = 0;
    let mut max_val = v[0];
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > max_val {
            best = i;
            max_val = x;
        }
    }
    best
}

/// Checked [`argmax`].
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for an empty `v` and
/// [`KernelError::NonFinite`] if any value is NaN or infinite.
pub fn try_argmax<T: Element>(v: &[T]) -> Result<usize, KernelError> {
    Validator::validate_non_empty("argmax", v)?;
    Validator::validate_finite("argmax", v)?;
    Ok(argmax(v))
}
