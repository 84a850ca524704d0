// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise accumulation (residual add).

use crate::{Element, KernelError, Validator};

/// Adds `b` into `a` element-wise: `a[i] += b[i]`.
///
/// `a` and `b` must have the same length. A mismatch is a caller bug; it is
/// caught by a debug assertion and otherwise only the common prefix is added.
#[inline]
pub fn accumulate<T: Element>(a: &mut [T], b: &[T]) {
    debug_assert_eq!(a.len(), b.len(), "accumulate: length mismatch");
    for (ai, &bi) in a.iter_mut().zip(b) {
        *ai += bi;
    }
}

/// Checked [`accumulate`].
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `a` and `b` differ in length.
pub fn try_accumulate<T: Element>(a: &mut [T], b: &[T]) -> Result<(), KernelError> {
    Validator::validate_same_len("accumulate", a, b)?;
    accumulate(a, b);
    Ok(())
}
