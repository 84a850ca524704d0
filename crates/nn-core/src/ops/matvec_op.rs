// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix-vector multiplication.

use crate::{Element, KernelError, Validator};

/// Computes `out = W @ x` for a row-major `W` of shape `[d, n]`.
///
/// `x` has length `n`, `out` has length `d` and `w` has length `d * n`:
///
/// `out[i] = sum_j w[i * n + j] * x[j]`
///
/// This is the dominant cost of a forward pass. Each output row is an
/// independent dot product over a contiguous slice of `w`, summed in column
/// order, which the compiler can vectorise.
#[inline]
pub fn matvec<T: Element>(out: &mut [T], x: &[T], w: &[T]) {
    let n = x.len();
    debug_assert_eq!(w.len(), out.len() * n, "matvec: weight length mismatch");

    if n == 0 {
        out.iter_mut().for_each(|o| *o = T::zero());
        return;
    }

    for (o, row) in out.iter_mut().zip(w.chunks_exact(n)) {
        *o = dot(row, x);
    }
}

#[inline]
fn dot<T: Element>(row: &[T], x: &[T]) -> T {
    let mut sum = T::zero();
    for (&a, &b) in row.iter().zip(x) {
        sum += a * b;
    }
    sum
}

/// Checked [`matvec`].
///
/// # Errors
/// Returns [`KernelError::MatrixShape`] if `w.len() != out.len() * x.len()`.
pub fn try_matvec<T: Element>(out: &mut [T], x: &[T], w: &[T]) -> Result<(), KernelError> {
    Validator::validate_matrix("matvec", w, out.len(), x.len())?;
    matvec(out, x, w);
    Ok(())
}
