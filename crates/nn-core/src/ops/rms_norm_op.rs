// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Root-mean-square normalization.

use crate::{Element, KernelError, Validator};

/// Computes `sqrt(sum(x²) / n + eps)`, the per-vector divisor.
#[inline]
fn rms_divisor<T: Element>(x: &[T]) -> T {
    let mut ss = T::zero();
    for &v in x {
        ss += v * v;
    }
    ss /= T::from_usize(x.len());
    ss += T::RMS_NORM_EPS;
    ss.sqrt()
}

/// Applies RMS normalization with a learned per-element scale:
///
/// `out[i] = weight[i] * x[i] / sqrt(sum(x²) / n + eps)`
///
/// The epsilon ([`Element::RMS_NORM_EPS`]) is added to the mean square,
/// before the square root. `x`, `weight` and `out` must all have the same
/// length. To normalize a buffer in place use [`rms_norm_in_place`].
#[inline]
pub fn rms_norm<T: Element>(out: &mut [T], x: &[T], weight: &[T]) {
    debug_assert_eq!(x.len(), weight.len(), "rms_norm: x/weight length mismatch");
    debug_assert_eq!(out.len(), x.len(), "rms_norm: out/x length mismatch");

    let divisor = rms_divisor(x);
    for ((o, &xi), &wi) in out.iter_mut().zip(x).zip(weight) {
        *o = wi * xi / divisor;
    }
}

/// [`rms_norm`] where the output overwrites the input.
///
/// Every output element depends only on its own input element and the
/// precomputed divisor, so the result is identical to the out-of-place form.
#[inline]
pub fn rms_norm_in_place<T: Element>(x: &mut [T], weight: &[T]) {
    debug_assert_eq!(x.len(), weight.len(), "rms_norm: x/weight length mismatch");

    let divisor = rms_divisor(x);
    for (xi, &wi) in x.iter_mut().zip(weight) {
        *xi = wi * *xi / divisor;
    }
}

/// Checked [`rms_norm`].
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for an empty `x` and
/// [`KernelError::LengthMismatch`] if `weight` or `out` differ in length from `x`.
pub fn try_rms_norm<T: Element>(out: &mut [T], x: &[T], weight: &[T]) -> Result<(), KernelError> {
    Validator::validate_non_empty("rms_norm", x)?;
    Validator::validate_same_len("rms_norm (weight)", x, weight)?;
    Validator::validate_same_len("rms_norm (out)", x, out)?;
    rms_norm(out, x, weight);
    Ok(())
}
