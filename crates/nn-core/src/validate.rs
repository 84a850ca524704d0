// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Precondition checks behind the `try_*` kernels.
//!
//! Each check fails fast on the first violation. Checks are ordered from
//! cheap (lengths) to expensive (full scans).

use crate::{Element, KernelError};

/// Maximum allowed distance between the sum of a distribution and 1.
///
/// Loose enough to accept a 32-bit softmax over a large vocabulary.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-3;

/// Validation utility for kernel inputs.
pub struct Validator;

impl Validator {
    /// `lhs` and `rhs` must have equal length.
    pub fn validate_same_len<T>(op: &'static str, lhs: &[T], rhs: &[T]) -> Result<(), KernelError> {
        if lhs.len() != rhs.len() {
            return Err(KernelError::LengthMismatch {
                op,
                expected: lhs.len(),
                actual: rhs.len(),
            });
        }
        Ok(())
    }

    /// `v` must have at least one element.
    pub fn validate_non_empty<T>(op: &'static str, v: &[T]) -> Result<(), KernelError> {
        if v.is_empty() {
            return Err(KernelError::EmptyInput { op });
        }
        Ok(())
    }

    /// `w` must hold exactly `rows * cols` elements.
    pub fn validate_matrix<T>(
        op: &'static str,
        w: &[T],
        rows: usize,
        cols: usize,
    ) -> Result<(), KernelError> {
        if rows.checked_mul(cols) != Some(w.len()) {
            return Err(KernelError::MatrixShape {
                op,
                rows,
                cols,
                len: w.len(),
            });
        }
        Ok(())
    }

    /// Every value must be finite.
    pub fn validate_finite<T: Element>(op: &'static str, v: &[T]) -> Result<(), KernelError> {
        match v.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(KernelError::NonFinite {
                op,
                index,
                value: v[index].to_f64_lossless(),
            }),
            None => Ok(()),
        }
    }

    /// `probabilities` must be a non-empty, non-negative vector summing to 1
    /// within [`DISTRIBUTION_TOLERANCE`].
    pub fn validate_distribution<T: Element>(
        op: &'static str,
        probabilities: &[T],
    ) -> Result<(), KernelError> {
        Self::validate_non_empty(op, probabilities)?;
        Self::validate_finite(op, probabilities)?;

        let mut sum = 0.0f64;
        for (index, &p) in probabilities.iter().enumerate() {
            if p < T::zero() {
                return Err(KernelError::NegativeProbability {
                    index,
                    value: p.to_f64_lossless(),
                });
            }
            sum += p.to_f64_lossless();
        }

        if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(KernelError::NotNormalized { sum });
        }
        Ok(())
    }

    /// The nucleus threshold must lie in `(0, 1]`.
    pub fn validate_top_p<T: Element>(topp: T) -> Result<(), KernelError> {
        if !topp.is_finite() || topp <= T::zero() || topp > T::one() {
            return Err(KernelError::InvalidTopP(topp.to_f64_lossless()));
        }
        Ok(())
    }

    /// At least `min` candidates must be present.
    pub fn validate_min_len<T>(v: &[T], min: usize) -> Result<(), KernelError> {
        if v.len() < min {
            return Err(KernelError::TooFewCandidates { got: v.len(), min });
        }
        Ok(())
    }
}
