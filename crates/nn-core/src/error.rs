// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the checked kernel entry points.

/// Precondition violations reported by the `try_*` kernels.
///
/// The fast-path kernels never return these; they treat a violated
/// precondition as a programmer error and only `debug_assert!` it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    /// Two buffers that must have equal length do not.
    #[error("length mismatch in {op}: expected {expected}, got {actual}")]
    LengthMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The operation needs at least one element.
    #[error("empty input to {op}")]
    EmptyInput { op: &'static str },

    /// The weight buffer is not `rows * cols` long.
    #[error("matrix shape mismatch in {op}: {rows}x{cols} needs {} elements, got {len}", .rows * .cols)]
    MatrixShape {
        op: &'static str,
        rows: usize,
        cols: usize,
        len: usize,
    },

    /// A value is NaN or infinite.
    #[error("non-finite value in {op} at index {index}: {value}")]
    NonFinite {
        op: &'static str,
        index: usize,
        value: f64,
    },

    /// A probability is negative.
    #[error("negative probability at index {index}: {value}")]
    NegativeProbability { index: usize, value: f64 },

    /// Probabilities do not sum to one within tolerance.
    #[error("probabilities sum to {sum}, expected 1")]
    NotNormalized { sum: f64 },

    /// The nucleus threshold is outside `(0, 1]`.
    #[error("top-p must be in (0, 1], got {0}")]
    InvalidTopP(f64),

    /// Nucleus sampling needs at least `min` candidates.
    #[error("too few candidates: got {got}, need at least {min}")]
    TooFewCandidates { got: usize, min: usize },
}
