// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nn-core
//!
//! Numeric kernels for the forward pass of a transformer, operating on flat,
//! caller-owned buffers.
//!
//! This crate provides:
//! - [`accumulate`] — element-wise `a += b` (residual connections).
//! - [`rms_norm`] — root-mean-square normalization with a learned scale.
//! - [`softmax`] — numerically stable in-place softmax.
//! - [`matvec`] — dense row-major matrix × vector product.
//! - [`sample`], [`argmax`], [`sample_top_p`] — token selection from a
//!   probability distribution.
//!
//! Every kernel is generic over [`Element`], which is implemented for `f32`
//! and `f64` only.
//!
//! # Design Goals
//! - No heap allocation in hot paths (kernels write into pre-allocated buffers).
//! - No hidden global state: randomized kernels take an explicit [`RandomSource`].
//! - Preconditions are `debug_assert!`ed on the fast path; the `try_*`
//!   variants validate them in every build and report a [`KernelError`].

mod element;
mod error;
mod ops;
mod sampling;
mod validate;

pub use element::Element;
pub use error::KernelError;
pub use ops::{
    accumulate, matvec, rms_norm, rms_norm_in_place, softmax, try_accumulate, try_matvec,
    try_rms_norm, try_softmax,
};
pub use sampling::{
    argmax, nucleus, sample, sample_top_p, sample_top_p_with, try_argmax, try_sample,
    try_sample_top_p, FixedSource, Nucleus, ProbIndex, RandomSource,
};
pub use validate::{Validator, DISTRIBUTION_TOLERANCE};
