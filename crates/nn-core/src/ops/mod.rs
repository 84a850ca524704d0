// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Forward-pass arithmetic kernels.
//!
//! Each kernel works on caller-owned buffers and never allocates. The plain
//! functions are the hot path; the `try_*` twins validate preconditions and
//! report a [`crate::KernelError`] instead of relying on `debug_assert!`.

mod accumulate_op;
mod matvec_op;
mod rms_norm_op;
mod softmax_op;

pub use accumulate_op::{accumulate, try_accumulate};
pub use matvec_op::{matvec, try_matvec};
pub use rms_norm_op::{rms_norm, rms_norm_in_place, try_rms_norm};
pub use softmax_op::{softmax, try_softmax};
