// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the sampler.

/// Errors that can occur while configuring or running a [`crate::Sampler`].
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Temperature is negative or not finite.
    #[error("temperature must be finite and >= 0, got {0}")]
    InvalidTemperature(f64),

    /// The nucleus threshold is not finite.
    #[error("top-p must be finite, got {0}")]
    InvalidTopP(f64),

    /// A kernel rejected its input.
    #[error("kernel error: {0}")]
    Kernel(#[from] nn_core::KernelError),
}
