// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported kernel element types.

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point widths the kernels are instantiated for.
///
/// The trait is sealed: only `f32` and `f64` implement it. Kernels are
/// monomorphised per width, so there is no dispatch on the element type
/// inside a hot loop.
pub trait Element:
    num_traits::Float
    + AddAssign
    + MulAssign
    + DivAssign
    + Sum
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    /// Epsilon added to the mean square before the square root in [`crate::rms_norm`].
    const RMS_NORM_EPS: Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;

    /// Converts a uniform draw from `[0, 1)` into `Self`.
    ///
    /// A draw that rounds up to `1.0` in the narrower type is clamped to the
    /// largest value below 1, so the result stays in `[0, 1)`.
    fn unit_draw(u: f64) -> Self;

    /// Converts a length or count into the element type.
    fn from_usize(n: usize) -> Self;

    /// Widens to `f64` (lossless for both implementors).
    fn to_f64_lossless(self) -> f64;

    /// `e^self`, evaluated in double precision and rounded back to `Self`.
    fn exp_wide(self) -> Self;
}

impl Element for f32 {
    const RMS_NORM_EPS: Self = 1e-5;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn unit_draw(u: f64) -> Self {
        let r = u as f32;
        if r < 1.0 {
            r
        } else {
            1.0 - f32::EPSILON / 2.0
        }
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn exp_wide(self) -> Self {
        f64::from(self).exp() as f32
    }
}

impl Element for f64 {
    const RMS_NORM_EPS: Self = 1e-5;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn unit_draw(u: f64) -> Self {
        if u < 1.0 {
            u
        } else {
            1.0 - f64::EPSILON / 2.0
        }
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }

    #[inline]
    fn exp_wide(self) -> Self {
        self.exp()
    }
}
