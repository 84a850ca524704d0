// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Token selection from a probability distribution.
//!
//! Three strategies are provided:
//! - [`sample`] — categorical (inverse-CDF) sampling over the full distribution.
//! - [`argmax`] — greedy selection, no randomness.
//! - [`sample_top_p`] — nucleus sampling over the smallest high-probability set.
//!
//! The randomized strategies draw from an explicit [`RandomSource`] so that a
//! fixed seed reproduces the same token stream.

mod categorical;
mod greedy;
mod nucleus;

pub use categorical::{sample, try_sample};
pub use greedy::{argmax, try_argmax};
pub use nucleus::{nucleus, sample_top_p, sample_top_p_with, try_sample_top_p, Nucleus, ProbIndex};

use rand::Rng;

/// A source of uniform random numbers in `[0, 1)`.
///
/// Implemented for every [`rand::RngCore`], so a seeded
/// `rand::rngs::StdRng` can be passed directly.
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// A [`RandomSource`] that returns the same value on every draw.
///
/// Pins the uniform draw so sampling results can be checked by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(f64);

impl FixedSource {
    /// Largest `f64` strictly below 1.
    const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

    /// Creates a source that always yields `value`, clamped into `[0, 1)`.
    /// NaN is treated as 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, Self::MAX_BELOW_ONE))
        }
    }

    /// The value returned by every draw.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl RandomSource for FixedSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_source_clamps() {
        assert_eq!(FixedSource::new(0.25).value(), 0.25);
        assert_eq!(FixedSource::new(-3.0).value(), 0.0);
        assert_eq!(FixedSource::new(f64::NAN).value(), 0.0);

        let top = FixedSource::new(1.0).value();
        assert!(top < 1.0);
        assert!(top > 0.999_999_999);
    }

    #[test]
    fn test_rng_is_a_random_source() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let u = a.next_unit();
            assert!((0.0..1.0).contains(&u));
            assert_eq!(u, b.next_unit());
        }
    }

    #[test]
    fn test_dyn_rng_is_a_random_source() {
        let mut rng = StdRng::seed_from_u64(1);
        let dynamic: &mut dyn rand::RngCore = &mut rng;
        let u = dynamic.next_unit();
        assert!((0.0..1.0).contains(&u));
    }
}
