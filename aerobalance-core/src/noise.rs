//! Noise sources for the virtual instruments
//!
//! [`GaussianNoise`] wraps any `rand` generator and draws from the standard
//! normal distribution. Seed it with [`GaussianNoise::seeded`] for runs that
//! must reproduce bit for bit. [`ZeroNoise`] turns the instruments into
//! ideal, noiseless sensors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::traits::NoiseSource;

/// Gaussian white noise backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct GaussianNoise<R = StdRng> {
    rng: R,
}

impl GaussianNoise<StdRng> {
    /// Reproducible noise from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Noise seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the underlying generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Noise source that always returns zero
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn standard_normal(&mut self) -> f64 {
        0.0
    }

    fn fill_around(&mut self, level: f64, _std_dev: f64, out: &mut [f64]) {
        out.fill(level);
    }
}
