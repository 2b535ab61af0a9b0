//! Core traits for the reduction pipeline
//!
//! These define the seams where tests substitute deterministic behavior.
//! Keep them small.

/// Source of standard-normal deviates used to inject instrument noise
///
/// The synthesizer scales every deviate by the channel's noise standard
/// deviation, so implementations only ever produce N(0, 1) draws.
pub trait NoiseSource {
    /// Draw one standard-normal deviate
    fn standard_normal(&mut self) -> f64;

    /// Fill `out` with `level + std_dev * z` for fresh deviates `z`
    fn fill_around(&mut self, level: f64, std_dev: f64, out: &mut [f64]) {
        for value in out.iter_mut() {
            *value = level + std_dev * self.standard_normal();
        }
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }

    fn fill_around(&mut self, level: f64, std_dev: f64, out: &mut [f64]) {
        (**self).fill_around(level, std_dev, out)
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for [f64] {
    fn is_valid(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}
