//! Instrument Specifications
//!
//! Noise levels observed on the balance load cells and the micromanometer
//! during tunnel runs, and the manometer accuracy from its manual.

// ===== LOAD CELL NOISE =====

/// Fore load cell noise standard deviation (V).
///
/// Variance of 5e-5 V² measured with the tunnel running.
pub const FORE_NOISE_STD_V: f64 = 0.007_071_067_811_865_475;

/// Drag load cell noise standard deviation (V).
///
/// Variance of 1e-3 V². The drag cell sits in the wake and is the noisiest.
pub const DRAG_NOISE_STD_V: f64 = 0.031_622_776_601_683_79;

/// Aft load cell noise standard deviation (V).
///
/// Variance of 5e-5 V², same cell model as fore.
pub const AFT_NOISE_STD_V: f64 = 0.007_071_067_811_865_475;

// ===== MICROMANOMETER =====

/// Micromanometer noise standard deviation (Pa).
///
/// Variance of 1e-4 Pa².
pub const DYNAMIC_PRESSURE_NOISE_STD_PA: f64 = 0.01;

/// Micromanometer relative accuracy (fraction of reading).
///
/// Source: manufacturer manual, ±1 % of reading.
pub const MANOMETER_RELATIVE_ACCURACY: f64 = 0.01;

/// Micromanometer absolute accuracy (Pa).
///
/// Source: manufacturer manual, ±1 Pa on top of the relative term.
pub const MANOMETER_ABSOLUTE_ACCURACY_PA: f64 = 1.0;
