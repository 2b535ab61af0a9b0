//! Piecewise-Linear Interpolation over Tabulated Data
//!
//! ## Where it is used
//!
//! Two places in the pipeline read values between tabulated points:
//!
//! 1. The synthesizer reads the historical balance table at an arbitrary
//!    angle of attack (angles are tabulated in coarse steps).
//! 2. The sampler reads the pseudo-analog trace at each sample instant
//!    (the trace is tabulated on a fine uniform time grid).
//!
//! Both use the same rule:
//!
//! ```text
//! Given xp[i] <= x <= xp[i+1]:
//!
//!            x - xp[i]
//! frac = -------------
//!        xp[i+1] - xp[i]
//!
//! f(x) = fp[i] + (fp[i+1] - fp[i]) × frac
//! ```
//!
//! At a tabulated point the stored value is returned unchanged, so readings
//! at measured angles reproduce the table exactly.
//!
//! ## Boundary policy
//!
//! Outside `[xp[0], xp[n-1]]` there is nothing to interpolate. The
//! [`BoundaryPolicy`] decides what happens:
//!
//! - [`BoundaryPolicy::Strict`] rejects the point with
//!   [`BalanceError::OutOfDomain`]. This is the default.
//! - [`BoundaryPolicy::Clamp`] returns the nearest edge value and logs a
//!   warning, matching what classic table-lookup routines do.
//!
//! ```rust
//! use aerobalance_core::interpolation::{interpolate, BoundaryPolicy};
//!
//! let angles = [0.0, 5.0, 10.0];
//! let volts = [0.0, 0.5, 2.0];
//!
//! assert_eq!(interpolate(2.5, &angles, &volts, BoundaryPolicy::Strict)?, 0.25);
//! assert!(interpolate(12.0, &angles, &volts, BoundaryPolicy::Strict).is_err());
//! assert_eq!(interpolate(12.0, &angles, &volts, BoundaryPolicy::Clamp)?, 2.0);
//! # Ok::<(), aerobalance_core::BalanceError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{BalanceError, BalanceResult};

/// What to do with points outside the tabulated range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryPolicy {
    /// Reject with a domain error
    #[default]
    Strict,
    /// Hold the nearest edge value
    Clamp,
}

/// Linearly interpolate `fp` over strictly increasing `xp` at `x`
///
/// `xp` and `fp` must have equal, non-zero length. A single-point table
/// covers exactly that one point.
pub fn interpolate(x: f64, xp: &[f64], fp: &[f64], policy: BoundaryPolicy) -> BalanceResult<f64> {
    if xp.len() != fp.len() {
        return Err(BalanceError::InvalidParameter {
            parameter: "fp",
            value: fp.len() as f64,
            reason: "length must match the abscissa table",
        });
    }

    let (first, last) = match (xp.first(), xp.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(BalanceError::InsufficientData { required: 1, available: 0 }),
    };

    if x.is_nan() {
        return Err(BalanceError::OutOfDomain { value: x, min: first, max: last });
    }

    if x < first || x > last {
        return match policy {
            BoundaryPolicy::Strict => Err(BalanceError::OutOfDomain { value: x, min: first, max: last }),
            BoundaryPolicy::Clamp => {
                if x < first {
                    log_warn!("Interpolation input clamped ({} → {})", x, first);
                    Ok(fp[0])
                } else {
                    log_warn!("Interpolation input clamped ({} → {})", x, last);
                    Ok(fp[fp.len() - 1])
                }
            }
        };
    }

    // First index whose abscissa exceeds x
    let upper = xp.partition_point(|&v| v <= x);
    if upper >= xp.len() {
        return Ok(fp[fp.len() - 1]);
    }

    let lower = upper - 1;
    if xp[lower] == x {
        return Ok(fp[lower]);
    }

    let frac = (x - xp[lower]) / (xp[upper] - xp[lower]);
    Ok(fp[lower] + (fp[upper] - fp[lower]) * frac)
}

/// Interpolate at every point of `xs`, failing on the first rejected point
pub fn interpolate_many(
    xs: &[f64],
    xp: &[f64],
    fp: &[f64],
    policy: BoundaryPolicy,
) -> BalanceResult<Vec<f64>> {
    xs.iter().map(|&x| interpolate(x, xp, fp, policy)).collect()
}

/// `n` evenly spaced points from `start` to `stop`, both included
///
/// A single point yields `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding
            points[n - 1] = stop;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGLES: [f64; 4] = [-15.0, -5.0, 5.0, 15.0];
    const VOLTS: [f64; 4] = [-1.5, -0.5, 0.5, 1.5];

    #[test]
    fn exact_at_table_points() {
        for (x, f) in ANGLES.iter().zip(VOLTS.iter()) {
            assert_eq!(interpolate(*x, &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap(), *f);
        }
    }

    #[test]
    fn linear_between_points() {
        let value = interpolate(0.0, &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap();
        assert!((value - 0.0).abs() < 1e-12);

        let value = interpolate(10.0, &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn monotone_for_linear_data() {
        let mut previous = f64::NEG_INFINITY;
        let mut x = -15.0;
        while x <= 15.0 {
            let value = interpolate(x, &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap();
            assert!(value >= previous);
            previous = value;
            x += 0.25;
        }
    }

    #[test]
    fn strict_rejects_outside_range() {
        let err = interpolate(16.0, &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap_err();
        assert_eq!(err, BalanceError::OutOfDomain { value: 16.0, min: -15.0, max: 15.0 });
        assert!(interpolate(-15.5, &ANGLES, &VOLTS, BoundaryPolicy::Strict).is_err());
        assert!(interpolate(f64::NAN, &ANGLES, &VOLTS, BoundaryPolicy::Clamp).is_err());
    }

    #[test]
    fn clamp_holds_edge_values() {
        assert_eq!(interpolate(40.0, &ANGLES, &VOLTS, BoundaryPolicy::Clamp).unwrap(), 1.5);
        assert_eq!(interpolate(-40.0, &ANGLES, &VOLTS, BoundaryPolicy::Clamp).unwrap(), -1.5);
    }

    #[test]
    fn single_point_table() {
        assert_eq!(interpolate(10.0, &[10.0], &[0.5], BoundaryPolicy::Strict).unwrap(), 0.5);
        assert!(interpolate(9.0, &[10.0], &[0.5], BoundaryPolicy::Strict).is_err());
        assert!(matches!(
            interpolate(1.0, &[], &[], BoundaryPolicy::Strict),
            Err(BalanceError::InsufficientData { .. })
        ));
    }

    #[test]
    fn mismatched_table_lengths_are_rejected() {
        for (xp, fp) in [(&ANGLES[..], &VOLTS[..2]), (&ANGLES[..2], &VOLTS[..]), (&[][..], &[0.5][..])] {
            let err = interpolate(0.0, xp, fp, BoundaryPolicy::Clamp).unwrap_err();
            assert!(err.is_configuration());
            assert!(matches!(err, BalanceError::InvalidParameter { parameter: "fp", .. }));
        }
    }

    #[test]
    fn linspace_includes_endpoints() {
        let points = linspace(1e-3, 0.1, 100);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], 1e-3);
        assert_eq!(points[99], 0.1);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn interpolate_many_stops_on_first_failure() {
        let xs = [0.0, 20.0];
        assert!(interpolate_many(&xs, &ANGLES, &VOLTS, BoundaryPolicy::Strict).is_err());
        let ok = interpolate_many(&[0.0, 10.0], &ANGLES, &VOLTS, BoundaryPolicy::Strict).unwrap();
        assert_eq!(ok.len(), 2);
    }
}
