//! Property tests for the numeric building blocks

use aerobalance_core::{
    interpolation::{interpolate, linspace},
    AcquisitionSettings, BoundaryPolicy, CalibrationConstants, ChannelStatistics, MeasuredQuantity, SweepPlan,
};
use proptest::prelude::*;

/// Strictly increasing abscissae with matching ordinates
fn table() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.1f64..5.0, -10.0f64..10.0), 2..20).prop_map(|steps| {
        let mut x = -20.0;
        let mut xp = Vec::with_capacity(steps.len());
        let mut fp = Vec::with_capacity(steps.len());
        for (dx, f) in steps {
            x += dx;
            xp.push(x);
            fp.push(f);
        }
        (xp, fp)
    })
}

proptest! {
    #[test]
    fn interpolation_reproduces_nodes((xp, fp) in table()) {
        for (x, f) in xp.iter().zip(&fp) {
            prop_assert_eq!(interpolate(*x, &xp, &fp, BoundaryPolicy::Strict).unwrap(), *f);
        }
    }

    #[test]
    fn interpolation_stays_between_neighbours((xp, fp) in table(), t in 0.0f64..1.0) {
        let lo = xp[0];
        let hi = xp[xp.len() - 1];
        let x = lo + t * (hi - lo);
        let value = interpolate(x, &xp, &fp, BoundaryPolicy::Strict).unwrap();

        let upper = xp.partition_point(|&v| v <= x).min(xp.len() - 1).max(1);
        let (a, b) = (fp[upper - 1], fp[upper]);
        prop_assert!(value >= a.min(b) - 1e-9 && value <= a.max(b) + 1e-9);
    }

    #[test]
    fn strict_policy_rejects_outside((xp, fp) in table(), margin in 0.01f64..100.0) {
        let below = xp[0] - margin;
        let above = xp[xp.len() - 1] + margin;
        prop_assert!(interpolate(below, &xp, &fp, BoundaryPolicy::Strict).unwrap_err().is_domain());
        prop_assert!(interpolate(above, &xp, &fp, BoundaryPolicy::Strict).unwrap_err().is_domain());
        prop_assert_eq!(interpolate(above, &xp, &fp, BoundaryPolicy::Clamp).unwrap(), fp[fp.len() - 1]);
    }

    #[test]
    fn sample_instants_span_the_window(rate in 100.0f64..10_000.0, n in 2usize..2000) {
        let settings = AcquisitionSettings::new(rate, n);
        prop_assume!(settings.validate().is_ok());

        let ts = settings.timestamps();
        prop_assert_eq!(ts.len(), n);
        prop_assert_eq!(ts[0], 1e-3);
        prop_assert_eq!(ts[n - 1], n as f64 / rate);
        prop_assert!(ts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_pins_both_ends(start in -50.0f64..50.0, span in 0.1f64..100.0, n in 2usize..500) {
        let points = linspace(start, start + span, n);
        prop_assert_eq!(points.len(), n);
        prop_assert_eq!(points[0], start);
        prop_assert_eq!(points[n - 1], start + span);
    }

    #[test]
    fn sweep_counts_whole_steps(start in -20.0f64..20.0, step in 0.05f64..5.0, steps in 0usize..200) {
        let end = start + step * steps as f64;
        let angles = SweepPlan::new(0.0, start, end, step).angles().unwrap();
        prop_assert_eq!(angles.len(), steps + 1);
        prop_assert_eq!(angles[0], start);
        prop_assert!((angles[steps] - end).abs() < 1e-9 * end.abs().max(1.0));
    }

    #[test]
    fn population_spread_is_shift_invariant(samples in prop::collection::vec(-1.0f64..1.0, 2..200), shift in -100.0f64..100.0) {
        let base = ChannelStatistics::from_samples(&samples).unwrap();
        let shifted: Vec<f64> = samples.iter().map(|s| s + shift).collect();
        let moved = ChannelStatistics::from_samples(&shifted).unwrap();

        prop_assert!((moved.mean - base.mean - shift).abs() < 1e-9);
        prop_assert!((moved.std_dev - base.std_dev).abs() < 1e-9);
    }

    #[test]
    fn lift_and_moment_errors_share_cell_term(ef in 0.0f64..0.1, ea in 0.0f64..0.1, ed in 0.0f64..0.1) {
        let calib = CalibrationConstants::default();
        let loads = calib.convert(
            MeasuredQuantity::new(0.4, ef),
            MeasuredQuantity::new(0.1, ed),
            MeasuredQuantity::new(0.2, ea),
        );
        let cell = (ef * ef + ea * ea).sqrt();

        prop_assert!((loads.lift.error - cell * calib.lift).abs() < 1e-12);
        prop_assert!((loads.moment.error - cell * calib.moment).abs() < 1e-12);
        prop_assert!((loads.drag.error - ed * calib.drag).abs() < 1e-12);
    }
}
