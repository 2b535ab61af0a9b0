//! Sweep Reduction Example
//!
//! Reduces an angle-of-attack sweep on the virtual balance and prints the
//! loads with their confidence bounds.
//!
//! ## What You'll Learn
//!
//! - Building a balance table from tunnel rows
//! - Configuring calibration, time base and acquisition
//! - Reading results by column and by row
//! - Telling configuration errors from domain errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_sweep_reduction
//! ```

use aerobalance_core::{
    AcquisitionSettings, BalanceError, BalanceReducer, CalibrationConstants, GaussianNoise, HistoricalDataset,
    SignalConfig, SweepPlan,
};

fn main() -> Result<(), BalanceError> {
    println!("AeroBalance Sweep Reduction Example");
    println!("===================================\n");

    // Row 0 is the wind-off tare at −15°, then one row per degree
    let mut rows = vec![[-15.0, 0.011, 0.021, 0.009, 0.0, 0.0, 0.0, 0.0]];
    for angle in (-15..=15).map(f64::from) {
        rows.push([
            angle,
            0.30 + 0.020 * angle,
            0.05 + 0.0004 * angle * angle,
            0.25 + 0.015 * angle,
            0.0,
            0.0,
            0.0,
            500.0 + 0.1 * angle,
        ]);
    }
    let dataset = HistoricalDataset::from_rows(&rows)?;
    let (low, high) = dataset.angle_range();
    println!("Balance table: {} rows over [{low}, {high}]°", dataset.len());
    println!("Tare angle: {}°\n", dataset.tare_angle());

    // A 2 s trace keeps the example quick; the reference time base is 10 s
    let reducer = BalanceReducer::new(CalibrationConstants::default(), SignalConfig::new(2.0, 200_001))?;
    let plan = SweepPlan::new(-15.0, -10.0, 10.0, 2.5);
    let acquisition = AcquisitionSettings::new(1000.0, 500);

    let result = reducer.reduce(&dataset, &plan, &acquisition, 95.0, &mut GaussianNoise::seeded(42))?;

    println!(
        "Student-t: t = {:.4} (ν = {}, {}%)",
        result.confidence.t_critical, result.confidence.degrees_of_freedom, result.confidence.confidence_pct
    );
    println!(
        "Tare: fore {:.5} ± {:.5} V, drag {:.5} ± {:.5} V, aft {:.5} ± {:.5} V\n",
        result.tare.fore.value,
        result.tare.fore.error,
        result.tare.drag.value,
        result.tare.drag.error,
        result.tare.aft.value,
        result.tare.aft.error
    );

    println!("  α (°)      Lift (N)           Drag (N)          Moment (N·m)        q∞ (Pa)");
    for row in result.rows() {
        println!(
            "{:7.2}  {:8.3} ± {:6.3}  {:8.3} ± {:6.3}  {:8.4} ± {:7.4}  {:7.2} ± {:5.2}",
            row.angle,
            row.lift.value,
            row.lift.error,
            row.drag.value,
            row.drag.error,
            row.moment.value,
            row.moment.error,
            row.dynamic_pressure.value,
            row.dynamic_pressure.error
        );
    }
    println!(
        "\nAcquisition: {} s per angle, {} s total\n",
        result.acquisition_time_per_point, result.total_acquisition_time
    );

    // Failures are typed
    println!("Error handling:");
    let too_fast = AcquisitionSettings::new(20_000.0, 500);
    match reducer.reduce(&dataset, &plan, &too_fast, 95.0, &mut GaussianNoise::seeded(1)) {
        Err(e) => println!("  20 kHz acquisition → {:?}: {}", e.kind(), e),
        Ok(_) => println!("  unexpected success"),
    }

    let past_table = SweepPlan::new(-15.0, 10.0, 20.0, 5.0);
    match reducer.reduce(&dataset, &past_table, &acquisition, 95.0, &mut GaussianNoise::seeded(1)) {
        Err(e) => println!("  sweep to 20° → {:?}: {}", e.kind(), e),
        Ok(_) => println!("  unexpected success"),
    }

    Ok(())
}
