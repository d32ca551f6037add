//! Evaluate a 2-D lookup table with every interpolation method.
//!
//! Shows how to:
//!   - Build a table over caller-owned buffers
//!   - Compare interpolation methods at the same point
//!   - Read partial derivatives and a total differential
//!   - Handle queries outside the grid
//!
//! Run with: `cargo run --example lookup_table`

use ndlerp::{EvalConfig, ExtrapMethod, GridTable, InterpMethod, eval, total_differential};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Engine torque map: rows are speed [rpm], columns are throttle [%].
    let speed = [1000.0, 2000.0, 3000.0, 4500.0, 6000.0];
    let throttle = [0.0, 25.0, 50.0, 100.0];
    #[rustfmt::skip]
    let torque = [
        10.0,  60.0, 110.0, 150.0,
        12.0,  80.0, 140.0, 190.0,
        11.0,  85.0, 150.0, 210.0,
         8.0,  75.0, 145.0, 205.0,
         5.0,  55.0, 120.0, 180.0,
    ];
    let table = GridTable::new(&torque, &[5, 4], vec![&speed[..], &throttle[..]])?;

    // ---------------------------------------------------------------
    // 1. Compare methods at one operating point
    // ---------------------------------------------------------------

    let point = [3700.0, 40.0];
    println!("Torque at {} rpm, {}% throttle", point[0], point[1]);
    for interp in InterpMethod::ALL {
        let e = eval(&table, &point, interp, ExtrapMethod::None)?;
        println!(
            "  {:<16} {:>8.3} Nm   dT/drpm = {:>8.5}   dT/dthrottle = {:>7.4}",
            interp.as_str(),
            e.value,
            e.gradient[0],
            e.gradient[1]
        );
    }

    // ---------------------------------------------------------------
    // 2. First-order change for a small step
    // ---------------------------------------------------------------

    let deltas = [50.0, 2.0];
    let dt = total_differential(
        &table,
        &point,
        &deltas,
        InterpMethod::Steffen,
        ExtrapMethod::None,
    )?;
    println!("\nStep of {deltas:?}: dT ≈ {dt:.4} Nm (steffen)");

    // ---------------------------------------------------------------
    // 3. Outside the grid
    // ---------------------------------------------------------------

    let over = [7000.0, 40.0];
    match eval(&table, &over, InterpMethod::Linear, ExtrapMethod::None) {
        Ok(e) => println!("\nUnexpected value {}", e.value),
        Err(err) => println!(
            "\nWithout extrapolation: {err} (status {})",
            err.status().code()
        ),
    }
    for config in [EvalConfig::default(), EvalConfig::extrapolating()] {
        let v = table.value(&over, &config)?;
        println!("  extrap {:<6} -> {v:.3} Nm", config.extrap.as_str());
    }

    Ok(())
}
