//! Sweeps the windshield cascade and prints the results as delimited text.
//!
//! This stands in for a UI layer: it evaluates one design point for a
//! per-stage breakdown, then runs a 20-point sweep and writes the table
//! in CSV form.

use aero_models::models::aircraft::windshield_cascade::{
    Cascade, CascadeResult, SweepGrid, SweepGridError,
};
use uom::si::{area::square_meter, f64::Area};

fn main() -> Result<(), SweepGridError> {
    let cascade = Cascade::default();

    let point = cascade.evaluate(Area::new::<square_meter>(3.0));
    let [size, heat, weight, burn] = point.values();
    println!("single point @ size {size:.2}:");
    println!("  heat_load     = {heat:.2}");
    println!("  system_weight = {weight:.2}");
    println!("  fuel_burn     = {burn:.2}");
    println!();

    let grid = SweepGrid::new(
        Area::new::<square_meter>(0.5),
        Area::new::<square_meter>(10.0),
        20,
    )?;
    let table = grid.run(&cascade);

    println!("{}", CascadeResult::COLUMNS.join(","));
    for [size, heat, weight, burn] in table.rows() {
        println!("{size:.3},{heat:.3},{weight:.3},{burn:.3}");
    }

    Ok(())
}
