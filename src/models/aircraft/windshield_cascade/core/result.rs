use uom::si::{
    area::square_meter,
    f64::{Area, Mass, MassRate, Power},
    mass::kilogram,
    mass_rate::kilogram_per_second,
    power::watt,
};

/// The outcome of evaluating the cascade at one windshield size.
///
/// Intermediate stage outputs are reported alongside the final fuel burn so
/// callers can present a per-stage breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeResult {
    /// Windshield size the cascade was evaluated at.
    pub size: Area,

    /// Heat load from the thermal stage.
    pub heat_load: Power,

    /// Cooling-system weight from the cooling stage.
    pub system_weight: Mass,

    /// Fuel burn from the performance stage.
    pub fuel_burn: MassRate,
}

impl CascadeResult {
    /// Column names for tabular export, in the order used by [`values`](Self::values).
    pub const COLUMNS: [&'static str; 4] = [
        "windshield_size",
        "heat_load",
        "system_weight",
        "fuel_burn",
    ];

    /// Returns the result as one table row of SI base-unit values, in
    /// [`COLUMNS`](Self::COLUMNS) order.
    #[must_use]
    pub fn values(&self) -> [f64; 4] {
        [
            self.size.get::<square_meter>(),
            self.heat_load.get::<watt>(),
            self.system_weight.get::<kilogram>(),
            self.fuel_burn.get::<kilogram_per_second>(),
        ]
    }
}
