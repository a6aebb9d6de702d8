use uom::si::f64::Area;

use super::{CascadeResult, Cooling, Performance, Thermal};

/// The windshield sizing cascade: thermal → cooling → performance.
///
/// Each stage consumes its predecessor's output, so the cascade is a plain
/// ordered sequence of pure calls rather than a general dependency graph.
/// Evaluation is total and referentially transparent: the same size always
/// produces a bit-identical result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cascade {
    pub thermal: Thermal,
    pub cooling: Cooling,
    pub performance: Performance,
}

impl Cascade {
    /// Evaluates the cascade at a single windshield size.
    ///
    /// Stages run in fixed order and all intermediate values are reported
    /// in the returned [`CascadeResult`].
    #[must_use]
    pub fn evaluate(&self, size: Area) -> CascadeResult {
        let heat_load = self.thermal.heat_load(size);
        let system_weight = self.cooling.system_weight(heat_load);
        let fuel_burn = self.performance.fuel_burn(system_weight, size);

        CascadeResult {
            size,
            heat_load,
            system_weight,
            fuel_burn,
        }
    }
}
