use uom::si::{
    area::square_meter,
    f64::{Area, Mass, MassRate},
    mass::kilogram,
    mass_rate::kilogram_per_second,
};

use crate::support::units::{FuelBurnPerArea, FuelBurnPerMass};

/// Aircraft performance model.
///
/// Fuel burn carries two penalties: one for hauling the cooling-system
/// weight and one for the drag of the windshield itself, which also grows
/// with size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Fuel burn per unit of carried cooling-system weight.
    pub per_weight: FuelBurnPerMass,

    /// Fuel burn per unit of windshield area, from drag.
    pub per_area: FuelBurnPerArea,
}

impl Performance {
    /// Computes the fuel burn for the given cooling-system weight and
    /// windshield size.
    #[must_use]
    pub fn fuel_burn(&self, system_weight: Mass, size: Area) -> MassRate {
        self.per_weight * system_weight + self.per_area * size
    }
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            per_weight: MassRate::new::<kilogram_per_second>(0.8) / Mass::new::<kilogram>(1.0),
            per_area: MassRate::new::<kilogram_per_second>(1.2) / Area::new::<square_meter>(1.0),
        }
    }
}
