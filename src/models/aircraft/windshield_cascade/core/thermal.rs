use uom::si::{
    area::square_meter,
    f64::{Area, Power},
    power::watt,
};

use crate::support::units::HeatLoadPerArea;

/// Windshield thermal model.
///
/// Heat load scales linearly with windshield size. A higher-fidelity
/// application would swap the linear fit for a physics model or a trained
/// surrogate with the same signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermal {
    /// Heat load added per unit of windshield area.
    pub per_area: HeatLoadPerArea,

    /// Heat load of a zero-area windshield.
    pub baseline: Power,
}

impl Thermal {
    /// Computes the heat load for a windshield of the given size.
    ///
    /// Total over all finite sizes; no validation is applied.
    #[must_use]
    pub fn heat_load(&self, size: Area) -> Power {
        self.per_area * size + self.baseline
    }
}

impl Default for Thermal {
    fn default() -> Self {
        Self {
            per_area: Power::new::<watt>(2.5) / Area::new::<square_meter>(1.0),
            baseline: Power::new::<watt>(10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_load_is_affine_in_size() {
        let thermal = Thermal::default();

        let heat = thermal.heat_load(Area::new::<square_meter>(10.0));
        assert_eq!(heat.get::<watt>(), 35.0);

        let heat = thermal.heat_load(Area::new::<square_meter>(0.0));
        assert_eq!(heat.get::<watt>(), 10.0);
    }

    #[test]
    fn negative_sizes_are_not_rejected() {
        let thermal = Thermal::default();

        let heat = thermal.heat_load(Area::new::<square_meter>(-4.0));
        assert_eq!(heat.get::<watt>(), 0.0);
    }
}
