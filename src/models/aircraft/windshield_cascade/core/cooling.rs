use uom::si::{
    f64::{Mass, Power},
    mass::kilogram,
    power::watt,
};

use crate::support::units::MassPerPower;

/// Cooling-system weight model.
///
/// The system must be sized to reject the windshield heat load, so its
/// weight grows linearly with that load on top of a fixed installation
/// weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooling {
    /// Added system weight per unit of rejected heat.
    pub per_heat_load: MassPerPower,

    /// Weight of the system at zero heat load (ducting, mounts, pumps).
    pub baseline: Mass,
}

impl Cooling {
    /// Computes the cooling-system weight needed to reject the given heat load.
    #[must_use]
    pub fn system_weight(&self, heat_load: Power) -> Mass {
        self.per_heat_load * heat_load + self.baseline
    }
}

impl Default for Cooling {
    fn default() -> Self {
        Self {
            per_heat_load: Mass::new::<kilogram>(0.5) / Power::new::<watt>(1.0),
            baseline: Mass::new::<kilogram>(50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_weight_is_affine_in_heat_load() {
        let cooling = Cooling::default();

        let weight = cooling.system_weight(Power::new::<watt>(35.0));
        assert_eq!(weight.get::<kilogram>(), 67.5);

        let weight = cooling.system_weight(Power::new::<watt>(0.0));
        assert_eq!(weight.get::<kilogram>(), 50.0);
    }
}
