use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Heat load per unit area, W/m² in SI.
pub type HeatLoadPerArea = Quantity<ISQ<Z0, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass per unit power, kg/W in SI.
pub type MassPerPower = Quantity<ISQ<N2, Z0, P3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass rate per unit mass, 1/s in SI.
pub type FuelBurnPerMass = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass rate per unit area, kg/(s·m²) in SI.
pub type FuelBurnPerArea = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Mass, MassRate, Power},
        mass::kilogram,
        mass_rate::kilogram_per_second,
        power::watt,
    };

    #[test]
    fn slope_arithmetic_recovers_base_quantities() {
        let heat_per_area: HeatLoadPerArea =
            Power::new::<watt>(2.5) / Area::new::<square_meter>(1.0);
        let heat: Power = heat_per_area * Area::new::<square_meter>(4.0);
        assert_relative_eq!(heat.get::<watt>(), 10.0);

        let mass_per_power: MassPerPower =
            Mass::new::<kilogram>(0.5) / Power::new::<watt>(1.0);
        let mass: Mass = mass_per_power * Power::new::<watt>(100.0);
        assert_relative_eq!(mass.get::<kilogram>(), 50.0);

        let burn_per_mass: FuelBurnPerMass =
            MassRate::new::<kilogram_per_second>(0.8) / Mass::new::<kilogram>(1.0);
        let burn: MassRate = burn_per_mass * Mass::new::<kilogram>(10.0);
        assert_relative_eq!(burn.get::<kilogram_per_second>(), 8.0);

        let burn_per_area: FuelBurnPerArea =
            MassRate::new::<kilogram_per_second>(1.2) / Area::new::<square_meter>(1.0);
        let burn: MassRate = burn_per_area * Area::new::<square_meter>(5.0);
        assert_relative_eq!(burn.get::<kilogram_per_second>(), 6.0);
    }
}
