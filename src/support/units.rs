//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., area, power, mass).
//! This module provides extensions that are useful for modeling but aren't
//! included in [`uom`].
//!
//! ## Coupling coefficients
//!
//! Linear design-cascade models connect quantities of different dimensions
//! through constant slopes (e.g., heat load per unit windshield area). The
//! slope dimensions are rarely named quantities in [`uom`], so aliases for
//! them are defined here. Values are constructed by dividing base quantities:
//!
//! ```
//! use uom::si::{area::square_meter, f64::{Area, Power}, power::watt};
//! use aero_models::support::units::HeatLoadPerArea;
//!
//! let slope: HeatLoadPerArea =
//!     Power::new::<watt>(2.5) / Area::new::<square_meter>(1.0);
//! ```

mod quantities;

pub use quantities::{FuelBurnPerArea, FuelBurnPerMass, HeatLoadPerArea, MassPerPower};
