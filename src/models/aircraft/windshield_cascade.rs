//! Windshield sizing cascade models.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! windshield sizing design cascade. The computational core is in the
//! internal [`core`] module; two thin adapters expose it:
//!
//! - [`WindshieldCascade`] evaluates a single design point.
//! - [`WindshieldCascadeSweep`] evaluates a parametric sweep.
//!
//! Evaluation is a composition of affine stages, so both adapters are
//! infallible: any finite input produces a finite output.

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::Area;

pub use self::core::{
    Cascade, CascadeResult, Cooling, Performance, SweepGrid, SweepGridError, SweepTable, Thermal,
};

/// Single-point windshield cascade model.
///
/// Takes a windshield size and returns the full per-stage breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindshieldCascade {
    cascade: Cascade,
}

impl WindshieldCascade {
    /// Creates a model around an explicitly configured cascade.
    #[must_use]
    pub fn new(cascade: Cascade) -> Self {
        Self { cascade }
    }

    /// The underlying cascade.
    #[must_use]
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

impl Model for WindshieldCascade {
    type Input = Area;
    type Output = CascadeResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.cascade.evaluate(*input))
    }
}

/// Parametric sweep windshield cascade model.
///
/// Takes a [`SweepGrid`] and returns one [`CascadeResult`] per grid point,
/// in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindshieldCascadeSweep {
    cascade: Cascade,
}

impl WindshieldCascadeSweep {
    /// Creates a sweep model around an explicitly configured cascade.
    #[must_use]
    pub fn new(cascade: Cascade) -> Self {
        Self { cascade }
    }

    /// The underlying cascade.
    #[must_use]
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

impl Model for WindshieldCascadeSweep {
    type Input = SweepGrid;
    type Output = SweepTable;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.run(&self.cascade))
    }
}
