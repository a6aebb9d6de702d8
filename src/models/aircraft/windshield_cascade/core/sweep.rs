use std::ops::Deref;

use thiserror::Error;
use uom::si::f64::Area;

use crate::support::constraint::{AtLeastTwo, Constrained, ConstraintError};

use super::{Cascade, CascadeResult};

/// An evenly spaced grid of windshield sizes for a parametric sweep.
///
/// The grid spans `min` to `max` inclusive with linear spacing:
/// `size_i = min + i * (max - min) / (points - 1)`. Both endpoints are
/// reproduced exactly, even where floating-point association would drift.
/// A degenerate grid with `min == max` repeats that size at every point.
///
/// The point count is held as a [`Constrained`] value, so a grid with
/// fewer than two points cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepGrid {
    min: Area,
    max: Area,
    points: Constrained<usize, AtLeastTwo>,
}

/// Errors that can occur while defining a sweep grid.
#[derive(Debug, Error)]
pub enum SweepGridError {
    /// The requested point count cannot span a range.
    #[error("a sweep grid needs at least 2 points, got {points}")]
    PointCount {
        /// The rejected point count.
        points: usize,
        source: ConstraintError,
    },
}

impl SweepGrid {
    /// Defines a grid of `points` evenly spaced sizes from `min` to `max`.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepGridError`] if `points` is less than two.
    pub fn new(min: Area, max: Area, points: usize) -> Result<Self, SweepGridError> {
        let points = AtLeastTwo::new(points)
            .map_err(|source| SweepGridError::PointCount { points, source })?;

        Ok(Self { min, max, points })
    }

    /// The smallest size in the grid.
    #[must_use]
    pub fn min(&self) -> Area {
        self.min
    }

    /// The largest size in the grid.
    #[must_use]
    pub fn max(&self) -> Area {
        self.max
    }

    /// The number of sizes in the grid.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points.into_inner()
    }

    /// Iterates over the grid sizes in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = Area> {
        let Self { min, max, .. } = *self;
        let last = self.points() - 1;

        (0..=last).map(move |i| {
            if i == last {
                max
            } else {
                min + (max - min) * i as f64 / last as f64
            }
        })
    }

    /// Evaluates the cascade at every grid size.
    ///
    /// Results are collected in grid order, one row per size, and the table
    /// is fully populated before this returns. The sweep is deterministic:
    /// identical inputs always produce an identical table.
    #[must_use]
    pub fn run(&self, cascade: &Cascade) -> SweepTable {
        SweepTable(self.sizes().map(|size| cascade.evaluate(size)).collect())
    }
}

/// An ordered table of cascade results, one per swept size.
///
/// The table derefs to its result slice for inspection and yields rows of
/// SI base-unit values (in [`CascadeResult::COLUMNS`] order) for export to
/// delimited text or similar tabular formats.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable(Vec<CascadeResult>);

impl SweepTable {
    /// The results in sweep order.
    #[must_use]
    pub fn results(&self) -> &[CascadeResult] {
        &self.0
    }

    /// Iterates over table rows as SI base-unit values.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        self.0.iter().map(CascadeResult::values)
    }
}

impl Deref for SweepTable {
    type Target = [CascadeResult];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for SweepTable {
    type Item = CascadeResult;
    type IntoIter = std::vec::IntoIter<CascadeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SweepTable {
    type Item = &'a CascadeResult;
    type IntoIter = std::slice::Iter<'a, CascadeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter, mass::kilogram, mass_rate::kilogram_per_second, power::watt,
    };

    fn size(value: f64) -> Area {
        Area::new::<square_meter>(value)
    }

    #[test]
    fn rejects_degenerate_point_counts() {
        assert!(SweepGrid::new(size(0.0), size(1.0), 0).is_err());
        assert!(SweepGrid::new(size(0.0), size(1.0), 1).is_err());
        assert!(SweepGrid::new(size(0.0), size(1.0), 2).is_ok());
    }

    #[test]
    fn five_point_sweep_matches_hand_calculation() {
        let grid = SweepGrid::new(size(0.0), size(100.0), 5).unwrap();
        let table = grid.run(&Cascade::default());

        assert_eq!(table.len(), 5);

        let sizes: Vec<f64> = table.iter().map(|r| r.size.get::<square_meter>()).collect();
        assert_eq!(sizes, [0.0, 25.0, 50.0, 75.0, 100.0]);

        // First row: heat = 10, weight = 55, burn = 0.8 * 55 = 44.
        assert_eq!(table[0].heat_load.get::<watt>(), 10.0);
        assert_eq!(table[0].system_weight.get::<kilogram>(), 55.0);
        assert_eq!(table[0].fuel_burn.get::<kilogram_per_second>(), 44.0);

        // Last row: heat = 260, weight = 180, burn = 144 + 120 = 264.
        assert_eq!(table[4].heat_load.get::<watt>(), 260.0);
        assert_eq!(table[4].system_weight.get::<kilogram>(), 180.0);
        assert_eq!(table[4].fuel_burn.get::<kilogram_per_second>(), 264.0);
    }

    #[test]
    fn endpoints_are_exact() {
        // Naive interpolation over this range lands on 0.9999999999999999
        // at the final point instead of 1.0.
        let grid = SweepGrid::new(size(0.1), size(1.0), 10).unwrap();
        let sizes: Vec<Area> = grid.sizes().collect();

        assert_eq!(sizes[0], size(0.1));
        assert_eq!(sizes[9], size(1.0));
    }

    #[test]
    fn sizes_are_strictly_increasing() {
        let grid = SweepGrid::new(size(0.5), size(10.0), 20).unwrap();
        let sizes: Vec<Area> = grid.sizes().collect();

        assert_eq!(sizes.len(), 20);
        for pair in sizes.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn degenerate_range_repeats_one_result() {
        let grid = SweepGrid::new(size(2.5), size(2.5), 4).unwrap();
        let table = grid.run(&Cascade::default());

        assert_eq!(table.len(), 4);
        for result in &table {
            assert_eq!(*result, table[0]);
        }
    }

    #[test]
    fn sweep_is_deterministic() {
        let cascade = Cascade::default();
        let grid = SweepGrid::new(size(0.5), size(10.0), 20).unwrap();

        assert_eq!(grid.run(&cascade), grid.run(&cascade));
    }

    #[test]
    fn rows_export_in_column_order() {
        let grid = SweepGrid::new(size(0.0), size(100.0), 5).unwrap();
        let table = grid.run(&Cascade::default());

        let rows: Vec<[f64; 4]> = table.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], [25.0, 72.5, 86.25, 99.0]);
    }
}
