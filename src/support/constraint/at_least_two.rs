use std::{cmp::Ordering, ops::Add};

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is at least two.
///
/// Use this type with [`Constrained<T, AtLeastTwo>`] to encode the bound at
/// the type level. It is the runtime analog of a `const` assertion on a
/// minimum count: useful when the count arrives from a caller rather than a
/// type parameter, such as the number of points in a parameter sweep (two
/// points are the minimum that can span a range).
///
/// You can construct a constrained value using either the generic
/// [`Constrained::new`] method or the convenient [`AtLeastTwo::new`]
/// associated function.
///
/// # Examples
///
/// ```
/// use aero_models::support::constraint::{AtLeastTwo, Constrained};
///
/// // Generic constructor:
/// let x = Constrained::<_, AtLeastTwo>::new(5_usize).unwrap();
/// assert_eq!(x.into_inner(), 5);
///
/// // Associated constructor:
/// let y = AtLeastTwo::new(2.0).unwrap();
/// assert_eq!(y.into_inner(), 2.0);
///
/// // Error cases:
/// assert!(AtLeastTwo::new(1_usize).is_err());
/// assert!(AtLeastTwo::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastTwo;

impl AtLeastTwo {
    /// Constructs a [`Constrained<T, AtLeastTwo>`] if the value is at least two.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is below two or not a number (`NaN`).
    pub fn new<T: PartialOrd + One + Add<Output = T>>(
        value: T,
    ) -> Result<Constrained<T, AtLeastTwo>, ConstraintError> {
        Constrained::<T, AtLeastTwo>::new(value)
    }
}

impl<T: PartialOrd + One + Add<Output = T>> Constraint<T> for AtLeastTwo {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let two = T::one() + T::one();
        match value.partial_cmp(&two) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let two = Constrained::<usize, AtLeastTwo>::new(2).unwrap();
        assert_eq!(two.into_inner(), 2);

        let many = AtLeastTwo::new(50_usize).unwrap();
        assert_eq!(many.as_ref(), &50);

        assert_eq!(AtLeastTwo::new(1_usize), Err(ConstraintError::BelowMinimum));
        assert_eq!(AtLeastTwo::new(0_usize), Err(ConstraintError::BelowMinimum));
    }

    #[test]
    fn floats() {
        assert!(Constrained::<f64, AtLeastTwo>::new(2.0).is_ok());
        assert!(AtLeastTwo::new(1000.5).is_ok());
        assert!(AtLeastTwo::new(1.999).is_err());
        assert_eq!(AtLeastTwo::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
