use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a floating-point value is a finite whole number.
///
/// Parameters such as a pole multiplicity or an approximation order are
/// collected as `f64` alongside every other parameter, but only make sense as
/// integers. Truncating `2.7` to `2` would silently build a different process,
/// so fractional values are rejected instead.
///
/// # Examples
///
/// ```
/// use pidsim_models::support::constraint::Integral;
///
/// assert_eq!(Integral::new(3.0).unwrap().into_inner(), 3.0);
/// assert_eq!(Integral::new(-2.0).unwrap().into_inner(), -2.0);
///
/// assert!(Integral::new(2.5).is_err());
/// assert!(Integral::new(f64::INFINITY).is_err());
/// assert!(Integral::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integral;

impl Integral {
    /// Constructs a [`Constrained<T, Integral>`] if the value is a whole number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has a fractional part, is infinite,
    /// or is not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> ConstraintResult<Constrained<T, Integral>> {
        Constrained::<T, Integral>::new(value)
    }
}

impl<T: Float> Constraint<T> for Integral {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() || value.fract() != T::zero() {
            Err(ConstraintError::NotAnInteger)
        } else {
            Ok(())
        }
    }
}
