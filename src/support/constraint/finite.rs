use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a floating-point value is finite.
///
/// # Examples
///
/// ```
/// use pidsim_models::support::constraint::Finite;
///
/// assert_eq!(Finite::new(-0.5).unwrap().into_inner(), -0.5);
///
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> ConstraintResult<Constrained<T, Finite>> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
