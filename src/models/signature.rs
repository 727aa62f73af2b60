//! Declared parameter lists and the construction routines they describe.
//!
//! A model states its parameter names as data, next to the routine that uses
//! them. Both share the same length `N`, so the list of names and the
//! routine's arity cannot drift apart:
//!
//! ```
//! use pidsim_models::models::{Arg, ParameterError, Routine, Signature};
//! use pidsim_models::support::algebra::TransferFunction;
//!
//! fn integrator([ki]: [Arg; 1]) -> Result<TransferFunction, ParameterError> {
//!     Ok(TransferFunction::new([ki.value()], [1.0, 0.0])?)
//! }
//!
//! static INTEGRATOR: Signature<1> = Signature::new(["Ki"], integrator);
//!
//! assert_eq!(INTEGRATOR.args(), ["Ki"]);
//! ```
//!
//! Adding a name without adding a routine parameter (or the reverse) is a
//! type error. Whether the names themselves are usable is checked when a
//! catalog is loaded, see [`Routine::validate`].

use std::collections::HashSet;

use thiserror::Error;
use uom::si::{f64::Time, time::second};

use crate::support::{
    algebra::{AlgebraError, Pade, TransferFunction, pade::DeadTime},
    constraint::{ConstraintError, Finite, Integral, NonNegative, StrictlyPositive},
};

use super::{ArgumentError, ParameterError, Params};

/// A construction routine taking `N` positional arguments.
pub type RoutineFn<const N: usize> = fn([Arg; N]) -> Result<TransferFunction, ParameterError>;

/// A construction routine together with its declared parameter names.
#[derive(Debug, Clone, Copy)]
pub struct Signature<const N: usize> {
    names: [&'static str; N],
    routine: RoutineFn<N>,
}

impl<const N: usize> Signature<N> {
    /// Pairs parameter names, in declaration order, with their routine.
    #[must_use]
    pub const fn new(names: [&'static str; N], routine: RoutineFn<N>) -> Self {
        Self { names, routine }
    }
}

/// A construction routine whose arity has been erased.
///
/// This is how a model is called generically: the caller reads [`args`],
/// collects a value for each name, and hands them over as [`Params`].
///
/// [`args`]: Routine::args
pub trait Routine: Send + Sync {
    /// Returns the parameter names in declaration order.
    fn args(&self) -> &[&'static str];

    /// Calls the routine with named parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if a declared parameter is missing, an
    /// undeclared one is present, a value is out of its domain, or the
    /// resulting expression is rejected by the algebra primitives (including
    /// coefficients that overflow while it is assembled).
    fn call(&self, params: &Params) -> Result<TransferFunction, ParameterError>;

    /// Checks that every declared name is a usable, unique identifier.
    ///
    /// # Errors
    ///
    /// Returns the first problem found as a [`SignatureError`].
    fn validate(&self) -> Result<(), SignatureError> {
        let mut seen = HashSet::new();
        for &name in self.args() {
            let mut chars = name.chars();
            let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
            if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(SignatureError::InvalidName(name));
            }
            if !seen.insert(name) {
                return Err(SignatureError::DuplicateName(name));
            }
        }
        Ok(())
    }
}

impl<const N: usize> Routine for Signature<N> {
    fn args(&self) -> &[&'static str] {
        &self.names
    }

    fn call(&self, params: &Params) -> Result<TransferFunction, ParameterError> {
        if let Some(name) = params
            .names()
            .find(|name| !self.names.iter().any(|declared| declared == name))
        {
            return Err(ParameterError::Unexpected(name.to_owned()));
        }

        let mut args = [Arg::default(); N];
        for (slot, name) in args.iter_mut().zip(self.names) {
            let value = params.get(name).ok_or(ParameterError::Missing(name))?;
            *slot = Arg::new(name, value)?;
        }

        let tf = (self.routine)(args)?;
        if !tf.is_finite() {
            return Err(AlgebraError::NonFinite.into());
        }
        Ok(tf)
    }
}

/// A declared parameter list that cannot describe a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("`{0}` is not a valid parameter name")]
    InvalidName(&'static str),

    #[error("parameter `{0}` is declared more than once")]
    DuplicateName(&'static str),
}

/// One named argument handed to a construction routine.
///
/// Every value is finite. Helpers such as [`Arg::count`] and [`Arg::pade`]
/// narrow it further and report failures against the argument's name.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Arg {
    name: &'static str,
    value: f64,
}

impl Arg {
    /// Creates an argument, rejecting infinite and `NaN` values.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] if `value` is not finite.
    pub fn new(name: &'static str, value: f64) -> Result<Self, ParameterError> {
        let arg = Self { name, value };
        let value = Finite::new(value).map_err(|err| arg.invalid(err))?;
        Ok(Self {
            name,
            value: value.into_inner(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Interprets the value as a strictly positive whole number.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] if the value has a fractional part,
    /// is not positive, or does not fit in a `u32`.
    pub fn count(&self) -> Result<u32, ParameterError> {
        let value = Integral::new(self.value)
            .and_then(|value| StrictlyPositive::new(value.into_inner()))
            .map_err(|err| self.invalid(err))?
            .into_inner();
        if value > f64::from(u32::MAX) {
            return Err(self.invalid(ConstraintError::AboveMaximum));
        }
        // Whole and in range, so the cast is exact.
        Ok(value as u32)
    }

    /// Interprets the value as a strictly positive whole number no greater
    /// than `max`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] if [`Arg::count`] fails or the
    /// value exceeds `max`.
    pub fn count_at_most(&self, max: u32) -> Result<u32, ParameterError> {
        let count = self.count()?;
        if count > max {
            return Err(self.invalid(ConstraintError::AboveMaximum));
        }
        Ok(count)
    }

    /// Interprets the value as a dead time in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] if the value is negative.
    pub fn dead_time(&self) -> Result<DeadTime, ParameterError> {
        NonNegative::new(Time::new::<second>(self.value)).map_err(|err| self.invalid(err))
    }

    /// Interprets the value as a Padé approximation order and looks it up.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] if the value is not a positive
    /// whole number or no approximant of that order exists.
    pub fn pade(&self) -> Result<Pade, ParameterError> {
        let order = self.count()?;
        Pade::new(order).map_err(|err| self.invalid(err))
    }

    fn invalid(&self, reason: impl Into<ArgumentError>) -> ParameterError {
        ParameterError::Invalid {
            parameter: self.name,
            value: self.value,
            source: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lag([k, tau]: [Arg; 2]) -> Result<TransferFunction, ParameterError> {
        Ok(TransferFunction::new([k.value()], [tau.value(), 1.0])?)
    }

    static LAG: Signature<2> = Signature::new(["k", "Tau"], lag);

    #[test]
    fn args_follow_declaration_order() {
        assert_eq!(LAG.args(), ["k", "Tau"]);
        assert_eq!(LAG.validate(), Ok(()));
    }

    #[test]
    fn named_parameters_in_any_order() {
        let tf = LAG.call(&Params::from([("Tau", 5.0), ("k", 2.0)])).unwrap();
        assert_eq!(tf, TransferFunction::new([2.0], [5.0, 1.0]).unwrap());
    }

    #[test]
    fn missing_parameter() {
        let err = LAG.call(&Params::from([("k", 2.0)])).unwrap_err();
        assert_eq!(err, ParameterError::Missing("Tau"));
        assert_eq!(err.parameter(), Some("Tau"));
    }

    #[test]
    fn unexpected_parameter() {
        let params = Params::from([("k", 2.0), ("Tau", 5.0), ("tau", 5.0)]);
        let err = LAG.call(&params).unwrap_err();
        assert_eq!(err, ParameterError::Unexpected("tau".into()));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = LAG
            .call(&Params::from([("k", f64::NAN), ("Tau", 5.0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Invalid {
                parameter: "k",
                source: ArgumentError::Constraint(ConstraintError::NotANumber),
                ..
            }
        ));
    }

    #[test]
    fn zero_arity_routine() {
        fn constant([]: [Arg; 0]) -> Result<TransferFunction, ParameterError> {
            Ok(TransferFunction::identity())
        }
        let fixed = Signature::new([], constant);

        assert!(fixed.args().is_empty());
        assert_eq!(fixed.call(&Params::new()), Ok(TransferFunction::identity()));
        assert_eq!(
            fixed.call(&Params::from([("k", 1.0)])),
            Err(ParameterError::Unexpected("k".into()))
        );
    }

    #[test]
    fn invalid_names_are_reported() {
        fn unused([_, _]: [Arg; 2]) -> Result<TransferFunction, ParameterError> {
            Ok(TransferFunction::identity())
        }

        let duplicated = Signature::new(["k", "k"], unused);
        assert_eq!(
            duplicated.validate(),
            Err(SignatureError::DuplicateName("k"))
        );

        let empty = Signature::new(["k", ""], unused);
        assert_eq!(empty.validate(), Err(SignatureError::InvalidName("")));

        let spaced = Signature::new(["time constant", "k"], unused);
        assert_eq!(
            spaced.validate(),
            Err(SignatureError::InvalidName("time constant"))
        );

        let numeric = Signature::new(["1k", "k"], unused);
        assert_eq!(numeric.validate(), Err(SignatureError::InvalidName("1k")));
    }

    #[test]
    fn counts() {
        assert_eq!(Arg::new("n", 3.0).unwrap().count(), Ok(3));

        for (value, reason) in [
            (0.0, ConstraintError::Zero),
            (-2.0, ConstraintError::Negative),
            (2.5, ConstraintError::NotAnInteger),
            (1e12, ConstraintError::AboveMaximum),
        ] {
            let err = Arg::new("n", value).unwrap().count().unwrap_err();
            assert_eq!(
                err,
                ParameterError::Invalid {
                    parameter: "n",
                    value,
                    source: ArgumentError::Constraint(reason),
                }
            );
        }
    }

    #[test]
    fn bounded_counts() {
        let n = Arg::new("n", 12.0).unwrap();
        assert_eq!(n.count_at_most(12), Ok(12));
        assert_eq!(
            n.count_at_most(11),
            Err(ParameterError::Invalid {
                parameter: "n",
                value: 12.0,
                source: ArgumentError::Constraint(ConstraintError::AboveMaximum),
            })
        );
    }

    #[test]
    fn overflowing_results_are_rejected() {
        fn squared([gain]: [Arg; 1]) -> Result<TransferFunction, ParameterError> {
            let tf = TransferFunction::new([gain.value()], [1.0, 1.0])?;
            Ok(&tf * &tf)
        }
        let square = Signature::new(["gain"], squared);

        assert!(square.call(&Params::from([("gain", 1e100)])).is_ok());
        assert_eq!(
            square.call(&Params::from([("gain", 1e200)])),
            Err(ParameterError::Algebra(AlgebraError::NonFinite))
        );
    }

    #[test]
    fn pade_orders() {
        assert_eq!(Arg::new("pade_order", 2.0).unwrap().pade().unwrap().order(), 2);

        let err = Arg::new("pade_order", 50.0).unwrap().pade().unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Invalid {
                parameter: "pade_order",
                source: ArgumentError::Algebra(AlgebraError::UnsupportedPadeOrder { order: 50, .. }),
                ..
            }
        ));
    }

    #[test]
    fn dead_times() {
        assert!(Arg::new("Tt", 0.0).unwrap().dead_time().is_ok());
        assert_eq!(
            Arg::new("Tt", -1.0).unwrap().dead_time().unwrap_err().parameter(),
            Some("Tt")
        );
    }
}
