use std::ops::{Add, Mul};

use super::{AlgebraError, Polynomial};

/// A rational transfer function `N(s) / D(s)`.
///
/// The denominator is never the zero polynomial. Combining two transfer
/// functions with `+` or `*` can overflow, so results built that way should
/// be checked with [`TransferFunction::is_finite`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl TransferFunction {
    /// Creates a transfer function from a numerator and a denominator.
    ///
    /// Either side may be given as a [`Polynomial`] or as a coefficient list,
    /// highest degree first.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDenominator`] if the denominator is zero,
    /// or [`AlgebraError::NonFinite`] if any coefficient is infinite or `NaN`.
    pub fn new(
        numerator: impl Into<Polynomial>,
        denominator: impl Into<Polynomial>,
    ) -> Result<Self, AlgebraError> {
        let tf = Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        };
        if !tf.is_finite() {
            return Err(AlgebraError::NonFinite);
        }
        if tf.denominator.is_zero() {
            return Err(AlgebraError::ZeroDenominator);
        }
        Ok(tf)
    }

    /// The unit transfer function `1 / 1`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            numerator: Polynomial::one(),
            denominator: Polynomial::one(),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// Returns `true` if every coefficient on both sides is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.numerator.is_finite() && self.denominator.is_finite()
    }

    /// Evaluates the transfer function at a real value of `s`.
    ///
    /// Returns an infinite or NaN value at a pole.
    #[must_use]
    pub fn eval(&self, s: f64) -> f64 {
        self.numerator.eval(s) / self.denominator.eval(s)
    }

    /// Returns the steady-state gain `G(0)`.
    ///
    /// Processes with an integrator have an infinite gain.
    #[must_use]
    pub fn dc_gain(&self) -> f64 {
        self.eval(0.0)
    }
}

/// Parallel connection: `a/b + c/d = (a·d + c·b) / (b·d)`.
impl Add for &TransferFunction {
    type Output = TransferFunction;

    fn add(self, rhs: Self) -> TransferFunction {
        TransferFunction {
            numerator: &(&self.numerator * &rhs.denominator)
                + &(&rhs.numerator * &self.denominator),
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Add for TransferFunction {
    type Output = TransferFunction;

    fn add(self, rhs: Self) -> TransferFunction {
        &self + &rhs
    }
}

/// Series connection: `a/b · c/d = (a·c) / (b·d)`.
impl Mul for &TransferFunction {
    type Output = TransferFunction;

    fn mul(self, rhs: Self) -> TransferFunction {
        TransferFunction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Mul for TransferFunction {
    type Output = TransferFunction;

    fn mul(self, rhs: Self) -> TransferFunction {
        &self * &rhs
    }
}
