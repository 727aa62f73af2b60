//! Padé approximants of a pure dead time.
//!
//! A dead time `e^{-T s}` has no rational transfer function, so linear models
//! replace it by the `[n/n]` Padé approximant
//!
//! ```text
//!            Σ c_k (-T s)^k
//! e^{-T s} ≈ --------------     k = 0..=n
//!            Σ c_k ( T s)^k
//! ```
//!
//! with `c_0 = 1` and `c_{k+1} = c_k (n - k) / ((2n - k)(k + 1))`.
//!
//! The table of available orders is `1..=MAX_ORDER`. Higher orders are more
//! accurate but their coefficients span many decades, which makes them
//! numerically fragile in a simulation.

use uom::si::{f64::Time, time::second};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{AlgebraError, TransferFunction};

/// Highest approximation order in the table.
pub const MAX_ORDER: u32 = 10;

/// A dead time, which is never negative.
pub type DeadTime = Constrained<Time, NonNegative>;

/// A Padé approximation method of a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pade {
    order: u32,
}

impl Pade {
    /// Looks up the approximation method of the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedPadeOrder`] if `order` is zero or
    /// greater than [`MAX_ORDER`].
    pub fn new(order: u32) -> Result<Self, AlgebraError> {
        let unsupported = AlgebraError::UnsupportedPadeOrder {
            order,
            max: MAX_ORDER,
        };
        let order = StrictlyPositive::new(order)
            .map_err(|_| unsupported)?
            .into_inner();
        if order > MAX_ORDER {
            return Err(unsupported);
        }
        Ok(Self { order })
    }

    /// Returns every method in the table, lowest order first.
    pub fn table() -> impl Iterator<Item = Self> {
        (1..=MAX_ORDER).map(|order| Self { order })
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Approximates a dead time given as a [`Time`] quantity.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidDeadTime`] if the dead time is negative
    /// or not a number.
    pub fn approximate(&self, dead_time: Time) -> Result<TransferFunction, AlgebraError> {
        let dead_time = NonNegative::new(dead_time).map_err(AlgebraError::InvalidDeadTime)?;
        Ok(self.approximate_dead_time(dead_time))
    }

    /// Approximates an already validated dead time.
    #[must_use]
    pub fn approximate_dead_time(&self, dead_time: DeadTime) -> TransferFunction {
        let t = dead_time.into_inner().get::<second>();

        // Highest degree first, so walk k from n down to 0.
        let weights = self.weights();
        let mut numerator = Vec::with_capacity(weights.len());
        let mut denominator = Vec::with_capacity(weights.len());
        for (k, c) in weights.iter().enumerate().rev() {
            let term = c * t.powi(k as i32);
            denominator.push(term);
            numerator.push(if k % 2 == 0 { term } else { -term });
        }

        TransferFunction::new(numerator, denominator)
            .expect("Padé denominator always has a unit constant term")
    }

    /// Returns `c_0..=c_n`.
    fn weights(&self) -> Vec<f64> {
        let n = f64::from(self.order);
        let mut weights = vec![1.0];
        for k in 0..self.order {
            let k = f64::from(k);
            let next = weights[weights.len() - 1] * (n - k) / ((2.0 * n - k) * (k + 1.0));
            weights.push(next);
        }
        weights
    }
}
