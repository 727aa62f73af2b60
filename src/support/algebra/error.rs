use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while assembling polynomials and transfer functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A transfer function was given the zero polynomial as its denominator.
    #[error("transfer function denominator must not be zero")]
    ZeroDenominator,

    /// A coefficient overflowed to infinity or became `NaN`.
    #[error("transfer function coefficients must be finite")]
    NonFinite,

    /// The requested Padé approximation order is not in the table.
    #[error("no Padé approximant of order {order} (supported orders are 1 to {max})")]
    UnsupportedPadeOrder { order: u32, max: u32 },

    /// A dead time was negative or not a number.
    #[error("invalid dead time")]
    InvalidDeadTime(#[source] ConstraintError),
}
