//! The reference process families.
//!
//! Each family lives in its own module as a static [`Definition`]: localized
//! metadata plus a [`Signature`](super::Signature) pairing parameter names
//! with the routine that builds the transfer function.
//! [`Process`] is the closed set of those families.

mod asymmetric;
mod conditionally_stable;
mod equal_poles;
mod first_order;
mod first_order_dead_time;
mod fourth_order;
mod integrating_dead_time;
mod non_minimum_phase;
mod oscillating;
mod right_half_plane_zero;
mod second_order;
mod second_order_dead_time;
mod third_order_dead_time;
mod unstable;

#[cfg(test)]
mod test_support;

use uom::si::{f64::Time, time::second};

use crate::support::{
    algebra::{Polynomial, TransferFunction},
    i18n::LocalizedText,
};

use super::{Arg, ModelInfo, ParameterError, Params, Routine, Text};

/// The static description of one process family.
pub(crate) struct Definition {
    pub(crate) info: ModelInfo,
    pub(crate) routine: &'static dyn Routine,
}

/// A process family in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// `k / (τs + 1)`
    FirstOrder,
    /// `k / ((T1 s + 1)(T2 s + 1))`
    SecondOrder,
    /// `k (1 - T1 s) / ((T1 s + 1)(T2 s + 1))`
    NonMinimumPhase,
    /// Third order lag with a lead term and an adjustable dead time.
    ThirdOrderDeadTime,
    /// `1 / (s + 1)^n`
    EqualPoles,
    /// Four lags with time constants `1, α, α², α³`.
    FourthOrder,
    /// `(1 - αs) / (s + 1)^3`
    RightHalfPlaneZero,
    /// `e^{-s} / (τs + 1)`
    FirstOrderDeadTime,
    /// `e^{-s} / (τs + 1)^2`
    SecondOrderDeadTime,
    /// Fast and slow branches in parallel, with no parameters.
    Asymmetric,
    /// Stable only within a band of controller gains, with no parameters.
    ConditionallyStable,
    /// A lag in series with a lightly damped pole pair.
    Oscillating,
    /// `1 / (s^2 - 1)`
    Unstable,
    /// `e^{-s} / (s (τs + 1))`
    IntegratingDeadTime,
}

impl Process {
    /// Every process family, in catalog order.
    pub const ALL: [Process; 14] = [
        Process::FirstOrder,
        Process::SecondOrder,
        Process::NonMinimumPhase,
        Process::ThirdOrderDeadTime,
        Process::EqualPoles,
        Process::FourthOrder,
        Process::RightHalfPlaneZero,
        Process::FirstOrderDeadTime,
        Process::SecondOrderDeadTime,
        Process::Asymmetric,
        Process::ConditionallyStable,
        Process::Oscillating,
        Process::Unstable,
        Process::IntegratingDeadTime,
    ];

    pub(crate) fn definition(self) -> &'static Definition {
        match self {
            Self::FirstOrder => &first_order::DEFINITION,
            Self::SecondOrder => &second_order::DEFINITION,
            Self::NonMinimumPhase => &non_minimum_phase::DEFINITION,
            Self::ThirdOrderDeadTime => &third_order_dead_time::DEFINITION,
            Self::EqualPoles => &equal_poles::DEFINITION,
            Self::FourthOrder => &fourth_order::DEFINITION,
            Self::RightHalfPlaneZero => &right_half_plane_zero::DEFINITION,
            Self::FirstOrderDeadTime => &first_order_dead_time::DEFINITION,
            Self::SecondOrderDeadTime => &second_order_dead_time::DEFINITION,
            Self::Asymmetric => &asymmetric::DEFINITION,
            Self::ConditionallyStable => &conditionally_stable::DEFINITION,
            Self::Oscillating => &oscillating::DEFINITION,
            Self::Unstable => &unstable::DEFINITION,
            Self::IntegratingDeadTime => &integrating_dead_time::DEFINITION,
        }
    }

    /// Returns the family's static metadata.
    #[must_use]
    pub fn info(self) -> &'static ModelInfo {
        &self.definition().info
    }

    /// Returns the family's construction routine.
    #[must_use]
    pub fn routine(self) -> &'static dyn Routine {
        self.definition().routine
    }

    /// Returns the parameter names the routine takes, in declaration order.
    #[must_use]
    pub fn args(self) -> &'static [&'static str] {
        self.routine().args()
    }

    /// Builds the family's transfer function from named parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the parameters do not match
    /// [`args`](Self::args) or a value is out of its domain.
    pub fn build(self, params: &Params) -> Result<TransferFunction, ParameterError> {
        self.routine().call(params)
    }
}

/// Description shared by the families without parameters.
const FIXED: Text = Text::Localized(LocalizedText::new(&[
    ("pt_BR", "Este processo não permite parametrização."),
    ("en_US", "This model does not allow parameterization."),
]));

/// Description shared by the one second dead time families.
const DELAYED: Text = Text::Localized(LocalizedText::new(&[
    (
        "pt_BR",
        "Os parâmetros do processo são a constante de tempo (Tau) e a ordem da \
         aproximação de Padé, utilizada para simular o tempo morto.",
    ),
    (
        "en_US",
        "The model parameters are the time constant (Tau) and the Padé \
         approximant order, used to simulate the dead time.",
    ),
]));

/// The first order lag factor `(T s + 1)`.
fn lag(time_constant: f64) -> Polynomial {
    Polynomial::new([time_constant, 1.0])
}

/// Puts a one second dead time in series with `tf`, approximated to the
/// order given by the `order` argument.
fn delayed_one_second(tf: TransferFunction, order: Arg) -> Result<TransferFunction, ParameterError> {
    let delay = order.pade()?.approximate(Time::new::<second>(1.0))?;
    Ok(tf * delay)
}
