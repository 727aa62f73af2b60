use thiserror::Error;

use crate::{
    catalog::ModelId,
    support::{algebra::AlgebraError, constraint::ConstraintError},
};

/// Errors raised while turning named parameters into a transfer function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter listed in the model's `args` was not supplied.
    #[error("missing parameter `{0}`")]
    Missing(&'static str),

    /// A parameter was supplied that the model does not take.
    #[error("unexpected parameter `{0}`")]
    Unexpected(String),

    /// A parameter's value is out of its domain.
    #[error("invalid value {value} for parameter `{parameter}`")]
    Invalid {
        parameter: &'static str,
        value: f64,
        #[source]
        source: ArgumentError,
    },

    /// The assembled expression was rejected by the algebra primitives.
    #[error("transfer function could not be assembled")]
    Algebra(#[from] AlgebraError),
}

impl ParameterError {
    /// Returns the name of the offending parameter, if one is to blame.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Missing(name) => Some(name),
            Self::Unexpected(name) => Some(name),
            Self::Invalid { parameter, .. } => Some(parameter),
            Self::Algebra(_) => None,
        }
    }
}

/// The reason a single parameter value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Errors returned by [`ProcessModel::transfer_function`](super::ProcessModel::transfer_function).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid parameters for model {model}: {source}")]
pub struct ModelError {
    /// Catalog identifier of the model.
    pub model: ModelId,

    /// What was wrong with the parameters.
    #[source]
    pub source: ParameterError,
}

impl ModelError {
    /// Returns the name of the offending parameter, if one is to blame.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.source.parameter()
    }
}
