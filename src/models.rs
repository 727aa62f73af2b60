//! Reference process models.
//!
//! A model is a family of linear processes described by a few named
//! parameters. Each family carries localized metadata (a name, a
//! description and a LaTeX formula) and a construction routine that turns
//! parameter values into a [`TransferFunction`](crate::support::algebra::TransferFunction).
//!
//! # Model structure
//!
//! The families are the variants of [`Process`]. Each one declares its
//! parameters through a [`Signature`], so the names reported by
//! [`Process::args`] are exactly the ones the routine reads.
//!
//! [`ProcessModel`] binds a family to a catalog identifier and a locale and
//! implements [`twine_core::Model`] as a thin adapter over
//! [`Process::build`]. Instances are normally obtained from
//! [`Catalog::instantiate`](crate::catalog::Catalog::instantiate).

mod error;
mod info;
mod model;
mod params;
mod process;
mod signature;

pub use error::{ArgumentError, ModelError, ParameterError};
pub use info::{Attribute, ModelInfo, Text};
pub use model::ProcessModel;
pub use params::Params;
pub use process::Process;
pub use signature::{Arg, Routine, RoutineFn, Signature, SignatureError};
