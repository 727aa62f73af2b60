//! # PIDSIM Models
//!
//! Reference process models for PID tuning and simulation, exposed as
//! [`twine_core::Model`] implementations.
//!
//! ## Crate layout
//!
//! - [`catalog`]: Lookup of models by stable integer id.
//! - [`models`]: The process families, their metadata and parameters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Polynomial algebra and Padé approximants live there because any
//! controller-design code working with these models will need them too.

pub mod catalog;
pub mod models;
pub mod support;
