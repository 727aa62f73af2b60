//! Polynomial and transfer-function primitives.
//!
//! Reference models are written as compositions of a few algebraic building
//! blocks, and this module provides exactly those blocks:
//!
//! - [`Polynomial`]: real coefficients in `s`, highest degree first
//! - [`TransferFunction`]: a ratio of two polynomials, combined in series
//!   with `*` and in parallel with `+`
//! - [`Pade`]: rational approximants of a pure dead time `e^{-T s}`
//!
//! Nothing here simplifies a result. A series connection whose poles and zeros
//! cancel keeps both, so two transfer functions compare equal only when their
//! coefficient lists do.
//!
//! # Example
//!
//! ```
//! use pidsim_models::support::algebra::{AlgebraError, Polynomial, TransferFunction};
//!
//! fn main() -> Result<(), AlgebraError> {
//!     // 1 / (s + 1)^2
//!     let den = Polynomial::new([1.0, 1.0]).pow(2);
//!     let plant = TransferFunction::new([1.0], den)?;
//!
//!     assert_eq!(plant.denominator().coefficients(), &[1.0, 2.0, 1.0]);
//!     assert_eq!(plant.dc_gain(), 1.0);
//!     Ok(())
//! }
//! ```

mod error;
pub mod pade;
mod polynomial;
mod transfer_function;

pub use error::AlgebraError;
pub use pade::Pade;
pub use polynomial::Polynomial;
pub use transfer_function::TransferFunction;
