//! Supporting utilities used by models.
//!
//! These modules are public because callers need their types (a transfer
//! function is what every model returns), but their APIs are not stable.

pub mod algebra;
pub mod constraint;
pub mod i18n;
