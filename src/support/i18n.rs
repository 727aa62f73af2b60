//! Locale tags and localized labels.
//!
//! Model metadata is written once, as static data, in every language the
//! catalog supports. A [`LocalizedText`] resolves such a label for a
//! [`Locale`] and falls back to its first entry when the locale is missing,
//! so resolving text never fails.

mod locale;
mod localized_text;

pub use locale::Locale;
pub use localized_text::LocalizedText;
