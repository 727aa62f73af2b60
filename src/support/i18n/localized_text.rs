use super::Locale;

/// A label available in several languages.
///
/// Entries are `(locale tag, text)` pairs. The first entry is the default,
/// returned whenever the requested locale has no entry of its own. Tags need
/// not be unique; the first matching entry wins.
///
/// # Example
///
/// ```
/// use pidsim_models::support::i18n::{Locale, LocalizedText};
///
/// const NAME: LocalizedText = LocalizedText::new(&[
///     ("pt_BR", "Processo instável"),
///     ("en_US", "Unstable model"),
/// ]);
///
/// assert_eq!(NAME.resolve(&Locale::EN_US), "Unstable model");
/// assert_eq!(NAME.resolve(&Locale::new("fr_FR")), "Processo instável");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    entries: &'static [(&'static str, &'static str)],
}

impl LocalizedText {
    /// Creates a localized label from its entries, default first.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty. In a `const` or `static` item this is a
    /// compile-time error.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        assert!(
            !entries.is_empty(),
            "localized text needs at least a default entry"
        );
        Self { entries }
    }

    /// Returns the text for `locale`, or the default text if there is none.
    #[must_use]
    pub fn resolve(&self, locale: &Locale) -> &'static str {
        let (default_tag, default_text) = self.entries[0];
        match self.entries.iter().find(|(tag, _)| *tag == locale.as_str()) {
            Some((_, text)) => *text,
            None => {
                log::trace!("no {locale} text, falling back to {default_tag}");
                default_text
            }
        }
    }

    /// Returns the default entry's text.
    #[must_use]
    pub fn default_text(&self) -> &'static str {
        self.entries[0].1
    }

    /// Returns the locale tags with an entry, in declaration order.
    pub fn locales(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(tag, _)| *tag)
    }
}
