use std::{borrow::Cow, fmt};

/// A language/region tag such as `pt_BR` or `en_US`.
///
/// Tags are compared verbatim. Use [`Locale::parse`] to normalize tags in
/// other common spellings (`pt-BR`, `pt_BR.UTF-8`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// Brazilian Portuguese, the language every model is written in first.
    pub const PT_BR: Locale = Locale(Cow::Borrowed("pt_BR"));

    /// United States English.
    pub const EN_US: Locale = Locale(Cow::Borrowed("en_US"));

    /// Creates a locale from a tag, unchanged.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Creates a locale from a POSIX or BCP 47 style tag.
    ///
    /// Any encoding or modifier suffix is dropped and `-` separators are
    /// turned into `_`, so `pt-BR`, `pt_BR.UTF-8` and `pt_BR@euro` all
    /// become `pt_BR`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
        Self(Cow::Owned(tag.replace('-', "_")))
    }

    /// Returns the locale of the host system, if it reports one.
    #[must_use]
    pub fn system() -> Option<Self> {
        let tag = sys_locale::get_locale()?;
        let locale = Self::parse(&tag);
        log::debug!("system locale {tag:?} resolved to {locale}");
        Some(locale)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::PT_BR
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Locale {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}
