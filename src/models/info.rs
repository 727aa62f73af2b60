use crate::support::i18n::{Locale, LocalizedText};

/// A human-readable attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    /// Text with one entry per language.
    Localized(LocalizedText),

    /// Text that reads the same in every language.
    Plain(&'static str),
}

impl Text {
    /// Resolves the text for `locale`.
    ///
    /// Plain text is returned unchanged.
    #[must_use]
    pub fn resolve(&self, locale: &Locale) -> &'static str {
        match self {
            Self::Localized(text) => text.resolve(locale),
            Self::Plain(text) => *text,
        }
    }
}

/// The descriptive attributes of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Description,
    Formula,
}

/// Static metadata describing a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Name of the process family.
    pub name: Text,

    /// What the parameters mean and which values are worth trying.
    pub description: Option<Text>,

    /// The transfer function typeset in LaTeX.
    pub formula: Option<&'static str>,
}

impl ModelInfo {
    #[must_use]
    pub fn name(&self, locale: &Locale) -> &'static str {
        self.name.resolve(locale)
    }

    #[must_use]
    pub fn description(&self, locale: &Locale) -> Option<&'static str> {
        self.description.map(|text| text.resolve(locale))
    }

    #[must_use]
    pub fn formula(&self) -> Option<&'static str> {
        self.formula
    }

    /// Resolves any attribute for `locale`.
    ///
    /// Returns `None` for an attribute the model does not set; callers decide
    /// what, if anything, to show in its place.
    #[must_use]
    pub fn resolve(&self, attribute: Attribute, locale: &Locale) -> Option<&'static str> {
        match attribute {
            Attribute::Name => Some(self.name(locale)),
            Attribute::Description => self.description(locale),
            Attribute::Formula => self.formula(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: ModelInfo = ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de teste"),
            ("en_US", "Test model"),
        ])),
        description: None,
        formula: Some(r"G_p(s) = 1"),
    };

    #[test]
    fn resolves_localized_name() {
        assert_eq!(INFO.name(&Locale::EN_US), "Test model");
        assert_eq!(INFO.name(&Locale::new("de_DE")), "Processo de teste");
    }

    #[test]
    fn plain_text_ignores_locale() {
        let text = Text::Plain("PT1");
        assert_eq!(text.resolve(&Locale::PT_BR), "PT1");
        assert_eq!(text.resolve(&Locale::EN_US), "PT1");
    }

    #[test]
    fn absent_attributes_have_no_value() {
        assert_eq!(INFO.resolve(Attribute::Description, &Locale::EN_US), None);
        assert_eq!(INFO.resolve(Attribute::Formula, &Locale::EN_US), Some("G_p(s) = 1"));
        assert_eq!(
            INFO.resolve(Attribute::Name, &Locale::PT_BR),
            Some("Processo de teste")
        );
    }
}
