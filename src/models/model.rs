use twine_core::Model;

use crate::{
    catalog::ModelId,
    support::{algebra::TransferFunction, i18n::Locale},
};

use super::{Attribute, ModelError, Params, Process};

/// A catalog model bound to the locale it was instantiated for.
///
/// Instances are cheap to create and hold no mutable state, so building a
/// transfer function twice with the same parameters gives equal results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessModel {
    id: ModelId,
    process: Process,
    locale: Locale,
}

impl ProcessModel {
    /// Binds `process` to a catalog identifier and a locale.
    #[must_use]
    pub fn new(id: ModelId, process: Process, locale: Locale) -> Self {
        Self {
            id,
            process,
            locale,
        }
    }

    #[must_use]
    pub fn id(&self) -> ModelId {
        self.id
    }

    #[must_use]
    pub fn process(&self) -> Process {
        self.process
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the parameter names the model takes, in declaration order.
    #[must_use]
    pub fn args(&self) -> &'static [&'static str] {
        self.process.args()
    }

    /// Returns the model name in the bound locale.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.process.info().name(&self.locale)
    }

    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.process.info().description(&self.locale)
    }

    /// Returns the transfer function typeset in LaTeX.
    #[must_use]
    pub fn formula(&self) -> Option<&'static str> {
        self.process.info().formula()
    }

    /// Resolves a descriptive attribute in the bound locale.
    #[must_use]
    pub fn resolve(&self, attribute: Attribute) -> Option<&'static str> {
        self.process.info().resolve(attribute, &self.locale)
    }

    /// Builds the model's transfer function.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] naming this model if the parameters do not
    /// match [`args`](Self::args) or a value is out of its domain.
    pub fn transfer_function(&self, params: &Params) -> Result<TransferFunction, ModelError> {
        log::debug!("building model {} ({:?})", self.id, self.process);
        self.process.build(params).map_err(|source| ModelError {
            model: self.id,
            source,
        })
    }
}

impl Model for ProcessModel {
    type Input = Params;
    type Output = TransferFunction;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.transfer_function(input)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::ParameterError;

    use super::*;

    fn first_order(locale: Locale) -> ProcessModel {
        ProcessModel::new(ModelId::new(1), Process::FirstOrder, locale)
    }

    #[test]
    fn attributes_follow_the_bound_locale() {
        let english = first_order(Locale::EN_US);
        let portuguese = first_order(Locale::PT_BR);

        assert_eq!(english.name(), "First order model");
        assert_eq!(portuguese.name(), "Processo de primeira ordem");
        assert_eq!(english.resolve(Attribute::Name), Some(english.name()));
        assert_eq!(english.formula(), portuguese.formula());
        assert_ne!(english.description(), portuguese.description());
    }

    #[test]
    fn unknown_locale_falls_back_to_the_first_entry() {
        let model = first_order(Locale::new("fr_FR"));
        assert_eq!(model.name(), "Processo de primeira ordem");
    }

    #[test]
    fn builds_through_the_model_trait() {
        let model = first_order(Locale::EN_US);
        let params = Params::from([("k", 2.0), ("Tau", 5.0)]);

        let tf = model.call(&params).unwrap();
        assert_eq!(tf, TransferFunction::new([2.0], [5.0, 1.0]).unwrap());
        assert_eq!(model.call(&params).unwrap(), tf);
    }

    #[test]
    fn errors_name_the_model_and_parameter() {
        let model = first_order(Locale::EN_US);
        let err = model
            .transfer_function(&Params::from([("k", 2.0)]))
            .unwrap_err();

        assert_eq!(err.model, ModelId::new(1));
        assert_eq!(err.source, ParameterError::Missing("Tau"));
        assert_eq!(err.parameter(), Some("Tau"));
        assert_eq!(
            err.to_string(),
            "invalid parameters for model 1: missing parameter `Tau`"
        );
    }
}
