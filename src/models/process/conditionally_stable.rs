use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{
        algebra::{Polynomial, TransferFunction},
        i18n::LocalizedText,
    },
};

use super::{Definition, FIXED, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo condicionalmente estável"),
            ("en_US", "Conditionally stable model"),
        ])),
        description: Some(FIXED),
        formula: Some(r"G_p(s) = \frac{(s+6)^2}{s(s+1)^2 (s+36)}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<0> = Signature::new([], conditionally_stable);

fn conditionally_stable([]: [Arg; 0]) -> Result<TransferFunction, ParameterError> {
    let numerator = Polynomial::new([1.0, 6.0]).pow(2);
    let denominator = Polynomial::new([1.0, 0.0]) * lag(1.0).pow(2) * Polynomial::new([1.0, 36.0]);
    Ok(TransferFunction::new(numerator, denominator)?)
}
