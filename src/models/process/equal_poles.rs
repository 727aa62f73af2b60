use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{
        algebra::{Polynomial, TransferFunction},
        i18n::LocalizedText,
    },
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de pólos múltiplos e iguais"),
            ("en_US", "Model with multiple equal poles"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "O único parâmetro do processo é a sua ordem (n). Os valores sugeridos \
                 para n são: 1, 2, 3, 4 e 8.",
            ),
            (
                "en_US",
                "The unique parameter of the model is its order (n). The suggested \
                 values for n are: 1, 2, 3, 4 and 8.",
            ),
        ]))),
        formula: Some(r"G_p(s) = \frac{1}{(s+1)^n}"),
    },
    routine: &SIGNATURE,
};

/// Largest pole multiplicity accepted for `n`.
///
/// The binomial coefficients of `(s + 1)^n` stay well inside `f64` range up
/// to this order.
const MAX_ORDER: u32 = 100;

static SIGNATURE: Signature<1> = Signature::new(["n"], equal_poles);

fn equal_poles([n]: [Arg; 1]) -> Result<TransferFunction, ParameterError> {
    let denominator: Polynomial = lag(1.0).pow(n.count_at_most(MAX_ORDER)?);
    Ok(TransferFunction::new([1.0], denominator)?)
}
