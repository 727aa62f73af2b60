use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo com três pólos iguais e zero no semi-plano direito"),
            (
                "en_US",
                "Model with three equal poles and zero at the right half-plane",
            ),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "O único parâmetro do processo é o Alpha. Os valores sugeridos para o \
                 Alpha são: 0.1, 0.2, 0.5, 1, 2 e 5.",
            ),
            (
                "en_US",
                "The unique parameter of the model is Alpha. The suggested values for \
                 Alpha are: 0.1, 0.2, 0.5, 1, 2 and 5.",
            ),
        ]))),
        formula: Some(r"G_p(s) = \frac{1-\alpha s}{(s+1)^3}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<1> = Signature::new(["Alpha"], right_half_plane_zero);

fn right_half_plane_zero([alpha]: [Arg; 1]) -> Result<TransferFunction, ParameterError> {
    Ok(TransferFunction::new([-alpha.value(), 1.0], lag(1.0).pow(3))?)
}
