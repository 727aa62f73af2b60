use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de segunda ordem"),
            ("en_US", "Second order model"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "Os parâmetros do processo são o ganho estático (k) e os tempos T1 e T2.",
            ),
            (
                "en_US",
                "The model parameters are the static gain (k) and the times T1 and T2.",
            ),
        ]))),
        formula: Some(r"G_p(s) = \frac{k}{(1+T_1 s)(1+T_2 s)}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<3> = Signature::new(["k", "T1", "T2"], second_order);

fn second_order([k, t1, t2]: [Arg; 3]) -> Result<TransferFunction, ParameterError> {
    let denominator = lag(t1.value()) * lag(t2.value());
    Ok(TransferFunction::new([k.value()], denominator)?)
}
