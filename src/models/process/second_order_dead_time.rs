use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{DELAYED, Definition, delayed_one_second, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de segunda ordem com tempo morto"),
            ("en_US", "Second order model with dead time"),
        ])),
        description: Some(DELAYED),
        formula: Some(r"G_p(s) = \frac{1}{(\tau s +1)^2}e^{-s}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<2> = Signature::new(["Tau", "pade_order"], second_order_dead_time);

fn second_order_dead_time(
    [tau, pade_order]: [Arg; 2],
) -> Result<TransferFunction, ParameterError> {
    let plant = TransferFunction::new([1.0], lag(tau.value()).pow(2))?;
    delayed_one_second(plant, pade_order)
}
