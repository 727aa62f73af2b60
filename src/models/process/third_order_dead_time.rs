use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de terceira ordem com tempo morto ajustável"),
            ("en_US", "Third order model with adjustable dead time"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "Os parâmetros do processo são o ganho estático (k), os tempos T1, T2, \
                 T3 e T4, o tempo morto (Tt) e a ordem da aproximação de Padé, \
                 utilizada para simular o tempo morto.",
            ),
            (
                "en_US",
                "The model parameters are the static gain (k), the times T1, T2, T3 \
                 and T4, the dead time (Tt) and the Padé approximant order, used to \
                 simulate the dead time.",
            ),
        ]))),
        formula: Some(
            r"G_p(s) = \frac{k(1+T_4 s)}{(1+T_1 s)(1+T_2 s)(1+T_3 s)} e^{-T_t s}",
        ),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<7> = Signature::new(
    ["k", "T1", "T2", "T3", "T4", "Tt", "pade_order"],
    third_order_dead_time,
);

fn third_order_dead_time(
    [k, t1, t2, t3, t4, tt, pade_order]: [Arg; 7],
) -> Result<TransferFunction, ParameterError> {
    let delay = pade_order.pade()?.approximate_dead_time(tt.dead_time()?);

    let k = k.value();
    let denominator = lag(t1.value()) * lag(t2.value()) * lag(t3.value());
    let plant = TransferFunction::new([k * t4.value(), k], denominator)?;

    Ok(plant * delay)
}
