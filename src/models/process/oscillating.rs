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
            ("pt_BR", "Processo oscilatório"),
            ("en_US", "Oscillating model"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "Os parâmetros do processo são o Omega e o Zeta. O valor sugerido para \
                 Zeta é 0.1 e os valores sugeridos para Omega são 1, 2, 5 e 10.",
            ),
            (
                "en_US",
                "The model parameters are Omega and Zeta. The suggested value for Zeta \
                 is 0.1 and the suggested values for Omega are 1, 2, 5 and 10.",
            ),
        ]))),
        formula: Some(
            r"G_p(s) = \frac{\omega _0^2}{(s+1)(s^2+2\zeta \omega _0 s+\omega _0^2)}",
        ),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<2> = Signature::new(["Omega", "Zeta"], oscillating);

fn oscillating([omega, zeta]: [Arg; 2]) -> Result<TransferFunction, ParameterError> {
    let (omega, zeta) = (omega.value(), zeta.value());
    let omega_squared = omega * omega;
    let resonance = Polynomial::new([1.0, 2.0 * zeta * omega, omega_squared]);
    Ok(TransferFunction::new([omega_squared], lag(1.0) * resonance)?)
}
