use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{
        algebra::{Polynomial, TransferFunction},
        i18n::LocalizedText,
    },
};

use super::{Definition, FIXED};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo com características dinâmicas assimétricas"),
            ("en_US", "Model with asymmetric dynamic characteristics"),
        ])),
        description: Some(FIXED),
        formula: Some(
            r"G_p(s) = \frac{100}{(s+10)^2}\left ( \frac{1}{s+1} + \frac{0,5}{s+0,05} \right )",
        ),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<0> = Signature::new([], asymmetric);

fn asymmetric([]: [Arg; 0]) -> Result<TransferFunction, ParameterError> {
    let fast = TransferFunction::new([1.0], [1.0, 1.0])?;
    let slow = TransferFunction::new([0.5], [1.0, 0.05])?;
    let filter = TransferFunction::new([100.0], Polynomial::new([1.0, 10.0]).pow(2))?;
    Ok(filter * (fast + slow))
}
