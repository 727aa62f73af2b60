use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, FIXED};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo instável"),
            ("en_US", "Unstable model"),
        ])),
        description: Some(FIXED),
        formula: Some(r"G_p(s) = \frac{1}{s^2 - 1}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<0> = Signature::new([], unstable);

fn unstable([]: [Arg; 0]) -> Result<TransferFunction, ParameterError> {
    Ok(TransferFunction::new([1.0], [1.0, 0.0, -1.0])?)
}

#[cfg(test)]
mod tests {
    use super::super::{
        Process,
        test_support::{assert_tf, build},
    };

    #[test]
    fn pole_in_the_right_half_plane() {
        let tf = build(Process::Unstable, []);
        assert_tf(&tf, &[1.0], &[1.0, 0.0, -1.0]);
        assert_eq!(tf.denominator().eval(1.0), 0.0);
    }
}
