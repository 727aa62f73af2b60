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
            ("pt_BR", "Processo de quarta ordem"),
            ("en_US", "Fourth order model"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "O único parâmetro do processo é o Alpha. Os valores sugeridos para o \
                 Alpha são: 0.1, 0.2, 0.5 e 1.",
            ),
            (
                "en_US",
                "The unique parameter of the model is Alpha. The suggested values for \
                 Alpha are: 0.1, 0.2, 0.5 and 1.",
            ),
        ]))),
        formula: Some(
            r"G_p(s) = \frac{1}{(s+1)(\alpha s+1)(\alpha ^2 s+1)(\alpha ^3 s+1)}",
        ),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<1> = Signature::new(["Alpha"], fourth_order);

fn fourth_order([alpha]: [Arg; 1]) -> Result<TransferFunction, ParameterError> {
    let alpha = alpha.value();
    let denominator = (0..4)
        .map(|power| lag(alpha.powi(power)))
        .fold(Polynomial::one(), |acc, factor| acc * factor);
    Ok(TransferFunction::new([1.0], denominator)?)
}

#[cfg(test)]
mod tests {
    use super::super::{
        Process,
        test_support::{assert_tf, build},
    };

    #[test]
    fn unit_alpha_gives_four_equal_poles() {
        let tf = build(Process::FourthOrder, [("Alpha", 1.0)]);
        assert_tf(&tf, &[1.0], &[1.0, 4.0, 6.0, 4.0, 1.0]);
    }

    #[test]
    fn geometric_time_constants() {
        let tf = build(Process::FourthOrder, [("Alpha", 0.5)]);
        assert_tf(
            &tf,
            &[1.0],
            &[0.015625, 0.234375, 1.09375, 1.875, 1.0],
        );
    }
}
