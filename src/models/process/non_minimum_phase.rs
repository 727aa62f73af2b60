use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de segunda ordem de fase não-mínima"),
            ("en_US", "Second order model of non-minimal phase"),
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
        formula: Some(r"G_p(s) = \frac{k(1-T_1 s)}{(1+T_1 s)(1+T_2 s)}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<3> = Signature::new(["k", "T1", "T2"], non_minimum_phase);

fn non_minimum_phase([k, t1, t2]: [Arg; 3]) -> Result<TransferFunction, ParameterError> {
    let (k, t1) = (k.value(), t1.value());
    let denominator = lag(t1) * lag(t2.value());
    Ok(TransferFunction::new([-t1 * k, k], denominator)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::super::{
        Process,
        test_support::{assert_tf, build},
    };

    #[test]
    fn zero_mirrors_the_first_pole() {
        let tf = build(Process::NonMinimumPhase, [("k", 2.0), ("T1", 0.5), ("T2", 4.0)]);
        assert_tf(&tf, &[-1.0, 2.0], &[2.0, 4.5, 1.0]);

        // Zero at s = 1 / T1.
        assert_relative_eq!(tf.numerator().eval(2.0), 0.0);
        assert_relative_eq!(tf.dc_gain(), 2.0);
    }
}
