use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{Definition, lag};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            ("pt_BR", "Processo de primeira ordem"),
            ("en_US", "First order model"),
        ])),
        description: Some(Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "Os parâmetros do processo são o ganho estático (k) e a constante \
                 de tempo (Tau).",
            ),
            (
                "en_US",
                "The model parameters are the static gain (k) and the time \
                 constant (Tau).",
            ),
        ]))),
        formula: Some(r"G_p(s) = \frac{k}{(1+\tau s)}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<2> = Signature::new(["k", "Tau"], first_order);

fn first_order([k, tau]: [Arg; 2]) -> Result<TransferFunction, ParameterError> {
    Ok(TransferFunction::new([k.value()], lag(tau.value()))?)
}

#[cfg(test)]
mod tests {
    use super::super::{
        Process,
        test_support::{assert_tf, build},
    };

    #[test]
    fn gain_over_lag() {
        let tf = build(Process::FirstOrder, [("k", 2.0), ("Tau", 5.0)]);
        assert_tf(&tf, &[2.0], &[5.0, 1.0]);
    }

    #[test]
    fn building_twice_gives_equal_results() {
        let params = [("Tau", 0.5), ("k", -1.0)];
        assert_eq!(
            build(Process::FirstOrder, params),
            build(Process::FirstOrder, params)
        );
    }

    #[test]
    fn zero_time_constant_is_a_pure_gain() {
        let tf = build(Process::FirstOrder, [("k", 3.0), ("Tau", 0.0)]);
        assert_tf(&tf, &[3.0], &[1.0]);
    }
}
