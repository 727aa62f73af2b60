use crate::{
    models::{Arg, ModelInfo, ParameterError, Signature, Text},
    support::{algebra::TransferFunction, i18n::LocalizedText},
};

use super::{DELAYED, Definition, delayed_one_second};

pub(super) static DEFINITION: Definition = Definition {
    info: ModelInfo {
        name: Text::Localized(LocalizedText::new(&[
            (
                "pt_BR",
                "Processo de primeira ordem mais tempo morto com a presença de integrador",
            ),
            (
                "en_US",
                "First order plus dead time model with presence of integrator",
            ),
        ])),
        description: Some(DELAYED),
        formula: Some(r"G_p(s) = \frac{1}{s(\tau s + 1)}e^{-s}"),
    },
    routine: &SIGNATURE,
};

static SIGNATURE: Signature<2> = Signature::new(["Tau", "pade_order"], integrating_dead_time);

/// `s (τs + 1) = τs² + s`, so the constant term is zero.
fn integrating_dead_time(
    [tau, pade_order]: [Arg; 2],
) -> Result<TransferFunction, ParameterError> {
    let plant = TransferFunction::new([1.0], [tau.value(), 1.0, 0.0])?;
    delayed_one_second(plant, pade_order)
}

#[cfg(test)]
mod tests {
    use crate::support::i18n::Locale;

    use super::super::{
        Process,
        test_support::{assert_tf, build},
    };

    #[test]
    fn integrator_with_first_order_delay() {
        let tf = build(Process::IntegratingDeadTime, [("Tau", 2.0), ("pade_order", 1.0)]);
        assert_tf(&tf, &[-0.5, 1.0], &[1.0, 2.5, 1.0, 0.0]);
    }

    #[test]
    fn pole_at_the_origin() {
        let tf = build(Process::IntegratingDeadTime, [("Tau", 5.0), ("pade_order", 4.0)]);
        assert_eq!(tf.denominator().eval(0.0), 0.0);
        assert_eq!(tf.numerator().eval(0.0), 1.0);
    }

    #[test]
    fn english_name_matches_the_portuguese_one() {
        let info = Process::IntegratingDeadTime.info();
        assert_eq!(
            info.name(&Locale::EN_US),
            "First order plus dead time model with presence of integrator"
        );
        assert_eq!(
            info.name(&Locale::PT_BR),
            "Processo de primeira ordem mais tempo morto com a presença de integrador"
        );
    }
}
