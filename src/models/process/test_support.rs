use approx::assert_relative_eq;

use crate::{models::Params, support::algebra::TransferFunction};

use super::Process;

/// Builds `process` from `(name, value)` pairs, panicking on failure.
pub(super) fn build<const N: usize>(process: Process, params: [(&str, f64); N]) -> TransferFunction {
    process
        .build(&Params::from(params))
        .unwrap_or_else(|err| panic!("{process:?} failed to build: {err}"))
}

/// Asserts that two coefficient lists agree to within rounding.
pub(super) fn assert_coefficients(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "coefficient count differs: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-12, max_relative = 1e-12);
    }
}

/// Asserts the numerator and denominator of `tf`, highest degree first.
pub(super) fn assert_tf(tf: &TransferFunction, numerator: &[f64], denominator: &[f64]) {
    assert_coefficients(tf.numerator().coefficients(), numerator);
    assert_coefficients(tf.denominator().coefficients(), denominator);
}
