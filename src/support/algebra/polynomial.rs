use std::ops::{Add, Mul};

/// A polynomial in `s` with real coefficients, highest degree first.
///
/// Leading zero coefficients are dropped on construction, so `[0, 2, 1]`
/// and `[2, 1]` are the same polynomial and compare equal.
/// The zero polynomial is stored as `[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered highest degree first.
    ///
    /// An empty coefficient list yields the zero polynomial.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        let mut coefficients = coefficients.into();
        let leading_zeros = coefficients.iter().take_while(|c| **c == 0.0).count();
        coefficients.drain(..leading_zeros);
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Self { coefficients }
    }

    /// The polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coefficients: vec![1.0],
        }
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// Constants, including zero, have degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns `true` if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }

    /// Returns `true` if no coefficient is infinite or `NaN`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    /// Evaluates the polynomial at a real point using Horner's method.
    #[must_use]
    pub fn eval(&self, s: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * s + c)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        (0..exponent).fold(Self::one(), |acc, _| &acc * self)
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial {
    fn from(coefficients: [f64; N]) -> Self {
        Self::new(coefficients)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::new(coefficients)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let (longer, shorter) = if self.coefficients.len() >= rhs.coefficients.len() {
            (&self.coefficients, &rhs.coefficients)
        } else {
            (&rhs.coefficients, &self.coefficients)
        };

        // Align on the constant term.
        let offset = longer.len() - shorter.len();
        let mut sum = longer.clone();
        for (slot, c) in sum[offset..].iter_mut().zip(shorter) {
            *slot += c;
        }
        Polynomial::new(sum)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        &self + &rhs
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        let mut product = vec![0.0; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Polynomial::new(product)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_leading_zeros() {
        let p = Polynomial::new([0.0, 0.0, 2.0, 1.0]);
        assert_eq!(p.coefficients(), &[2.0, 1.0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p, Polynomial::from([2.0, 1.0]));
    }

    #[test]
    fn zero_polynomial() {
        let empty = Polynomial::new(Vec::<f64>::new());
        assert!(empty.is_zero());
        assert_eq!(empty.coefficients(), &[0.0]);
        assert_eq!(empty.degree(), 0);
        assert_eq!(empty, Polynomial::new([0.0, 0.0]));
    }

    #[test]
    fn multiplication_expands_products() {
        // (s + 1)(s - 1) = s^2 - 1
        let p = Polynomial::new([1.0, 1.0]) * Polynomial::new([1.0, -1.0]);
        assert_eq!(p.coefficients(), &[1.0, 0.0, -1.0]);
    }

    #[test]
    fn addition_aligns_constant_terms() {
        // (s^2 + 2s + 3) + (4s + 5)
        let p = Polynomial::new([1.0, 2.0, 3.0]) + Polynomial::new([4.0, 5.0]);
        assert_eq!(p.coefficients(), &[1.0, 6.0, 8.0]);

        // Cancelling leading terms lowers the degree.
        let q = Polynomial::new([1.0, 1.0]) + Polynomial::new([-1.0, 1.0]);
        assert_eq!(q.coefficients(), &[2.0]);
    }

    #[test]
    fn powers() {
        let s_plus_one = Polynomial::new([1.0, 1.0]);
        assert_eq!(s_plus_one.pow(0), Polynomial::one());
        assert_eq!(s_plus_one.pow(1), s_plus_one);
        assert_eq!(s_plus_one.pow(3).coefficients(), &[1.0, 3.0, 3.0, 1.0]);
        assert_eq!(
            s_plus_one.pow(4).coefficients(),
            &[1.0, 4.0, 6.0, 4.0, 1.0]
        );
    }

    #[test]
    fn evaluation() {
        let p = Polynomial::new([1.0, 0.0, -1.0]);
        assert_eq!(p.eval(0.0), -1.0);
        assert_eq!(p.eval(3.0), 8.0);
    }
}
