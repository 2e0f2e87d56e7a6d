use super::ScalarFunction;

/// A univariate polynomial, coefficients stored in monomial order
/// (`coefficients[k]` multiplies `x^k`).
///
/// Differentiating a polynomial yields another polynomial, which is the
/// concrete instance of the "same kind" invariant scalar bases must
/// satisfy.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from its monomial coefficients.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Degree of the polynomial, or `0` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl ScalarFunction for Polynomial {
    fn evaluate(&self, x: f64) -> f64 {
        // Horner's method, highest-degree coefficient first.
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &coefficient| acc * x + coefficient)
    }

    fn derivative(&self) -> Self {
        if self.coefficients.len() <= 1 {
            return Self::new(vec![0.0]);
        }
        let coefficients = self.coefficients[1..]
            .iter()
            .enumerate()
            .map(|(k, &c)| c * (k + 1) as f64)
            .collect();
        Self::new(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_shape_functions_match_reference_basis() {
        // phi0(x) = (1-x)/2, phi1(x) = (1+x)/2
        let phi0 = Polynomial::new(vec![0.5, -0.5]);
        let phi1 = Polynomial::new(vec![0.5, 0.5]);

        assert!((phi0.evaluate(-1.0) - 1.0).abs() < 1e-12);
        assert!((phi0.evaluate(1.0) - 0.0).abs() < 1e-12);
        assert!((phi1.evaluate(-1.0) - 0.0).abs() < 1e-12);
        assert!((phi1.evaluate(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_of_linear_is_constant() {
        let phi1 = Polynomial::new(vec![0.5, 0.5]);
        let d = phi1.derivative();
        assert!((d.evaluate(0.3) - 0.5).abs() < 1e-12);
    }
}
