/// Coefficients of the reference total cost curve, in ascending degree:
/// `800 + 0.16q - 0.0006q² + 0.000003q³`.
///
/// The constant term is the fixed base cost; the remaining terms capture
/// economies of scale at low volume and diseconomies at high volume.
pub const REFERENCE_COST_COEFFICIENTS: [f64; 4] = [800.0, 0.16, -6e-4, 3e-6];

/// A real polynomial stored as dense coefficients in ascending degree order
///
/// The coefficient at index `i` multiplies `xⁱ`. Trailing zero coefficients
/// are permitted and do not change the value of the polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial(Vec<f64>);

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending degree order
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Self(coefficients.into())
    }

    /// The cubic total cost curve used by the financial model
    pub fn reference_cost() -> Self {
        Self::new(REFERENCE_COST_COEFFICIENTS)
    }

    /// Returns the coefficients in ascending degree order
    pub fn coefficients(&self) -> &[f64] {
        &self.0
    }

    /// Evaluates the polynomial at `x` using Horner's rule
    pub fn evaluate(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Returns the exact derivative, differentiating term by term
    ///
    /// `d/dx Σ cᵢxⁱ = Σ i·cᵢxⁱ⁻¹`. A constant differentiates to the zero
    /// polynomial.
    pub fn derivative(&self) -> Self {
        let coefficients = self
            .0
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, c)| power as f64 * c)
            .collect::<Vec<_>>();

        if coefficients.is_empty() {
            Self(vec![0.0])
        } else {
            Self(coefficients)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_matches_expanded_form() {
        let cost = Polynomial::reference_cost();
        for q in [0.0, 1.0, 37.5, 150.0, 1000.0] {
            let expanded = 800.0 + 0.16 * q - 0.0006 * q * q + 0.000003 * q * q * q;
            assert_relative_eq!(cost.evaluate(q), expanded, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_derivative_of_reference_cost() {
        let slope = Polynomial::reference_cost().derivative();
        assert_eq!(slope.coefficients().len(), 3);
        assert_relative_eq!(slope.coefficients()[0], 0.16);
        assert_relative_eq!(slope.coefficients()[1], -0.0012);
        assert_relative_eq!(slope.coefficients()[2], 0.000009);
    }

    #[test]
    fn test_derivative_of_constant_is_zero() {
        let zero = Polynomial::new([42.0]).derivative();
        assert_eq!(zero.coefficients(), &[0.0]);
        assert_eq!(zero.evaluate(123.0), 0.0);
    }

    #[test]
    fn test_trailing_and_missing_coefficients() {
        assert_eq!(Polynomial::new([1.0, 2.0, 0.0, 0.0]).evaluate(3.0), 7.0);
        assert_eq!(Polynomial::new(Vec::new()).evaluate(5.0), 0.0);
    }
}
