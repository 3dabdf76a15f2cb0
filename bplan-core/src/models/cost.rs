mod tangent;
pub use tangent::TangentLine;

use crate::models::{Point, Polynomial};

/// A piecewise total cost curve: a cubic up to a threshold, its tangent line beyond
///
/// For quantities at or below the threshold the cost is the cubic polynomial.
/// Above the threshold the cubic is replaced by the tangent line through
/// `(threshold, cubic(threshold))`, whose slope is the exact derivative of the
/// cubic at the threshold. Both branches agree at the threshold, so the curve
/// is continuous there.
///
/// The anchor point and slope are computed once at construction. They are
/// never re-derived from [`CostCurve::total_cost`], which would be circular
/// once the linear branch exists.
#[derive(Clone, Debug)]
pub struct CostCurve {
    cubic: Polynomial,
    tangent: TangentLine,
}

impl CostCurve {
    /// Builds the reference cost curve, switching regime at `threshold_quantity`
    pub fn new(threshold_quantity: u32) -> Self {
        Self::with_polynomial(Polynomial::reference_cost(), threshold_quantity)
    }

    /// Builds a cost curve from an arbitrary polynomial, switching regime at `threshold_quantity`
    pub fn with_polynomial(cubic: Polynomial, threshold_quantity: u32) -> Self {
        let quantity = f64::from(threshold_quantity);
        let tangent = TangentLine {
            anchor: Point {
                quantity,
                value: cubic.evaluate(quantity),
            },
            slope: cubic.derivative().evaluate(quantity),
        };
        Self { cubic, tangent }
    }

    /// Total cost of producing `quantity` units
    ///
    /// Negative quantities are outside the model; they are evaluated on the
    /// cubic branch without complaint.
    pub fn total_cost(&self, quantity: f64) -> f64 {
        if quantity <= self.tangent.anchor.quantity {
            self.cubic.evaluate(quantity)
        } else {
            self.tangent.evaluate(quantity)
        }
    }

    /// The quantity at which the curve switches from the cubic to the tangent line
    pub fn threshold_quantity(&self) -> f64 {
        self.tangent.anchor.quantity
    }

    /// The cubic cost at the threshold quantity
    pub fn threshold_cost(&self) -> f64 {
        self.tangent.anchor.value
    }

    /// The derivative of the cubic at the threshold quantity
    pub fn tangent_slope(&self) -> f64 {
        self.tangent.slope
    }

    /// The line used for quantities above the threshold
    pub fn tangent(&self) -> TangentLine {
        self.tangent
    }

    /// The polynomial used for quantities at or below the threshold
    pub fn cubic(&self) -> &Polynomial {
        &self.cubic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_threshold_cost_is_cubic_value() {
        let curve = CostCurve::new(150);
        assert_relative_eq!(curve.threshold_cost(), 820.625, max_relative = 1e-12);
        assert_relative_eq!(curve.tangent_slope(), 0.1825, max_relative = 1e-12);
    }

    #[test]
    fn test_branches_agree_at_threshold() {
        let curve = CostCurve::new(150);
        let cubic = curve.cubic().evaluate(150.0);
        let linear = curve.tangent().evaluate(150.0);
        assert_abs_diff_eq!(cubic, linear, epsilon = 1e-9);
        assert_eq!(curve.total_cost(150.0), cubic);
    }

    #[test]
    fn test_linear_branch_above_threshold() {
        let curve = CostCurve::new(150);
        assert_relative_eq!(curve.total_cost(151.0), 820.8075, max_relative = 1e-12);
        assert_relative_eq!(curve.total_cost(550.0), 893.625, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_threshold_is_linear_from_the_start() {
        let curve = CostCurve::new(0);
        assert_eq!(curve.threshold_cost(), 800.0);
        assert_relative_eq!(curve.tangent_slope(), 0.16);
        assert_relative_eq!(curve.total_cost(10.0), 801.6, max_relative = 1e-12);
    }
}
