use crate::models::Point;

/// A straight line in point-slope form
///
/// `y = slope * (x - anchor.quantity) + anchor.value`, which expands to
/// `y = slope * x + anchor.value - slope * anchor.quantity`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentLine {
    /// The point the line passes through
    pub anchor: Point,
    /// The slope of the line
    pub slope: f64,
}

impl TangentLine {
    /// Evaluates the line at `quantity`
    pub fn evaluate(&self, quantity: f64) -> f64 {
        self.slope * quantity + self.anchor.value - self.slope * self.anchor.quantity
    }
}
