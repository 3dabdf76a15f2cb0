/// A point on one of the model's curves
///
/// Each point consists of:
/// - A quantity (units sold)
/// - A value (currency amount at that quantity)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The quantity coordinate
    pub quantity: f64,
    /// The value coordinate
    pub value: f64,
}
