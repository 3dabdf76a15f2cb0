use crate::Series;
use bplan_core::models::{BreakEvenError, FinancialModel, Point};

/// Everything needed to draw one chart, sampled from a model
#[derive(Clone, Debug)]
pub struct ChartData {
    /// The charted series
    pub series: Series,
    /// `(quantity, value)` at every whole quantity from zero to the demand quantity
    pub points: Vec<(f64, f64)>,
    /// The highlighted value at the demand quantity, if the series has one
    pub maximum: Option<Point>,
    /// First quantity at which revenue covers cost
    pub break_even: u32,
    /// Value axis description, e.g. `Profit (R$)`
    pub value_label: String,
    /// Quantity axis bounds
    pub x_range: (f64, f64),
    /// Value axis bounds, padded around the data
    pub y_range: (f64, f64),
}

impl ChartData {
    /// Samples `series` from `model`
    ///
    /// # Errors
    ///
    /// Propagates the model's [`BreakEvenError`] if the break-even marker
    /// cannot be placed.
    pub fn build(
        model: &FinancialModel,
        series: Series,
        currency: &str,
    ) -> Result<Self, BreakEvenError> {
        let break_even = model.break_even_point()?;
        let demand = model.demand_quantity();

        let points = (0..=demand)
            .map(f64::from)
            .map(|q| (q, series.value(model, q)))
            .collect::<Vec<_>>();

        let maximum = series.maximum(model).map(|value| Point {
            quantity: f64::from(demand),
            value,
        });

        // The marker is drawn even when it falls past the demand quantity
        let x_max = f64::from(demand.max(break_even)).max(1.0);

        let y_range = value_range(points.iter().map(|(_, y)| *y).chain(maximum.map(|p| p.value)));

        Ok(Self {
            series,
            points,
            maximum,
            break_even,
            value_label: format!("{} ({currency})", series.name()),
            x_range: (0.0, x_max),
            y_range,
        })
    }

    /// Quantity-axis ticks: every hundred units below the demand quantity,
    /// plus the break-even quantity, in ascending order
    pub fn x_ticks(&self) -> Vec<f64> {
        let demand = self.points.last().map_or(0.0, |(q, _)| *q);
        let mut ticks = (0u32..)
            .map(|i| f64::from(i) * 100.0)
            .take_while(|q| *q < demand)
            .chain(std::iter::once(f64::from(self.break_even)))
            .collect::<Vec<_>>();
        ticks.sort_by(f64::total_cmp);
        ticks.dedup();
        ticks
    }
}

/// Computes a value axis range enclosing `values` with 10% padding
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (y_min, y_max) = values
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    // Fallback for empty/constant data
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-10 {
        return (y_min - 1.0, y_max + 1.0);
    }

    let pad = (y_max - y_min) * 0.1;
    (y_min - pad, y_max + pad)
}
