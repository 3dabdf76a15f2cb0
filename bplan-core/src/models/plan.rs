use crate::models::{CostCurve, PlanConfig, RevenueSchedule};
use tracing::{debug, warn};

/// Default upper bound on the quantities examined by the break-even search
pub const DEFAULT_BREAK_EVEN_LIMIT: u32 = 1_000_000;

/// The cost, revenue and profit structure of a single product line
///
/// A model is defined by two quantities:
/// - The threshold quantity, where the cost curve switches from its cubic
///   regime to the tangent line and the unit price drops to the bulk rate
/// - The demand quantity, at which the "maximum" profit, cost and revenue are
///   reported (it does not restrict which quantities may be queried)
///
/// The model is immutable; all queries are pure functions of the quantity.
#[derive(Clone, Debug)]
pub struct FinancialModel {
    threshold_quantity: u32,
    demand_quantity: u32,
    break_even_limit: u32,
    cost: CostCurve,
    revenue: RevenueSchedule,
}

impl FinancialModel {
    /// Creates a model with the reference cost curve and pricing schedule
    pub fn new(threshold_quantity: u32, demand_quantity: u32) -> Self {
        Self {
            threshold_quantity,
            demand_quantity,
            break_even_limit: DEFAULT_BREAK_EVEN_LIMIT,
            cost: CostCurve::new(threshold_quantity),
            revenue: RevenueSchedule::new(threshold_quantity),
        }
    }

    /// Creates a model from its configuration
    pub fn from_config(config: &PlanConfig) -> Self {
        Self::new(config.threshold_quantity, config.demand_quantity)
            .with_break_even_limit(config.break_even_limit)
    }

    /// Replaces the largest quantity examined by [`FinancialModel::break_even_point`]
    pub fn with_break_even_limit(mut self, limit: u32) -> Self {
        self.break_even_limit = limit;
        self
    }

    /// Units sold at or below which the cubic cost rule applies
    pub fn threshold_quantity(&self) -> u32 {
        self.threshold_quantity
    }

    /// Units at which maxima are reported
    pub fn demand_quantity(&self) -> u32 {
        self.demand_quantity
    }

    /// Largest quantity examined by the break-even search
    pub fn break_even_limit(&self) -> u32 {
        self.break_even_limit
    }

    /// The cubic cost at the threshold, fixed at construction
    pub fn threshold_cost(&self) -> f64 {
        self.cost.threshold_cost()
    }

    /// The exact derivative of the cubic cost at the threshold
    pub fn tangent_slope(&self) -> f64 {
        self.cost.tangent_slope()
    }

    /// The underlying cost curve
    pub fn cost_curve(&self) -> &CostCurve {
        &self.cost
    }

    /// Total cost of `quantity` units
    pub fn total_cost(&self, quantity: f64) -> f64 {
        self.cost.total_cost(quantity)
    }

    /// Total revenue from `quantity` units
    pub fn total_revenue(&self, quantity: f64) -> f64 {
        self.revenue.total_revenue(quantity)
    }

    /// Revenue minus cost at `quantity` units
    pub fn profit(&self, quantity: f64) -> f64 {
        self.total_revenue(quantity) - self.total_cost(quantity)
    }

    /// Average cost per unit at `quantity` units
    ///
    /// At zero units there is nothing to divide by; the base cost
    /// `total_cost(0)` is returned instead.
    pub fn mean_total_cost(&self, quantity: f64) -> f64 {
        if quantity == 0.0 {
            self.total_cost(quantity)
        } else {
            self.total_cost(quantity) / quantity
        }
    }

    /// The smallest whole quantity at which revenue is at least cost
    ///
    /// Quantities are scanned one at a time from zero, so the first crossing
    /// is reported even when profit turns negative again later (as it does
    /// just past the threshold, where the unit price drops).
    ///
    /// # Errors
    ///
    /// Returns [`BreakEvenError::NotFound`] if no quantity up to and including
    /// the configured limit breaks even.
    pub fn break_even_point(&self) -> Result<u32, BreakEvenError> {
        let limit = self.break_even_limit;
        match (0..=limit).find(|&q| {
            let q = f64::from(q);
            self.total_revenue(q) >= self.total_cost(q)
        }) {
            Some(quantity) => {
                debug!(quantity, "found break-even point");
                Ok(quantity)
            }
            None => {
                warn!(limit, "break-even search exhausted");
                Err(BreakEvenError::NotFound { limit })
            }
        }
    }

    /// Profit at the demand quantity
    pub fn maximum_profit(&self) -> f64 {
        self.profit(f64::from(self.demand_quantity))
    }

    /// Total cost at the demand quantity
    pub fn maximum_total_cost(&self) -> f64 {
        self.total_cost(f64::from(self.demand_quantity))
    }

    /// Total revenue at the demand quantity
    pub fn maximum_total_revenue(&self) -> f64 {
        self.total_revenue(f64::from(self.demand_quantity))
    }

    /// Collects the model's scalar results
    pub fn summary(&self) -> Result<PlanSummary, BreakEvenError> {
        Ok(PlanSummary {
            threshold_quantity: self.threshold_quantity,
            demand_quantity: self.demand_quantity,
            threshold_cost: self.threshold_cost(),
            tangent_slope: self.tangent_slope(),
            break_even_point: self.break_even_point()?,
            maximum_profit: self.maximum_profit(),
            maximum_total_cost: self.maximum_total_cost(),
            maximum_total_revenue: self.maximum_total_revenue(),
        })
    }
}

/// The scalar results of a [`FinancialModel`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSummary {
    /// Units at which the cost and price regimes change
    pub threshold_quantity: u32,
    /// Units at which maxima are reported
    pub demand_quantity: u32,
    /// Cubic cost at the threshold
    pub threshold_cost: f64,
    /// Slope of the cost curve above the threshold
    pub tangent_slope: f64,
    /// First quantity with revenue at least cost
    pub break_even_point: u32,
    /// Profit at the demand quantity
    pub maximum_profit: f64,
    /// Total cost at the demand quantity
    pub maximum_total_cost: f64,
    /// Total revenue at the demand quantity
    pub maximum_total_revenue: f64,
}

/// Errors raised by the break-even search
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BreakEvenError {
    /// No quantity within the search limit breaks even
    #[error("no break-even point within {limit} units")]
    NotFound {
        /// The largest quantity that was examined
        limit: u32,
    },
}
