mod config;
mod cost;
mod plan;
mod point;
mod polynomial;
mod revenue;

pub use config::PlanConfig;
pub use cost::{CostCurve, TangentLine};
pub use plan::{BreakEvenError, DEFAULT_BREAK_EVEN_LIMIT, FinancialModel, PlanSummary};
pub use point::Point;
pub use polynomial::{Polynomial, REFERENCE_COST_COEFFICIENTS};
pub use revenue::{BASE_UNIT_PRICE, BULK_UNIT_PRICE, RevenueSchedule};
