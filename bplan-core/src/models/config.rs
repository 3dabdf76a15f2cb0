use crate::models::DEFAULT_BREAK_EVEN_LIMIT;

/// Inputs from which a [`FinancialModel`](crate::models::FinancialModel) is built
///
/// # Examples
///
/// ```
/// use bplan_core::models::{FinancialModel, PlanConfig};
///
/// // The reference plan: threshold 150, demand 550
/// let model = FinancialModel::from_config(&PlanConfig::default());
/// assert_eq!(model.threshold_quantity(), 150);
/// assert_eq!(model.demand_quantity(), 550);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    /// Units sold at or below which the cubic cost rule applies
    #[cfg_attr(feature = "serde", serde(default = "default_threshold_quantity"))]
    pub threshold_quantity: u32,

    /// Units at which the maximum profit, cost and revenue are reported
    #[cfg_attr(feature = "serde", serde(default = "default_demand_quantity"))]
    pub demand_quantity: u32,

    /// Largest quantity examined by the break-even search
    #[cfg_attr(feature = "serde", serde(default = "default_break_even_limit"))]
    pub break_even_limit: u32,
}

fn default_threshold_quantity() -> u32 {
    150
}

fn default_demand_quantity() -> u32 {
    550
}

fn default_break_even_limit() -> u32 {
    DEFAULT_BREAK_EVEN_LIMIT
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            threshold_quantity: default_threshold_quantity(),
            demand_quantity: default_demand_quantity(),
            break_even_limit: default_break_even_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let raw = r#"{ "demand_quantity": 300 }"#;
        let config = serde_json::from_str::<PlanConfig>(raw).unwrap();
        assert_eq!(
            config,
            PlanConfig {
                threshold_quantity: 150,
                demand_quantity: 300,
                break_even_limit: DEFAULT_BREAK_EVEN_LIMIT,
            }
        );
    }
}
