use approx::{assert_abs_diff_eq, assert_relative_eq};
use bplan_core::models::{BreakEvenError, FinancialModel, PlanSummary};
use rstest::*;

fn cubic(q: f64) -> f64 {
    800.0 + 0.16 * q - 0.0006 * q.powi(2) + 0.000003 * q.powi(3)
}

#[fixture]
pub fn model() -> FinancialModel {
    FinancialModel::new(150, 550)
}

#[rstest]
fn cubic_branch_up_to_threshold(model: FinancialModel) {
    for q in 0..=150 {
        let q = f64::from(q);
        assert_relative_eq!(model.total_cost(q), cubic(q), max_relative = 1e-9);
    }
}

#[rstest]
fn cost_is_continuous_at_threshold(model: FinancialModel) {
    let at = model.total_cost(150.0);
    let via_line = model.cost_curve().tangent().evaluate(150.0);
    assert_abs_diff_eq!(at, via_line, epsilon = 1e-9);
    assert_relative_eq!(model.threshold_cost(), cubic(150.0), max_relative = 1e-12);

    // Approaching from above converges on the anchor
    assert_abs_diff_eq!(model.total_cost(150.0 + 1e-9), at, epsilon = 1e-6);
}

#[rstest]
fn tangent_slope_is_analytic_derivative(model: FinancialModel) {
    let t: f64 = 150.0;
    let analytic = 0.16 - 0.0012 * t + 0.000009 * t * t;
    assert_relative_eq!(model.tangent_slope(), analytic, max_relative = 1e-12);

    // Difference quotients on either side converge on the slope
    for eps in [1e-1, 1e-3, 1e-5] {
        let right = (model.total_cost(t + eps) - model.total_cost(t)) / eps;
        assert_abs_diff_eq!(right, analytic, epsilon = 1e-6);

        let left = (model.total_cost(t) - model.total_cost(t - eps)) / eps;
        assert_abs_diff_eq!(left, analytic, epsilon = eps);
    }
}

#[rstest]
fn revenue_breaks_at_threshold(model: FinancialModel) {
    assert_eq!(model.total_revenue(150.0), 5.5 * 150.0);
    assert_eq!(model.total_revenue(151.0), 5.0 * 151.0);

    // Not on one line through the origin
    let rate_below = model.total_revenue(150.0) / 150.0;
    let rate_above = model.total_revenue(151.0) / 151.0;
    assert_ne!(rate_below, rate_above);
}

#[rstest]
fn zero_quantity_edge_cases(model: FinancialModel) {
    assert_eq!(model.total_cost(0.0), 800.0);
    assert_eq!(model.total_revenue(0.0), 0.0);
    assert_eq!(model.profit(0.0), -800.0);
    assert_eq!(model.mean_total_cost(0.0), 800.0);
}

#[rstest]
#[case(0, -800.0)]
#[case(50, -531.875)]
#[case(100, -263.0)]
#[case(148, -6.262976)]
#[case(149, -0.943247)]
#[case(150, 4.375)]
#[case(151, -65.8075)]
#[case(165, 1.6375)]
#[case(200, 170.25)]
#[case(450, 1374.625)]
#[case(550, 1856.375)]
fn profit_at_sample_quantities(model: FinancialModel, #[case] quantity: u32, #[case] expected: f64) {
    assert_abs_diff_eq!(model.profit(f64::from(quantity)), expected, epsilon = 1e-6);
}

#[rstest]
fn mean_cost_divides_by_quantity(model: FinancialModel) {
    assert_relative_eq!(model.mean_total_cost(100.0), 8.13, max_relative = 1e-12);
    assert_relative_eq!(
        model.mean_total_cost(550.0),
        model.total_cost(550.0) / 550.0,
        max_relative = 1e-12
    );
}

#[rstest]
fn break_even_is_first_crossing(model: FinancialModel) {
    let q = model.break_even_point().unwrap();
    assert_eq!(q, 150);

    let at = f64::from(q);
    assert!(model.total_revenue(at) >= model.total_cost(at));
    for before in 0..q {
        let before = f64::from(before);
        assert!(model.total_revenue(before) < model.total_cost(before));
    }

    // Profit dips again right after the price break
    assert!(model.profit(at + 1.0) < 0.0);
}

#[rstest]
#[case(0, 166)]
#[case(100, 165)]
#[case(200, 150)]
fn break_even_for_other_thresholds(#[case] threshold: u32, #[case] expected: u32) {
    let model = FinancialModel::new(threshold, 550);
    let q = model.break_even_point().unwrap();
    assert_eq!(q, expected);
    if q > 0 {
        let before = f64::from(q - 1);
        assert!(model.total_revenue(before) < model.total_cost(before));
    }
}

#[test]
fn break_even_reports_exhausted_search() {
    let model = FinancialModel::new(150, 550).with_break_even_limit(10);
    assert_eq!(
        model.break_even_point(),
        Err(BreakEvenError::NotFound { limit: 10 })
    );
    assert!(model.summary().is_err());
}

#[rstest]
fn maxima_are_values_at_demand(model: FinancialModel) {
    assert_eq!(model.maximum_profit(), model.profit(550.0));
    assert_eq!(model.maximum_total_cost(), model.total_cost(550.0));
    assert_eq!(model.maximum_total_revenue(), model.total_revenue(550.0));
    assert_abs_diff_eq!(model.maximum_profit(), 1856.375, epsilon = 1e-9);
}

#[rstest]
fn summary_serializes_every_result(model: FinancialModel) {
    let summary: PlanSummary = model.summary().unwrap();
    assert_eq!(summary.break_even_point, 150);
    assert_eq!(summary.demand_quantity, 550);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["break_even_point"], 150);
    assert_eq!(json["threshold_quantity"], 150);
    assert_eq!(json["maximum_total_revenue"], 2750.0);
}
