#![allow(unused_macros)]
use rstest_reuse::template;

// A testing "template" that injects every chartable series

#[template]
#[rstest]
#[case::profit(bplan_chart::Series::Profit)]
#[case::cost(bplan_chart::Series::Cost)]
#[case::revenue(bplan_chart::Series::Revenue)]
#[case::mean_cost(bplan_chart::Series::MeanCost)]
pub fn all_series(#[case] series: bplan_chart::Series) {}
