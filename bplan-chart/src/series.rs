use bplan_core::models::FinancialModel;
use std::{fmt, str::FromStr};

/// The quantities of a [`FinancialModel`] that can be charted
///
/// Each variant knows how to sample the model and how to label its chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    /// Revenue minus cost
    Profit,
    /// Total cost
    Cost,
    /// Total revenue
    Revenue,
    /// Total cost divided by quantity
    MeanCost,
}

impl Series {
    /// Every series, in display order
    pub const ALL: [Series; 4] = [Self::Profit, Self::Cost, Self::Revenue, Self::MeanCost];

    /// The identifier used on the command line and as the output file name
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::Cost => "cost",
            Self::Revenue => "revenue",
            Self::MeanCost => "mean_cost",
        }
    }

    /// Short name of the plotted quantity, used on the y axis
    pub fn name(self) -> &'static str {
        match self {
            Self::Profit => "Profit",
            Self::Cost => "Total Cost",
            Self::Revenue => "Total Revenue",
            Self::MeanCost => "Mean Total Cost",
        }
    }

    /// Chart caption
    pub fn title(self) -> &'static str {
        match self {
            Self::Profit => "Profit Associated with Each Unit Sold",
            Self::Cost => "Total Cost Associated with Each Unit Sold",
            Self::Revenue => "Total Revenue Associated with Each Unit Sold",
            Self::MeanCost => "Mean Total Cost Associated with Each Unit Sold",
        }
    }

    /// Legend entry for the sampled line
    pub fn line_label(self) -> &'static str {
        match self {
            Self::Profit => "Profit per unit sold",
            Self::Cost => "Total cost per unit sold",
            Self::Revenue => "Total revenue per unit sold",
            Self::MeanCost => "Mean total cost per unit sold",
        }
    }

    /// Legend entry for the highlighted maximum, if the series has one
    pub fn maximum_label(self) -> Option<&'static str> {
        match self {
            Self::Profit => Some("Maximum profit"),
            Self::Cost => Some("Maximum total cost"),
            Self::Revenue => Some("Maximum total revenue"),
            Self::MeanCost => None,
        }
    }

    /// Evaluates the series at `quantity`
    pub fn value(self, model: &FinancialModel, quantity: f64) -> f64 {
        match self {
            Self::Profit => model.profit(quantity),
            Self::Cost => model.total_cost(quantity),
            Self::Revenue => model.total_revenue(quantity),
            Self::MeanCost => model.mean_total_cost(quantity),
        }
    }

    /// The value highlighted at the demand quantity, if the series has one
    pub fn maximum(self, model: &FinancialModel) -> Option<f64> {
        match self {
            Self::Profit => Some(model.maximum_profit()),
            Self::Cost => Some(model.maximum_total_cost()),
            Self::Revenue => Some(model.maximum_total_revenue()),
            Self::MeanCost => None,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for Series {
    type Err = InvalidSeriesError;

    /// Parses a series label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profit" => Ok(Self::Profit),
            "cost" => Ok(Self::Cost),
            "revenue" => Ok(Self::Revenue),
            "mean_cost" | "mean-cost" => Ok(Self::MeanCost),
            _ => Err(InvalidSeriesError(s.to_owned())),
        }
    }
}

/// A label that does not name any [`Series`]
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown series \"{0}\", expected one of: profit, cost, revenue, mean_cost")]
pub struct InvalidSeriesError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("Profit".parse(), Ok(Series::Profit));
        assert_eq!("COST".parse(), Ok(Series::Cost));
        assert_eq!("revenue".parse(), Ok(Series::Revenue));
        assert_eq!("Mean_Cost".parse(), Ok(Series::MeanCost));
        assert_eq!("mean-cost".parse(), Ok(Series::MeanCost));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "margin".parse::<Series>().unwrap_err();
        assert_eq!(err, InvalidSeriesError("margin".to_owned()));
        assert!(err.to_string().contains("margin"));
    }

    #[test]
    fn test_display_round_trips() {
        for series in Series::ALL {
            assert_eq!(series.to_string().parse(), Ok(series));
        }
    }

    #[test]
    fn test_serde_names_match_file_stems() {
        for series in Series::ALL {
            let json = serde_json::to_string(&series).unwrap();
            assert_eq!(json, format!("\"{}\"", series.file_stem()));
        }
    }
}
