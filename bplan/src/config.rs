//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, environment variables and command-line flags.

use crate::BaseArgs;
use bplan_chart::config::ChartConfig;
use bplan_core::models::PlanConfig;
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Threshold and demand quantities of the modelled plan
    #[serde(default)]
    pub model: PlanConfig,

    /// Console report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Chart output settings
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Settings for the console report
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Quantities at which profit is reported
    #[serde(default = "default_quantities")]
    pub quantities: Vec<u32>,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_quantities() -> Vec<u32> {
    vec![0, 50, 100, 200, 148, 149, 165, 450, 550]
}

fn default_currency() -> String {
    "R$".to_owned()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            quantities: default_quantities(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `--threshold` / `--demand` flags (highest priority)
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `BPLAN_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Move the price break
    /// export BPLAN_MODEL__THRESHOLD_QUANTITY=200
    ///
    /// # Report a custom list of quantities
    /// export BPLAN_REPORT__QUANTITIES="0,100,550"
    ///
    /// # Render PNG charts
    /// export BPLAN_CHART__FORMAT=png
    /// ```
    pub fn load(args: &BaseArgs) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &args.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps BPLAN_MODEL__DEMAND_QUANTITY to model.demand_quantity
        config = config.add_source(
            config::Environment::with_prefix("BPLAN")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("report.quantities")
                .with_list_parse_key("chart.series")
                .try_parsing(true),
        );

        // Explicit flags win over everything else
        config = config
            .set_override_option("model.threshold_quantity", args.threshold.map(i64::from))?
            .set_override_option("model.demand_quantity", args.demand.map(i64::from))?;

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
