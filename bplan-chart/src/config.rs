//! Configuration types for chart output.

use crate::{ChartFormat, Series};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for rendering charts to disk.
///
/// # Examples
///
/// ```
/// use bplan_chart::{ChartFormat, config::ChartConfig};
/// use std::path::PathBuf;
///
/// // SVG charts under ./graphics
/// let config = ChartConfig::default();
///
/// // Large PNG charts elsewhere
/// let config = ChartConfig {
///     output_dir: PathBuf::from("/tmp/charts"),
///     format: ChartFormat::Png,
///     width: 1920,
///     height: 1080,
///     ..ChartConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Directory the charts are written to, created when missing
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Image format of the written charts
    #[serde(default)]
    pub format: ChartFormat,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Currency symbol shown on the value axis
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Series rendered when none are requested explicitly
    #[serde(default = "default_series")]
    pub series: Vec<Series>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("graphics")
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

fn default_currency() -> String {
    "R$".to_owned()
}

fn default_series() -> Vec<Series> {
    vec![Series::Profit, Series::Cost, Series::Revenue]
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ChartFormat::default(),
            width: default_width(),
            height: default_height(),
            currency: default_currency(),
            series: default_series(),
        }
    }
}
