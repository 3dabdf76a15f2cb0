use super::OutputArgs;
use bplan_chart::{ChartFormat, Series};
use clap::Subcommand;
use std::path::PathBuf;

pub mod chart;
pub mod report;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report profit at sample quantities, the break-even point and the maximum profit
    Report {
        #[command(flatten)]
        io: OutputArgs,

        /// The report format (if omitted, will infer based on filename, defaulting to text)
        #[arg(short, long)]
        format: Option<report::ReportFormat>,

        /// A quantity to report profit for (repeatable; defaults to the configured list)
        #[arg(short, long = "quantity")]
        quantities: Vec<u32>,
    },

    /// Render charts of the model to image files
    Chart {
        /// Series to chart: profit, cost, revenue or mean_cost (defaults to the configured set)
        series: Vec<Series>,

        /// Directory to write the charts to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// The image format
        #[arg(short, long)]
        format: Option<ChartFormat>,
    },

    /// Print the text report, then render the configured charts
    Run,
}
