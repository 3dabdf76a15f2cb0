#![doc = include_str!("../README.md")]

use bplan_core::models::FinancialModel;
use clap::Parser;
use std::{
    io::{Write, stdout},
    path::PathBuf,
};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::{AppConfig, ReportConfig};

pub mod display;

use commands::report::{Report, ReportFormat};

// The top-level arguments: settings shared by every subcommand, then the subcommand
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to configuration file
    #[arg(short, long, env = "BPLAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Units sold at or below which the cubic cost rule applies
    #[arg(short, long, global = true)]
    pub threshold: Option<u32>,

    /// Units at which maximum profit, cost and revenue are reported
    #[arg(short, long, global = true)]
    pub demand: Option<u32>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let mut out = stdout().lock();
        self.evaluate_to(&mut out)
    }

    /// Runs the subcommand, writing console output to `out`
    pub fn evaluate_to(self, out: &mut dyn Write) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let AppConfig {
            model: plan,
            report,
            mut chart,
        } = AppConfig::load(&self)?;
        let model = FinancialModel::from_config(&plan);

        match self.command {
            Commands::Report {
                io,
                format,
                quantities,
            } => {
                let format = if let Some(format) = format {
                    format
                } else if let Some(ext) = io.extension() {
                    ReportFormat::from_extension(ext)
                        .ok_or_else(|| CliError::ReportInference(ext.to_owned()))?
                } else {
                    ReportFormat::Text
                };

                let quantities = if quantities.is_empty() {
                    report.quantities
                } else {
                    quantities
                };

                // Colour codes belong on the terminal, never in a saved report
                let colorize = io.is_stdout();
                let result = Report::build(&model, &quantities)?;
                let mut output = io.write(out)?;
                result.write(format, &report.currency, colorize, &mut output)?;
                output.flush()?;
            }
            Commands::Chart {
                series,
                output_dir,
                format,
            } => {
                if let Some(output_dir) = output_dir {
                    chart.output_dir = output_dir;
                }
                if let Some(format) = format {
                    chart.format = format;
                }
                let series = if series.is_empty() {
                    chart.series.clone()
                } else {
                    series
                };
                if series.is_empty() {
                    return Err(CliError::NoSeries)?;
                }

                commands::chart::render_all(&model, &series, &chart, out)?;
            }
            Commands::Run => {
                let result = Report::build(&model, &report.quantities)?;
                result.write(ReportFormat::Text, &report.currency, true, out)?;
                commands::chart::render_all(&model, &chart.series, &chart, out)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer report format from extension \"{0}\", please specify --format")]
    ReportInference(String),
    #[error("No chart series requested or configured")]
    NoSeries,
}
