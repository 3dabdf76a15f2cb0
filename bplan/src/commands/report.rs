use crate::display;
use bplan_core::models::{BreakEvenError, FinancialModel, PlanSummary};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// How a report is written out
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines with coloured amounts
    Text,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Infers a format from an output file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" | "JSON" => Some(Self::Json),
            "txt" | "TXT" => Some(Self::Text),
            _ => None,
        }
    }
}

/// The model's values at one sample quantity
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub quantity: u32,
    pub profit: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub mean_total_cost: f64,
}

/// Sample rows plus the model's scalar results
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub summary: PlanSummary,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn build(model: &FinancialModel, quantities: &[u32]) -> Result<Self, BreakEvenError> {
        let rows = quantities
            .iter()
            .map(|&quantity| {
                let q = f64::from(quantity);
                ReportRow {
                    quantity,
                    profit: model.profit(q),
                    total_cost: model.total_cost(q),
                    total_revenue: model.total_revenue(q),
                    mean_total_cost: model.mean_total_cost(q),
                }
            })
            .collect();

        Ok(Self {
            summary: model.summary()?,
            rows,
        })
    }

    /// Writes the report; `colorize` only affects text output
    pub fn write<W: Write + ?Sized>(
        &self,
        format: ReportFormat,
        currency: &str,
        colorize: bool,
        out: &mut W,
    ) -> anyhow::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(currency, colorize, out)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_text<W: Write + ?Sized>(
        &self,
        currency: &str,
        colorize: bool,
        out: &mut W,
    ) -> std::io::Result<()> {
        for row in &self.rows {
            writeln!(
                out,
                "Profit for {} units sold: {}",
                row.quantity,
                display::currency(row.profit, currency, colorize)
            )?;
        }
        writeln!(
            out,
            "Break-even point: {} units",
            self.summary.break_even_point
        )?;
        writeln!(
            out,
            "Maximum profit: {currency}{:.2}",
            self.summary.maximum_profit
        )
    }
}
