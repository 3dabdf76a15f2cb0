use bplan_chart::{Series, config::ChartConfig, save};
use bplan_core::models::FinancialModel;
use std::{io::Write, path::PathBuf};
use tracing::info;

/// Renders every series in `series`, reporting each written file on `out`
pub fn render_all<W: Write + ?Sized>(
    model: &FinancialModel,
    series: &[Series],
    config: &ChartConfig,
    out: &mut W,
) -> anyhow::Result<Vec<PathBuf>> {
    info!(count = series.len(), output_dir = %config.output_dir.display(), "rendering charts");

    let mut paths = Vec::with_capacity(series.len());
    for &series in series {
        let path = save(model, series, config)?;
        writeln!(out, "Saved {series} chart to {}", path.display())?;
        paths.push(path);
    }
    Ok(paths)
}
