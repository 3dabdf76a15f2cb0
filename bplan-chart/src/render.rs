use crate::{ChartData, ChartFormat, Series, config::ChartConfig, font};
use bplan_core::models::{BreakEvenError, FinancialModel};
use plotters::{coord::Shift, prelude::*};
use std::{fs, path::PathBuf};
use tracing::info;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const MAXIMUM_COLOR: RGBColor = RGBColor(44, 160, 44);
const BREAK_EVEN_COLOR: RGBColor = RGBColor(214, 39, 40);

/// Number of dashes in the break-even marker
const DASHES: usize = 24;

/// Draws `data` onto `root`.
///
/// The chart has a caption, a grid with left and bottom axes, the sampled
/// line, a marker at the maximum annotated with its value, a dashed
/// vertical line at the break-even quantity, and a legend. The break-even
/// quantity is labelled on the quantity axis alongside the regular ticks.
pub fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
) -> Result<(), ChartError> {
    font::register()?;
    root.fill(&WHITE).map_err(draw_error)?;

    let (x0, x1) = data.x_range;
    let (y0, y1) = data.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(data.series.title(), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((x0..x1).with_key_points(data.x_ticks()), y0..y1)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Units Sold")
        .y_desc(data.value_label.as_str())
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            data.points.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(draw_error)?
        .label(data.series.line_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

    if let (Some(point), Some(label)) = (data.maximum, data.series.maximum_label()) {
        chart
            .draw_series(std::iter::once(
                EmptyElement::at((point.quantity, point.value))
                    + Circle::new((0, 0), 5, MAXIMUM_COLOR.filled())
                    + Text::new(
                        format!("{:.2}", point.value),
                        (-15, -20),
                        ("sans-serif", 14).into_font(),
                    ),
            ))
            .map_err(draw_error)?
            .label(label)
            .legend(|(x, y)| Circle::new((x + 10, y), 4, MAXIMUM_COLOR.filled()));
    }

    let x = f64::from(data.break_even);
    chart
        .draw_series(dashes(x, y0, y1))
        .map_err(draw_error)?
        .label(format!("Break-even point ({})", data.break_even))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BREAK_EVEN_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Splits the vertical line at `x` from `y0` to `y1` into evenly spaced dashes
fn dashes(x: f64, y0: f64, y1: f64) -> Vec<PathElement<(f64, f64)>> {
    let step = (y1 - y0) / (2 * DASHES) as f64;
    (0..DASHES)
        .map(|i| {
            let start = y0 + step * (2 * i) as f64;
            PathElement::new(
                vec![(x, start), (x, start + step)],
                BREAK_EVEN_COLOR.stroke_width(2),
            )
        })
        .collect()
}

/// Renders `series` from `model` and writes it under the configured output directory.
///
/// The directory is created if it does not exist. The file is named after
/// the series, e.g. `graphics/profit.svg`.
pub fn save(
    model: &FinancialModel,
    series: Series,
    config: &ChartConfig,
) -> Result<PathBuf, ChartError> {
    let data = ChartData::build(model, series, &config.currency)?;

    fs::create_dir_all(&config.output_dir)?;
    let path = config
        .output_dir
        .join(format!("{}.{}", series.file_stem(), config.format.extension()));
    let size = (config.width, config.height);

    match config.format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            render(&root, &data)?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            render(&root, &data)?;
        }
    }

    info!(%series, path = %path.display(), "wrote chart");
    Ok(path)
}

fn draw_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// Errors that can occur while rendering a chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The output directory or file could not be written
    #[error("unable to write chart: {0}")]
    Io(#[from] std::io::Error),
    /// The drawing backend rejected an operation
    #[error("unable to draw chart: {0}")]
    Draw(String),
    /// The break-even marker could not be placed
    #[error(transparent)]
    BreakEven(#[from] BreakEvenError),
    /// The bundled font could not be loaded
    #[error("unable to load the chart font")]
    Font,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_count() {
        let segments = dashes(150.0, -100.0, 100.0);
        assert_eq!(segments.len(), DASHES);
    }
}
