use crate::error::PipelineError;
use crate::schema::AlignedSeries;
use chrono::{Days, NaiveDate};
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::types::RangedDate;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Draw one company's price and revenue series on a shared date axis and
/// write the chart to `path` as a PNG.
///
/// The revenue series' dates are used as the labeled x ticks. Each call
/// owns a fresh drawing area; nothing is shared between the two company
/// renders.
pub fn render(
    path: &Path,
    title: &str,
    ticker: &str,
    series: &AlignedSeries,
) -> Result<(), PipelineError> {
    let (first, last) = date_span(series)
        .ok_or_else(|| PipelineError::Chart("both series are empty".to_string()))?;
    let y_max = value_ceiling(series);
    let ticks: Vec<NaiveDate> = series.revenue.iter().map(|point| point.dated).collect();

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let x_axis = RangedDate::from(first..last).with_key_points(ticks);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(80)
        .y_label_area_size(56)
        .build_cartesian_2d(x_axis, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Revenue (in Billions)")
        .x_label_formatter(&|dated: &NaiveDate| dated.format("%Y-%m-%d").to_string())
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            series.price.iter().map(|point| (point.dated, point.close)),
            &BLUE,
        ))
        .map_err(draw_err)?
        .label(format!("{ticker} Stock Price"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));

    // mark the trading-day close each report date resolves to
    chart
        .draw_series(
            resolved_markers(series)
                .into_iter()
                .map(|(dated, close)| Circle::new((dated, close), 4, BLUE.filled())),
        )
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            series
                .revenue
                .iter()
                .map(|point| (point.dated, point.revenue_billions)),
            &RED,
        ))
        .map_err(draw_err)?
        .label(format!("{ticker} Revenue (in Billions)"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(draw_err)?;

    root.present()
        .map_err(|e| PipelineError::Chart(e.to_string()))?;
    Ok(())
}

// Full span across both series; widened by a day when it would collapse
// to a single point, since a zero-width axis cannot be built.
fn date_span(series: &AlignedSeries) -> Option<(NaiveDate, NaiveDate)> {
    let dates = series
        .price
        .iter()
        .map(|point| point.dated)
        .chain(series.revenue.iter().map(|point| point.dated));
    let (first, last) = dates.fold(None, |span: Option<(NaiveDate, NaiveDate)>, dated| {
        Some(match span {
            None => (dated, dated),
            Some((lo, hi)) => (lo.min(dated), hi.max(dated)),
        })
    })?;
    if first == last {
        Some((first, last + Days::new(1)))
    } else {
        Some((first, last))
    }
}

// Revenue points that resolved to no trading day stay off the price line;
// absence is never drawn as a zero.
fn resolved_markers(series: &AlignedSeries) -> Vec<(NaiveDate, f64)> {
    series
        .resolved
        .iter()
        .flatten()
        .map(|point| (point.dated, point.close))
        .collect()
}

fn value_ceiling(series: &AlignedSeries) -> f64 {
    let max = series
        .price
        .iter()
        .map(|point| point.close)
        .chain(series.revenue.iter().map(|point| point.revenue_billions))
        .fold(0.0_f64, f64::max);
    (max * 1.05).max(1.0)
}

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PipelineError {
    PipelineError::Chart(e.to_string())
}
