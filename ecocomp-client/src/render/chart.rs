use chrono::{Duration, NaiveDate};
use ecocomp_core::MergedSeries;
use plotters::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("no values to chart")]
    NoData,
    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// Render both columns of a comparison as an SVG line chart.
///
/// Each line is named `{country} - {indicator}` in the legend; `N/A` cells
/// leave gaps in the point set rather than dropping to zero.
pub fn render_svg(series: &MergedSeries, width: u32, height: u32) -> Result<String, ChartError> {
    let lines: Vec<Vec<(NaiveDate, f64)>> = (0..2)
        .map(|col| {
            let mut pts: Vec<_> = series.points(col).collect();
            pts.reverse(); // oldest first
            pts
        })
        .collect();

    let values = || lines.iter().flatten().map(|&(_, v)| v);
    let (Some(y_lo), Some(y_hi)) = (
        values().reduce(f64::min),
        values().reduce(f64::max),
    ) else {
        return Err(ChartError::NoData);
    };
    let dates = || series.rows.iter().map(|r| r.date);
    let (Some(x_lo), Some(x_hi)) = (dates().min(), dates().max()) else {
        return Err(ChartError::NoData);
    };

    let span = y_hi - y_lo;
    let padding = if span > 0.0 { span * 0.1 } else { y_hi.abs().max(1.0) * 0.1 };
    let x_range = (x_lo - Duration::days(1))..(x_hi + Duration::days(1));
    let y_range = (y_lo - padding)..(y_hi + padding);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let [first, second] = &series.columns;
        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{first} vs {second}"), ("sans-serif", 24.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(drawing)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
            .draw()
            .map_err(drawing)?;

        for (label, (pts, color)) in series.columns.iter().zip(lines.iter().zip([BLUE, RED])) {
            chart
                .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(2)))
                .map_err(drawing)?
                .label(label.to_string())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing)?;

        root.present().map_err(drawing)?;
    }
    Ok(svg)
}
