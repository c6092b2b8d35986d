use std::path::{Path, PathBuf};

use common::report::{ScalingChart, ScalingReport, y_label};
use eyre::{Context, Result};
use itertools::Itertools;
use plotters::prelude::*;
use tracing::debug;

use crate::palette::series_color;

const CHART_SIZE: (u32, u32) = (900, 540);

/// Renders one line chart per series set in the report. Returns the paths
/// written, `<stem>.png` for the single-statistic form and
/// `<stem>_avg.png` / `<stem>_max.png` / `<stem>_min.png` for the split form.
pub fn render_scaling(report: &ScalingReport, out_dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(report.charts.len());
    for chart in &report.charts {
        let file = match chart.stat {
            Some(stat) => format!("{stem}_{}.png", stat.suffix()),
            None => format!("{stem}.png"),
        };
        let path = out_dir.join(file);
        draw_line_chart(report, chart, &path)
            .with_context(|| format!("render {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn draw_line_chart(report: &ScalingReport, chart: &ScalingChart, path: &Path) -> Result<()> {
    debug!(series = chart.series.len(), "drawing line chart");
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if chart.series.is_empty() || report.threads == 0 {
        root.present()?;
        return Ok(());
    }

    let bounds = chart
        .series
        .iter()
        .flat_map(|series| series.points.iter().copied())
        .minmax();
    let (_, hi) = bounds.into_option().unwrap_or((0.0, 1.0));
    let y_max = if hi > 0.0 { hi * 1.05 } else { 1.0 };

    let mut cc = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.5..report.threads as f64 + 0.5, 0.0..y_max)?;

    let threads = report.threads;
    cc.configure_mesh()
        .disable_x_mesh()
        .x_labels(threads)
        .x_label_formatter(&move |x| {
            let tick = x.round();
            if (x - tick).abs() < 0.3 && tick >= 1.0 && tick <= threads as f64 {
                format!("{tick:.0}")
            } else {
                String::new()
            }
        })
        .x_desc("No of threads")
        .y_desc(y_label(chart.stat))
        .draw()?;

    for (index, series) in chart.series.iter().enumerate() {
        let color = series_color(index);
        let points: Vec<(f64, f64)> = (1..)
            .zip(&series.points)
            .map(|(thread, &time)| (thread as f64, time))
            .collect();

        cc.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(series.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        cc.draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 3, color.filled())),
        )?;
    }

    cc.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
