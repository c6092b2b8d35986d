use std::path::{Path, PathBuf};

use common::report::{SummaryChart, SummaryReport, y_label};
use eyre::{Context, Result};
use plotters::prelude::*;
use tracing::debug;

const CHART_SIZE: (u32, u32) = (900, 540);
const BAR_WIDTH: f64 = 0.6;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Renders one bar chart per statistic in the report, one bar per function
/// with the function names as x-tick labels. Returns the paths written.
pub fn render_summary(report: &SummaryReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(report.charts.len());
    for chart in &report.charts {
        let path = out_dir.join(report.file_name(chart.stat));
        draw_bar_chart(report, chart, &path)
            .with_context(|| format!("render {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn draw_bar_chart(report: &SummaryReport, chart: &SummaryChart, path: &Path) -> Result<()> {
    debug!(bars = chart.values.len(), "drawing bar chart");
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let functions = report.names.len();
    if functions == 0 {
        root.present()?;
        return Ok(());
    }

    let hi = chart.values.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if hi > 0.0 { hi * 1.1 } else { 1.0 };

    let names = &report.names;
    let mut cc = ChartBuilder::on(&root)
        .caption(report.title(), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(functions as f64 - 0.5), 0.0..y_max)?;

    cc.configure_mesh()
        .disable_x_mesh()
        .x_labels(functions)
        .x_label_formatter(&|x| {
            let index = x.round() as usize;
            if index < functions && (x - index as f64).abs() < 0.3 {
                names[index].clone()
            } else {
                String::new()
            }
        })
        .y_desc(y_label(chart.stat))
        .draw()?;

    for (index, &value) in chart.values.iter().enumerate() {
        let center = index as f64;
        cc.draw_series(std::iter::once(Rectangle::new(
            [
                (center - BAR_WIDTH / 2.0, 0.0),
                (center + BAR_WIDTH / 2.0, value),
            ],
            BAR_COLOR.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}
