use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::bench::load_results;
use crate::error::{require_exists, Error, Result};
use crate::io::ResultsTable;

pub const PLOT_FILE: &str = "results.svg";

/// Draws one time-over-size curve per algorithm into `<results_dir>/results.svg`.
pub fn plot_results(algorithms: &[String], results_dir: &Path) -> Result<PathBuf> {
    require_exists("results directory", results_dir)?;
    let mut series = vec![];
    for algorithm in algorithms {
        series.push((algorithm.as_str(), load_results(algorithm, results_dir)?));
    }
    let out = results_dir.join(PLOT_FILE);
    draw(&out, &series).map_err(|e| Error::Plot(e.to_string()))?;
    log::info!("plot saved in {}", out.display());
    Ok(out)
}

fn draw(out: &Path, series: &[(&str, ResultsTable)]) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let sizes = series.iter().flat_map(|(_, t)| t.num_vertices.iter().map(|&n| n as f64));
    let x_min = sizes.clone().fold(f64::INFINITY, f64::min);
    let x_max = sizes.fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = if x_min <= x_max { (x_min, x_max.max(x_min + 1.0)) } else { (0.0, 1.0) };
    let y_max = series.iter().flat_map(|(_, t)| t.time.iter().cloned()).fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = SVGBackend::new(out, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Algorithm Comparison", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;
    chart.configure_mesh()
        .x_desc("Graph's Number of Vertices")
        .y_desc("Execution time (s)")
        .draw()?;

    for (i, (algorithm, table)) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart.draw_series(LineSeries::new(table.rows().map(|(t, n)| (n as f64, t)), color))?
            .label(*algorithm)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
