use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};
use std::process;

use edit_distance_hist::{distances_from_first, histogram, read_lines};
use plotters::prelude::*;
use serde::Serialize;

const BINS: usize = 13;

#[derive(Serialize)]
struct DistanceSummary {
    input: PathBuf,
    lines: usize,
    distances: usize,
    min: usize,
    max: usize,
    mean: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: edit-distance-hist <file>");
        process::exit(1);
    };
    let path = PathBuf::from(path);

    let lines = read_lines(&path)?;
    println!("=== Levenshtein Differences: {} ===\n", path.display());
    println!("  {} lines read", lines.len());

    let ds = distances_from_first(&lines);
    if ds.is_empty() {
        eprintln!("No nonzero distances: the file needs at least two distinct lines.");
        process::exit(1);
    }

    let min = *ds.iter().min().ok_or("empty distances")?;
    let max = *ds.iter().max().ok_or("empty distances")?;
    let mean = ds.iter().sum::<usize>() as f64 / ds.len() as f64;
    println!(
        "  {} nonzero distances against line 1: min={}, max={}, mean={:.2}",
        ds.len(),
        min,
        max,
        mean
    );

    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir)?;

    let plot_path = out_dir.join("edit_distance_hist.png");
    render_histogram(&plot_path, &ds)?;
    println!("  Plot written to {}", plot_path.display());

    let summary = DistanceSummary {
        input: path,
        lines: lines.len(),
        distances: ds.len(),
        min,
        max,
        mean,
    };
    let json_path = out_dir.join("edit_distance_summary.json");
    write(&json_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  Summary written to {}", json_path.display());

    Ok(())
}

fn render_histogram(out_path: &Path, ds: &[usize]) -> Result<(), Box<dyn Error>> {
    let counts = histogram(ds, BINS);
    let bin_width = match counts.as_slice() {
        [(a, _), (b, _), ..] => b - a,
        _ => 1.0,
    };
    let y_max = counts
        .iter()
        .map(|&(_, c)| c as f64)
        .fold(0.0f64, f64::max)
        .max(1.0);
    let x_min = counts.first().map(|&(x, _)| x).unwrap_or(0.0);
    let x_max = counts.last().map(|&(x, _)| x + bin_width).unwrap_or(1.0);

    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Levenshtein Differences", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("edit distance to line 1")
        .y_desc("count")
        .draw()?;

    for (bin_start, count) in counts {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin_start, 0.0), (bin_start + bin_width, count as f64)],
            BLUE.mix(0.6).filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}
