use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::Path;

use coprime_probability::{sample_rates_parallel, THEORETICAL_RATE};
use experiments_core::{mean, std_dev};
use plotters::prelude::*;
use serde::Serialize;

const SAMPLE_SIZE: usize = 256;
const TRIALS_PER_ESTIMATE: usize = 1000;
const BITS: u32 = 48;

#[derive(Serialize)]
struct CoprimeSummary {
    sample_size: usize,
    trials_per_estimate: usize,
    bits: u32,
    mean_pct: f64,
    std_pct: f64,
    theoretical_pct: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir)?;

    println!("=== Coprimality of Random {}-bit Integers ===\n", BITS);
    println!(
        "Three samples of {} estimates, {} pairs per estimate",
        SAMPLE_SIZE, TRIALS_PER_ESTIMATE
    );

    let samples: Vec<Vec<f64>> = (0..3)
        .map(|_| sample_rates_parallel(SAMPLE_SIZE, TRIALS_PER_ESTIMATE, BITS))
        .collect();

    let mut mm = 0.0;
    let mut sd = 0.0;
    for (i, s) in samples.iter().enumerate() {
        let m = mean(s).ok_or("empty sample")?;
        let d = std_dev(s).ok_or("empty sample")?;
        println!("  Sample #{}: mean = {:.4}, std = {:.4}", i + 1, m, d);
        mm += m / 3.0;
        sd += d / 3.0;
    }

    let mean_pct = 100.0 * mm;
    let std_pct = 100.0 * sd;
    println!(
        "\n  Pr{{coprime(X, Y)}} = ca. {:.2}% +/- {:.2}%",
        mean_pct, std_pct
    );
    println!("  6/pi^2             =     {:.2}%", 100.0 * THEORETICAL_RATE);

    let plot_path = out_dir.join("coprime_probability.png");
    render_sample_scatter(&plot_path, &samples, mean_pct, std_pct)?;
    println!("\n  Plot written to {}", plot_path.display());

    let summary = CoprimeSummary {
        sample_size: SAMPLE_SIZE,
        trials_per_estimate: TRIALS_PER_ESTIMATE,
        bits: BITS,
        mean_pct,
        std_pct,
        theoretical_pct: 100.0 * THEORETICAL_RATE,
    };
    let json_path = out_dir.join("coprime_probability_summary.json");
    write(&json_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  Summary written to {}", json_path.display());

    Ok(())
}

/// The three pairwise scatter comparisons of the independent samples:
/// #1 vs #2 in red, #2 vs #3 in green, #3 vs #1 in blue.
fn render_sample_scatter(
    out_path: &Path,
    samples: &[Vec<f64>],
    mean_pct: f64,
    std_pct: f64,
) -> Result<(), Box<dyn Error>> {
    let lo = samples
        .iter()
        .flatten()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let hi = samples
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = (hi - lo).max(1e-3) * 0.05;

    let root = BitMapBackend::new(out_path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Pr{{co-prime(X=x, Y=y)}} = ca. {:.2}% +/- {:.2}%",
                mean_pct, std_pct
            ),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((lo - pad)..(hi + pad), (lo - pad)..(hi + pad))?;

    chart
        .configure_mesh()
        .x_desc("estimated rate")
        .y_desc("estimated rate")
        .draw()?;

    let pairings = [
        (0usize, 1usize, RED, "Sample #1 vs #2"),
        (1, 2, GREEN, "Sample #2 vs #3"),
        (2, 0, BLUE, "Sample #3 vs #1"),
    ];
    for &(a, b, color, label) in &pairings {
        chart
            .draw_series(
                samples[a]
                    .iter()
                    .zip(samples[b].iter())
                    .map(|(&x, &y)| Circle::new((x, y), 3, color.filled())),
            )?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
