use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::Path;

use order_parity::{prime_grid, sweep_m2};
use plotters::prelude::*;
use serde::Serialize;

const PRIME_LIMIT: u64 = 25;
const SAMPLES_PER_PAIR: usize = 250;

#[derive(Serialize)]
struct SweepSummary {
    prime_limit: u64,
    samples_per_pair: usize,
    pairs: Vec<(u64, u64)>,
    m2: Vec<f64>,
    m2_mean: f64,
    m2_min: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir)?;

    println!("=== Order-Parity Sweep over Semiprime Grid ===\n");
    println!(
        "Grid: ordered pairs of odd primes below {}, {} draws per pair",
        PRIME_LIMIT, SAMPLES_PER_PAIR
    );

    let pairs = prime_grid(PRIME_LIMIT);
    let m2 = sweep_m2(&pairs, SAMPLES_PER_PAIR);

    println!("\n  idx  (p, q)      n     M2");
    for (i, (&(p, q), &rate)) in pairs.iter().zip(m2.iter()).enumerate() {
        println!("  {:>3}  ({:>2},{:>2})  {:>4}  {:.3}", i, p, q, p * q, rate);
    }

    let m2_mean = m2.iter().sum::<f64>() / m2.len() as f64;
    let m2_min = m2.iter().copied().fold(f64::INFINITY, f64::min);
    println!("\n  mean M2 = {:.3}, min M2 = {:.3}", m2_mean, m2_min);

    let plot_path = out_dir.join("order_parity_m2.png");
    render_m2_scatter(&plot_path, &m2)?;
    println!("  Plot written to {}", plot_path.display());

    let summary = SweepSummary {
        prime_limit: PRIME_LIMIT,
        samples_per_pair: SAMPLES_PER_PAIR,
        pairs,
        m2,
        m2_mean,
        m2_min,
    };
    let json_path = out_dir.join("order_parity_summary.json");
    write(&json_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  Summary written to {}", json_path.display());

    Ok(())
}

fn render_m2_scatter(out_path: &Path, m2: &[f64]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "M2: Pr{a^(order(a)/2) != -1 (mod pq)} for random a in G(pq)",
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..m2.len() as f64, 0f64..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("prime-pair index")
        .y_desc("M2 pass rate")
        .draw()?;

    chart.draw_series(
        m2.iter()
            .enumerate()
            .map(|(i, &rate)| Circle::new((i as f64, rate), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
