use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::Path;

use plotters::prelude::*;
use qft_measurement::{
    cumulative, distribution, num_terms, top_outcomes, PERIOD, REGISTER_QUBITS,
};
use serde::Serialize;

#[derive(Serialize)]
struct MeasurementSummary {
    register_qubits: u32,
    period: u64,
    num_terms: u64,
    total_probability: f64,
    top_outcomes: Vec<(usize, f64)>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir)?;

    let n = REGISTER_QUBITS;
    let r = PERIOD;
    let m = num_terms(r, n);

    println!("=== Phase-Estimation Measurement Distribution ===\n");
    println!("N = {} qubits (Q = {}), R = {}, M = {}", n, 1u64 << n, r, m);

    let ps = distribution(r, n);
    let cs = cumulative(&ps);
    let total: f64 = ps.iter().sum();
    println!("Total probability over all outcomes: {:.9}", total);

    let top = top_outcomes(&ps, r as usize);
    println!("\nThe {} most likely outcomes (peaks near multiples of Q/R):", r);
    println!("  y    Pr{{Y=y}}   y*R/Q");
    for &(y, p) in &top {
        println!(
            "  {:>3}  {:.5}   {:.3}",
            y,
            p,
            y as f64 * r as f64 / (1u64 << n) as f64
        );
    }

    let plot_path = out_dir.join("qft_measurement.png");
    render_distribution(&plot_path, &ps, &cs, r, n, m)?;
    println!("\nPlot written to {}", plot_path.display());

    let summary = MeasurementSummary {
        register_qubits: n,
        period: r,
        num_terms: m,
        total_probability: total,
        top_outcomes: top,
    };
    let json_path = out_dir.join("qft_measurement_summary.json");
    write(&json_path, serde_json::to_string_pretty(&summary)?)?;
    println!("Summary written to {}", json_path.display());

    Ok(())
}

/// Two stacked panels: the probability density on top, the cumulative sum
/// with the density-times-R bar overlay below.
fn render_distribution(
    out_path: &Path,
    ps: &[f64],
    cs: &[f64],
    r: u64,
    n: u32,
    m: u64,
) -> Result<(), Box<dyn Error>> {
    let q = ps.len() as f64;
    let p_max = ps.iter().copied().fold(0.0f64, f64::max);

    let root = BitMapBackend::new(out_path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let mut chart_p = ChartBuilder::on(&panels[0])
        .caption(
            format!("Measurement Pr{{Y=y}} with N={}, R={} and M={}", n, r, m),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..q, 0f64..(p_max * 1.1))?;

    chart_p
        .configure_mesh()
        .x_desc("outcome y")
        .y_desc("Pr{Y=y}")
        .draw()?;

    chart_p
        .draw_series(LineSeries::new(
            ps.iter().enumerate().map(|(y, &p)| (y as f64, p)),
            &RED,
        ))?
        .label("Pr{Y=y}")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart_p
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .draw()?;

    let mut chart_c = ChartBuilder::on(&panels[1])
        .caption("Cumulative sum and Pr{Y=y} x R", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..q, 0f64..1.05f64)?;

    chart_c
        .configure_mesh()
        .x_desc("outcome y")
        .y_desc("sum Pr{Y=y}, Pr{Y=y} x R")
        .draw()?;

    for (y, &p) in ps.iter().enumerate() {
        let x = y as f64;
        chart_c.draw_series(std::iter::once(Rectangle::new(
            [(x - 0.1, 0.0), (x + 0.1, p * r as f64)],
            GREEN.mix(0.8).filled(),
        )))?;
    }

    chart_c
        .draw_series(LineSeries::new(
            cs.iter().enumerate().map(|(y, &c)| (y as f64, c)),
            &BLUE,
        ))?
        .label("sum Pr{Y=y}")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart_c
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
