//! Measurement probabilities of the phase-estimation register in Shor's
//! period-finding circuit.
//!
//! For an n-qubit register (Q = 2^n outcomes) and a modular-exponentiation
//! period r, the probability of reading outcome y is the coherent sum of
//! M = floor(Q / r) unit phasors:
//!
//!   Pr{Y = y} = 1/(M*Q) * | sum_{k=0}^{M-1} e^{2*pi*i*k*r*y/Q} |^2
//!
//! The distribution concentrates on outcomes near the multiples of Q/r,
//! which is what makes the continued-fraction recovery of r work.

use experiments_core::complex::{cadd, cexp_i, cnorm_sq, Complex, ZERO};
use std::f64::consts::PI;

/// Register width used by the report binary.
pub const REGISTER_QUBITS: u32 = 8;
/// Period used by the report binary.
pub const PERIOD: u64 = 17;

/// Number of coherent terms M = floor(2^n / r).
pub fn num_terms(r: u64, n: u32) -> u64 {
    (1u64 << n) / r
}

/// The k-th phasor of outcome `y`: e^{2*pi*i*k*r*y/2^n}.
pub fn amplitude_term(y: u64, k: u64, r: u64, n: u32) -> Complex {
    let q = (1u64 << n) as f64;
    cexp_i(2.0 * PI * (k as f64) * (r as f64) * (y as f64) / q)
}

/// Probability of measuring outcome `y`.
pub fn measurement_probability(y: u64, r: u64, n: u32) -> f64 {
    let q = (1u64 << n) as f64;
    let m = num_terms(r, n);

    let mut sum = ZERO;
    for k in 0..m {
        sum = cadd(sum, amplitude_term(y, k, r, n));
    }
    cnorm_sq(sum) / (m as f64 * q)
}

/// The full distribution over all 2^n outcomes.
pub fn distribution(r: u64, n: u32) -> Vec<f64> {
    (0..1u64 << n)
        .map(|y| measurement_probability(y, r, n))
        .collect()
}

/// Running sum of the probabilities.
pub fn cumulative(ps: &[f64]) -> Vec<f64> {
    ps.iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// The `count` most likely outcomes, sorted by descending probability.
pub fn top_outcomes(ps: &[f64], count: usize) -> Vec<(usize, f64)> {
    let mut indexed: Vec<(usize, f64)> = ps.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(count);
    indexed
}
