//! Empirical coprimality of random integers.
//!
//! Two integers drawn uniformly at random are coprime with probability
//! 1/zeta(2) = 6/pi^2. This crate estimates that rate by repeated gcd
//! trials over pairs of random 48-bit integers.

use experiments_core::random_biguint;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Theoretical coprimality rate 6/pi^2 (~60.79%).
pub const THEORETICAL_RATE: f64 = 6.0 / (PI * PI);

/// Uniform random integer in [1, 2^bits].
pub fn random_positive(bits: u32, rng: &mut impl Rng) -> BigUint {
    random_biguint(bits, rng) + BigUint::one()
}

/// Fraction of `trials` random pairs with gcd = 1.
///
/// `None` when `trials` is zero (the rate is undefined), matching the
/// empty-sample contract of `mean`/`std_dev`.
pub fn coprime_rate(trials: usize, bits: u32, rng: &mut impl Rng) -> Option<f64> {
    if trials == 0 {
        return None;
    }
    let hits = (0..trials)
        .filter(|_| {
            let x = random_positive(bits, rng);
            let y = random_positive(bits, rng);
            x.gcd(&y).is_one()
        })
        .count();
    Some(hits as f64 / trials as f64)
}

/// `size` independent rate estimates, `trials` pairs each. Empty when
/// `trials` is zero.
pub fn sample_rates(size: usize, trials: usize, bits: u32, rng: &mut impl Rng) -> Vec<f64> {
    (0..size)
        .filter_map(|_| coprime_rate(trials, bits, rng))
        .collect()
}

/// Parallel version of [`sample_rates`] for the report binary; the
/// estimates are independent, so each one gets its own thread-local rng.
pub fn sample_rates_parallel(size: usize, trials: usize, bits: u32) -> Vec<f64> {
    (0..size)
        .into_par_iter()
        .filter_map(|_| {
            let mut rng = rand::thread_rng();
            coprime_rate(trials, bits, &mut rng)
        })
        .collect()
}
