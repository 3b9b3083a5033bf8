//! Order statistics of random elements in (Z/pqZ)*.
//!
//! Shor-style factoring succeeds for a random base a when the order r of a
//! is even and a^(r/2) is not -1 mod n. This crate samples random bases over
//! a grid of small semiprimes and measures how often those two conditions
//! hold, to compare against the theoretical lower bound.

use experiments_core::{gcd_u64, mod_pow_u64, odd_primes_below};
use rand::Rng;
use rayon::prelude::*;

/// Compute the multiplicative order of `a` modulo `n` by linear scan:
/// the smallest k > 0 with a^k = 1 (mod n).
///
/// Returns `None` when the order is undefined (gcd(a, n) != 1) or when no
/// exponent up to `max_order` works. Passing `max_order = n - 1` makes the
/// scan exhaustive, since every order divides phi(n) < n.
pub fn multiplicative_order(a: u64, n: u64, max_order: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }
    let a = a % n;
    if gcd_u64(a, n) != 1 {
        return None;
    }

    let m = n as u128;
    let mut current = a as u128;
    for ord in 1..=max_order {
        if current == 1 {
            return Some(ord);
        }
        current = current * a as u128 % m;
    }
    None
}

/// Draw `sz` uniform bases in [0, pq) and keep the (base, order) pairs
/// where the order is defined.
pub fn sample_orders(p: u64, q: u64, sz: usize, rng: &mut impl Rng) -> Vec<(u64, u64)> {
    let n = p * q;
    (0..sz)
        .filter_map(|_| {
            let a = rng.gen_range(0..n);
            multiplicative_order(a, n, n - 1).map(|ord| (a, ord))
        })
        .collect()
}

/// M1: fraction of `sz` draws whose order is defined and even.
///
/// The denominator is the draw count, not the retained count, so bases
/// outside the group count as failures.
pub fn even_order_rate(p: u64, q: u64, sz: usize, rng: &mut impl Rng) -> f64 {
    let passes = sample_orders(p, q, sz, rng)
        .iter()
        .filter(|&&(_, ord)| ord % 2 == 0)
        .count();
    passes as f64 / sz as f64
}

/// M2: fraction of `sz` draws with defined order r where a^(r/2) is not
/// -1 mod n (i.e. the power differs from n - 1). r/2 truncates for odd r.
pub fn nontrivial_sqrt_rate(p: u64, q: u64, sz: usize, rng: &mut impl Rng) -> f64 {
    let n = p * q;
    let passes = sample_orders(p, q, sz, rng)
        .iter()
        .filter(|&&(a, ord)| mod_pow_u64(a, ord / 2, n) != n - 1)
        .count();
    passes as f64 / sz as f64
}

/// All ordered pairs of odd primes below `limit`, equal pairs included.
pub fn prime_grid(limit: u64) -> Vec<(u64, u64)> {
    let primes = odd_primes_below(limit);
    primes
        .iter()
        .flat_map(|&p1| primes.iter().map(move |&p2| (p1, p2)))
        .collect()
}

/// M2 for every prime pair, `sz` draws each. The pairs are independent,
/// so the sweep runs in parallel.
pub fn sweep_m2(pairs: &[(u64, u64)], sz: usize) -> Vec<f64> {
    pairs
        .par_iter()
        .map(|&(p, q)| {
            let mut rng = rand::thread_rng();
            nontrivial_sqrt_rate(p, q, sz, &mut rng)
        })
        .collect()
}
