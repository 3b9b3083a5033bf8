//! Integration tests for the order-parity sampler.

use order_parity::{
    even_order_rate, multiplicative_order, nontrivial_sqrt_rate, prime_grid, sweep_m2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn order_matches_known_values() {
    // (a, n, expected order)
    let cases: &[(u64, u64, u64)] = &[
        (2, 15, 4),
        (4, 15, 2),
        (14, 15, 2),  // -1 mod 15
        (2, 35, 12),
        (6, 35, 2),
        (1, 35, 1),
    ];
    for &(a, n, expected) in cases {
        assert_eq!(
            multiplicative_order(a, n, n - 1),
            Some(expected),
            "ord({}) mod {}",
            a,
            n
        );
    }
}

#[test]
fn sweep_over_tiny_grid_yields_probabilities() {
    let pairs = prime_grid(8); // 3, 5, 7 -> 9 pairs
    assert_eq!(pairs.len(), 9);

    let rates = sweep_m2(&pairs, 100);
    assert_eq!(rates.len(), pairs.len());
    for (&(p, q), &rate) in pairs.iter().zip(rates.iter()) {
        assert!(
            (0.0..=1.0).contains(&rate),
            "M2 for ({}, {}) out of range: {}",
            p,
            q,
            rate
        );
    }
}

#[test]
fn even_order_dominates_for_distinct_primes() {
    // The bound behind period-finding: for n = pq with p, q distinct odd
    // primes, at least half of the bases have even order. With the draw
    // count in the denominator the observed rate also absorbs the non-unit
    // draws, so test well below the theoretical 1/2.
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    for &(p, q) in &[(3u64, 5u64), (5, 7), (11, 13)] {
        let m1 = even_order_rate(p, q, 400, &mut rng);
        assert!(m1 > 0.35, "M1 for ({}, {}) = {}", p, q, m1);
    }
}

#[test]
fn m2_rate_is_high_for_semiprimes() {
    // a^(r/2) = -1 only for specific bases. For n = 15 exactly one unit
    // (a = 14) fails, so the expected rate is 7/15; keep the threshold
    // far enough below that for sampling noise.
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for &(p, q) in &[(3u64, 5u64), (5, 7), (7, 11)] {
        let m2 = nontrivial_sqrt_rate(p, q, 500, &mut rng);
        assert!(m2 > 0.35, "M2 for ({}, {}) = {}", p, q, m2);
    }
}
