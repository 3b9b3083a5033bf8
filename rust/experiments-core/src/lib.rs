//! Shared numeric utilities for the exploratory number-theory and
//! distance-statistics experiments.
//!
//! Each experiment crate is self-contained; this crate only holds the
//! arithmetic and aggregation helpers that more than one of them needs.

pub mod complex;

use num_bigint::BigUint;
use rand::Rng;

/// Greatest common divisor (Euclidean algorithm).
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple. Returns 0 if either argument is 0.
pub fn lcm_u64(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd_u64(a, b) * b
}

/// Modular exponentiation: base^exp mod modulus.
///
/// Uses u128 intermediates, so it is exact for any u64 modulus.
pub fn mod_pow_u64(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut b = (base as u128) % m;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    result as u64
}

/// All odd primes strictly below `limit`, in increasing order.
pub fn odd_primes_below(limit: u64) -> Vec<u64> {
    if limit <= 3 {
        return Vec::new();
    }
    let size = limit as usize;
    let mut is_prime = vec![true; size];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut i = 2usize;
    while i * i < size {
        if is_prime[i] {
            let mut j = i * i;
            while j < size {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    is_prime
        .iter()
        .enumerate()
        .skip(3)
        .filter(|&(i, &p)| p && i % 2 == 1)
        .map(|(i, _)| i as u64)
        .collect()
}

/// Uniform random `BigUint` in [0, 2^bits).
///
/// Fills a byte buffer and clears the excess high bits, the same way the
/// random draws in the factoring experiments are built.
pub fn random_biguint(bits: u32, rng: &mut impl Rng) -> BigUint {
    assert!(bits >= 1, "need at least one bit");
    let num_bytes = (bits as usize + 7) / 8;
    let mut bytes = vec![0u8; num_bytes];
    rng.fill(&mut bytes[..]);

    let excess_bits = (num_bytes * 8) as u32 - bits;
    if excess_bits > 0 {
        bytes[0] &= (1u8 << (8 - excess_bits)) - 1;
    }

    BigUint::from_bytes_be(&bytes)
}

/// Sample mean. `None` on an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population standard deviation. `None` on an empty slice.
pub fn std_dev(xs: &[f64]) -> Option<f64> {
    let m = mean(xs)?;
    let var = xs.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    Some(var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd_u64(12, 18), 6);
        assert_eq!(gcd_u64(17, 5), 1);
        assert_eq!(gcd_u64(0, 9), 9);
        assert_eq!(lcm_u64(4, 6), 12);
        assert_eq!(lcm_u64(0, 6), 0);
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow_u64(2, 10, 1000), 24);
        assert_eq!(mod_pow_u64(2, 4, 15), 1);
        assert_eq!(mod_pow_u64(7, 0, 13), 1);
        assert_eq!(mod_pow_u64(5, 3, 1), 0);
        // No overflow near the u64 boundary.
        let m = u64::MAX - 58; // large odd modulus
        let r = mod_pow_u64(m - 1, 2, m);
        assert_eq!(r, 1); // (-1)^2 = 1
    }

    #[test]
    fn test_odd_primes_below() {
        assert_eq!(odd_primes_below(25), vec![3, 5, 7, 11, 13, 17, 19, 23]);
        assert_eq!(odd_primes_below(3), Vec::<u64>::new());
        assert_eq!(odd_primes_below(4), vec![3]);
    }

    #[test]
    fn test_random_biguint_bit_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in [1u32, 8, 17, 48, 100] {
            for _ in 0..20 {
                let x = random_biguint(bits, &mut rng);
                assert!(
                    x.bits() <= bits as u64,
                    "{}-bit draw produced {} bits",
                    bits,
                    x.bits()
                );
            }
        }
    }

    #[test]
    fn test_mean_std() {
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
        let s = std_dev(&[2.0, 4.0]).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
        assert_eq!(std_dev(&[5.0]), Some(0.0));
    }
}
