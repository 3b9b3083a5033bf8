//! Minimal complex arithmetic using (f64, f64) tuples.
//!
//! Just enough to sum unit phasors for the measurement distribution.

/// A complex number represented as (real, imaginary).
pub type Complex = (f64, f64);

/// The complex number zero.
pub const ZERO: Complex = (0.0, 0.0);

/// Add two complex numbers.
#[inline]
pub fn cadd(a: Complex, b: Complex) -> Complex {
    (a.0 + b.0, a.1 + b.1)
}

/// Squared magnitude |z|^2 = re^2 + im^2.
#[inline]
pub fn cnorm_sq(a: Complex) -> f64 {
    a.0 * a.0 + a.1 * a.1
}

/// Unit phasor e^{i*theta}.
#[inline]
pub fn cexp_i(theta: f64) -> Complex {
    (theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_phasor_magnitude() {
        for &theta in &[0.0, 0.3, PI / 2.0, PI, 5.1] {
            let z = cexp_i(theta);
            assert!((cnorm_sq(z) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_opposite_phasors_cancel() {
        let z = cadd(cexp_i(0.25), cexp_i(0.25 + PI));
        assert!(cnorm_sq(z) < 1e-24);
    }
}
