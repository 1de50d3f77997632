//! Horner evaluation of truncated series
//!
//! The coefficient slice length is the term count. Callers pass a prefix of a
//! table from [`common`](super::common) whose length is a compile-time
//! constant, so every evaluation performs a fixed number of multiply-adds.

use crate::dtype::ApproxFloat;

/// Evaluate c₀ + c₁·x + c₂·x² + … by nested multiplication
///
/// An empty coefficient slice evaluates to zero.
#[inline(always)]
pub fn horner<T: ApproxFloat>(x: T, coeffs: &[f64]) -> T {
    let Some((&last, rest)) = coeffs.split_last() else {
        return T::zero();
    };
    let mut acc = T::from_f64(last);
    for &c in rest.iter().rev() {
        acc = acc * x + T::from_f64(c);
    }
    acc
}

/// Odd series x·(c₀ + c₁·x² + c₂·x⁴ + …)
#[inline(always)]
pub fn odd_series<T: ApproxFloat>(x: T, coeffs: &[f64]) -> T {
    x * horner(x * x, coeffs)
}

/// Even series c₀ + c₁·x² + c₂·x⁴ + …
#[inline(always)]
pub fn even_series<T: ApproxFloat>(x: T, coeffs: &[f64]) -> T {
    horner(x * x, coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_matches_expanded_polynomial() {
        // 2 - 3x + 0.5x² at x = 4 → 2 - 12 + 8 = -2
        assert_eq!(horner(4.0f64, &[2.0, -3.0, 0.5]), -2.0);
        assert_eq!(horner(4.0f32, &[2.0, -3.0, 0.5]), -2.0);
        assert_eq!(horner(7.0f64, &[]), 0.0);
        assert_eq!(horner(7.0f64, &[1.5]), 1.5);
    }

    #[test]
    fn test_odd_and_even_series() {
        // x + x³ at 2 → 10; 1 + x² at 2 → 5
        assert_eq!(odd_series(2.0f64, &[1.0, 1.0]), 10.0);
        assert_eq!(even_series(2.0f64, &[1.0, 1.0]), 5.0);
        assert_eq!(odd_series(-2.0f64, &[1.0, 1.0]), -10.0);
        assert_eq!(even_series(-2.0f64, &[1.0, 1.0]), 5.0);
    }
}
