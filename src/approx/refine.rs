//! Fixed-step refiners for the square-root family
//!
//! The step count is a const generic: refinement never checks for
//! convergence, so latency is independent of the input.

use crate::dtype::ApproxFloat;

/// Babylonian refinement of `y ≈ sqrt(x)`: `y ← ½·(y + x/y)`
///
/// Each step roughly doubles the number of correct digits from a seed within
/// a few percent.
#[inline(always)]
pub fn babylonian<T: ApproxFloat, const STEPS: usize>(x: T, seed: T) -> T {
    let half = T::from_f64(0.5);
    let mut y = seed;
    for _ in 0..STEPS {
        y = half * (y + x / y);
    }
    y
}

/// Newton-Raphson refinement of `y ≈ 1/sqrt(x)`: `y ← y·(1.5 − ½·x·y²)`
///
/// Division free. Converges quadratically from below.
#[inline(always)]
pub fn newton_inv_sqrt<T: ApproxFloat, const STEPS: usize>(x: T, seed: T) -> T {
    let half = T::from_f64(0.5);
    let three_halves = T::from_f64(1.5);
    let half_x = half * x;
    let mut y = seed;
    for _ in 0..STEPS {
        y = y * (three_halves - half_x * y * y);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_babylonian_converges_from_poor_seed() {
        let x = 2.0f64;
        let e1 = (babylonian::<f64, 1>(x, 1.5) - x.sqrt()).abs();
        let e2 = (babylonian::<f64, 2>(x, 1.5) - x.sqrt()).abs();
        let e3 = (babylonian::<f64, 3>(x, 1.5) - x.sqrt()).abs();
        assert!(e1 < 3e-3);
        assert!(e2 < 3e-6);
        assert!(e3 < 1e-11);
        assert_eq!(babylonian::<f64, 0>(x, 1.5), 1.5);
    }

    #[test]
    fn test_newton_inv_sqrt_converges() {
        let x = 4.0f32;
        let y1 = newton_inv_sqrt::<f32, 1>(x, 0.48);
        let y2 = newton_inv_sqrt::<f32, 2>(x, 0.48);
        assert!((y1 - 0.5).abs() < 2e-3);
        assert!((y2 - 0.5).abs() < 1e-5);
        assert!(y1 <= 0.5);
    }
}
