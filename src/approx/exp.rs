//! Exponential
//!
//! `x = k·ln2 + r` with `k = round(x/ln2)`, `e^r` from a truncated Maclaurin
//! polynomial, then `e^x = e^r·2^k` with `2^k` built from bits.

use super::bits::scale_pow2;
use super::common::exp_coefficients::{BALANCED_TERMS, FAST_TERMS, HIGH_TERMS, TAYLOR};
use super::dispatch::KernelTable;
use super::poly::horner;
use super::reduce::{ExpReduction, reduce_exp};
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

/// Approximate `eˣ`
///
/// NaN → NaN, `+∞` → `+∞`, `−∞` → `0`. Inputs past the width's overflow
/// threshold give `+∞`; inputs below the underflow threshold give `0`.
/// Results in the subnormal range are produced, not flushed.
#[inline]
pub fn exp<T: ApproxFloat>(x: T, precision: Precision) -> T {
    exp_table().select(precision.tier())(x)
}

/// Tier table for `exp`: polynomial through r³, r⁵ and r⁷
pub const fn exp_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        exp_terms::<T, FAST_TERMS>,
        exp_terms::<T, BALANCED_TERMS>,
        exp_terms::<T, HIGH_TERMS>,
    )
}

/// `eˣ` with an `N`-coefficient polynomial (degree `N − 1`)
pub fn exp_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= TAYLOR.len()) };

    if x.is_nan() {
        return x;
    }
    if x > T::EXP_OVERFLOW {
        return T::infinity();
    }
    if x < T::EXP_UNDERFLOW {
        return T::zero();
    }

    let ExpReduction { k, r } = reduce_exp(x);
    scale_pow2(horner(r, &TAYLOR[..N]), k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::Tier;

    #[test]
    fn test_edge_cases() {
        for p in Precision::ALL {
            assert!(exp(f64::NAN, p).is_nan());
            assert_eq!(exp(f64::INFINITY, p), f64::INFINITY);
            assert_eq!(exp(f64::NEG_INFINITY, p), 0.0);
            assert_eq!(exp(800.0f64, p), f64::INFINITY);
            assert_eq!(exp(-800.0f64, p), 0.0);
            assert_eq!(exp(0.0f64, p), 1.0);

            assert!(exp(f32::NAN, p).is_nan());
            assert_eq!(exp(100.0f32, p), f32::INFINITY);
            assert_eq!(exp(-110.0f32, p), 0.0);
            assert_eq!(exp(0.0f32, p), 1.0);
        }
    }

    #[test]
    fn test_relative_error_per_tier() {
        let bounds = [(Tier::Fast, 1e-3), (Tier::Balanced, 5e-6), (Tier::High, 1e-8)];
        for (tier, bound) in bounds {
            let kernel = exp_table::<f64>().select(tier);
            for x in [-20.0, -3.0, -0.3, 0.1, 1.0, 2.5, 10.0, 300.0] {
                let rel = (kernel(x) / x.exp() - 1.0).abs();
                assert!(rel < bound, "{tier} exp({x}) rel error {rel}");
            }
        }
    }

    #[test]
    fn test_extreme_exponents_stay_finite() {
        // k just past the normal exponent range on both sides
        let near_max = exp(709.0f64, Precision::High);
        assert!(near_max.is_finite());
        assert!((near_max / 709.0f64.exp() - 1.0).abs() < 1e-8);

        let sub = exp(-740.0f64, Precision::High);
        assert!(sub > 0.0 && sub < f64::MIN_POSITIVE);

        let near_max = exp(88.7f32, Precision::High);
        assert!(near_max.is_finite());
        assert!((near_max / 88.7f32.exp() - 1.0).abs() < 1e-5);

        let sub = exp(-100.0f32, Precision::High);
        assert!(sub > 0.0 && sub < f32::MIN_POSITIVE);
    }
}
