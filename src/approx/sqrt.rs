//! Square root and inverse square root: bit-level seed + fixed refinement
//!
//! | Tier     | Steps | sqrt rel. error | inv_sqrt rel. error |
//! |----------|-------|-----------------|---------------------|
//! | Fast     | 1     | < 2e-3          | < 2e-3              |
//! | Balanced | 2     | < 2e-6          | < 1e-5              |
//! | High     | 3     | width-limited   | width-limited       |
//!
//! The bit seeds assume a normal encoding, so subnormal inputs are first
//! scaled by an even power of two into the normal range and the result is
//! scaled back by half that power. The bounds then hold for every positive
//! finite input.

use super::bits::{inv_sqrt_seed, pow2, sqrt_seed};
use super::dispatch::KernelTable;
use super::refine::{babylonian, newton_inv_sqrt};
use crate::dtype::ApproxFloat;
use crate::precision::{Precision, Tier};

/// Approximate `√x`
///
/// NaN → NaN, `x < 0` → NaN, `±0` → `±0`, `+∞` → `+∞`.
#[inline]
pub fn sqrt<T: ApproxFloat>(x: T, precision: Precision) -> T {
    sqrt_table().select(precision.tier())(x)
}

/// Approximate `1/√x`
///
/// NaN → NaN, `x < 0` → NaN, `±0` → `+∞`, `+∞` → `0`.
#[inline]
pub fn inv_sqrt<T: ApproxFloat>(x: T, precision: Precision) -> T {
    inv_sqrt_table().select(precision.tier())(x)
}

const FAST_STEPS: usize = Tier::Fast.refinement_steps();
const BALANCED_STEPS: usize = Tier::Balanced.refinement_steps();
const HIGH_STEPS: usize = Tier::High.refinement_steps();

/// Tier table for `sqrt`: 1/2/3 Babylonian steps
pub const fn sqrt_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        sqrt_steps::<T, FAST_STEPS>,
        sqrt_steps::<T, BALANCED_STEPS>,
        sqrt_steps::<T, HIGH_STEPS>,
    )
}

/// Tier table for `inv_sqrt`: 1/2/3 Newton-Raphson steps
pub const fn inv_sqrt_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        inv_sqrt_steps::<T, FAST_STEPS>,
        inv_sqrt_steps::<T, BALANCED_STEPS>,
        inv_sqrt_steps::<T, HIGH_STEPS>,
    )
}

/// `√x` with a fixed number of Babylonian steps
pub fn sqrt_steps<T: ApproxFloat, const STEPS: usize>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x < T::zero() {
        return T::nan();
    }
    if x == T::zero() || x.is_infinite() {
        return x;
    }

    if x < T::min_positive_value() {
        let j = subnormal_half_shift::<T>();
        let scaled = x * pow2(2 * j);
        return babylonian::<T, STEPS>(scaled, sqrt_seed(scaled)) * pow2(-j);
    }

    babylonian::<T, STEPS>(x, sqrt_seed(x))
}

/// `1/√x` with a fixed number of Newton-Raphson steps
pub fn inv_sqrt_steps<T: ApproxFloat, const STEPS: usize>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x < T::zero() {
        return T::nan();
    }
    if x == T::zero() {
        return T::infinity();
    }
    if x.is_infinite() {
        return T::zero();
    }

    if x < T::min_positive_value() {
        let j = subnormal_half_shift::<T>();
        let scaled = x * pow2(2 * j);
        return newton_inv_sqrt::<T, STEPS>(scaled, inv_sqrt_seed(scaled)) * pow2(j);
    }

    newton_inv_sqrt::<T, STEPS>(x, inv_sqrt_seed(x))
}

/// `j` such that `x·2^(2j)` is normal for every positive subnormal `x`
#[inline(always)]
fn subnormal_half_shift<T: ApproxFloat>() -> i32 {
    (T::MANTISSA_BITS as i32 + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_sqrt_for {
        ($mod_name:ident, $float:ty) => {
            mod $mod_name {
                use super::*;

                #[test]
                fn test_literal_values() {
                    let s: $float = sqrt(16.0, Precision::Auto);
                    assert!((s - 4.0).abs() < 1e-2);
                    let r: $float = inv_sqrt(4.0, Precision::Auto);
                    assert!((r - 0.5).abs() < 1e-2);
                }

                #[test]
                fn test_edge_cases() {
                    for p in Precision::ALL {
                        assert!(sqrt(<$float>::NAN, p).is_nan());
                        assert!(sqrt(-1.0 as $float, p).is_nan());
                        assert!(sqrt(<$float>::NEG_INFINITY, p).is_nan());
                        assert_eq!(sqrt(0.0 as $float, p), 0.0);
                        assert_eq!(sqrt(<$float>::INFINITY, p), <$float>::INFINITY);

                        assert!(inv_sqrt(<$float>::NAN, p).is_nan());
                        assert!(inv_sqrt(-4.0 as $float, p).is_nan());
                        assert_eq!(inv_sqrt(0.0 as $float, p), <$float>::INFINITY);
                        assert_eq!(inv_sqrt(<$float>::INFINITY, p), 0.0);
                    }
                }

                #[test]
                fn test_error_shrinks_with_tier() {
                    for x in [0.01, 0.5, 2.0, 3.0, 7.5, 1000.0, 1.0e7] {
                        let x: $float = x;
                        let exact = x.sqrt();
                        let err = |t: Tier| {
                            ((sqrt_table::<$float>().select(t)(x) - exact) / exact).abs()
                        };
                        assert!(err(Tier::Fast) < 2e-3, "fast sqrt({x})");
                        assert!(err(Tier::Balanced) <= err(Tier::Fast));
                        assert!(err(Tier::High) <= err(Tier::Balanced) + <$float>::EPSILON);

                        let inv_err = |t: Tier| {
                            (inv_sqrt_table::<$float>().select(t)(x) * exact - 1.0).abs()
                        };
                        assert!(inv_err(Tier::Fast) < 2e-3, "fast inv_sqrt({x})");
                        assert!(inv_err(Tier::Balanced) <= inv_err(Tier::Fast));
                    }
                }
                #[test]
                fn test_subnormal_inputs() {
                    let tiny = <$float>::from_bits(1);
                    let subnormals = [
                        tiny,
                        tiny * 3.0,
                        <$float>::MIN_POSITIVE * 0.7,
                        <$float>::MIN_POSITIVE * 1e-5,
                    ];
                    for x in subnormals {
                        assert!(x > 0.0 && !x.is_normal());
                        let exact = (x as f64).sqrt();
                        for p in [Precision::Balanced, Precision::High] {
                            let s = sqrt(x, p) as f64;
                            assert!((s / exact - 1.0).abs() < 2e-5, "sqrt({x:e}) = {s:e}");
                            let r = inv_sqrt(x, p) as f64;
                            assert!((r * exact - 1.0).abs() < 2e-5, "inv_sqrt({x:e}) = {r:e}");
                        }
                        let fast = sqrt(x, Precision::Fast) as f64;
                        assert!((fast / exact - 1.0).abs() < 3e-3, "fast sqrt({x:e})");
                    }
                }
            }
        };
    }

    test_sqrt_for!(f32_sqrt, f32);
    test_sqrt_for!(f64_sqrt, f64);

    #[test]
    fn test_balanced_sqrt_f64_accuracy() {
        for x in [1e-300f64, 1e-10, 0.3, 2.0, 5.0, 1e10, 1e300] {
            let got = sqrt(x, Precision::Balanced);
            assert!((got / x.sqrt() - 1.0).abs() < 2e-6, "sqrt({x}) = {got}");
            let got = sqrt(x, Precision::High);
            assert!((got / x.sqrt() - 1.0).abs() < 1e-11, "sqrt({x}) = {got}");
        }
    }

    #[test]
    fn test_subnormal_f64_high() {
        for x in [1e-320f64, 5e-324, 2.5e-310] {
            let got = sqrt(x, Precision::High);
            assert!((got / x.sqrt() - 1.0).abs() < 1e-11, "sqrt({x:e}) = {got:e}");
            let got = inv_sqrt(x, Precision::High) * x.sqrt();
            assert!((got - 1.0).abs() < 1e-10, "inv_sqrt({x:e})");
        }
    }

    #[test]
    fn test_inv_sqrt_f64_accuracy() {
        for x in [1e-200f64, 0.1, 2.0, 9.0, 1e200] {
            let balanced = inv_sqrt(x, Precision::Balanced) * x.sqrt();
            assert!((balanced - 1.0).abs() < 1e-5, "inv_sqrt({x})");
            let high = inv_sqrt(x, Precision::High) * x.sqrt();
            assert!((high - 1.0).abs() < 1e-10, "inv_sqrt({x})");
        }
    }
}
