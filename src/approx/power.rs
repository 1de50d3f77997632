//! Power, root and integer power
//!
//! `power` and `root` compose the Balanced `exp`/`log`/`sqrt` kernels, so
//! their error is roughly `|exponent·ln(base)|` times the log error plus the
//! exp error. `int_power` is binary exponentiation and exact up to ordinary
//! rounding.

use super::exp::exp_table;
use super::log::log_table;
use super::sqrt::sqrt_table;
use crate::dtype::ApproxFloat;
use crate::precision::Tier;

/// Tier the composed operations run their sub-kernels at
const COMPOSITION_TIER: Tier = Tier::Balanced;

/// Approximate `base^exponent` as `exp(exponent·ln(base))`
///
/// - NaN in either argument → NaN
/// - `base < 0` → NaN, integral exponent or not
/// - `base == 0` → `1`, `0` or `+∞` for a zero, positive or negative exponent
/// - `exponent == 0` → `1`; `exponent == 1` → `base`
///
/// # Accuracy
///
/// The error grows with `|exponent·ln(base)|`, and it does so at `base == 1`
/// too: `ln(1)` is reduced to `ln(0.5) + ln2`, the worst point of the log
/// series, so the Balanced log returns about `1e-5` instead of `0`. Large
/// exponents amplify that: `power(1.0, 1e6)` is nowhere near `1`.
///
/// # Example
///
/// ```
/// use fastapprox::approx::power;
///
/// let p = power(2.0f64, 0.5);
/// assert!((p - std::f64::consts::SQRT_2).abs() < 1e-4);
/// ```
pub fn power<T: ApproxFloat>(base: T, exponent: T) -> T {
    if base.is_nan() || exponent.is_nan() {
        return T::nan();
    }
    if base < T::zero() {
        return T::nan();
    }
    if base == T::zero() {
        return if exponent == T::zero() {
            T::one()
        } else if exponent > T::zero() {
            T::zero()
        } else {
            T::infinity()
        };
    }
    if exponent == T::zero() {
        return T::one();
    }
    if exponent == T::one() {
        return base;
    }

    let ln = log_table().select(COMPOSITION_TIER)(base);
    exp_table().select(COMPOSITION_TIER)(exponent * ln)
}

/// Approximate the `n`-th root of `value`
///
/// - NaN → NaN; `n == 0` → NaN; `n == 1` → `value`
/// - `value < 0` → NaN, for odd `n` as well
/// - `value == 0` → `0`
/// - `n == 2` uses the square-root kernel, other `n` go through [`power`]
pub fn root<T: ApproxFloat>(value: T, n: i32) -> T {
    if value.is_nan() || n == 0 {
        return T::nan();
    }
    if n == 1 {
        return value;
    }
    if value < T::zero() {
        return T::nan();
    }
    if value == T::zero() {
        return T::zero();
    }
    if n == 2 {
        return sqrt_table().select(COMPOSITION_TIER)(value);
    }

    power(value, T::from_i32(n).recip())
}

/// `base^exponent` for an integer exponent by repeated squaring
///
/// Negative exponents give the reciprocal of the positive power.
/// `int_power(0, n)` is `0` for `n > 0` and `+∞` for `n < 0`; anything to the
/// zeroth power, except NaN, is `1`.
///
/// # Example
///
/// ```
/// use fastapprox::approx::int_power;
///
/// assert_eq!(int_power(2.0f64, 10), 1024.0);
/// assert_eq!(int_power(2.0f32, -2), 0.25);
/// ```
pub fn int_power<T: ApproxFloat>(base: T, exponent: i32) -> T {
    if base.is_nan() {
        return base;
    }
    match exponent {
        0 => return T::one(),
        1 => return base,
        _ => {}
    }
    if base == T::zero() {
        return if exponent > 0 {
            T::zero()
        } else {
            T::infinity()
        };
    }

    let magnitude = pow_unsigned(base, exponent.unsigned_abs());
    if exponent < 0 {
        magnitude.recip()
    } else {
        magnitude
    }
}

fn pow_unsigned<T: ApproxFloat>(base: T, mut n: u32) -> T {
    let mut result = T::one();
    let mut square = base;
    while n > 0 {
        if n & 1 == 1 {
            result = result * square;
        }
        n >>= 1;
        if n > 0 {
            square = square * square;
        }
    }
    result
}
