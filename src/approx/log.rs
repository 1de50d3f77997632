//! Natural logarithm
//!
//! `x = m·2^e` with `m` in [0.5, 1) read straight from the bits, then
//! `ln(x) = 2·atanh((m−1)/(m+1)) + e·ln2`. The atanh argument stays within
//! [−1/3, 0), so a handful of odd terms is enough.

use super::bits::frexp;
use super::common::log_coefficients::{ATANH, BALANCED_TERMS, FAST_TERMS, HIGH_TERMS};
use super::dispatch::KernelTable;
use super::poly::odd_series;
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

/// Approximate `ln(x)`
///
/// NaN → NaN, `±0` → `−∞`, `x < 0` → NaN, `+∞` → `+∞`. Subnormal inputs are
/// handled.
///
/// # Example
///
/// ```
/// use fastapprox::{approx::log, Precision};
///
/// let l = log(std::f64::consts::E, Precision::Balanced);
/// assert!((l - 1.0).abs() < 1e-4);
/// ```
#[inline]
pub fn log<T: ApproxFloat>(x: T, precision: Precision) -> T {
    log_table().select(precision.tier())(x)
}

/// Tier table for `log`: series through y³, y⁷ and y¹¹
pub const fn log_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        log_terms::<T, FAST_TERMS>,
        log_terms::<T, BALANCED_TERMS>,
        log_terms::<T, HIGH_TERMS>,
    )
}

/// `ln(x)` with `N` odd atanh terms (`N` = 1 keeps only `y`)
pub fn log_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= ATANH.len()) };

    if x.is_nan() {
        return x;
    }
    if x == T::zero() {
        return T::neg_infinity();
    }
    if x < T::zero() {
        return T::nan();
    }
    if x.is_infinite() {
        return x;
    }

    let (m, e) = frexp(x);
    let one = T::one();
    let y = (m - one) / (m + one);
    let series = odd_series(y, &ATANH[..N]);

    T::from_f64(2.0) * series + T::from_i32(e) * T::LN_2()
}
