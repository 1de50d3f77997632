//! Tangent and cotangent
//!
//! Reduced modulo π, folded into [0, π/2] with `tan(π − x) = −tan(x)` and
//! into [0, π/4] with `tan(π/2 − x) = 1/tan(x)`. The series is only ever
//! evaluated on [0, π/4], so the worst error sits at π/4 itself.
//!
//! | Tier     | Terms | error at π/4 |
//! |----------|-------|--------------|
//! | Fast     | 2     | ~5e-2        |
//! | Balanced | 3     | ~1.3e-2      |
//! | High     | 6     | ~2e-4        |
//!
//! The 4-term series has no tier but is available as `tan_terms::<_, 4>`.

use super::common::tan_coefficients::{BALANCED_TERMS, FAST_TERMS, HIGH_TERMS, TAN};
use super::dispatch::KernelTable;
use super::poly::odd_series;
use super::reduce::{TanReduction, reduce_tan};
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

/// Approximate `tan(x)`
///
/// NaN and `±∞` give NaN. At an odd multiple of π/2 the reduced argument is
/// zero and the result is `+∞`.
///
/// # Example
///
/// ```
/// use fastapprox::{approx::tan, Precision};
///
/// let t = tan(std::f64::consts::FRAC_PI_4, Precision::High);
/// assert!((t - 1.0).abs() < 1e-3);
/// ```
#[inline]
pub fn tan<T: ApproxFloat>(x: T, precision: Precision) -> T {
    tan_table().select(precision.tier())(x)
}

/// Approximate `cot(x) = 1/tan(x)`; `±0` gives `±∞`
#[inline]
pub fn cotan<T: ApproxFloat>(x: T, precision: Precision) -> T {
    cotan_table().select(precision.tier())(x)
}

/// Tier table for `tan`: 2/3/6 terms
pub const fn tan_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        tan_terms::<T, FAST_TERMS>,
        tan_terms::<T, BALANCED_TERMS>,
        tan_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `cotan`: reciprocals of the same-tier tangent
pub const fn cotan_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        cotan_terms::<T, FAST_TERMS>,
        cotan_terms::<T, BALANCED_TERMS>,
        cotan_terms::<T, HIGH_TERMS>,
    )
}

/// `tan(x)` with `N` series terms
pub fn tan_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= TAN.len()) };

    if x.is_nan() {
        return x;
    }

    let TanReduction {
        r,
        negate,
        reciprocal,
    } = reduce_tan(x);

    let mut t = odd_series(r, &TAN[..N]);
    if reciprocal {
        t = t.recip();
    }
    if negate { -t } else { t }
}

/// `1/tan(x)` with `N` tangent terms
#[inline]
pub fn cotan_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    tan_terms::<T, N>(x).recip()
}
