//! Inverse trigonometric functions
//!
//! Arctangent is a bare Maclaurin series with no argument reduction: it is
//! accurate for |x| up to about π/12 and diverges quickly past 1. Callers are
//! expected to pre-reduce. Arccotangent is `π/2 − arctan(x)` with the same
//! restriction.
//!
//! Arccosine and arcsine share the arcsine series. Below |x| = 0.5 it is
//! evaluated in `x` directly; from there on the half-angle form
//! `acos(x) = 2·asin(√((1−x)/2))` is used. For negative `x` the half-angle
//! argument approaches 1 and accuracy degrades toward `x = −1`.
//!
//! Fast and Balanced use 3 terms, High uses 6.

use super::common::arc_coefficients::{
    ASIN, ATAN, BALANCED_TERMS, FAST_TERMS, HALF_ANGLE_THRESHOLD, HIGH_TERMS,
};
use super::dispatch::KernelTable;
use super::poly::odd_series;
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

// ============================================================================
// Public entry points
// ============================================================================

/// Approximate `atan(x)` for small `|x|`; NaN and `±∞` give NaN
#[inline]
pub fn arctan<T: ApproxFloat>(x: T, precision: Precision) -> T {
    arctan_table().select(precision.tier())(x)
}

/// Approximate `acot(x) = π/2 − atan(x)` for small `|x|`
#[inline]
pub fn arccotan<T: ApproxFloat>(x: T, precision: Precision) -> T {
    arccotan_table().select(precision.tier())(x)
}

/// Approximate `acos(x)`; NaN and `|x| > 1` give NaN
///
/// # Example
///
/// ```
/// use fastapprox::{approx::arccos, Precision};
///
/// assert_eq!(arccos(1.0f64, Precision::Fast), 0.0);
/// assert!(arccos(1.5f64, Precision::Fast).is_nan());
/// ```
#[inline]
pub fn arccos<T: ApproxFloat>(x: T, precision: Precision) -> T {
    arccos_table().select(precision.tier())(x)
}

/// Approximate `asin(x)`; NaN and `|x| > 1` give NaN
#[inline]
pub fn arcsin<T: ApproxFloat>(x: T, precision: Precision) -> T {
    arcsin_table().select(precision.tier())(x)
}

// ============================================================================
// Tier tables
// ============================================================================

/// Tier table for `arctan`: 3/3/6 terms
pub const fn arctan_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        arctan_terms::<T, FAST_TERMS>,
        arctan_terms::<T, BALANCED_TERMS>,
        arctan_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `arccotan`: 3/3/6 terms
pub const fn arccotan_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        arccotan_terms::<T, FAST_TERMS>,
        arccotan_terms::<T, BALANCED_TERMS>,
        arccotan_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `arccos`: 3/3/6 terms
pub const fn arccos_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        arccos_terms::<T, FAST_TERMS>,
        arccos_terms::<T, BALANCED_TERMS>,
        arccos_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `arcsin`: 3/3/6 terms
pub const fn arcsin_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        arcsin_terms::<T, FAST_TERMS>,
        arcsin_terms::<T, BALANCED_TERMS>,
        arcsin_terms::<T, HIGH_TERMS>,
    )
}

// ============================================================================
// Kernels
// ============================================================================

/// `atan(x)` with `N` series terms, no reduction
pub fn arctan_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= ATAN.len()) };

    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return T::nan();
    }

    odd_series(x, &ATAN[..N])
}

/// `π/2 − atan(x)` with `N` series terms
#[inline]
pub fn arccotan_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    T::FRAC_PI_2() - arctan_terms::<T, N>(x)
}

/// `acos(x)` with `N` arcsine terms
pub fn arccos_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= ASIN.len()) };

    if x.is_nan() {
        return x;
    }
    if x.abs() > T::one() {
        return T::nan();
    }

    if x.abs() < T::from_f64(HALF_ANGLE_THRESHOLD) {
        return T::FRAC_PI_2() - odd_series(x, &ASIN[..N]);
    }

    T::from_f64(2.0) * odd_series(half_angle(x), &ASIN[..N])
}

/// `asin(x)` with `N` arcsine terms
///
/// The half-angle branch runs on `|x|`, so the result is exactly odd.
pub fn arcsin_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= ASIN.len()) };

    if x.is_nan() {
        return x;
    }
    let a = x.abs();
    if a > T::one() {
        return T::nan();
    }

    if a < T::from_f64(HALF_ANGLE_THRESHOLD) {
        return odd_series(x, &ASIN[..N]);
    }

    let s = T::FRAC_PI_2() - T::from_f64(2.0) * odd_series(half_angle(a), &ASIN[..N]);
    if x < T::zero() { -s } else { s }
}

/// `√((1 − x)/2)`, the half-angle argument
#[inline(always)]
fn half_angle<T: ApproxFloat>(x: T) -> T {
    ((T::one() - x) * T::from_f64(0.5)).sqrt()
}
