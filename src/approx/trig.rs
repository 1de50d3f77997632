//! Sine, cosine, secant and cosecant
//!
//! Sine folds into [0, π/2] with a tracked sign; cosine folds into [0, π]
//! and evaluates its even series over that whole interval, so cosine (and
//! secant) lose accuracy toward π, markedly at Fast. Secant and cosecant are
//! reciprocals of the same-tier cosine/sine and inherit their singularities:
//! `csc(±0) = ±∞`.
//!
//! | Tier     | Terms | sin error on [0, π/2] |
//! |----------|-------|-----------------------|
//! | Fast     | 3     | < 5e-3                |
//! | Balanced | 5     | < 4e-6                |
//! | High     | 7     | < 1e-9                |

use super::common::trig_coefficients::{BALANCED_TERMS, COS, FAST_TERMS, HIGH_TERMS, SIN};
use super::dispatch::KernelTable;
use super::poly::{even_series, odd_series};
use super::reduce::{SinReduction, reduce_cos, reduce_sin};
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

// ============================================================================
// Public entry points
// ============================================================================

/// Approximate `sin(x)`; NaN and `±∞` give NaN
#[inline]
pub fn sin<T: ApproxFloat>(x: T, precision: Precision) -> T {
    sin_table().select(precision.tier())(x)
}

/// Approximate `cos(x)`; NaN and `±∞` give NaN
#[inline]
pub fn cos<T: ApproxFloat>(x: T, precision: Precision) -> T {
    cos_table().select(precision.tier())(x)
}

/// Approximate `sec(x) = 1/cos(x)`
#[inline]
pub fn sec<T: ApproxFloat>(x: T, precision: Precision) -> T {
    sec_table().select(precision.tier())(x)
}

/// Approximate `csc(x) = 1/sin(x)`; `±0` gives `±∞`
#[inline]
pub fn csc<T: ApproxFloat>(x: T, precision: Precision) -> T {
    csc_table().select(precision.tier())(x)
}

// ============================================================================
// Tier tables
// ============================================================================

/// Tier table for `sin`: 3/5/7 terms
pub const fn sin_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        sin_terms::<T, FAST_TERMS>,
        sin_terms::<T, BALANCED_TERMS>,
        sin_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `cos`: 3/5/7 terms
pub const fn cos_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        cos_terms::<T, FAST_TERMS>,
        cos_terms::<T, BALANCED_TERMS>,
        cos_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `sec`
pub const fn sec_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        sec_terms::<T, FAST_TERMS>,
        sec_terms::<T, BALANCED_TERMS>,
        sec_terms::<T, HIGH_TERMS>,
    )
}

/// Tier table for `csc`
pub const fn csc_table<T: ApproxFloat>() -> KernelTable<T> {
    KernelTable::new(
        csc_terms::<T, FAST_TERMS>,
        csc_terms::<T, BALANCED_TERMS>,
        csc_terms::<T, HIGH_TERMS>,
    )
}

// ============================================================================
// Kernels
// ============================================================================

/// `sin(x)` with `N` series terms
pub fn sin_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= SIN.len()) };

    if x.is_nan() {
        return x;
    }

    let SinReduction { r, negate } = reduce_sin(x);
    let s = odd_series(r, &SIN[..N]);
    if negate { -s } else { s }
}

/// `cos(x)` with `N` series terms
pub fn cos_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    const { assert!(N >= 1 && N <= COS.len()) };

    if x.is_nan() {
        return x;
    }

    even_series(reduce_cos(x), &COS[..N])
}

/// `1/cos(x)` with `N` cosine terms
#[inline]
pub fn sec_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    cos_terms::<T, N>(x).recip()
}

/// `1/sin(x)` with `N` sine terms
#[inline]
pub fn csc_terms<T: ApproxFloat, const N: usize>(x: T) -> T {
    sin_terms::<T, N>(x).recip()
}
