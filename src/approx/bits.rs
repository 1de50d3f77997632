//! IEEE-754 bit manipulation: seed generation and exponent arithmetic
//!
//! Every helper here reinterprets a float's bits as an unsigned integer of
//! the same width (and back) with [`ApproxFloat::to_raw`] /
//! [`ApproxFloat::from_raw`]. None of them checks its domain; callers
//! pre-filter NaN, infinite and non-positive inputs.

use crate::dtype::ApproxFloat;
use num_traits::{PrimInt, WrappingAdd, WrappingSub};

// ============================================================================
// Square-root family seeds
// ============================================================================

/// Rough `sqrt(x)` for positive finite `x`
///
/// Halving the bit pattern halves the biased exponent (and, roughly, the
/// mantissa); the width-specific offset restores the bias. Exact for even
/// powers of two, within ~6% elsewhere.
#[inline(always)]
pub fn sqrt_seed<T: ApproxFloat>(x: T) -> T {
    let halved = x.to_raw().unsigned_shr(1);
    T::from_raw(halved.wrapping_add(&T::SQRT_SEED_OFFSET))
}

/// Rough `1/sqrt(x)` for positive finite `x` (magic-constant seed)
///
/// Subtracting the halved bit pattern from the magic constant negates and
/// halves the exponent in one integer operation. Within ~3.5% of the true
/// value for normal inputs.
#[inline(always)]
pub fn inv_sqrt_seed<T: ApproxFloat>(x: T) -> T {
    let halved = x.to_raw().unsigned_shr(1);
    T::from_raw(T::INV_SQRT_MAGIC.wrapping_sub(&halved))
}

// ============================================================================
// Exponent extraction / construction
// ============================================================================

/// Split positive finite `x` into `(m, e)` with `x = m·2^e`, `m` in [0.5, 1)
///
/// Reads the exponent field directly and rebuilds the mantissa with the
/// exponent field set to `bias - 1`. Subnormals are first scaled into the
/// normal range by 2^MANTISSA_BITS.
#[inline]
pub fn frexp<T: ApproxFloat>(x: T) -> (T, i32) {
    let mant_shift = T::MANTISSA_BITS as u32;
    let (x, adjust) = if exponent_field(x) == 0 {
        let shift = T::MANTISSA_BITS as i32;
        (x * pow2(shift), -shift)
    } else {
        (x, 0)
    };

    let bits = x.to_raw();
    let e = exponent_field(x) - T::EXPONENT_BIAS + 1;
    let half_exp = T::raw_from_i32(T::EXPONENT_BIAS - 1).unsigned_shl(mant_shift);
    let m = T::from_raw((bits & T::MANTISSA_MASK) | half_exp);

    (m, e + adjust)
}

/// Exactly 2^k for `k` in the normal exponent range
///
/// Builds the value from bits: biased exponent `k + bias`, zero mantissa.
#[inline(always)]
pub fn pow2<T: ApproxFloat>(k: i32) -> T {
    debug_assert!((T::MIN_EXPONENT..=T::MAX_EXPONENT).contains(&k));
    T::from_raw(T::raw_from_i32(k + T::EXPONENT_BIAS).unsigned_shl(T::MANTISSA_BITS as u32))
}

/// `v · 2^k` for `k` within twice the normal exponent range
///
/// Uses a single bit-built power of two when `k` is a normal exponent.
/// Otherwise splits `k` into two halves, each a normal exponent, so results
/// that land in the subnormal range are rounded once instead of flushing to
/// zero.
#[inline]
pub fn scale_pow2<T: ApproxFloat>(v: T, k: i32) -> T {
    if (T::MIN_EXPONENT..=T::MAX_EXPONENT).contains(&k) {
        return v * pow2(k);
    }
    debug_assert!(k >= 2 * T::MIN_EXPONENT && k <= 2 * T::MAX_EXPONENT);
    let half = k / 2;
    v * pow2(half) * pow2(k - half)
}

#[inline(always)]
fn exponent_field<T: ApproxFloat>(x: T) -> i32 {
    let shifted = x.to_raw().unsigned_shr(T::MANTISSA_BITS as u32);
    T::raw_to_i32(shifted & T::EXPONENT_MASK)
}
