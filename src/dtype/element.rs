//! Width trait mapping `f32`/`f64` to their bit layouts

use super::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::{Float, FloatConst, PrimInt, WrappingAdd, WrappingSub};
use std::fmt;

/// Trait for scalar widths the approximation kernels are instantiated for
///
/// Every kernel is written once, generic over `ApproxFloat`, and behaves
/// identically in structure for both widths. The implementations differ only
/// in the associated constants below: exponent bias, mantissa width, the
/// seed constants of the square-root family and the exp clamp thresholds.
/// No constant of one width is derived from the other at runtime.
///
/// # Bounds
/// - `Float + FloatConst` - IEEE arithmetic, predicates and π/ln2 constants
/// - `Pod + Zeroable` - the value is plain bits, reinterpretable exactly
/// - `Send + Sync + 'static` - kernels are pure and callable from any thread
///
/// Implemented for `f32` and `f64` only.
pub trait ApproxFloat:
    Float + FloatConst + Pod + Zeroable + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// Unsigned integer of the same width as the float
    type Bits: PrimInt + WrappingAdd + WrappingSub + Pod + fmt::Debug;

    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Number of explicitly stored mantissa bits
    const MANTISSA_BITS: usize;

    /// Exponent bias of the encoding
    const EXPONENT_BIAS: i32;

    /// Smallest unbiased exponent of a normal number
    const MIN_EXPONENT: i32;

    /// Largest unbiased exponent of a normal number
    const MAX_EXPONENT: i32;

    /// Biased exponent field mask, applied after shifting out the mantissa
    const EXPONENT_MASK: Self::Bits;

    /// Mantissa field mask
    const MANTISSA_MASK: Self::Bits;

    /// Offset added to the halved bit pattern to seed `sqrt(x)`
    const SQRT_SEED_OFFSET: Self::Bits;

    /// Magic constant the halved bit pattern is subtracted from to seed `1/sqrt(x)`
    const INV_SQRT_MAGIC: Self::Bits;

    /// `ln(MAX)`: exp of anything larger overflows to +Infinity
    const EXP_OVERFLOW: Self;

    /// `ln` of the smallest subnormal: exp of anything smaller is 0
    const EXP_UNDERFLOW: Self;

    /// High part of ln2 with trailing zero bits, so `k·LN2_HI` is exact for
    /// every `k` the exp reduction produces
    const LN2_HI: Self;

    /// `ln2 − LN2_HI`
    const LN2_LO: Self;

    /// High part of π with trailing zero bits, so `k·PI_HI` (and `k·2·PI_HI`)
    /// is exact for `|x| ≤ REDUCTION_LIMIT`
    const PI_HI: Self;

    /// `π − PI_HI`
    const PI_LO: Self;

    /// Largest `|x|` the trigonometric reducers split exactly; larger inputs
    /// fall back to `%` with the rounded period
    const REDUCTION_LIMIT: Self;

    /// Reinterpret the value's bits as an unsigned integer (exact)
    fn to_raw(self) -> Self::Bits;

    /// Reinterpret an unsigned integer as a float (exact)
    fn from_raw(bits: Self::Bits) -> Self;

    /// Truncating conversion of a bit-width integer to `i32`
    fn raw_to_i32(bits: Self::Bits) -> i32;

    /// Conversion of a non-negative `i32` into the bit-width integer
    fn raw_from_i32(v: i32) -> Self::Bits;

    /// Convert from f64 (used for literals and coefficient tables)
    fn from_f64(v: f64) -> Self;

    /// Widen to f64
    fn as_f64(self) -> f64;

    /// Convert an integer to this type
    fn from_i32(v: i32) -> Self;

    /// Truncate toward zero into an `i32`, saturating at the `i32` bounds
    fn to_i32_saturating(self) -> i32;
}

/// Implements `ApproxFloat` for a primitive float type
///
/// This avoids code duplication between f32 and f64.
macro_rules! impl_approx_float {
    (
        $float:ty,
        $bits:ty,
        $dtype:expr,
        mantissa_bits: $mant:literal,
        bias: $bias:literal,
        sqrt_offset: $sqrt_offset:literal,
        inv_sqrt_magic: $magic:literal,
        exp_overflow: $overflow:literal,
        exp_underflow: $underflow:literal,
        ln2: ($ln2_hi:literal, $ln2_lo:literal),
        pi: ($pi_hi:literal, $pi_lo:literal),
        reduction_limit: $limit:literal
    ) => {
        impl ApproxFloat for $float {
            type Bits = $bits;

            const DTYPE: DType = $dtype;
            const MANTISSA_BITS: usize = $mant;
            const EXPONENT_BIAS: i32 = $bias;
            const MIN_EXPONENT: i32 = 1 - $bias;
            const MAX_EXPONENT: i32 = $bias;
            const EXPONENT_MASK: $bits = (1 << (<$bits>::BITS - 1 - $mant)) - 1;
            const MANTISSA_MASK: $bits = (1 << $mant) - 1;
            const SQRT_SEED_OFFSET: $bits = $sqrt_offset;
            const INV_SQRT_MAGIC: $bits = $magic;
            const EXP_OVERFLOW: $float = $overflow;
            const EXP_UNDERFLOW: $float = $underflow;
            const LN2_HI: $float = $ln2_hi;
            const LN2_LO: $float = $ln2_lo;
            const PI_HI: $float = $pi_hi;
            const PI_LO: $float = $pi_lo;
            const REDUCTION_LIMIT: $float = $limit;

            #[inline]
            fn to_raw(self) -> $bits {
                bytemuck::cast(self)
            }

            #[inline]
            fn from_raw(bits: $bits) -> Self {
                bytemuck::cast(bits)
            }

            #[inline]
            fn raw_to_i32(bits: $bits) -> i32 {
                bits as i32
            }

            #[inline]
            fn raw_from_i32(v: i32) -> $bits {
                v as $bits
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $float
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i32(v: i32) -> Self {
                v as $float
            }

            #[inline]
            fn to_i32_saturating(self) -> i32 {
                self as i32
            }
        }
    };
}

impl_approx_float!(
    f32,
    u32,
    DType::F32,
    mantissa_bits: 23,
    bias: 127,
    sqrt_offset: 0x1fc0_0000,
    inv_sqrt_magic: 0x5f37_59df,
    exp_overflow: 88.722_84,
    exp_underflow: -103.972_08,
    ln2: (0.693_145_751_953_125, 1.428_606_8e-6),
    pi: (3.140_625, 9.676_536e-4),
    reduction_limit: 1.0e5
);

impl_approx_float!(
    f64,
    u64,
    DType::F64,
    mantissa_bits: 52,
    bias: 1023,
    sqrt_offset: 0x1ff8_0000_0000_0000,
    inv_sqrt_magic: 0x5fe6_eb50_c7b5_37a9,
    exp_overflow: 709.782_712_893_384,
    exp_underflow: -745.133_219_101_941,
    ln2: (6.931_471_803_691_238_2e-1, 1.908_214_929_270_587_7e-10),
    pi: (3.141_592_653_468_251_2, 1.215_420_101_301_238_4e-10),
    reduction_limit: 1.0e6
);
