//! Scalar widths supported by the approximation kernels
//!
//! This module provides the `DType` enum naming the two IEEE-754 widths the
//! kernels are instantiated for, and the [`ApproxFloat`] trait that carries
//! each width's bit-layout and magic constants.

mod element;

pub use element::ApproxFloat;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Floating point widths supported by the kernels
///
/// Kernels are generic over [`ApproxFloat`]; `DType` is the runtime tag used
/// in error messages and accuracy reports.
///
/// # Discriminant Values
///
/// F64=0, F32=1. Existing values are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point (52-bit mantissa, bias 1023)
    F64 = 0,
    /// 32-bit floating point (23-bit mantissa, bias 127)
    F32 = 1,
}

impl DType {
    /// Both supported widths
    pub const ALL: [DType; 2] = [DType::F32, DType::F64];

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Number of explicitly stored mantissa bits
    #[inline]
    pub const fn mantissa_bits(self) -> u32 {
        match self {
            Self::F64 => 52,
            Self::F32 => 23,
        }
    }

    /// Exponent bias of the IEEE-754 encoding
    #[inline]
    pub const fn exponent_bias(self) -> i32 {
        match self {
            Self::F64 => 1023,
            Self::F32 => 127,
        }
    }

    /// Machine epsilon (as f64)
    pub fn epsilon(self) -> f64 {
        match self {
            Self::F64 => f64::EPSILON,
            Self::F32 => f32::EPSILON as f64,
        }
    }

    /// Decimal digits the width can hold, `-log10(epsilon)`
    ///
    /// Caps what any precision tier can deliver for this width.
    pub fn max_decimal_digits(self) -> f64 {
        -self.epsilon().log10()
    }

    /// Short name for display (e.g., "f32")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
