//! Shared series coefficients for the approximation kernels
//!
//! All coefficient tables are centralized here so every kernel, at every
//! term count and for both widths, evaluates the same truncated series. Tables
//! are stored as f64 and narrowed per width at evaluation time; truncating a
//! table to its first `N` entries is what a term count means.

// ============================================================================
// exp(r)
// ============================================================================

/// Maclaurin coefficients for exp(r), r in [-ln(2)/2, ln(2)/2]
/// exp(r) ≈ 1 + r + r²/2! + r³/3! + ... + r⁷/7!
pub mod exp_coefficients {
    pub const TAYLOR: [f64; 8] = [
        1.0,
        1.0,
        1.0 / 2.0,
        1.0 / 6.0,
        1.0 / 24.0,
        1.0 / 120.0,
        1.0 / 720.0,
        1.0 / 5040.0,
    ];

    /// Coefficients per tier: through r³, r⁵ and r⁷
    pub const FAST_TERMS: usize = 4;
    pub const BALANCED_TERMS: usize = 6;
    pub const HIGH_TERMS: usize = 8;
}

// ============================================================================
// log(m), m in [0.5, 1)
// ============================================================================

/// Odd series for ln(m) = 2·atanh(y) with y = (m-1)/(m+1)
/// ln(m) = 2·(y + y³/3 + y⁵/5 + ... + y¹¹/11)
///
/// With m in [0.5, 1), y lies in [-1/3, 0).
pub mod log_coefficients {
    pub const ATANH: [f64; 6] = [
        1.0,
        1.0 / 3.0,
        1.0 / 5.0,
        1.0 / 7.0,
        1.0 / 9.0,
        1.0 / 11.0,
    ];

    /// Odd terms per tier: through y³, y⁷ and y¹¹
    pub const FAST_TERMS: usize = 2;
    pub const BALANCED_TERMS: usize = 4;
    pub const HIGH_TERMS: usize = 6;
}

// ============================================================================
// sin/cos
// ============================================================================

/// Taylor series coefficients for sin(x) and cos(x)
/// sin(x) ≈ x - x³/3! + x⁵/5! - ... + x¹³/13!
/// cos(x) ≈ 1 - x²/2! + x⁴/4! - ... + x¹²/12!
pub mod trig_coefficients {
    /// sin(x) = x · P(x²)
    pub const SIN: [f64; 7] = [
        1.0,
        -1.0 / 6.0,
        1.0 / 120.0,
        -1.0 / 5040.0,
        1.0 / 362_880.0,
        -1.0 / 39_916_800.0,
        1.0 / 6_227_020_800.0,
    ];

    /// cos(x) = P(x²)
    pub const COS: [f64; 7] = [
        1.0,
        -1.0 / 2.0,
        1.0 / 24.0,
        -1.0 / 720.0,
        1.0 / 40_320.0,
        -1.0 / 3_628_800.0,
        1.0 / 479_001_600.0,
    ];

    pub const FAST_TERMS: usize = 3;
    pub const BALANCED_TERMS: usize = 5;
    pub const HIGH_TERMS: usize = 7;
}

// ============================================================================
// tan
// ============================================================================

/// Taylor series coefficients for tan(x) on [0, π/4]
/// tan(x) ≈ x + x³/3 + 2x⁵/15 + 17x⁷/315 + 62x⁹/2835 + 1382x¹¹/155925
pub mod tan_coefficients {
    pub const TAN: [f64; 6] = [
        1.0,
        1.0 / 3.0,
        2.0 / 15.0,
        17.0 / 315.0,
        62.0 / 2835.0,
        1382.0 / 155_925.0,
    ];

    pub const FAST_TERMS: usize = 2;
    pub const BALANCED_TERMS: usize = 3;
    pub const HIGH_TERMS: usize = 6;
}

// ============================================================================
// arctan / arcsin
// ============================================================================

/// Maclaurin coefficients for the inverse trigonometric family
/// atan(x) ≈ x - x³/3 + x⁵/5 - x⁷/7 + x⁹/9 - x¹¹/11
/// asin(x) ≈ x + x³/6 + 3x⁵/40 + 15x⁷/336 + 105x⁹/3456 + 945x¹¹/42240
pub mod arc_coefficients {
    pub const ATAN: [f64; 6] = [
        1.0,
        -1.0 / 3.0,
        1.0 / 5.0,
        -1.0 / 7.0,
        1.0 / 9.0,
        -1.0 / 11.0,
    ];

    pub const ASIN: [f64; 6] = [
        1.0,
        1.0 / 6.0,
        3.0 / 40.0,
        15.0 / 336.0,
        105.0 / 3456.0,
        945.0 / 42_240.0,
    ];

    /// Fast and Balanced share the short series
    pub const FAST_TERMS: usize = 3;
    pub const BALANCED_TERMS: usize = 3;
    pub const HIGH_TERMS: usize = 6;

    /// Below this magnitude arccos/arcsin evaluate the series in x directly;
    /// at or above it they switch to the half-angle form
    pub const HALF_ANGLE_THRESHOLD: f64 = 0.5;
}
