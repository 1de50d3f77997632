//! Range reduction for the series kernels
//!
//! Each reducer maps an arbitrary finite input into the canonical interval
//! its series is evaluated on, and returns the bookkeeping needed to map the
//! series result back. Periods are subtracted in two parts (see
//! [`ApproxFloat::PI_HI`]) so `f32` keeps its precision past the first few
//! periods. Non-finite inputs propagate as NaN through `%`.

use crate::dtype::ApproxFloat;

/// Sine argument folded into [0, π/2]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SinReduction<T> {
    /// Reduced argument in [0, π/2]
    pub r: T,
    /// Result must be negated
    pub negate: bool,
}

/// Tangent argument folded into [0, π/4]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TanReduction<T> {
    /// Reduced argument in [0, π/4]
    pub r: T,
    /// Result must be negated (`tan(π − x) = −tan(x)`)
    pub negate: bool,
    /// Result must be inverted (`tan(π/2 − x) = 1/tan(x)`)
    pub reciprocal: bool,
}

/// Exponential argument split as `x = k·ln2 + r`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpReduction<T> {
    /// Power of two to scale by
    pub k: i32,
    /// Remainder in roughly [-ln2/2, ln2/2]
    pub r: T,
}

/// `x − k·(hi + lo)` with `k = round(x / (hi + lo))`, in about [−p/2, p/2]
///
/// Two-step Cody-Waite subtraction: `k·hi` is exact for `|x| ≤
/// REDUCTION_LIMIT`, so only `k·lo` rounds. Past the limit the remainder of
/// the rounded period is used instead. `k = 0` returns `x` untouched, which
/// keeps the sign of zero.
#[inline]
fn reduce_period<T: ApproxFloat>(x: T, hi: T, lo: T) -> T {
    let period = hi + lo;
    if x.abs() <= T::REDUCTION_LIMIT {
        let k = (x / period).round();
        if k == T::zero() {
            return x;
        }
        return (x - k * hi) - k * lo;
    }

    let half = period * T::from_f64(0.5);
    let r = x % period;
    if r > half {
        r - period
    } else if r < -half {
        r + period
    } else {
        r
    }
}

/// `c/2 − r` for the period split as `c = hi + lo`
#[inline(always)]
fn half_period_minus<T: ApproxFloat>(r: T, hi: T, lo: T) -> T {
    let half = T::from_f64(0.5);
    (hi * half - r) + lo * half
}

/// Reduce modulo 2π into [−π, π], then fold into [0, π/2]
///
/// Uses `sin(π − x) = sin(x)` for the fold and records the sign of the
/// [−π, π] representative, so `sin(x) = ±sin(r)`.
#[inline]
pub fn reduce_sin<T: ApproxFloat>(x: T) -> SinReduction<T> {
    let two = T::from_f64(2.0);
    let mut r = reduce_period(x, two * T::PI_HI, two * T::PI_LO);

    let negate = r < T::zero();
    if negate {
        r = -r;
    }
    if r > T::FRAC_PI_2() {
        r = half_period_minus(r, two * T::PI_HI, two * T::PI_LO);
    }

    SinReduction { r, negate }
}

/// Reduce modulo 2π into [−π, π], then fold into [0, π]
///
/// Uses `cos(−x) = cos(x)`; no sign is tracked. The series is evaluated on
/// the whole of [0, π], so accuracy degrades toward π.
#[inline]
pub fn reduce_cos<T: ApproxFloat>(x: T) -> T {
    let two = T::from_f64(2.0);
    let r = reduce_period(x, two * T::PI_HI, two * T::PI_LO).abs();
    // Rounding of k can leave r an ulp past π; NaN must pass through
    if r > T::PI() { T::PI() } else { r }
}

/// Reduce modulo π into [−π/2, π/2], then fold into [0, π/4]
#[inline]
pub fn reduce_tan<T: ApproxFloat>(x: T) -> TanReduction<T> {
    let mut r = reduce_period(x, T::PI_HI, T::PI_LO);

    let negate = r < T::zero();
    if negate {
        r = -r;
    }

    let reciprocal = r > T::FRAC_PI_4();
    if reciprocal {
        r = half_period_minus(r, T::PI_HI, T::PI_LO);
    }

    TanReduction {
        r,
        negate,
        reciprocal,
    }
}

/// Split finite `x` as `k·ln2 + r` with `k = round(x/ln2)`
///
/// Callers clamp `x` to the width's overflow/underflow thresholds first, so
/// `k` always fits twice the normal exponent range and `k·LN2_HI` is exact.
#[inline]
pub fn reduce_exp<T: ApproxFloat>(x: T) -> ExpReduction<T> {
    let kf = (x * T::LOG2_E() + T::from_f64(0.5)).floor();
    let r = (x - kf * T::LN2_HI) - kf * T::LN2_LO;
    ExpReduction {
        k: kf.to_i32_saturating(),
        r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_reduce_sin_quadrants() {
        let red = reduce_sin(0.5f64);
        assert_eq!(red, SinReduction { r: 0.5, negate: false });

        let red = reduce_sin(PI - 0.25);
        assert!((red.r - 0.25).abs() < 1e-15 && !red.negate);

        let red = reduce_sin(-0.5f64);
        assert!((red.r - 0.5).abs() < 1e-15 && red.negate);

        let red = reduce_sin(2.0 * PI + 0.5);
        assert!((red.r - 0.5).abs() < 1e-14 && !red.negate);

        let red = reduce_sin(-PI + 0.25);
        assert!((red.r - 0.25).abs() < 1e-15 && red.negate);
    }

    #[test]
    fn test_reduce_cos_range() {
        for x in [-10.0, -PI, -1.0, 0.0, 1.0, PI, 4.0, 10.0, 100.0] {
            let r = reduce_cos(x);
            assert!((0.0..=PI).contains(&r), "cos reduction of {x} gave {r}");
            assert!((r.cos() - x.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reduce_tan_flags() {
        let red = reduce_tan(0.5f64);
        assert!(!red.negate && !red.reciprocal && red.r == 0.5);

        let red = reduce_tan(1.2f64);
        assert!(!red.negate && red.reciprocal);
        assert!((red.r - (FRAC_PI_2 - 1.2)).abs() < 1e-15);

        let red = reduce_tan(PI - 0.3);
        assert!(red.negate && !red.reciprocal);
        assert!((red.r - 0.3).abs() < 1e-15);

        for x in [-7.0, -1.0, 0.1, 2.0, 5.0, 123.0] {
            let red = reduce_tan(x);
            assert!((0.0..=FRAC_PI_4).contains(&red.r));
            let mut t = red.r.tan();
            if red.reciprocal {
                t = 1.0 / t;
            }
            if red.negate {
                t = -t;
            }
            assert!((t - x.tan()).abs() < 1e-10 * x.tan().abs().max(1.0));
        }
    }

    #[test]
    fn test_reduce_exp_split() {
        for x in [-700.0f64, -3.3, -0.2, 0.0, 0.2, 1.0, 50.0, 709.0] {
            let ExpReduction { k, r } = reduce_exp(x);
            assert!(r.abs() <= 0.5 * std::f64::consts::LN_2 + 1e-12, "r = {r} for {x}");
            assert!((k as f64 * std::f64::consts::LN_2 + r - x).abs() < 1e-12 * x.abs().max(1.0));
        }
        assert_eq!(reduce_exp(88.0f32).k, 127);
    }

    #[test]
    fn test_f32_reduction_uses_split_period() {
        // 31 periods of 2π: the rounded f32 TAU alone is off by ~5e-6 here
        let x = 198.0f32;
        let exact = (198.0f64).sin();
        let red = reduce_sin(x);
        let got = if red.negate { -(red.r as f64).sin() } else { (red.r as f64).sin() };
        assert!((got - exact).abs() < 5e-7, "{got} vs {exact}");

        let ExpReduction { k, r } = reduce_exp(85.0f32);
        let back = k as f64 * std::f64::consts::LN_2 + r as f64;
        assert!((back - 85.0).abs() < 1e-6, "{back}");
    }

    #[test]
    fn test_zero_sign_survives_reduction() {
        assert!(reduce_sin(-0.0f64).r.is_sign_negative());
        assert!(reduce_tan(-0.0f32).r.is_sign_negative());
    }

    #[test]
    fn test_past_limit_falls_back_to_remainder() {
        for x in [1.0e7f64, -3.5e9, 1.0e15] {
            let r = reduce_cos(x);
            assert!((0.0..=PI).contains(&r));
        }
        let red = reduce_sin(2.0e6f32);
        assert!((0.0..=FRAC_PI_2 as f32).contains(&red.r));
    }

    #[test]
    fn test_non_finite_reduces_to_nan() {
        assert!(reduce_cos(f64::INFINITY).is_nan());
        assert!(reduce_sin(f32::NEG_INFINITY).r.is_nan());
        assert!(reduce_tan(f64::INFINITY).r.is_nan());
    }
}
