//! Method-call syntax for the kernels
//!
//! ```
//! use fastapprox::{FastMath, Precision};
//!
//! let r = 16.0f64.fast_sqrt();
//! assert!((r - 4.0).abs() < 1e-2);
//!
//! let s = 0.5f32.fast_sin_with(Precision::High);
//! assert!((s - 0.5f32.sin()).abs() < 1e-6);
//! ```

use crate::approx;
use crate::dtype::ApproxFloat;
use crate::precision::Precision;

/// Generates a default-precision method and a `_with` variant for each
/// unary kernel
macro_rules! unary_methods {
    ($($name:ident, $with:ident => $kernel:path;)*) => {
        $(
            #[doc = concat!("`", stringify!($kernel), "` at the default precision")]
            #[inline]
            fn $name(self) -> Self {
                $kernel(self, Precision::Auto)
            }

            #[doc = concat!("`", stringify!($kernel), "` at an explicit precision")]
            #[inline]
            fn $with(self, precision: Precision) -> Self {
                $kernel(self, precision)
            }
        )*
    };
}

/// Approximate math as methods on `f32` and `f64`
pub trait FastMath: ApproxFloat {
    unary_methods! {
        fast_sqrt, fast_sqrt_with => approx::sqrt;
        fast_inv_sqrt, fast_inv_sqrt_with => approx::inv_sqrt;
        fast_ln, fast_ln_with => approx::log;
        fast_exp, fast_exp_with => approx::exp;
        fast_sin, fast_sin_with => approx::sin;
        fast_cos, fast_cos_with => approx::cos;
        fast_sec, fast_sec_with => approx::sec;
        fast_csc, fast_csc_with => approx::csc;
        fast_tan, fast_tan_with => approx::tan;
        fast_cotan, fast_cotan_with => approx::cotan;
        fast_atan, fast_atan_with => approx::arctan;
        fast_acot, fast_acot_with => approx::arccotan;
        fast_acos, fast_acos_with => approx::arccos;
        fast_asin, fast_asin_with => approx::arcsin;
    }

    /// `self^exponent` via [`approx::power`]
    #[inline]
    fn fast_powf(self, exponent: Self) -> Self {
        approx::power(self, exponent)
    }

    /// `n`-th root via [`approx::root`]
    #[inline]
    fn fast_root(self, n: i32) -> Self {
        approx::root(self, n)
    }

    /// Integer power via [`approx::int_power`]
    #[inline]
    fn fast_powi(self, n: i32) -> Self {
        approx::int_power(self, n)
    }
}

impl FastMath for f32 {}
impl FastMath for f64 {}
