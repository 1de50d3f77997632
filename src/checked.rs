//! `Result`-returning wrappers around the kernels
//!
//! The kernels report domain violations through IEEE-754 sentinels. This
//! layer classifies a sentinel output against its input:
//!
//! - NaN output from a NaN input → [`Error::NotANumber`]
//! - NaN output from any other input → [`Error::Domain`]
//! - infinite output from a finite input → [`Error::Infinite`] (pole or overflow)
//!
//! Infinite outputs from infinite inputs (e.g. `sqrt(+∞)`) are passed through
//! as `Ok`.
//!
//! ```
//! use fastapprox::{checked, Error, Precision};
//!
//! assert!(checked::sqrt(4.0f64, Precision::Fast).is_ok());
//! assert!(matches!(
//!     checked::log(-1.0f64, Precision::Fast),
//!     Err(Error::Domain { op: "log", .. })
//! ));
//! ```

use crate::approx::{self, Op};
use crate::dtype::ApproxFloat;
use crate::error::{Error, Result};
use crate::precision::Precision;

/// Evaluate `op` and classify a sentinel result
pub fn eval<T: ApproxFloat>(op: Op, x: T, precision: Precision) -> Result<T> {
    classify(op.name(), x, op.eval(x, precision))
}

/// Classify the output `y` of `op` evaluated at `x`
pub fn classify<T: ApproxFloat>(op: &'static str, x: T, y: T) -> Result<T> {
    if y.is_nan() {
        if x.is_nan() {
            return Err(Error::NotANumber {
                op,
                dtype: T::DTYPE,
            });
        }
        return Err(Error::domain(op, x.as_f64(), T::DTYPE));
    }
    if y.is_infinite() && x.is_finite() {
        return Err(Error::infinite(op, x.as_f64(), T::DTYPE));
    }
    Ok(y)
}

macro_rules! checked_unary {
    ($($name:ident => $op:expr;)*) => {
        $(
            #[doc = concat!("Checked `", stringify!($name), "`")]
            #[inline]
            pub fn $name<T: ApproxFloat>(x: T, precision: Precision) -> Result<T> {
                eval($op, x, precision)
            }
        )*
    };
}

checked_unary! {
    sqrt => Op::Sqrt;
    inv_sqrt => Op::InvSqrt;
    log => Op::Log;
    exp => Op::Exp;
    sin => Op::Sin;
    cos => Op::Cos;
    sec => Op::Sec;
    csc => Op::Csc;
    tan => Op::Tan;
    cotan => Op::Cotan;
    arctan => Op::Arctan;
    arccotan => Op::Arccotan;
    arccos => Op::Arccos;
    arcsin => Op::Arcsin;
}

/// Checked [`approx::power`]; classified against `base`
///
/// A NaN exponent with a non-NaN base is a domain error.
pub fn power<T: ApproxFloat>(base: T, exponent: T) -> Result<T> {
    if exponent.is_nan() && !base.is_nan() {
        return Err(Error::domain("power", exponent.as_f64(), T::DTYPE));
    }
    classify("power", base, approx::power(base, exponent))
}

/// Checked [`approx::root`]
pub fn root<T: ApproxFloat>(value: T, n: i32) -> Result<T> {
    classify("root", value, approx::root(value, n))
}

/// Checked [`approx::int_power`]
pub fn int_power<T: ApproxFloat>(base: T, exponent: i32) -> Result<T> {
    classify("int_power", base, approx::int_power(base, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;

    #[test]
    fn test_finite_results_pass_through() {
        assert_eq!(sqrt(16.0f64, Precision::High), Ok(approx::sqrt(16.0, Precision::High)));
        assert!(sin(1.0f32, Precision::Fast).is_ok());
        assert_eq!(int_power(2.0f64, 3), Ok(8.0));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            log(-2.0f64, Precision::Auto),
            Err(Error::Domain {
                op: "log",
                input: -2.0,
                dtype: DType::F64
            })
        );
        assert_eq!(
            arccos(1.5f32, Precision::Fast),
            Err(Error::domain("arccos", 1.5, DType::F32))
        );
        assert!(matches!(root(-8.0f64, 3), Err(Error::Domain { op: "root", .. })));
        assert!(matches!(power(2.0f64, f64::NAN), Err(Error::Domain { .. })));
    }

    #[test]
    fn test_nan_inputs() {
        let err = eval(Op::Exp, f64::NAN, Precision::Auto).unwrap_err();
        assert_eq!(
            err,
            Error::NotANumber {
                op: "exp",
                dtype: DType::F64
            }
        );
        assert_eq!(err.op(), Some("exp"));
    }

    #[test]
    fn test_infinite_results() {
        assert_eq!(
            log(0.0f64, Precision::Fast),
            Err(Error::infinite("log", 0.0, DType::F64))
        );
        assert!(matches!(exp(1000.0f64, Precision::Fast), Err(Error::Infinite { .. })));
        assert!(matches!(csc(0.0f32, Precision::High), Err(Error::Infinite { .. })));
        assert!(matches!(int_power(0.0f64, -1), Err(Error::Infinite { .. })));
        // Infinite in, infinite out is not an error
        assert_eq!(sqrt(f64::INFINITY, Precision::Fast), Ok(f64::INFINITY));
        assert_eq!(exp(f64::NEG_INFINITY, Precision::Fast), Ok(0.0));
    }
}
