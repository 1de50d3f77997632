//! Error statistics of an approximation against a reference implementation
//!
//! Diagnostic only: nothing on a kernel path calls into this module.

use crate::approx::Op;
use crate::dtype::ApproxFloat;
use crate::precision::Tier;
use std::fmt;

/// Error summary over a set of samples
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AccuracyMetrics {
    /// Number of samples measured
    pub samples: usize,
    /// Largest `|approx − reference|`
    pub max_abs_error: f64,
    /// Largest relative error; absolute error where the reference is 0
    pub max_rel_error: f64,
    /// Mean absolute error
    pub mean_abs_error: f64,
    /// Root-mean-square error
    pub rms_error: f64,
    /// `−log10(max_rel_error)`, `+∞` for an exact match or no samples
    pub decimal_digits: f64,
}

impl AccuracyMetrics {
    /// Metrics of an empty sample set
    pub const EMPTY: Self = Self {
        samples: 0,
        max_abs_error: 0.0,
        max_rel_error: 0.0,
        mean_abs_error: 0.0,
        rms_error: 0.0,
        decimal_digits: f64::INFINITY,
    };
}

impl fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} max_abs={:.3e} max_rel={:.3e} mean_abs={:.3e} rms={:.3e} digits={:.2}",
            self.samples,
            self.max_abs_error,
            self.max_rel_error,
            self.mean_abs_error,
            self.rms_error,
            self.decimal_digits
        )
    }
}

/// Compare `approx` against `reference` at every sample
///
/// Errors are accumulated in f64 regardless of `T`. Identical outputs
/// (including equal infinities) count as zero error.
pub fn measure_accuracy<T, R, A>(samples: &[T], reference: R, approx: A) -> AccuracyMetrics
where
    T: ApproxFloat,
    R: Fn(T) -> T,
    A: Fn(T) -> T,
{
    if samples.is_empty() {
        return AccuracyMetrics::EMPTY;
    }

    let mut max_abs = 0.0f64;
    let mut max_rel = 0.0f64;
    let mut sum_abs = 0.0f64;
    let mut sum_sq = 0.0f64;

    for &x in samples {
        let want = reference(x).as_f64();
        let got = approx(x).as_f64();
        let err = if got == want { 0.0 } else { got - want };
        let abs_err = err.abs();

        sum_abs += abs_err;
        sum_sq += err * err;
        max_abs = max_abs.max(abs_err);

        let rel = if want != 0.0 {
            abs_err / want.abs()
        } else {
            abs_err
        };
        max_rel = max_rel.max(rel);
    }

    let n = samples.len() as f64;
    let decimal_digits = if max_rel > 0.0 {
        -max_rel.log10()
    } else {
        f64::INFINITY
    };

    AccuracyMetrics {
        samples: samples.len(),
        max_abs_error: max_abs,
        max_rel_error: max_rel,
        mean_abs_error: sum_abs / n,
        rms_error: (sum_sq / n).sqrt(),
        decimal_digits,
    }
}

/// Measure one operation at one tier against [`Op::reference`]
pub fn measure_op<T: ApproxFloat>(op: Op, tier: Tier, samples: &[T]) -> AccuracyMetrics {
    let kernel = op.kernel::<T>(tier);
    let metrics = measure_accuracy(samples, |x| op.reference(x), kernel);
    log::debug!("{op} [{tier}, {}]: {metrics}", T::DTYPE);
    metrics
}

/// `n` evenly spaced points from `lo` to `hi` inclusive
///
/// `n == 1` yields `[lo]`; `n == 0` yields nothing.
pub fn linspace<T: ApproxFloat>(lo: T, hi: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / T::from_f64((n - 1) as f64);
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        hi
                    } else {
                        lo + step * T::from_f64(i as f64)
                    }
                })
                .collect()
        }
    }
}
