//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so sampled inputs are identical on every run
pub const SEED: u64 = 0x5eed_f00d;

/// Assert `|a - b| <= atol`
pub fn assert_close(a: f64, b: f64, atol: f64, msg: &str) {
    let diff = (a - b).abs();
    assert!(
        diff <= atol,
        "{}: {} vs {} (diff={}, atol={})",
        msg,
        a,
        b,
        diff,
        atol
    );
}

/// Assert `|a - b| <= rtol * |b|`
pub fn assert_rel_close(a: f64, b: f64, rtol: f64, msg: &str) {
    let diff = (a - b).abs();
    let tol = rtol * b.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        diff,
        tol
    );
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// `n` uniform samples from `[lo, hi)` with a seeded RNG
pub fn random_samples(lo: f64, hi: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

/// `n` log-uniform samples from `[lo, hi)`, for functions spanning decades
pub fn log_uniform_samples(lo: f64, hi: f64, n: usize, seed: u64) -> Vec<f64> {
    random_samples(lo.ln(), hi.ln(), n, seed)
        .into_iter()
        .map(f64::exp)
        .collect()
}
