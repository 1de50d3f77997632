//! # fastapprox
//!
//! **Fast, bounded-error scalar approximations of transcendental and algebraic
//! functions.**
//!
//! fastapprox provides drop-in substitutes for `sqrt`, `1/sqrt`, `ln`, `exp`,
//! the trigonometric and inverse-trigonometric functions, and power/root, for
//! latency-sensitive code that can trade a controlled amount of accuracy for
//! speed.
//!
//! ## Features
//!
//! - **Precision tiers**: every function takes a [`Precision`]; the tier
//!   fixes the series term count or refinement step count at compile time
//! - **Both widths**: each kernel is written once, generic over `f32`/`f64`
//! - **Sentinels, not panics**: domain violations give NaN or ±∞ as the
//!   standard library does; [`checked`] converts them to [`Error`]s
//! - **No state, no allocation**: kernels are pure functions of their input
//!
//! ## Quick Start
//!
//! ```rust
//! use fastapprox::prelude::*;
//!
//! let s = approx::sin(0.5f64, Precision::Balanced);
//! assert!((s - 0.5f64.sin()).abs() < 1e-5);
//!
//! let r = 2.0f32.fast_sqrt_with(Precision::High);
//! assert!((r - std::f32::consts::SQRT_2).abs() < 1e-6);
//!
//! assert_eq!(approx::int_power(2.0f64, 10), 1024.0);
//! ```
//!
//! ## Edge cases
//!
//! NaN inputs always produce NaN, checked before anything else. Outside the
//! designed domain (e.g. `arctan` for large arguments, `cos` near π at the
//! Fast tier) results stay finite but lose the tier's accuracy; see each
//! function's module docs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accuracy;
pub mod approx;
pub mod checked;
pub mod dtype;
pub mod error;
pub mod ext;
pub mod precision;

pub use dtype::{ApproxFloat, DType};
pub use error::{Error, Result};
pub use ext::FastMath;
pub use precision::{Precision, Tier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::approx::{self, KernelTable, Op};
    pub use crate::dtype::{ApproxFloat, DType};
    pub use crate::error::{Error, Result};
    pub use crate::ext::FastMath;
    pub use crate::precision::{Precision, Tier};
}
