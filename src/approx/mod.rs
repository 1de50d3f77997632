//! Scalar approximation kernels
//!
//! Every function takes a scalar of either width plus a [`Precision`] and
//! returns a sentinel (NaN, ±∞) rather than an error for inputs outside its
//! domain. NaN inputs are checked first by every kernel.
//!
//! # Supported Functions
//!
//! | Function            | Algorithm                                           |
//! |---------------------|-----------------------------------------------------|
//! | sqrt, inv_sqrt      | Bit-level seed + fixed Babylonian / Newton steps    |
//! | log                 | Exponent extraction + atanh series                  |
//! | exp                 | ln2 range reduction + Taylor series + 2^k from bits |
//! | sin, cos, sec, csc  | 2π range reduction + Taylor series                  |
//! | tan, cotan          | π reduction, fold to [0, π/4] + Taylor series       |
//! | arctan, arccotan    | Taylor series, small arguments only                 |
//! | arccos, arcsin      | Arcsine series, half-angle form for \|x\| ≥ 0.5     |
//! | power, root         | Composition of exp/log (and sqrt for n = 2)         |
//! | int_power           | Binary exponentiation                               |
//!
//! # Design Notes
//!
//! All series coefficients live in `common.rs`; a tier is nothing more than a
//! prefix length of a coefficient table (or a refinement step count), fixed
//! at compile time through a const generic. Each kernel module publishes the
//! three instantiations as a [`KernelTable`], and [`Op`] maps an operation
//! name to its table.
//!
//! [`Precision`]: crate::Precision

pub(crate) mod bits;
pub(crate) mod common;
pub(crate) mod poly;
pub(crate) mod reduce;
pub(crate) mod refine;

pub mod arctrig;
pub mod dispatch;
pub mod exp;
pub mod log;
pub mod power;
pub mod sqrt;
pub mod tan;
pub mod trig;

pub use arctrig::{arccos, arccotan, arcsin, arctan};
pub use dispatch::{Kernel, KernelTable, Op};
pub use exp::exp;
pub use log::log;
pub use power::{int_power, power, root};
pub use sqrt::{inv_sqrt, sqrt};
pub use tan::{cotan, tan};
pub use trig::{cos, csc, sec, sin};
