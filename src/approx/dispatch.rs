//! Precision dispatch: (operation, tier) → kernel
//!
//! Each kernel module publishes a [`KernelTable`] naming its three fixed
//! term-count (or step-count) instantiations. Selecting from the table is the
//! only place a tier is looked at, so kernel bodies contain no precision
//! branching.

use super::{arctrig, exp, log, sqrt, tan, trig};
use crate::dtype::ApproxFloat;
use crate::precision::{Precision, Tier};
use std::fmt;

/// Signature shared by every unary kernel
pub type Kernel<T> = fn(T) -> T;

/// Tier → implementation lookup for one operation
#[derive(Copy, Clone)]
pub struct KernelTable<T> {
    fast: Kernel<T>,
    balanced: Kernel<T>,
    high: Kernel<T>,
}

impl<T> KernelTable<T> {
    /// Build a table from the three tier instantiations
    pub const fn new(fast: Kernel<T>, balanced: Kernel<T>, high: Kernel<T>) -> Self {
        Self {
            fast,
            balanced,
            high,
        }
    }

    /// Kernel for a tier
    #[inline(always)]
    pub const fn select(&self, tier: Tier) -> Kernel<T> {
        match tier {
            Tier::Fast => self.fast,
            Tier::Balanced => self.balanced,
            Tier::High => self.high,
        }
    }
}

impl<T> fmt::Debug for KernelTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelTable").finish_non_exhaustive()
    }
}

// ============================================================================
// Operation catalogue
// ============================================================================

/// Unary operations with a precision parameter
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// √x
    Sqrt,
    /// 1/√x
    InvSqrt,
    /// ln(x)
    Log,
    /// eˣ
    Exp,
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
    /// 1/cos(x)
    Sec,
    /// 1/sin(x)
    Csc,
    /// tan(x)
    Tan,
    /// 1/tan(x)
    Cotan,
    /// atan(x), small arguments only
    Arctan,
    /// π/2 − atan(x), small arguments only
    Arccotan,
    /// acos(x)
    Arccos,
    /// asin(x)
    Arcsin,
}

impl Op {
    /// Every operation, in declaration order
    pub const ALL: [Op; 14] = [
        Op::Sqrt,
        Op::InvSqrt,
        Op::Log,
        Op::Exp,
        Op::Sin,
        Op::Cos,
        Op::Sec,
        Op::Csc,
        Op::Tan,
        Op::Cotan,
        Op::Arctan,
        Op::Arccotan,
        Op::Arccos,
        Op::Arcsin,
    ];

    /// Lowercase operation name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::InvSqrt => "inv_sqrt",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Tan => "tan",
            Self::Cotan => "cotan",
            Self::Arctan => "arctan",
            Self::Arccotan => "arccotan",
            Self::Arccos => "arccos",
            Self::Arcsin => "arcsin",
        }
    }

    /// The tier table for this operation
    pub const fn table<T: ApproxFloat>(self) -> KernelTable<T> {
        match self {
            Self::Sqrt => sqrt::sqrt_table(),
            Self::InvSqrt => sqrt::inv_sqrt_table(),
            Self::Log => log::log_table(),
            Self::Exp => exp::exp_table(),
            Self::Sin => trig::sin_table(),
            Self::Cos => trig::cos_table(),
            Self::Sec => trig::sec_table(),
            Self::Csc => trig::csc_table(),
            Self::Tan => tan::tan_table(),
            Self::Cotan => tan::cotan_table(),
            Self::Arctan => arctrig::arctan_table(),
            Self::Arccotan => arctrig::arccotan_table(),
            Self::Arccos => arctrig::arccos_table(),
            Self::Arcsin => arctrig::arcsin_table(),
        }
    }

    /// Kernel for a tier
    #[inline]
    pub const fn kernel<T: ApproxFloat>(self, tier: Tier) -> Kernel<T> {
        self.table().select(tier)
    }

    /// Evaluate at the requested precision
    #[inline]
    pub fn eval<T: ApproxFloat>(self, x: T, precision: Precision) -> T {
        self.kernel(precision.tier())(x)
    }

    /// Exact library implementation of the same function
    ///
    /// Used to measure the approximations, never by the kernels.
    pub fn reference<T: ApproxFloat>(self, x: T) -> T {
        match self {
            Self::Sqrt => x.sqrt(),
            Self::InvSqrt => x.sqrt().recip(),
            Self::Log => x.ln(),
            Self::Exp => x.exp(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Sec => x.cos().recip(),
            Self::Csc => x.sin().recip(),
            Self::Tan => x.tan(),
            Self::Cotan => x.tan().recip(),
            Self::Arctan => x.atan(),
            Self::Arccotan => T::FRAC_PI_2() - x.atan(),
            Self::Arccos => x.acos(),
            Self::Arcsin => x.asin(),
        }
    }

    /// Input interval each approximation is designed and validated for
    ///
    /// Sampling outside it measures documented limitations rather than the
    /// tier's accuracy (e.g. arctan far from zero, cosine near π at Fast).
    pub const fn design_domain(self) -> (f64, f64) {
        match self {
            Self::Sqrt | Self::InvSqrt => (1e-6, 1e6),
            Self::Log => (1e-6, 1e6),
            Self::Exp => (-20.0, 20.0),
            Self::Sin | Self::Csc => (0.1, 1.5),
            Self::Cos | Self::Sec => (-1.5, 1.5),
            Self::Tan | Self::Cotan => (0.05, 1.5),
            Self::Arctan | Self::Arccotan => (-0.26, 0.26),
            Self::Arccos | Self::Arcsin => (-0.45, 0.45),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
