//! Precision policy: the speed/accuracy operating point of every kernel
//!
//! Callers pass a [`Precision`]; kernels only ever see a [`Tier`]. The
//! conversion is the single normalization point, so `Auto` (and any
//! unrecognized integer code) never reaches a kernel.
//!
//! # Tiers
//!
//! | Tier         | sqrt/invsqrt | log      | exp      | sin/cos | tan | arc* |
//! |--------------|--------------|----------|----------|---------|-----|------|
//! | **Fast**     | 1 iteration  | to y³    | to r³    | 3 terms | 2   | 3    |
//! | **Balanced** | 2 iterations | to y⁷    | to r⁵    | 5 terms | 3   | 3    |
//! | **High**     | 3 iterations | to y¹¹   | to r⁷    | 7 terms | 6   | 6    |
//!
//! Accuracy is monotonic in the tier: for a fixed input inside a function's
//! designed domain, the error at High never exceeds Balanced, which never
//! exceeds Fast. Speed is not guaranteed to be monotonic.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Requested speed/accuracy tradeoff
///
/// # Default
///
/// `Auto`, which resolves to [`Tier::Balanced`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Library default for the operation (currently Balanced)
    #[default]
    Auto,
    /// Prioritize speed over accuracy
    Fast,
    /// Balance speed and accuracy
    Balanced,
    /// Prioritize accuracy over speed
    High,
}

impl Precision {
    /// All precision values, in code order
    pub const ALL: [Precision; 4] = [
        Precision::Auto,
        Precision::Fast,
        Precision::Balanced,
        Precision::High,
    ];

    /// Resolve to the tier a kernel will run at
    #[inline]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Fast => Tier::Fast,
            Self::Auto | Self::Balanced => Tier::Balanced,
            Self::High => Tier::High,
        }
    }

    /// Replace `Auto` with the concrete precision it stands for
    #[inline]
    pub const fn normalize(self) -> Self {
        match self {
            Self::Auto => Self::Balanced,
            other => other,
        }
    }

    /// Stable integer code: Auto=0, Fast=1, Balanced=2, High=3
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Fast => 1,
            Self::Balanced => 2,
            Self::High => 3,
        }
    }

    /// Whether `code` names a precision
    #[inline]
    pub const fn is_valid_code(code: i32) -> bool {
        matches!(code, 0..=3)
    }

    /// Decode an integer code, falling back to Balanced for unknown codes
    ///
    /// Unrecognized values are not an error: they select the default tier,
    /// the same as `Auto`.
    #[inline]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Auto,
            1 => Self::Fast,
            3 => Self::High,
            _ => Self::Balanced,
        }
    }

    /// Lowercase name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrecision(s.to_string()))
    }
}

impl From<Tier> for Precision {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Fast => Self::Fast,
            Tier::Balanced => Self::Balanced,
            Tier::High => Self::High,
        }
    }
}

/// Normalized precision as seen by the kernels
///
/// Ordered by accuracy: `Fast < Balanced < High`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Fewest terms/iterations
    Fast,
    /// Default operating point
    #[default]
    Balanced,
    /// Most terms/iterations
    High,
}

impl Tier {
    /// All tiers, from least to most accurate
    pub const ALL: [Tier; 3] = [Tier::Fast, Tier::Balanced, Tier::High];

    /// Refinement steps used by the square-root family at this tier
    #[inline]
    pub const fn refinement_steps(self) -> usize {
        match self {
            Self::Fast => 1,
            Self::Balanced => 2,
            Self::High => 3,
        }
    }
}

impl From<Precision> for Tier {
    fn from(p: Precision) -> Self {
        p.tier()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Precision::from(*self).name())
    }
}
