pub mod errors;

pub use errors::{CompatibilityExitPlaceholder, So3Error, So3ErrorCategory, So3Result};

use std::fmt::{Display, Formatter};

/// Largest harmonic band-limit; degrees and orders are addressed as `i32`.
pub const MAX_BAND_LIMIT: usize = i32::MAX as usize;

/// Harmonic band-limit `L` and orientational band-limit `N`, `1 <= N <= L`.
///
/// Accepted limits keep every coefficient buffer and sampling grid length
/// within `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandLimits {
    harmonic: usize,
    orientational: usize,
}

impl BandLimits {
    pub fn new(harmonic: usize, orientational: usize) -> So3Result<Self> {
        if harmonic == 0 {
            return Err(So3Error::range(
                "L",
                "harmonic band-limit must be a positive integer",
            ));
        }
        if orientational == 0 {
            return Err(So3Error::range(
                "N",
                "orientational band-limit must be a positive integer",
            ));
        }
        if orientational > harmonic {
            return Err(So3Error::range(
                "N",
                format!("orientational band-limit {orientational} exceeds L={harmonic}"),
            ));
        }

        if harmonic > MAX_BAND_LIMIT {
            return Err(So3Error::range(
                "L",
                format!("harmonic band-limit {harmonic} exceeds {MAX_BAND_LIMIT}"),
            ));
        }
        if largest_extent(harmonic, orientational).is_none() {
            return Err(So3Error::range(
                "L",
                format!(
                    "band-limits L={harmonic} N={orientational} are too large to address"
                ),
            ));
        }

        Ok(Self {
            harmonic,
            orientational,
        })
    }

    pub const fn harmonic(&self) -> usize {
        self.harmonic
    }

    pub const fn orientational(&self) -> usize {
        self.orientational
    }

    pub const fn max_degree(&self) -> i32 {
        self.harmonic as i32 - 1
    }

    pub const fn max_order(&self) -> i32 {
        self.orientational as i32 - 1
    }

    /// `0 <= l < L`, `|m| <= l`, `|n| <= min(l, N-1)`.
    pub const fn contains(&self, l: i32, m: i32, n: i32) -> bool {
        l >= 0
            && l <= self.max_degree()
            && m.abs() <= l
            && n.abs() <= l
            && n.abs() <= self.max_order()
    }
}

/// Longer of the complex padded buffer `(2N-1) L^2` and the MWSS grid
/// `2L (L+1) (2N-1)`, or `None` on overflow.
fn largest_extent(harmonic: usize, orientational: usize) -> Option<usize> {
    let orders = orientational.checked_mul(2)?.checked_sub(1)?;
    let buffer = harmonic.checked_mul(harmonic)?.checked_mul(orders)?;
    let grid = harmonic
        .checked_mul(2)?
        .checked_mul(harmonic.checked_add(1)?)?
        .checked_mul(orders)?;
    Some(buffer.max(grid))
}

impl Display for BandLimits {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "L={} N={}", self.harmonic, self.orientational)
    }
}

/// One `(l, m, n)` coefficient index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HarmonicTriple {
    pub l: i32,
    pub m: i32,
    pub n: i32,
}

impl HarmonicTriple {
    pub const fn new(l: i32, m: i32, n: i32) -> Self {
        Self { l, m, n }
    }
}

/// zyz Euler angles of a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerAngles {
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }
}
