//! Equiangular rotation grids for the McEwen-Wiaux sampling theorems.

use crate::domain::{BandLimits, So3Error};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamplingScheme {
    /// `L` colatitudes, south pole included.
    #[default]
    Mw,
    /// Symmetric variant: `L+1` colatitudes, both poles included.
    MwSs,
}

impl SamplingScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mw => "mw",
            Self::MwSs => "mwss",
        }
    }

    pub const fn nalpha(self, harmonic: usize) -> usize {
        match self {
            Self::Mw => 2 * harmonic - 1,
            Self::MwSs => 2 * harmonic,
        }
    }

    pub const fn nbeta(self, harmonic: usize) -> usize {
        match self {
            Self::Mw => harmonic,
            Self::MwSs => harmonic + 1,
        }
    }

    pub const fn ngamma(self, orientational: usize) -> usize {
        2 * orientational - 1
    }
}

impl FromStr for SamplingScheme {
    type Err = So3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mw" => Ok(Self::Mw),
            "mwss" => Ok(Self::MwSs),
            _ => Err(So3Error::invalid_enum("sampling", value, "mw, mwss")),
        }
    }
}

impl Display for SamplingScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Sample counts along `(alpha, beta, gamma)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    pub nalpha: usize,
    pub nbeta: usize,
    pub ngamma: usize,
}

impl GridShape {
    pub const fn new(nalpha: usize, nbeta: usize, ngamma: usize) -> Self {
        Self {
            nalpha,
            nbeta,
            ngamma,
        }
    }

    pub const fn total(&self) -> usize {
        self.nalpha * self.nbeta * self.ngamma
    }

    /// Samples in one `(alpha, beta)` plane.
    pub const fn plane(&self) -> usize {
        self.nalpha * self.nbeta
    }
}

impl Display for GridShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nalpha={} nbeta={} ngamma={}",
            self.nalpha, self.nbeta, self.ngamma
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingGrid {
    scheme: SamplingScheme,
    limits: BandLimits,
}

impl SamplingGrid {
    pub const fn new(scheme: SamplingScheme, limits: BandLimits) -> Self {
        Self { scheme, limits }
    }

    pub const fn scheme(&self) -> SamplingScheme {
        self.scheme
    }

    pub const fn limits(&self) -> BandLimits {
        self.limits
    }

    pub const fn shape(&self) -> GridShape {
        GridShape::new(
            self.scheme.nalpha(self.limits.harmonic()),
            self.scheme.nbeta(self.limits.harmonic()),
            self.scheme.ngamma(self.limits.orientational()),
        )
    }

    pub fn alpha(&self, index: usize) -> f64 {
        2.0 * PI * index as f64 / self.shape().nalpha as f64
    }

    pub fn beta(&self, index: usize) -> f64 {
        let harmonic = self.limits.harmonic() as f64;
        match self.scheme {
            SamplingScheme::Mw => (2 * index + 1) as f64 * PI / (2.0 * harmonic - 1.0),
            SamplingScheme::MwSs => index as f64 * PI / harmonic,
        }
    }

    pub fn gamma(&self, index: usize) -> f64 {
        2.0 * PI * index as f64 / self.shape().ngamma as f64
    }

    pub fn alphas(&self) -> Vec<f64> {
        (0..self.shape().nalpha).map(|a| self.alpha(a)).collect()
    }

    pub fn betas(&self) -> Vec<f64> {
        (0..self.shape().nbeta).map(|b| self.beta(b)).collect()
    }

    pub fn gammas(&self) -> Vec<f64> {
        (0..self.shape().ngamma).map(|g| self.gamma(g)).collect()
    }
}
