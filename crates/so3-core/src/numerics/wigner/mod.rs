//! Wigner small-d matrices `d^l_{m'm}(beta)` for every degree below a
//! band-limit.
//!
//! Two recursions produce the same planes:
//!
//! * [`WignerRecursion::Risbo`] steps through half-integer degrees, building
//!   `d^j(beta)` from `d^{j-1/2}(beta)` directly at the requested colatitude.
//! * [`WignerRecursion::Trapani`] tabulates `Delta^l = d^l(pi/2)` once per
//!   kernel and expands an arbitrary colatitude through the Fourier relation
//!   `d^l_{m'm}(beta) = sum_k Delta^l_{km'} Delta^l_{km} cos((m'-m) pi/2 - k beta)`.

mod risbo;
mod trapani;

pub use risbo::RisboKernel;
pub use trapani::TrapaniKernel;

use crate::domain::So3Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WignerRecursion {
    #[default]
    Risbo,
    Trapani,
}

impl WignerRecursion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Risbo => "risbo",
            Self::Trapani => "trapani",
        }
    }
}

impl FromStr for WignerRecursion {
    type Err = So3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "risbo" => Ok(Self::Risbo),
            "trapani" => Ok(Self::Trapani),
            _ => Err(So3Error::invalid_enum(
                "dl_method",
                value,
                "risbo, trapani",
            )),
        }
    }
}

impl Display for WignerRecursion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Square `(2l+1) x (2l+1)` matrix `d^l_{m'm}`, rows `m'`, columns `m`.
#[derive(Debug, Clone, PartialEq)]
pub struct WignerPlane {
    degree: i32,
    values: Vec<f64>,
}

impl WignerPlane {
    pub fn zeros(degree: i32) -> Self {
        let width = (2 * degree + 1) as usize;
        Self {
            degree,
            values: vec![0.0; width * width],
        }
    }

    pub const fn degree(&self) -> i32 {
        self.degree
    }

    pub const fn width(&self) -> usize {
        (2 * self.degree + 1) as usize
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `d^l_{m'm}`; both orders must lie in `-l..=l`.
    pub fn get(&self, m_prime: i32, m: i32) -> f64 {
        self.values[self.slot(m_prime, m)]
    }

    pub fn set(&mut self, m_prime: i32, m: i32, value: f64) {
        let slot = self.slot(m_prime, m);
        self.values[slot] = value;
    }

    fn slot(&self, m_prime: i32, m: i32) -> usize {
        let l = self.degree;
        ((m_prime + l) * (2 * l + 1) + (m + l)) as usize
    }
}

/// Source of Wigner-d planes for degrees `0..L`.
///
/// Kernels are immutable after construction and shared across worker
/// threads.
pub trait WignerKernel: Send + Sync {
    fn recursion(&self) -> WignerRecursion;

    /// Harmonic band-limit `L`; [`WignerKernel::planes`] returns `L` planes.
    fn band_limit(&self) -> usize;

    /// `d^l(beta)` for `l = 0..L`, indexed by degree.
    fn planes(&self, beta: f64) -> Vec<WignerPlane>;
}

pub fn build_kernel(recursion: WignerRecursion, band_limit: usize) -> Box<dyn WignerKernel> {
    match recursion {
        WignerRecursion::Risbo => Box::new(RisboKernel::new(band_limit)),
        WignerRecursion::Trapani => Box::new(TrapaniKernel::new(band_limit)),
    }
}
