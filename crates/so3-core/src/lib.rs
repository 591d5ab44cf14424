//! Band-limited harmonic analysis on the rotation group SO(3).
//!
//! Coefficients `f_{lmn}` live in flat buffers addressed by
//! [`storage::HarmonicIndex`]; [`transform::inverse`] synthesizes them onto
//! the equiangular grids of [`sampling`], and [`transform::forward`] recovers
//! them from samples.

pub mod domain;
pub mod layout;
pub mod nmode;
pub mod numerics;
pub mod request;
pub mod sampling;
pub mod storage;
pub mod transform;

pub use domain::{BandLimits, EulerAngles, HarmonicTriple, So3Error, So3ErrorCategory, So3Result};
pub use request::{TransformRequest, TransformResponse};
pub use transform::{Samples, TransformParameters};
