//! Inverse and forward Wigner transforms on SO(3).
//!
//! The inverse transform evaluates
//! `f(alpha, beta, gamma) = sum (2l+1)/(8 pi^2) f_{lmn} conj(D^l_{mn}(alpha, beta, gamma))`
//! with `D^l_{mn} = exp(-i m alpha) d^l_{mn}(beta) exp(-i n gamma)` on the
//! grid of the configured sampling scheme. It runs in three stages:
//!
//! 1. for every colatitude sample, Wigner planes from the configured kernel
//!    reduce each active order to its `m` spectrum;
//! 2. each active order becomes an `(alpha, beta)` layer through an inverse
//!    DFT along `alpha`, one order per worker;
//! 3. once every layer exists, an inverse DFT of length `ngamma` along
//!    `gamma` assembles the result. Real functions supply the negative orders
//!    by Hermitian symmetry and keep only the real part.
//!
//! The forward transform runs the same stages backwards and recovers the
//! coefficients with an exact least-squares solve per `(m, n)`.

mod evaluate;
mod forward;
mod fourier;
mod inverse;
mod parameters;
mod samples;

pub use evaluate::evaluate;
pub use forward::{forward, forward_complex, forward_real};
pub use inverse::{inverse, inverse_complex, inverse_real};
pub use parameters::TransformParameters;
pub use samples::{
    ComplexSampledFunction, RealSampledFunction, SampledFunction, Samples, native_offset,
};
