pub mod linalg;
pub mod wigner;

pub use linalg::{DenseRealMatrix, LeastSquaresError, least_squares_solve};
pub use wigner::{WignerKernel, WignerPlane, WignerRecursion, build_kernel};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// `(2l+1) / (8 pi^2)`, the weight of degree `l` in the inverse transform.
pub fn degree_weight(l: i32) -> f64 {
    f64::from(2 * l + 1) / (8.0 * std::f64::consts::PI * std::f64::consts::PI)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NumericTolerance {
    #[serde(rename = "absTol")]
    pub abs_tol: f64,
    #[serde(rename = "relTol")]
    pub rel_tol: f64,
    #[serde(rename = "relativeFloor")]
    pub relative_floor: f64,
}

impl NumericTolerance {
    pub const fn new(abs_tol: f64, rel_tol: f64, relative_floor: f64) -> Self {
        Self {
            abs_tol,
            rel_tol,
            relative_floor,
        }
    }

    pub fn accepts(&self, lhs: f64, rhs: f64) -> bool {
        within_tolerance(lhs, rhs, self.abs_tol, self.rel_tol, self.relative_floor)
    }

    pub fn accepts_complex(&self, lhs: Complex64, rhs: Complex64) -> bool {
        let abs_diff = (lhs - rhs).norm();
        let scale = lhs.norm().max(rhs.norm()).max(self.relative_floor);
        abs_diff <= self.abs_tol || abs_diff / scale <= self.rel_tol
    }
}

pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}

/// Largest elementwise distance between two complex sequences of equal length.
pub fn max_abs_difference(lhs: &[Complex64], rhs: &[Complex64]) -> Option<f64> {
    if lhs.len() != rhs.len() {
        return None;
    }

    Some(
        lhs.iter()
            .zip(rhs)
            .map(|(left, right)| (left - right).norm())
            .fold(0.0, f64::max),
    )
}
