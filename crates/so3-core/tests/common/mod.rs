#![allow(dead_code)]

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use so3_core::numerics::{NumericTolerance, max_abs_difference, relative_difference};
use so3_core::storage::{HarmonicIndex, conjugate_partner};
use std::f64::consts::PI;

pub fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let tolerance = NumericTolerance::new(abs_tol, rel_tol, 1.0);
    let abs_diff = (actual - expected).abs();
    let rel_diff = relative_difference(expected, actual, tolerance.relative_floor);
    assert!(
        tolerance.accepts(expected, actual),
        "{label} expected={expected:.15e} actual={actual:.15e} abs_diff={abs_diff:.15e} rel_diff={rel_diff:.15e} abs_tol={abs_tol:.15e} rel_tol={rel_tol:.15e}"
    );
}

pub fn assert_complex_close(
    label: &str,
    expected: Complex64,
    actual: Complex64,
    abs_tol: f64,
    rel_tol: f64,
) {
    let tolerance = NumericTolerance::new(abs_tol, rel_tol, 1.0);
    let abs_diff = (actual - expected).norm();
    assert!(
        tolerance.accepts_complex(expected, actual),
        "{label} expected=({:.15e},{:.15e}) actual=({:.15e},{:.15e}) abs_diff={:.15e} abs_tol={:.15e} rel_tol={:.15e}",
        expected.re,
        expected.im,
        actual.re,
        actual.im,
        abs_diff,
        abs_tol,
        rel_tol
    );
}

pub fn assert_all_close(label: &str, expected: &[Complex64], actual: &[Complex64], abs_tol: f64) {
    let worst = max_abs_difference(expected, actual);
    assert!(
        worst.is_some(),
        "{label} length mismatch: expected {} actual {}",
        expected.len(),
        actual.len()
    );
    if worst.is_some_and(|worst| worst <= abs_tol) {
        return;
    }
    for (slot, (lhs, rhs)) in expected.iter().zip(actual).enumerate() {
        assert_complex_close(&format!("{label}[{slot}]"), *lhs, *rhs, abs_tol, 0.0);
    }
}

/// Random coefficients on every valid triple; padding slots stay zero.
pub fn random_coefficients(index: HarmonicIndex, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flmn = vec![Complex64::new(0.0, 0.0); index.size()];
    for triple in index.triples() {
        let offset = index.offset_of(triple).expect("valid triple");
        flmn[offset] = Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    }
    flmn
}

/// Random coefficients of a real function: the `n = 0` block obeys
/// `f(l,-m,0) = (-1)^m conj f(l,m,0)` and `f(l,0,0)` is real.
pub fn random_real_coefficients(index: HarmonicIndex, seed: u64) -> Vec<Complex64> {
    assert!(index.reality(), "real coefficients need a reality layout");
    let mut flmn = random_coefficients(index, seed);
    for l in 0..=index.limits().max_degree() {
        let centre = index.offset(l, 0, 0).expect("offset");
        flmn[centre].im = 0.0;
        for m in 1..=l {
            let positive = flmn[index.offset(l, m, 0).expect("offset")];
            let negative = index.offset(l, -m, 0).expect("offset");
            flmn[negative] = conjugate_partner(m, 0, positive);
        }
    }
    flmn
}

/// Orthonormal spherical harmonic with the Condon-Shortley phase.
pub fn y_lm(degree: i32, order: i32, theta: f64, phi: f64) -> Complex64 {
    let positive_order = order.unsigned_abs() as usize;
    let degree = degree as usize;
    let x = theta.cos();

    let mut p_mm = 1.0;
    let root = (1.0 - x * x).max(0.0).sqrt();
    for k in 1..=positive_order {
        p_mm *= -((2 * k - 1) as f64) * root;
    }
    let legendre = if degree == positive_order {
        p_mm
    } else {
        let mut p_lm2 = p_mm;
        let mut p_lm1 = x * ((2 * positive_order + 1) as f64) * p_mm;
        for l in (positive_order + 2)..=degree {
            let p_lm = (((2 * l - 1) as f64) * x * p_lm1
                - ((l + positive_order - 1) as f64) * p_lm2)
                / ((l - positive_order) as f64);
            p_lm2 = p_lm1;
            p_lm1 = p_lm;
        }
        p_lm1
    };

    let mut ratio = 1.0;
    for term in (degree - positive_order + 1)..=(degree + positive_order) {
        ratio /= term as f64;
    }
    let normalization = (((2 * degree + 1) as f64) * ratio / (4.0 * PI)).sqrt();
    let positive = Complex64::from_polar(normalization * legendre, positive_order as f64 * phi);

    if order >= 0 {
        positive
    } else if positive_order % 2 == 0 {
        positive.conj()
    } else {
        -positive.conj()
    }
}
