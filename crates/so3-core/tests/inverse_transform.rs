mod common;

use common::{
    assert_all_close, assert_complex_close, assert_scalar_close, random_coefficients,
    random_real_coefficients, y_lm,
};
use num_complex::Complex64;
use so3_core::domain::EulerAngles;
use so3_core::nmode::NMode;
use so3_core::numerics::WignerRecursion;
use so3_core::sampling::SamplingScheme;
use so3_core::storage::{StorageMethod, expand_real_coefficients};
use so3_core::transform::{TransformParameters, evaluate, inverse_complex, inverse_real};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1.0e-12;

fn parameters(l: usize, n: usize) -> TransformParameters {
    TransformParameters::with_band_limits(l, n).expect("valid band-limits")
}

#[test]
fn single_zeroth_coefficient_is_constant_for_every_configuration() {
    let expected = 1.0 / (8.0 * PI * PI);
    for sampling in [SamplingScheme::Mw, SamplingScheme::MwSs] {
        for recursion in [WignerRecursion::Risbo, WignerRecursion::Trapani] {
            let parameters = parameters(2, 1)
                .with_sampling(sampling)
                .with_recursion(recursion);
            let mut flmn = vec![Complex64::new(0.0, 0.0); 4];
            flmn[0] = Complex64::new(1.0, 0.0);

            let function = inverse_complex(&flmn, &parameters).expect("inverse");
            assert_eq!(function.shape(), parameters.grid().shape());
            for value in function.samples() {
                assert_complex_close(
                    &format!("{sampling}/{recursion}"),
                    Complex64::new(expected, 0.0),
                    *value,
                    1.0e-15,
                    0.0,
                );
            }
        }
    }
}

#[test]
fn synthesis_is_linear() {
    let parameters = parameters(5, 3).with_method(StorageMethod::NegFirstCompact);
    let index = parameters.index();
    let first = random_coefficients(index, 11);
    let second = random_coefficients(index, 12);
    let (a, b) = (Complex64::new(0.5, -1.25), Complex64::new(-2.0, 0.75));
    let combined: Vec<Complex64> = first
        .iter()
        .zip(&second)
        .map(|(lhs, rhs)| a * lhs + b * rhs)
        .collect();

    let f1 = inverse_complex(&first, &parameters).expect("first");
    let f2 = inverse_complex(&second, &parameters).expect("second");
    let f12 = inverse_complex(&combined, &parameters).expect("combined");
    let expected: Vec<Complex64> = f1
        .samples()
        .iter()
        .zip(f2.samples())
        .map(|(lhs, rhs)| a * lhs + b * rhs)
        .collect();
    assert_all_close("linearity", &expected, f12.samples(), 1.0e-11);
}

#[test]
fn matching_n_mode_reproduces_unfiltered_synthesis() {
    let all = parameters(6, 4);
    let index = all.index();
    for (mode, keep) in [
        (NMode::Even, (|n: i32| n % 2 == 0) as fn(i32) -> bool),
        (NMode::Odd, (|n: i32| n % 2 != 0) as fn(i32) -> bool),
        (NMode::Maximum, (|n: i32| n.abs() == 3) as fn(i32) -> bool),
    ] {
        let mut flmn = random_coefficients(index, 21);
        for triple in index.triples() {
            if !keep(triple.n) {
                flmn[index.offset_of(triple).expect("offset")] = Complex64::new(0.0, 0.0);
            }
        }

        let unfiltered = inverse_complex(&flmn, &all).expect("all orders");
        let filtered = inverse_complex(&flmn, &all.with_n_mode(mode)).expect("filtered");
        assert_all_close(mode.as_str(), unfiltered.samples(), filtered.samples(), TOLERANCE);
    }
}

#[test]
fn excluded_orders_contribute_nothing() {
    let all = parameters(5, 3);
    let index = all.index();
    let flmn = random_coefficients(index, 31);
    let mut even_only = flmn.clone();
    for triple in index.triples() {
        if triple.n % 2 != 0 {
            even_only[index.offset_of(triple).expect("offset")] = Complex64::new(0.0, 0.0);
        }
    }

    let filtered = inverse_complex(&flmn, &all.with_n_mode(NMode::Even)).expect("filtered");
    let reference = inverse_complex(&even_only, &all).expect("reference");
    assert_all_close("even", reference.samples(), filtered.samples(), TOLERANCE);
}

#[test]
fn real_path_matches_complex_path_on_expanded_coefficients() {
    for method in StorageMethod::ALL {
        for sampling in [SamplingScheme::Mw, SamplingScheme::MwSs] {
            let real_parameters = parameters(5, 3)
                .with_method(method)
                .with_sampling(sampling)
                .with_reality(true);
            let half = random_real_coefficients(real_parameters.index(), 41);
            let (_, full) =
                expand_real_coefficients(real_parameters.index(), &half).expect("expand");

            let real = inverse_real(&half, &real_parameters).expect("real path");
            let complex = inverse_complex(&full, &real_parameters.with_reality(false))
                .expect("complex path");

            for (slot, (lhs, rhs)) in real.samples().iter().zip(complex.samples()).enumerate() {
                let label = format!("{method} {sampling} slot={slot}");
                assert_scalar_close(&label, rhs.re, *lhs, TOLERANCE, 0.0);
                assert_scalar_close(&label, 0.0, rhs.im, TOLERANCE, 0.0);
            }
        }
    }
}

#[test]
fn real_path_honours_restricted_n_modes() {
    for mode in [NMode::Even, NMode::Odd, NMode::Maximum] {
        let real_parameters = parameters(5, 4).with_reality(true).with_n_mode(mode);
        let half = random_real_coefficients(real_parameters.index(), 43);
        let (_, full) =
            expand_real_coefficients(real_parameters.index(), &half).expect("expand");

        let real = inverse_real(&half, &real_parameters).expect("real path");
        let complex = inverse_complex(&full, &real_parameters.with_reality(false))
            .expect("complex path");

        for (slot, (lhs, rhs)) in real.samples().iter().zip(complex.samples()).enumerate() {
            let label = format!("{mode} slot={slot}");
            assert_scalar_close(&label, rhs.re, *lhs, TOLERANCE, 0.0);
            assert_scalar_close(&label, 0.0, rhs.im, TOLERANCE, 0.0);
        }
    }
}

#[test]
fn recursions_produce_identical_samples() {
    let risbo = parameters(7, 4).with_sampling(SamplingScheme::MwSs);
    let trapani = risbo.with_recursion(WignerRecursion::Trapani);
    let flmn = random_coefficients(risbo.index(), 51);

    let lhs = inverse_complex(&flmn, &risbo).expect("risbo");
    let rhs = inverse_complex(&flmn, &trapani).expect("trapani");
    assert_all_close("risbo vs trapani", lhs.samples(), rhs.samples(), 1.0e-11);
}

#[test]
fn zero_order_coefficients_synthesize_spherical_harmonics() {
    let parameters = parameters(4, 1);
    let index = parameters.index();
    let grid = parameters.grid();
    for (l, m) in [(1, 0), (2, -1), (3, 2), (3, -3)] {
        let mut flmn = vec![Complex64::new(0.0, 0.0); index.size()];
        flmn[index.offset(l, m, 0).expect("offset")] = Complex64::new(1.0, 0.0);
        let function = inverse_complex(&flmn, &parameters).expect("inverse");

        let width = f64::from(2 * l + 1);
        let scale = width / (8.0 * PI * PI) * (4.0 * PI / width).sqrt();
        for b in 0..grid.shape().nbeta {
            for a in 0..grid.shape().nalpha {
                let expected = y_lm(l, m, grid.beta(b), grid.alpha(a)) * scale;
                let actual = *function.get(a, b, 0).expect("sample");
                let label = format!("l={l} m={m} a={a} b={b}");
                assert_complex_close(&label, expected, actual, TOLERANCE, 0.0);
            }
        }

        let angles = EulerAngles::new(0.37, 1.91, 2.6);
        let off_grid = evaluate(&flmn, &parameters, angles).expect("evaluate");
        assert_complex_close(
            "off-grid",
            y_lm(l, m, angles.beta, angles.alpha) * scale,
            off_grid,
            TOLERANCE,
            0.0,
        );
    }
}

#[test]
fn orientation_order_adds_gamma_phase() {
    let parameters = parameters(3, 3);
    let index = parameters.index();
    let mut flmn = vec![Complex64::new(0.0, 0.0); index.size()];
    flmn[index.offset(2, 1, -2).expect("offset")] = Complex64::new(1.0, 0.0);

    let function = inverse_complex(&flmn, &parameters).expect("inverse");
    let grid = parameters.grid();
    let reference = *function.get(1, 1, 0).expect("sample");
    for g in 1..grid.shape().ngamma {
        let phase = Complex64::from_polar(1.0, -2.0 * grid.gamma(g));
        let actual = *function.get(1, 1, g).expect("sample");
        assert_complex_close(&format!("g={g}"), reference * phase, actual, TOLERANCE, 0.0);
    }
}

#[test]
fn maximal_orientational_band_limit_is_supported() {
    for reality in [false, true] {
        let parameters = parameters(4, 4)
            .with_method(StorageMethod::ZeroFirstCompact)
            .with_reality(reality);
        let index = parameters.index();
        let expected_size = if reality { 50 } else { 84 };
        assert_eq!(index.size(), expected_size);
        assert_eq!(index.triples().len(), expected_size);
        assert_eq!(parameters.grid().shape().ngamma, 7);

        let flmn = if reality {
            random_real_coefficients(index, 61)
        } else {
            random_coefficients(index, 61)
        };
        let grid = parameters.grid();
        let angles = EulerAngles::new(grid.alpha(2), grid.beta(3), grid.gamma(6));
        let expected = evaluate(&flmn, &parameters, angles).expect("evaluate");

        let actual = if reality {
            Complex64::new(
                *inverse_real(&flmn, &parameters)
                    .expect("real inverse")
                    .get(2, 3, 6)
                    .expect("sample"),
                0.0,
            )
        } else {
            *inverse_complex(&flmn, &parameters)
                .expect("complex inverse")
                .get(2, 3, 6)
                .expect("sample")
        };
        assert_complex_close(&format!("reality={reality}"), expected, actual, TOLERANCE, 0.0);
    }
}
