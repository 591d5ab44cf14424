use super::fourier::{AxisFft, frequency_bin};
use super::parameters::TransformParameters;
use super::samples::{ComplexSampledFunction, RealSampledFunction, Samples};
use crate::domain::{So3Error, So3Result};
use crate::numerics::{
    DenseRealMatrix, WignerPlane, build_kernel, degree_weight, least_squares_solve,
};
use crate::sampling::GridShape;
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::{debug, trace};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Forward transform of either sample type; the type must agree with `parameters.reality()`.
pub fn forward(samples: &Samples, parameters: &TransformParameters) -> So3Result<Vec<Complex64>> {
    match samples {
        Samples::Real(function) => forward_real(function, parameters),
        Samples::Complex(function) => forward_complex(function, parameters),
    }
}

pub fn forward_complex(
    function: &ComplexSampledFunction,
    parameters: &TransformParameters,
) -> So3Result<Vec<Complex64>> {
    parameters.require_reality(false)?;
    analyze(function.shape(), function.samples(), parameters)
}

/// Forward transform of a real function; only `n >= 0` is returned.
pub fn forward_real(
    function: &RealSampledFunction,
    parameters: &TransformParameters,
) -> So3Result<Vec<Complex64>> {
    parameters.require_reality(true)?;
    let complex = function.to_complex();
    analyze(complex.shape(), complex.samples(), parameters)
}

fn analyze(
    shape: GridShape,
    samples: &[Complex64],
    parameters: &TransformParameters,
) -> So3Result<Vec<Complex64>> {
    let grid = parameters.grid();
    let expected = grid.shape();
    if shape != expected {
        if shape.total() != expected.total() {
            return Err(So3Error::shape("f", expected.total(), shape.total()));
        }
        return Err(So3Error::range(
            "f",
            format!("grid shape {shape} does not match {expected}"),
        ));
    }

    let index = parameters.index();
    let orders = parameters.active_orders();
    debug!(
        %parameters,
        active_orders = orders.len(),
        "starting forward SO(3) transform"
    );

    let plane = expected.plane();
    let gamma_fft = AxisFft::new(expected.ngamma);
    let mut columns = vec![ZERO; expected.total()];
    columns
        .par_chunks_mut(expected.ngamma)
        .enumerate()
        .for_each(|(pair, column)| {
            for (g, value) in column.iter_mut().enumerate() {
                *value = samples[g * plane + pair];
            }
            gamma_fft.analyze(column);
        });

    let limits = parameters.limits();
    let max_degree = limits.max_degree();
    let kernel = build_kernel(parameters.recursion(), limits.harmonic());
    let betas = grid.betas();
    let planes: Vec<Vec<WignerPlane>> = betas.par_iter().map(|&beta| kernel.planes(beta)).collect();

    let alpha_fft = AxisFft::new(expected.nalpha);
    let solved: Vec<Vec<(usize, Complex64)>> = orders
        .par_iter()
        .map(|&order| -> So3Result<Vec<(usize, Complex64)>> {
            trace!(n = order, "analyzing order layer");
            let gamma_bin = frequency_bin(order, expected.ngamma);
            let mut layer: Vec<Complex64> = (0..plane)
                .map(|pair| columns[pair * expected.ngamma + gamma_bin])
                .collect();
            for row in layer.chunks_mut(expected.nalpha) {
                alpha_fft.analyze(row);
            }

            let mut coefficients = Vec::new();
            for m in -max_degree..=max_degree {
                let lowest = m.abs().max(order.abs());
                if lowest > max_degree {
                    continue;
                }

                let alpha_bin = frequency_bin(m, expected.nalpha);
                let rhs: Vec<Complex64> = (0..expected.nbeta)
                    .map(|b| layer[b * expected.nalpha + alpha_bin])
                    .collect();
                let unknowns = (max_degree - lowest + 1) as usize;
                let design = DenseRealMatrix::from_fn(expected.nbeta, unknowns, |b, column| {
                    let l = lowest + column as i32;
                    degree_weight(l) * planes[b][l as usize].get(m, order)
                });
                let solution = least_squares_solve(&design, &rhs).map_err(|error| {
                    So3Error::numerical("forward colatitude solve", error.to_string())
                })?;

                for (column, value) in solution.into_iter().enumerate() {
                    let l = lowest + column as i32;
                    coefficients.push((index.offset(l, m, order)?, value));
                }
            }

            Ok(coefficients)
        })
        .collect::<So3Result<Vec<_>>>()?;

    let mut flmn = vec![ZERO; index.size()];
    for (offset, value) in solved.into_iter().flatten() {
        flmn[offset] = value;
    }

    debug!(coefficients = flmn.len(), "finished forward SO(3) transform");
    Ok(flmn)
}
