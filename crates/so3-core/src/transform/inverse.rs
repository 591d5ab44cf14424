use super::fourier::{AxisFft, frequency_bin};
use super::parameters::TransformParameters;
use super::samples::{ComplexSampledFunction, RealSampledFunction, SampledFunction, Samples};
use crate::domain::So3Result;
use crate::numerics::{WignerPlane, build_kernel, degree_weight};
use crate::storage::RealityView;
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::{debug, trace};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Weighted `(l, m)` coefficients of one orientational order.
#[derive(Debug, Clone)]
pub(crate) struct OrderSlice {
    order: i32,
    max_degree: i32,
    /// `(2l+1)/(8 pi^2) f_{lmn}` for `l = |n|..L`, `m = -l..=l`, packed by degree.
    weighted: Vec<Complex64>,
}

impl OrderSlice {
    pub(crate) fn extract(view: &RealityView<'_>, order: i32) -> So3Result<Self> {
        let max_degree = view.index().limits().max_degree();
        let lowest = order.abs();
        let mut weighted = Vec::new();
        for l in lowest..=max_degree {
            let weight = degree_weight(l);
            for m in -l..=l {
                weighted.push(view.get(l, m, order)? * weight);
            }
        }

        Ok(Self {
            order,
            max_degree,
            weighted,
        })
    }

    pub(crate) const fn order(&self) -> i32 {
        self.order
    }

    /// Adds `sum_l a_{lm} d^l_{mn}(beta)` to `spectrum[m + L - 1]`.
    pub(crate) fn accumulate(&self, planes: &[WignerPlane], spectrum: &mut [Complex64]) {
        let lowest = self.order.abs();
        let mut cursor = 0usize;
        for l in lowest..=self.max_degree {
            let plane = &planes[l as usize];
            for m in -l..=l {
                let slot = (m + self.max_degree) as usize;
                spectrum[slot] += self.weighted[cursor] * plane.get(m, self.order);
                cursor += 1;
            }
        }
    }
}

/// Inverse transform whose sample type follows `parameters.reality()`.
pub fn inverse(flmn: &[Complex64], parameters: &TransformParameters) -> So3Result<Samples> {
    if parameters.reality() {
        inverse_real(flmn, parameters).map(Samples::Real)
    } else {
        inverse_complex(flmn, parameters).map(Samples::Complex)
    }
}

pub fn inverse_complex(
    flmn: &[Complex64],
    parameters: &TransformParameters,
) -> So3Result<ComplexSampledFunction> {
    parameters.require_reality(false)?;
    let samples = synthesize(flmn, parameters)?;
    SampledFunction::new(parameters.grid().shape(), samples)
}

/// Inverse transform of a real function from its `n >= 0` coefficients.
pub fn inverse_real(
    flmn: &[Complex64],
    parameters: &TransformParameters,
) -> So3Result<RealSampledFunction> {
    parameters.require_reality(true)?;
    let samples = synthesize(flmn, parameters)?;
    SampledFunction::new(
        parameters.grid().shape(),
        samples.into_iter().map(|value| value.re).collect(),
    )
}

/// Native-order samples of `sum (2l+1)/(8 pi^2) f_{lmn} conj(D^l_{mn})`.
fn synthesize(flmn: &[Complex64], parameters: &TransformParameters) -> So3Result<Vec<Complex64>> {
    parameters.require_flmn_len(flmn.len())?;
    let view = RealityView::new(parameters.index(), flmn)?;
    let grid = parameters.grid();
    let shape = grid.shape();
    let orders = parameters.active_orders();
    debug!(
        %parameters,
        nalpha = shape.nalpha,
        nbeta = shape.nbeta,
        ngamma = shape.ngamma,
        active_orders = orders.len(),
        "starting inverse SO(3) transform"
    );

    let slices = orders
        .iter()
        .map(|&order| OrderSlice::extract(&view, order))
        .collect::<So3Result<Vec<_>>>()?;

    let limits = parameters.limits();
    let max_degree = limits.max_degree();
    let width = (2 * max_degree + 1) as usize;
    let kernel = build_kernel(parameters.recursion(), limits.harmonic());

    // spectra[b][slot * width + m + L - 1] = G_{mn}(beta_b)
    let spectra: Vec<Vec<Complex64>> = grid
        .betas()
        .par_iter()
        .map(|&beta| {
            let planes = kernel.planes(beta);
            let mut row = vec![ZERO; slices.len() * width];
            for (slot, slice) in slices.iter().enumerate() {
                slice.accumulate(&planes, &mut row[slot * width..(slot + 1) * width]);
            }
            row
        })
        .collect();

    let alpha_fft = AxisFft::new(shape.nalpha);
    let layers: Vec<Vec<Complex64>> = slices
        .par_iter()
        .enumerate()
        .map(|(slot, slice)| {
            trace!(n = slice.order(), "synthesizing order layer");
            let mut layer = vec![ZERO; shape.plane()];
            for (spectrum, row) in spectra.iter().zip(layer.chunks_mut(shape.nalpha)) {
                let coefficients = &spectrum[slot * width..(slot + 1) * width];
                for m in -max_degree..=max_degree {
                    row[frequency_bin(m, shape.nalpha)] = coefficients[(m + max_degree) as usize];
                }
                alpha_fft.synthesize(row);
            }
            layer
        })
        .collect();

    let reality = parameters.reality();
    let gamma_fft = AxisFft::new(shape.ngamma);
    let mut columns = vec![ZERO; shape.total()];
    columns
        .par_chunks_mut(shape.ngamma)
        .enumerate()
        .for_each(|(pair, column)| {
            for (slice, layer) in slices.iter().zip(&layers) {
                let value = layer[pair];
                column[frequency_bin(slice.order(), shape.ngamma)] = value;
                if reality && slice.order() > 0 {
                    column[frequency_bin(-slice.order(), shape.ngamma)] = value.conj();
                }
            }
            gamma_fft.synthesize(column);
        });

    let plane = shape.plane();
    let mut native = vec![ZERO; shape.total()];
    for (pair, column) in columns.chunks(shape.ngamma).enumerate() {
        for (g, value) in column.iter().enumerate() {
            native[g * plane + pair] = *value;
        }
    }

    debug!(samples = native.len(), "finished inverse SO(3) transform");
    Ok(native)
}

#[cfg(test)]
mod tests {
    use super::{OrderSlice, inverse, inverse_complex, inverse_real};
    use crate::domain::{BandLimits, So3ErrorCategory};
    use crate::storage::{HarmonicIndex, RealityView, StorageMethod};
    use crate::transform::TransformParameters;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    #[test]
    fn zeroth_degree_synthesizes_normalization_constant() {
        let parameters = TransformParameters::with_band_limits(2, 1).expect("parameters");
        let mut flmn = vec![Complex64::new(0.0, 0.0); 4];
        flmn[0] = Complex64::new(1.0, 0.0);

        let function = inverse_complex(&flmn, &parameters).expect("inverse");
        let shape = function.shape();
        assert_eq!((shape.nalpha, shape.nbeta, shape.ngamma), (3, 2, 1));
        let expected = 1.0 / (8.0 * PI * PI);
        for value in function.samples() {
            assert!((value.re - expected).abs() < 1.0e-15);
            assert!(value.im.abs() < 1.0e-15);
        }
    }

    #[test]
    fn slice_extraction_reads_only_requested_order() {
        let limits = BandLimits::new(3, 2).expect("limits");
        let index = HarmonicIndex::new(limits, StorageMethod::NegFirstCompact, false);
        let mut flmn = vec![Complex64::new(0.0, 0.0); index.size()];
        flmn[index.offset(2, -1, 1).expect("offset")] = Complex64::new(2.0, 0.0);
        let view = RealityView::new(index, &flmn).expect("view");

        let slice = OrderSlice::extract(&view, 1).expect("slice");
        assert_eq!(slice.order(), 1);
        // l=1 contributes three entries, then (l=2, m=-1) is the second of five.
        let expected = Complex64::new(2.0 * 5.0 / (8.0 * PI * PI), 0.0);
        assert!((slice.weighted[3 + 1] - expected).norm() < 1.0e-15);
        assert_eq!(slice.weighted.len(), 3 + 5);
    }

    #[test]
    fn validation_precedes_numerical_work() {
        let parameters = TransformParameters::with_band_limits(3, 2).expect("parameters");
        let error = inverse(&[Complex64::new(0.0, 0.0); 7], &parameters).expect_err("short");
        assert_eq!(error.category(), So3ErrorCategory::ShapeError);

        let flmn = vec![Complex64::new(0.0, 0.0); parameters.index().size()];
        let error = inverse_real(&flmn, &parameters).expect_err("reality mismatch");
        assert_eq!(error.placeholder(), "INPUT.REALITY");
    }

    #[test]
    fn real_path_returns_real_samples() {
        let parameters = TransformParameters::with_band_limits(3, 2)
            .expect("parameters")
            .with_reality(true);
        let mut flmn = vec![Complex64::new(0.0, 0.0); parameters.index().size()];
        flmn[0] = Complex64::new(1.0, 0.0);

        let samples = inverse(&flmn, &parameters).expect("inverse");
        assert!(samples.is_real());
        assert_eq!(samples.shape().total(), 5 * 3 * 3);
    }
}
