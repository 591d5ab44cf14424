use super::parameters::TransformParameters;
use crate::domain::{EulerAngles, So3Result};
use crate::nmode::active_orders;
use crate::numerics::{build_kernel, degree_weight};
use crate::storage::RealityView;
use num_complex::Complex64;

/// Value of the band-limited function at one rotation, off the sampling grid.
///
/// Orders excluded by the n-mode contribute nothing, exactly as in
/// the inverse transform. Real functions still return a complex value whose
/// imaginary part vanishes to rounding.
pub fn evaluate(
    flmn: &[Complex64],
    parameters: &TransformParameters,
    angles: EulerAngles,
) -> So3Result<Complex64> {
    parameters.require_flmn_len(flmn.len())?;
    let view = RealityView::new(parameters.index(), flmn)?;
    let limits = parameters.limits();
    let planes = build_kernel(parameters.recursion(), limits.harmonic()).planes(angles.beta);

    let mut value = Complex64::new(0.0, 0.0);
    for n in active_orders(limits, parameters.n_mode(), false) {
        let gamma_phase = Complex64::from_polar(1.0, f64::from(n) * angles.gamma);
        for l in n.abs()..=limits.max_degree() {
            let plane = &planes[l as usize];
            let weight = degree_weight(l);
            for m in -l..=l {
                let alpha_phase = Complex64::from_polar(1.0, f64::from(m) * angles.alpha);
                value += view.get(l, m, n)? * weight * plane.get(m, n) * alpha_phase * gamma_phase;
            }
        }
    }

    Ok(value)
}
