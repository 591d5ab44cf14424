use super::{WignerKernel, WignerPlane, WignerRecursion};
use std::f64::consts::FRAC_PI_2;

/// Trapani-Navaza recursion for `Delta^l = d^l(pi/2)`.
///
/// The half-pi planes are tabulated once at construction; [`WignerKernel::planes`]
/// expands them at an arbitrary colatitude.
#[derive(Debug, Clone, PartialEq)]
pub struct TrapaniKernel {
    halfpi: Vec<WignerPlane>,
}

impl TrapaniKernel {
    pub fn new(band_limit: usize) -> Self {
        let mut halfpi: Vec<WignerPlane> = Vec::with_capacity(band_limit);
        for l in 0..band_limit as i32 {
            let plane = match halfpi.last() {
                None => WignerPlane {
                    degree: 0,
                    values: vec![1.0],
                },
                Some(previous) => halfpi_step(previous, l),
            };
            halfpi.push(plane);
        }

        Self { halfpi }
    }

    /// `Delta^l`, or `None` for `l >= L`.
    pub fn halfpi(&self, l: i32) -> Option<&WignerPlane> {
        usize::try_from(l).ok().and_then(|l| self.halfpi.get(l))
    }
}

impl WignerKernel for TrapaniKernel {
    fn recursion(&self) -> WignerRecursion {
        WignerRecursion::Trapani
    }

    fn band_limit(&self) -> usize {
        self.halfpi.len()
    }

    fn planes(&self, beta: f64) -> Vec<WignerPlane> {
        self.halfpi
            .iter()
            .map(|delta| expand_at(delta, beta))
            .collect()
    }
}

/// `Delta^{l-1} -> Delta^l`.
fn halfpi_step(previous: &WignerPlane, l: i32) -> WignerPlane {
    let mut delta = WignerPlane::zeros(l);
    let lf = f64::from(l);

    // Stretched row m' = l for m >= 0.
    for m in 0..l {
        let mf = f64::from(m);
        let factor = (lf * (2.0 * lf - 1.0) / (2.0 * (lf + mf) * (lf - mf))).sqrt();
        delta.set(l, m, -factor * previous.get(l - 1, m));
    }
    delta.set(l, l, previous.get(l - 1, l - 1) / 2.0);

    // Descend in m' for each column m >= 0.
    for m in 0..=l {
        let mf = f64::from(m);
        for m_prime in (1..=l).rev() {
            let mpf = f64::from(m_prime);
            let upper = if m_prime < l {
                ((lf - mpf) * (lf + mpf + 1.0)).sqrt() * delta.get(m_prime + 1, m)
            } else {
                0.0
            };
            let value = (2.0 * mf * delta.get(m_prime, m) - upper)
                / ((lf + mpf) * (lf - mpf + 1.0)).sqrt();
            delta.set(m_prime - 1, m, value);
        }
    }

    // Delta_{-m',m} = (-1)^(l+m) Delta_{m',m}
    for m in 0..=l {
        let sign = parity_sign(l + m);
        for m_prime in 1..=l {
            delta.set(-m_prime, m, sign * delta.get(m_prime, m));
        }
    }

    // Delta_{m',-m} = (-1)^(l+m') Delta_{m',m}
    for m_prime in -l..=l {
        let sign = parity_sign(l + m_prime);
        for m in 1..=l {
            delta.set(m_prime, -m, sign * delta.get(m_prime, m));
        }
    }

    delta
}

/// `d^l_{m'm}(beta) = sum_k Delta_{km'} Delta_{km} cos((m'-m) pi/2 - k beta)`.
fn expand_at(delta: &WignerPlane, beta: f64) -> WignerPlane {
    let l = delta.degree();
    let mut plane = WignerPlane::zeros(l);
    for m_prime in -l..=l {
        for m in -l..=l {
            let phase = f64::from(m_prime - m) * FRAC_PI_2;
            let value: f64 = (-l..=l)
                .map(|k| {
                    delta.get(k, m_prime) * delta.get(k, m) * (phase - f64::from(k) * beta).cos()
                })
                .sum();
            plane.set(m_prime, m, value);
        }
    }

    plane
}

fn parity_sign(exponent: i32) -> f64 {
    if exponent.rem_euclid(2) == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::TrapaniKernel;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn halfpi_tables_match_known_values() {
        let kernel = TrapaniKernel::new(3);
        let delta1 = kernel.halfpi(1).expect("degree one");
        assert!((delta1.get(1, 0) + FRAC_1_SQRT_2).abs() < 1.0e-15);
        assert!((delta1.get(0, 1) - FRAC_1_SQRT_2).abs() < 1.0e-15);
        assert!(delta1.get(0, 0).abs() < 1.0e-15);
        assert!((delta1.get(-1, 1) - 0.5).abs() < 1.0e-15);

        let delta2 = kernel.halfpi(2).expect("degree two");
        assert!((delta2.get(2, 1) + 0.5).abs() < 1.0e-15);
        assert!((delta2.get(0, 0) + 0.5).abs() < 1.0e-15);
        assert!((delta2.get(2, 2) - 0.25).abs() < 1.0e-15);

        assert!(kernel.halfpi(3).is_none());
        assert!(kernel.halfpi(-1).is_none());
    }
}
