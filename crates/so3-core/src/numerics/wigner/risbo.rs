use super::{WignerKernel, WignerPlane, WignerRecursion};

/// Risbo's half-integer recursion, evaluated afresh at each colatitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RisboKernel {
    band_limit: usize,
}

impl RisboKernel {
    pub const fn new(band_limit: usize) -> Self {
        Self { band_limit }
    }
}

impl WignerKernel for RisboKernel {
    fn recursion(&self) -> WignerRecursion {
        WignerRecursion::Risbo
    }

    fn band_limit(&self) -> usize {
        self.band_limit
    }

    fn planes(&self, beta: f64) -> Vec<WignerPlane> {
        let mut planes = Vec::with_capacity(self.band_limit);
        if self.band_limit == 0 {
            return planes;
        }

        let (q, p) = (beta / 2.0).sin_cos();
        // `current` holds d^{j/2} as a (j+1) x (j+1) row-major matrix.
        let mut current = vec![1.0];
        planes.push(WignerPlane {
            degree: 0,
            values: current.clone(),
        });

        let max_twice_degree = 2 * (self.band_limit - 1);
        for twice_degree in 1..=max_twice_degree {
            current = risbo_step(&current, twice_degree, p, q);
            if twice_degree % 2 == 0 {
                planes.push(WignerPlane {
                    degree: (twice_degree / 2) as i32,
                    values: current.clone(),
                });
            }
        }

        planes
    }
}

/// One half-integer step `d^{(j-1)/2} -> d^{j/2}`, `j = twice_degree`.
fn risbo_step(previous: &[f64], twice_degree: usize, p: f64, q: f64) -> Vec<f64> {
    let j = twice_degree;
    let width = j + 1;
    let previous_width = j;
    let mut next = vec![0.0; width * width];
    let scale = 1.0 / j as f64;

    for i in 0..previous_width {
        for k in 0..previous_width {
            let t = previous[i * previous_width + k] * scale;
            if t == 0.0 {
                continue;
            }

            let (ji, jk) = ((j - i) as f64, (j - k) as f64);
            let (i1, k1) = ((i + 1) as f64, (k + 1) as f64);
            next[i * width + k] += (ji * jk).sqrt() * t * p;
            next[(i + 1) * width + k] -= (i1 * jk).sqrt() * t * q;
            next[i * width + k + 1] += (ji * k1).sqrt() * t * q;
            next[(i + 1) * width + k + 1] += (i1 * k1).sqrt() * t * p;
        }
    }

    next
}
