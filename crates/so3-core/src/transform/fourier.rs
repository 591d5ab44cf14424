use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Forward and inverse plans for one grid axis, shared across workers.
#[derive(Clone)]
pub(crate) struct AxisFft {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scale: f64,
}

impl AxisFft {
    pub(crate) fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        Self {
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
            scale: 1.0 / len as f64,
        }
    }

    /// `x_j = sum_k X_k exp(+2 pi i j k / len)`, unnormalized.
    pub(crate) fn synthesize(&self, buffer: &mut [Complex64]) {
        self.inverse.process(buffer);
    }

    /// `X_k = (1/len) sum_j x_j exp(-2 pi i j k / len)`.
    pub(crate) fn analyze(&self, buffer: &mut [Complex64]) {
        self.forward.process(buffer);
        for value in buffer.iter_mut() {
            *value *= self.scale;
        }
    }
}

/// FFT bin holding frequency `order` on an axis of length `len`.
pub(crate) fn frequency_bin(order: i32, len: usize) -> usize {
    order.rem_euclid(len as i32) as usize
}
