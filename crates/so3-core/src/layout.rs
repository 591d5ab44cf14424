//! Translation between the native sample order and the caller-facing array.
//!
//! Native buffers put `gamma` slowest and `alpha` fastest. Callers receive
//! `alpha` slowest and `gamma` fastest, reported with dimensions
//! `[ngamma, nbeta, nalpha]`, which is the natural shape for a host that reads
//! the array in column-major order.

use crate::domain::{So3Error, So3Result};
use crate::sampling::GridShape;
use crate::transform::{SampledFunction, native_offset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalArray<T> {
    /// `[ngamma, nbeta, nalpha]`
    pub dims: [usize; 3],
    pub data: Vec<T>,
}

impl<T> ExternalArray<T> {
    pub const fn shape(&self) -> GridShape {
        GridShape::new(self.dims[2], self.dims[1], self.dims[0])
    }
}

/// `a * ngamma * nbeta + b * ngamma + g`.
pub const fn external_offset(shape: GridShape, a: usize, b: usize, g: usize) -> usize {
    a * shape.ngamma * shape.nbeta + b * shape.ngamma + g
}

pub fn to_external<T: Clone>(function: &SampledFunction<T>) -> ExternalArray<T> {
    let shape = function.shape();
    let native = function.samples();
    let mut data = Vec::with_capacity(shape.total());
    for a in 0..shape.nalpha {
        for b in 0..shape.nbeta {
            for g in 0..shape.ngamma {
                data.push(native[native_offset(shape, a, b, g)].clone());
            }
        }
    }

    ExternalArray {
        dims: [shape.ngamma, shape.nbeta, shape.nalpha],
        data,
    }
}

pub fn from_external<T: Clone>(array: &ExternalArray<T>) -> So3Result<SampledFunction<T>> {
    let shape = array.shape();
    if array.data.len() != shape.total() {
        return Err(So3Error::shape("f", shape.total(), array.data.len()));
    }

    let mut samples = Vec::with_capacity(shape.total());
    for g in 0..shape.ngamma {
        for b in 0..shape.nbeta {
            for a in 0..shape.nalpha {
                samples.push(array.data[external_offset(shape, a, b, g)].clone());
            }
        }
    }

    SampledFunction::new(shape, samples)
}
