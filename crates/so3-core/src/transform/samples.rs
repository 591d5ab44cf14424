use crate::domain::{So3Error, So3Result};
use crate::sampling::GridShape;
use num_complex::Complex64;

/// Samples on a rotation grid in native order: `gamma` slowest, then `beta`,
/// `alpha` fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunction<T> {
    shape: GridShape,
    samples: Vec<T>,
}

pub type ComplexSampledFunction = SampledFunction<Complex64>;
pub type RealSampledFunction = SampledFunction<f64>;

impl<T> SampledFunction<T> {
    pub fn new(shape: GridShape, samples: Vec<T>) -> So3Result<Self> {
        if samples.len() != shape.total() {
            return Err(So3Error::shape("f", shape.total(), samples.len()));
        }

        Ok(Self { shape, samples })
    }

    pub fn from_fn(shape: GridShape, mut value: impl FnMut(usize, usize, usize) -> T) -> Self {
        let mut samples = Vec::with_capacity(shape.total());
        for g in 0..shape.ngamma {
            for b in 0..shape.nbeta {
                for a in 0..shape.nalpha {
                    samples.push(value(a, b, g));
                }
            }
        }

        Self { shape, samples }
    }

    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    pub fn get(&self, a: usize, b: usize, g: usize) -> Option<&T> {
        if a >= self.shape.nalpha || b >= self.shape.nbeta || g >= self.shape.ngamma {
            return None;
        }

        self.samples.get(native_offset(self.shape, a, b, g))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SampledFunction<U> {
        SampledFunction {
            shape: self.shape,
            samples: self.samples.iter().map(f).collect(),
        }
    }
}

impl RealSampledFunction {
    pub fn to_complex(&self) -> ComplexSampledFunction {
        self.map(|value| Complex64::new(*value, 0.0))
    }
}

/// `g * nalpha * nbeta + b * nalpha + a`.
pub const fn native_offset(shape: GridShape, a: usize, b: usize, g: usize) -> usize {
    g * shape.nalpha * shape.nbeta + b * shape.nalpha + a
}

/// Result of a transform whose element type follows the reality flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Real(RealSampledFunction),
    Complex(ComplexSampledFunction),
}

impl Samples {
    pub const fn shape(&self) -> GridShape {
        match self {
            Self::Real(function) => function.shape(),
            Self::Complex(function) => function.shape(),
        }
    }

    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Complex view of the samples; real samples gain a zero imaginary part.
    pub fn to_complex(&self) -> ComplexSampledFunction {
        match self {
            Self::Real(function) => function.to_complex(),
            Self::Complex(function) => function.clone(),
        }
    }
}
