//! Language-independent call contract for the transforms.
//!
//! A [`TransformRequest`] mirrors the argument list a host numerical
//! environment passes: continuous band-limits, string enums and a coefficient
//! buffer. [`TransformRequest::parameters`] validates everything into typed
//! [`TransformParameters`] before any numerical work starts.

use crate::domain::{BandLimits, MAX_BAND_LIMIT, So3Error, So3Result};
use crate::layout::to_external;
use crate::nmode::NMode;
use crate::numerics::WignerRecursion;
use crate::sampling::SamplingScheme;
use crate::storage::{StorageOrder, StoragePacking};
use crate::transform::{Samples, TransformParameters, inverse};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexValue {
    pub re: f64,
    #[serde(default)]
    pub im: f64,
}

impl From<ComplexValue> for Complex64 {
    fn from(value: ComplexValue) -> Self {
        Complex64::new(value.re, value.im)
    }
}

impl From<Complex64> for ComplexValue {
    fn from(value: Complex64) -> Self {
        Self {
            re: value.re,
            im: value.im,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(rename = "L")]
    pub harmonic_band_limit: f64,
    #[serde(rename = "N")]
    pub orientational_band_limit: f64,
    #[serde(default = "default_order")]
    pub order: String,
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_n_mode")]
    pub n_mode: String,
    #[serde(default = "default_dl_method")]
    pub dl_method: String,
    #[serde(default = "default_sampling")]
    pub sampling: String,
    #[serde(default)]
    pub reality: bool,
    pub flmn: Vec<ComplexValue>,
}

fn default_order() -> String {
    StorageOrder::default().as_str().to_string()
}

fn default_storage() -> String {
    StoragePacking::default().as_str().to_string()
}

fn default_n_mode() -> String {
    NMode::default().as_str().to_string()
}

fn default_dl_method() -> String {
    WignerRecursion::default().as_str().to_string()
}

fn default_sampling() -> String {
    SamplingScheme::default().as_str().to_string()
}

impl TransformRequest {
    pub fn parameters(&self) -> So3Result<TransformParameters> {
        let harmonic = band_limit("L", self.harmonic_band_limit)?;
        let orientational = band_limit("N", self.orientational_band_limit)?;
        let limits = BandLimits::new(harmonic, orientational)?;

        let order: StorageOrder = self.order.parse()?;
        let packing: StoragePacking = self.storage.parse()?;
        let n_mode: NMode = self.n_mode.parse()?;
        let recursion: WignerRecursion = self.dl_method.parse()?;
        let sampling: SamplingScheme = self.sampling.parse()?;

        let parameters = TransformParameters::new(limits)
            .with_storage(order, packing)
            .with_n_mode(n_mode)
            .with_recursion(recursion)
            .with_sampling(sampling)
            .with_reality(self.reality);
        parameters.require_flmn_len(self.flmn.len())?;
        Ok(parameters)
    }

    pub fn coefficients(&self) -> Vec<Complex64> {
        self.flmn.iter().copied().map(Complex64::from).collect()
    }

    /// Validates, runs the inverse transform and reorders the result for the
    /// caller.
    pub fn execute(&self) -> So3Result<TransformResponse> {
        let parameters = self.parameters()?;
        let samples = inverse(&self.coefficients(), &parameters)?;
        Ok(TransformResponse::from_samples(&samples))
    }
}

/// Positive integer from a continuous host value.
fn band_limit(parameter: &'static str, value: f64) -> So3Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(So3Error::range(
            parameter,
            format!("band-limit must be an integer, got {value}"),
        ));
    }
    if value < 1.0 {
        return Err(So3Error::range(
            parameter,
            format!("band-limit must be positive, got {value}"),
        ));
    }
    if value > MAX_BAND_LIMIT as f64 {
        return Err(So3Error::range(
            parameter,
            format!("band-limit {value} exceeds {MAX_BAND_LIMIT}"),
        ));
    }

    Ok(value as usize)
}

/// Samples in caller-facing order with dimensions `[ngamma, nbeta, nalpha]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub dims: [usize; 3],
    pub reality: bool,
    pub re: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub im: Option<Vec<f64>>,
}

impl TransformResponse {
    pub fn from_samples(samples: &Samples) -> Self {
        match samples {
            Samples::Real(function) => {
                let external = to_external(function);
                Self {
                    dims: external.dims,
                    reality: true,
                    re: external.data,
                    im: None,
                }
            }
            Samples::Complex(function) => {
                let external = to_external(function);
                Self {
                    dims: external.dims,
                    reality: false,
                    re: external.data.iter().map(|value| value.re).collect(),
                    im: Some(external.data.iter().map(|value| value.im).collect()),
                }
            }
        }
    }
}

pub fn parse_request(source: &str) -> Result<TransformRequest, serde_json::Error> {
    serde_json::from_str(source)
}

pub fn render_response(response: &TransformResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(response)
}
