use crate::domain::{BandLimits, So3Error, So3Result};
use crate::nmode::{NMode, active_orders};
use crate::numerics::WignerRecursion;
use crate::sampling::{SamplingGrid, SamplingScheme};
use crate::storage::{HarmonicIndex, StorageMethod, StorageOrder, StoragePacking};
use std::fmt::{Display, Formatter};

/// Typed configuration of one transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParameters {
    limits: BandLimits,
    method: StorageMethod,
    n_mode: NMode,
    recursion: WignerRecursion,
    sampling: SamplingScheme,
    reality: bool,
}

impl TransformParameters {
    /// Zero-first padded storage, all orders, Risbo, MW sampling, complex.
    pub fn new(limits: BandLimits) -> Self {
        Self {
            limits,
            method: StorageMethod::default(),
            n_mode: NMode::default(),
            recursion: WignerRecursion::default(),
            sampling: SamplingScheme::default(),
            reality: false,
        }
    }

    pub fn with_band_limits(harmonic: usize, orientational: usize) -> So3Result<Self> {
        Ok(Self::new(BandLimits::new(harmonic, orientational)?))
    }

    pub fn with_storage(mut self, order: StorageOrder, packing: StoragePacking) -> Self {
        self.method = StorageMethod::new(order, packing);
        self
    }

    pub fn with_method(mut self, method: StorageMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_n_mode(mut self, n_mode: NMode) -> Self {
        self.n_mode = n_mode;
        self
    }

    pub fn with_recursion(mut self, recursion: WignerRecursion) -> Self {
        self.recursion = recursion;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingScheme) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_reality(mut self, reality: bool) -> Self {
        self.reality = reality;
        self
    }

    pub const fn limits(&self) -> BandLimits {
        self.limits
    }

    pub const fn method(&self) -> StorageMethod {
        self.method
    }

    pub const fn n_mode(&self) -> NMode {
        self.n_mode
    }

    pub const fn recursion(&self) -> WignerRecursion {
        self.recursion
    }

    pub const fn sampling(&self) -> SamplingScheme {
        self.sampling
    }

    pub const fn reality(&self) -> bool {
        self.reality
    }

    pub const fn index(&self) -> HarmonicIndex {
        HarmonicIndex::new(self.limits, self.method, self.reality)
    }

    pub const fn grid(&self) -> SamplingGrid {
        SamplingGrid::new(self.sampling, self.limits)
    }

    /// Orders visited by the transforms, `n >= 0` only under reality.
    pub fn active_orders(&self) -> Vec<i32> {
        active_orders(self.limits, self.n_mode, self.reality)
    }

    pub(crate) fn require_reality(&self, expected: bool) -> So3Result<()> {
        if self.reality == expected {
            return Ok(());
        }

        let message = if expected {
            "real-valued transform requested with reality=false"
        } else {
            "complex-valued transform requested with reality=true"
        };
        Err(So3Error::range("reality", message))
    }

    pub(crate) fn require_flmn_len(&self, actual: usize) -> So3Result<()> {
        crate::storage::validate_buffer_len(
            self.method,
            self.limits.harmonic(),
            self.limits.orientational(),
            self.reality,
            actual,
        )
    }
}

impl Display for TransformParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} storage={} n_mode={} dl_method={} sampling={} reality={}",
            self.limits, self.method, self.n_mode, self.recursion, self.sampling, self.reality
        )
    }
}
