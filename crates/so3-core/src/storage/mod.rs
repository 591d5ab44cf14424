//! Flat storage of the `(l, m, n)` harmonic coefficients.
//!
//! Four layouts are supported, combining the order in which the `n` blocks
//! are laid out (zero-first or negative-first) with the packing of each block
//! (padded `L^2` rectangles or compact blocks holding only `l >= |n|`). Real
//! functions store only `n >= 0`; the remaining orders follow from the
//! conjugate symmetry exposed by [`RealityView`].

mod index;
mod reality;

pub use index::{HarmonicIndex, compact_size, padded_size};
pub use reality::{RealityView, conjugate_partner, convert_layout, expand_real_coefficients};

use crate::domain::{So3Error, So3Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageOrder {
    /// `n = 0, -1, 1, -2, 2, ...`
    #[default]
    ZeroFirst,
    /// `n = -(N-1), ..., N-1`
    NegFirst,
}

impl StorageOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroFirst => "0first",
            Self::NegFirst => "negfirst",
        }
    }
}

impl FromStr for StorageOrder {
    type Err = So3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0first" => Ok(Self::ZeroFirst),
            "negfirst" => Ok(Self::NegFirst),
            _ => Err(So3Error::invalid_enum("order", value, "0first, negfirst")),
        }
    }
}

impl Display for StorageOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoragePacking {
    #[default]
    Padded,
    Compact,
}

impl StoragePacking {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padded => "padded",
            Self::Compact => "compact",
        }
    }
}

impl FromStr for StoragePacking {
    type Err = So3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "padded" => Ok(Self::Padded),
            "compact" => Ok(Self::Compact),
            _ => Err(So3Error::invalid_enum("storage", value, "padded, compact")),
        }
    }
}

impl Display for StoragePacking {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Order x packing combination used by [`HarmonicIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageMethod {
    #[default]
    ZeroFirstPadded,
    NegFirstPadded,
    ZeroFirstCompact,
    NegFirstCompact,
}

impl StorageMethod {
    pub const ALL: [Self; 4] = [
        Self::ZeroFirstPadded,
        Self::NegFirstPadded,
        Self::ZeroFirstCompact,
        Self::NegFirstCompact,
    ];

    pub const fn new(order: StorageOrder, packing: StoragePacking) -> Self {
        match (order, packing) {
            (StorageOrder::ZeroFirst, StoragePacking::Padded) => Self::ZeroFirstPadded,
            (StorageOrder::NegFirst, StoragePacking::Padded) => Self::NegFirstPadded,
            (StorageOrder::ZeroFirst, StoragePacking::Compact) => Self::ZeroFirstCompact,
            (StorageOrder::NegFirst, StoragePacking::Compact) => Self::NegFirstCompact,
        }
    }

    pub const fn order(self) -> StorageOrder {
        match self {
            Self::ZeroFirstPadded | Self::ZeroFirstCompact => StorageOrder::ZeroFirst,
            Self::NegFirstPadded | Self::NegFirstCompact => StorageOrder::NegFirst,
        }
    }

    pub const fn packing(self) -> StoragePacking {
        match self {
            Self::ZeroFirstPadded | Self::NegFirstPadded => StoragePacking::Padded,
            Self::ZeroFirstCompact | Self::NegFirstCompact => StoragePacking::Compact,
        }
    }

    /// Buffer length for the given band-limits; `None` when it overflows `usize`.
    pub fn size(self, harmonic: usize, orientational: usize, reality: bool) -> Option<usize> {
        match self.packing() {
            StoragePacking::Padded => padded_size(harmonic, orientational, reality),
            StoragePacking::Compact => compact_size(harmonic, orientational, reality),
        }
    }
}

impl Display for StorageMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.order(), self.packing())
    }
}

/// Checks a caller-supplied buffer length against the closed-form size.
pub fn validate_buffer_len(
    method: StorageMethod,
    harmonic: usize,
    orientational: usize,
    reality: bool,
    actual: usize,
) -> So3Result<()> {
    let expected = method.size(harmonic, orientational, reality).ok_or_else(|| {
        So3Error::range(
            "L",
            format!("band-limits L={harmonic} N={orientational} are too large to address"),
        )
    })?;
    if actual != expected {
        return Err(So3Error::shape("flmn", expected, actual));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{StorageMethod, StorageOrder, StoragePacking, validate_buffer_len};
    use crate::domain::So3ErrorCategory;

    #[test]
    fn enums_parse_host_strings() {
        assert_eq!("0first".parse::<StorageOrder>(), Ok(StorageOrder::ZeroFirst));
        assert_eq!("negfirst".parse::<StorageOrder>(), Ok(StorageOrder::NegFirst));
        assert_eq!("compact".parse::<StoragePacking>(), Ok(StoragePacking::Compact));

        let error = "zerofirst"
            .parse::<StorageOrder>()
            .expect_err("unknown order should fail");
        assert_eq!(error.category(), So3ErrorCategory::EnumError);
        assert_eq!(error.placeholder(), "INPUT.ORDER");
    }

    #[test]
    fn storage_method_splits_back_into_order_and_packing() {
        for method in StorageMethod::ALL {
            assert_eq!(StorageMethod::new(method.order(), method.packing()), method);
        }
        assert_eq!(StorageMethod::NegFirstCompact.to_string(), "negfirst/compact");
    }

    #[test]
    fn buffer_length_must_match_closed_form() {
        assert!(validate_buffer_len(StorageMethod::ZeroFirstPadded, 2, 1, false, 4).is_ok());
        let error = validate_buffer_len(StorageMethod::ZeroFirstCompact, 4, 3, false, 40)
            .expect_err("wrong length should fail");
        assert_eq!(error.category(), So3ErrorCategory::ShapeError);
        assert!(error.to_string().contains("expected 70"));
    }
}
