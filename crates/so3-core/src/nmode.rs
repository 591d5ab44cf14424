//! Selection of the orientational orders that take part in a transform.
//!
//! Callers that know their function only carries even (or odd, or extremal)
//! orders can skip the remaining ones. Excluded orders are never read from
//! the coefficient buffer and contribute zero.

use crate::domain::{BandLimits, So3Error};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NMode {
    #[default]
    All,
    Even,
    Odd,
    /// Only `n = +/-(N-1)`.
    Maximum,
}

impl NMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Even => "even",
            Self::Odd => "odd",
            Self::Maximum => "maximum",
        }
    }

    pub const fn is_active(self, n: i32, limits: BandLimits) -> bool {
        match self {
            Self::All => true,
            Self::Even => n % 2 == 0,
            Self::Odd => n % 2 != 0,
            Self::Maximum => n.abs() == limits.max_order(),
        }
    }
}

impl FromStr for NMode {
    type Err = So3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            "maximum" => Ok(Self::Maximum),
            _ => Err(So3Error::invalid_enum(
                "n_mode",
                value,
                "all, even, odd, maximum",
            )),
        }
    }
}

impl Display for NMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Active orders in ascending `n`; `n >= 0` only under reality.
pub fn active_orders(limits: BandLimits, mode: NMode, reality: bool) -> Vec<i32> {
    let max_order = limits.max_order();
    let lowest = if reality { 0 } else { -max_order };
    (lowest..=max_order)
        .filter(|n| mode.is_active(*n, limits))
        .collect()
}
