use super::{StorageMethod, StorageOrder, StoragePacking};
use crate::domain::{BandLimits, HarmonicTriple, So3Error, So3Result};

/// Padded buffer length: `N L^2` (real) or `(2N-1) L^2` (complex).
///
/// `None` when the length does not fit in `usize`.
pub fn padded_size(harmonic: usize, orientational: usize, reality: bool) -> Option<usize> {
    harmonic
        .checked_mul(harmonic)?
        .checked_mul(block_total(orientational, reality)?)
}

/// Compact buffer length: `N L^2 - sum_{k<N} k^2` (real) or
/// `(2N-1) L^2 - 2 sum_{k<N} k^2` (complex).
///
/// `None` when the length does not fit in `usize`.
pub fn compact_size(harmonic: usize, orientational: usize, reality: bool) -> Option<usize> {
    let padded = u128::try_from(padded_size(harmonic, orientational, reality)?).ok()?;
    let squares = sum_of_squares(i128::try_from(orientational.saturating_sub(1)).ok()?)?;
    let removed = if reality { squares } else { squares.checked_mul(2)? };
    let compact = padded.checked_sub(u128::try_from(removed).ok()?)?;
    usize::try_from(compact).ok()
}

/// Number of stored order blocks.
fn block_total(orientational: usize, reality: bool) -> Option<usize> {
    if reality {
        Some(orientational)
    } else {
        orientational.checked_mul(2)?.checked_sub(1)
    }
}

/// `sum_{j=1}^{k} j^2`, zero for `k <= 0`.
fn sum_of_squares(k: i128) -> Option<i128> {
    if k <= 0 {
        return Some(0);
    }
    Some(k.checked_mul(k + 1)?.checked_mul(2 * k + 1)? / 6)
}

/// Bidirectional map between valid `(l, m, n)` triples and buffer offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HarmonicIndex {
    limits: BandLimits,
    method: StorageMethod,
    reality: bool,
}

impl HarmonicIndex {
    pub const fn new(limits: BandLimits, method: StorageMethod, reality: bool) -> Self {
        Self {
            limits,
            method,
            reality,
        }
    }

    pub const fn limits(&self) -> BandLimits {
        self.limits
    }

    pub const fn method(&self) -> StorageMethod {
        self.method
    }

    pub const fn reality(&self) -> bool {
        self.reality
    }

    /// Buffer length. [`BandLimits`] only admits limits whose complex padded
    /// buffer is addressable, so the closed form never overflows here.
    pub fn size(&self) -> usize {
        self.method
            .size(
                self.limits.harmonic(),
                self.limits.orientational(),
                self.reality,
            )
            .unwrap_or(usize::MAX)
    }

    pub const fn block_count(&self) -> usize {
        let orientational = self.limits.orientational();
        if self.reality {
            orientational
        } else {
            2 * orientational - 1
        }
    }

    /// Stored orders `n` in buffer order.
    pub fn stored_orders(&self) -> Vec<i32> {
        (0..self.block_count())
            .map(|position| self.order_at(position))
            .collect()
    }

    /// Buffer offset of `(l, m, n)`.
    pub fn offset(&self, l: i32, m: i32, n: i32) -> So3Result<usize> {
        self.check_triple(l, m, n)?;

        let (degree, order) = (i64::from(l), i64::from(m));
        let skipped = match self.method.packing() {
            StoragePacking::Padded => 0,
            StoragePacking::Compact => i64::from(n) * i64::from(n),
        };
        let within_block = degree * degree - skipped + degree + order;

        Ok(self.block_start(n) + within_block as usize)
    }

    pub fn offset_of(&self, triple: HarmonicTriple) -> So3Result<usize> {
        self.offset(triple.l, triple.m, triple.n)
    }

    /// Triple stored at `offset`; `None` for padding slots (`l < |n|`).
    pub fn decode(&self, offset: usize) -> So3Result<Option<HarmonicTriple>> {
        let size = self.size();
        if offset >= size {
            return Err(So3Error::Offset { offset, size });
        }

        let (n, within_block) = match self.method.packing() {
            StoragePacking::Padded => {
                let block = self.padded_block_len();
                (self.order_at(offset / block), offset % block)
            }
            StoragePacking::Compact => {
                let mut remaining = offset;
                let mut located = None;
                for n in self.stored_orders() {
                    let len = self.block_len(n);
                    if remaining < len {
                        located = Some(n);
                        break;
                    }
                    remaining -= len;
                }
                let n = located.ok_or(So3Error::Offset { offset, size })?;
                (n, remaining + (i64::from(n) * i64::from(n)) as usize)
            }
        };

        let l = within_block.isqrt();
        let m = within_block as i64 - (l * l + l) as i64;
        let l = l as i32;
        if l < n.abs() {
            return Ok(None);
        }

        Ok(Some(HarmonicTriple::new(l, m as i32, n)))
    }

    /// Valid triples in buffer order, padding slots skipped.
    pub fn triples(&self) -> Vec<HarmonicTriple> {
        let max_degree = self.limits.max_degree();
        let mut triples = Vec::with_capacity(self.size());
        for n in self.stored_orders() {
            for l in n.abs()..=max_degree {
                for m in -l..=l {
                    triples.push(HarmonicTriple::new(l, m, n));
                }
            }
        }

        triples
    }

    fn check_triple(&self, l: i32, m: i32, n: i32) -> So3Result<()> {
        if l < 0 || l > self.limits.max_degree() {
            return Err(So3Error::index(l, m, n, "degree outside harmonic band-limit"));
        }
        if m.abs() > l {
            return Err(So3Error::index(l, m, n, "|m| exceeds l"));
        }
        if n.abs() > l {
            return Err(So3Error::index(l, m, n, "|n| exceeds l"));
        }
        if n.abs() > self.limits.max_order() {
            return Err(So3Error::index(
                l,
                m,
                n,
                "|n| outside orientational band-limit",
            ));
        }
        if self.reality && n < 0 {
            return Err(So3Error::index(
                l,
                m,
                n,
                "negative n is not stored for real functions; derive it by conjugate symmetry",
            ));
        }

        Ok(())
    }

    const fn padded_block_len(&self) -> usize {
        self.limits.harmonic() * self.limits.harmonic()
    }

    fn block_len(&self, n: i32) -> usize {
        match self.method.packing() {
            StoragePacking::Padded => self.padded_block_len(),
            StoragePacking::Compact => {
                self.padded_block_len() - (i64::from(n) * i64::from(n)) as usize
            }
        }
    }

    fn order_at(&self, position: usize) -> i32 {
        let position = position as i32;
        if self.reality {
            return position;
        }

        match self.method.order() {
            StorageOrder::ZeroFirst => {
                if position % 2 == 1 {
                    -(position + 1) / 2
                } else {
                    position / 2
                }
            }
            StorageOrder::NegFirst => position - self.limits.max_order(),
        }
    }

    fn block_position(&self, n: i32) -> usize {
        if self.reality {
            return n as usize;
        }

        match self.method.order() {
            StorageOrder::ZeroFirst => {
                if n < 0 {
                    (-2 * n - 1) as usize
                } else {
                    (2 * n) as usize
                }
            }
            StorageOrder::NegFirst => (n + self.limits.max_order()) as usize,
        }
    }

    fn block_start(&self, n: i32) -> usize {
        if self.method.packing() == StoragePacking::Padded {
            return self.block_position(n) * self.padded_block_len();
        }

        let l2 = self.padded_block_len() as i128;
        let k = i128::from(n.abs());
        let squares = |k: i128| sum_of_squares(k).unwrap_or(0);
        let start = if self.reality {
            k * l2 - squares(k - 1)
        } else {
            match self.method.order() {
                StorageOrder::ZeroFirst => {
                    if n == 0 {
                        0
                    } else {
                        let negative_start = (2 * k - 1) * l2 - 2 * squares(k - 1);
                        if n < 0 {
                            negative_start
                        } else {
                            negative_start + l2 - k * k
                        }
                    }
                }
                StorageOrder::NegFirst => {
                    let max_order = i128::from(self.limits.max_order());
                    let n = i128::from(n);
                    let preceding = n + max_order;
                    let preceding_squares = if n <= 0 {
                        squares(max_order) - squares(-n)
                    } else {
                        squares(max_order) + squares(n - 1)
                    };
                    preceding * l2 - preceding_squares
                }
            }
        };

        start as usize
    }
}
