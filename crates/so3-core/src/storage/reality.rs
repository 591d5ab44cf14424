use super::HarmonicIndex;
use crate::domain::{So3Error, So3Result};
use num_complex::Complex64;

/// Coefficient at `(l, -m, -n)` of a real function whose `(l, m, n)`
/// coefficient is `value`: `(-1)^(m+n) conj(value)`.
pub fn conjugate_partner(m: i32, n: i32, value: Complex64) -> Complex64 {
    let conjugate = value.conj();
    if (m + n).rem_euclid(2) == 0 {
        conjugate
    } else {
        -conjugate
    }
}

/// Full-range `(l, m, n)` accessor over a coefficient buffer.
///
/// For a real-function buffer only `n >= 0` is stored; negative orders are
/// computed on read from their conjugate partner instead of being
/// materialized.
#[derive(Debug, Clone, Copy)]
pub struct RealityView<'a> {
    index: HarmonicIndex,
    flmn: &'a [Complex64],
}

impl<'a> RealityView<'a> {
    pub fn new(index: HarmonicIndex, flmn: &'a [Complex64]) -> So3Result<Self> {
        if flmn.len() != index.size() {
            return Err(So3Error::shape("flmn", index.size(), flmn.len()));
        }

        Ok(Self { index, flmn })
    }

    pub const fn index(&self) -> HarmonicIndex {
        self.index
    }

    pub fn get(&self, l: i32, m: i32, n: i32) -> So3Result<Complex64> {
        if self.index.reality() && n < 0 {
            let stored = self.flmn[self.index.offset(l, -m, -n)?];
            return Ok(conjugate_partner(-m, -n, stored));
        }

        Ok(self.flmn[self.index.offset(l, m, n)?])
    }
}

/// Re-encodes `flmn` from the `from` layout into the `to` layout.
///
/// Both layouts must share band-limits. Converting a real-function buffer
/// into a complex layout fills the negative orders by conjugate symmetry;
/// the reverse direction keeps only `n >= 0`.
pub fn convert_layout(
    from: HarmonicIndex,
    flmn: &[Complex64],
    to: HarmonicIndex,
) -> So3Result<Vec<Complex64>> {
    if from.limits() != to.limits() {
        return Err(So3Error::range(
            "to",
            format!(
                "target layout band-limits {} differ from source {}",
                to.limits(),
                from.limits()
            ),
        ));
    }

    let view = RealityView::new(from, flmn)?;
    let mut converted = vec![Complex64::new(0.0, 0.0); to.size()];
    for triple in to.triples() {
        converted[to.offset_of(triple)?] = view.get(triple.l, triple.m, triple.n)?;
    }

    Ok(converted)
}

/// Expands a real-function buffer into the complex layout of the same
/// order and packing.
pub fn expand_real_coefficients(
    index: HarmonicIndex,
    flmn: &[Complex64],
) -> So3Result<(HarmonicIndex, Vec<Complex64>)> {
    if !index.reality() {
        return Err(So3Error::range(
            "reality",
            "expansion requires a real-function coefficient layout",
        ));
    }

    let complex_index = HarmonicIndex::new(index.limits(), index.method(), false);
    let expanded = convert_layout(index, flmn, complex_index)?;
    Ok((complex_index, expanded))
}
