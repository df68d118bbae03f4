//! Value access shared by the detection scans
//!
//! The X chart is a sequence of observations, the mR chart a sequence whose
//! first element is absent. Both go through the same scans, so the scans are
//! written against [`ChartValue`] instead of a concrete element type.

use rust_decimal::Decimal;

/// A plotted point that may be absent
pub trait ChartValue {
    /// The value at this point, or `None` for the moving-range sentinel
    fn observed(&self) -> Option<Decimal>;
}

impl ChartValue for Decimal {
    #[inline]
    fn observed(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl ChartValue for Option<Decimal> {
    #[inline]
    fn observed(&self) -> Option<Decimal> {
        *self
    }
}

/// Check that a limit or line sequence is aligned with the plotted values.
pub(crate) fn ensure_aligned(
    values_len: usize,
    line: &[Decimal],
    context: &str,
) -> xmr_core::Result<()> {
    if line.len() != values_len {
        return Err(xmr_core::Error::size_mismatch(values_len, line.len(), context));
    }
    Ok(())
}
