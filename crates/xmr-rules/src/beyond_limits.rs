//! Rule 1: points beyond the limits
//!
//! A single point outside the computed limits on either the X chart or the
//! mR chart indicates an assignable cause with a *dominant* effect.

use crate::traits::{ensure_aligned, ChartValue};
use rust_decimal::Decimal;
use xmr_core::Result;

/// Flag every point strictly outside `[lower[i], upper[i]]`.
///
/// A value equal to a limit is in control. Without `lower` only the upper
/// limit is checked, which is how the mR chart is read. Absent points are
/// never flagged.
///
/// # Errors
///
/// Fails when `upper` or `lower` is not aligned with `values`.
pub fn points_beyond_limits<V: ChartValue>(
    values: &[V],
    upper: &[Decimal],
    lower: Option<&[Decimal]>,
) -> Result<Vec<bool>> {
    ensure_aligned(values.len(), upper, "upper limits")?;
    if let Some(lower) = lower {
        ensure_aligned(values.len(), lower, "lower limits")?;
    }

    let flags: Vec<bool> = values
        .iter()
        .enumerate()
        .map(|(i, v)| match v.observed() {
            None => false,
            Some(x) => x > upper[i] || lower.is_some_and(|lower| x < lower[i]),
        })
        .collect();

    log::trace!(
        "points beyond limits: {} of {} flagged",
        flags.iter().filter(|&&f| f).count(),
        flags.len()
    );
    Ok(flags)
}
