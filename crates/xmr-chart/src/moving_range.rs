//! Moving ranges: absolute differences between successive values

use rust_decimal::Decimal;
use xmr_core::{Error, Result};

/// Derive the moving ranges of `values`.
///
/// The result is aligned with `values`: index 0 has no predecessor and is
/// `None`, index `k` holds `|values[k] - values[k - 1]|`.
///
/// # Errors
///
/// [`Error::ArithmeticOverflow`] when a difference leaves the decimal range.
pub fn moving_ranges(values: &[Decimal]) -> Result<Vec<Option<Decimal>>> {
    let mut result = Vec::with_capacity(values.len());
    if values.is_empty() {
        return Ok(result);
    }
    result.push(None);
    for (k, pair) in values.windows(2).enumerate() {
        let diff = pair[1]
            .checked_sub(pair[0])
            .ok_or_else(|| Error::overflow(&format!("moving range {}", k + 1)))?;
        result.push(Some(diff.abs()));
    }
    Ok(result)
}
