//! Location statistics over exact decimals

use crate::error::{Error, Result};
use crate::scaling::Statistic;
use rust_decimal::Decimal;

/// Arithmetic mean.
///
/// # Errors
///
/// - [`Error::InsufficientData`] when `values` is empty
/// - [`Error::ArithmeticOverflow`] when the running sum leaves the decimal range
pub fn mean(values: &[Decimal]) -> Result<Decimal> {
    if values.is_empty() {
        return Err(Error::empty_input(1, 0));
    }
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, &v| acc.checked_add(v))
        .ok_or_else(|| Error::overflow("mean"))?;
    Ok(sum / Decimal::from(values.len()))
}

/// Median; the mean of the two middle values for even lengths.
///
/// # Errors
///
/// [`Error::InsufficientData`] when `values` is empty, and
/// [`Error::ArithmeticOverflow`] when the two middle values cannot be added.
pub fn median(values: &[Decimal]) -> Result<Decimal> {
    if values.is_empty() {
        return Err(Error::empty_input(1, 0));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    if n % 2 == 0 {
        let pair = sorted[n / 2 - 1]
            .checked_add(sorted[n / 2])
            .ok_or_else(|| Error::overflow("median"))?;
        Ok(pair / Decimal::TWO)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Apply `statistic` to `values`.
pub fn location(statistic: Statistic, values: &[Decimal]) -> Result<Decimal> {
    match statistic {
        Statistic::Average => mean(values),
        Statistic::Median => median(values),
    }
}
