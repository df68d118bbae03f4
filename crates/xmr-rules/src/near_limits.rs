//! Rule 3: runs near the limits
//!
//! Three out of four successive values in the upper 25% of the region between
//! the limits, or three out of four in the lower 25%, indicate an assignable
//! cause with a *moderate* but sustained effect.

use crate::traits::{ensure_aligned, ChartValue};
use rust_decimal::Decimal;
use xmr_core::Result;

/// Number of successive points examined together
pub const WINDOW: usize = 4;

/// Minimum absolute sum of proximities in a window that signals
pub const MIN_NEAR_LIMIT: i32 = 3;

const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const THREE_QUARTERS: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Where a point sits between its limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Strictly above the upper quarter point
    NearUpper,
    /// Strictly below the lower quarter point
    NearLower,
    /// Anywhere else, including exactly on a quarter point
    Neutral,
}

impl Proximity {
    /// Classify `value` against the band `[lower, upper]`.
    ///
    /// Quarter points are weighted sums of the two limits, which stay inside
    /// the decimal range for any pair of limits.
    pub fn classify(value: Decimal, lower: Decimal, upper: Decimal) -> Self {
        let lower_quarter = THREE_QUARTERS * lower + QUARTER * upper;
        let upper_quarter = QUARTER * lower + THREE_QUARTERS * upper;

        if value > upper_quarter {
            Proximity::NearUpper
        } else if value < lower_quarter {
            Proximity::NearLower
        } else {
            Proximity::Neutral
        }
    }

    /// +1 near the upper limit, -1 near the lower limit, 0 otherwise
    pub fn sign(self) -> i32 {
        match self {
            Proximity::NearUpper => 1,
            Proximity::NearLower => -1,
            Proximity::Neutral => 0,
        }
    }
}

/// Flag every window of four successive points where at least three sit near
/// the same limit and are not cancelled by the fourth.
///
/// Quarter points are recomputed at each index, so trending bands work. Absent
/// points count as neutral and are never flagged.
///
/// # Errors
///
/// Fails when `upper` or `lower` is not aligned with `values`.
pub fn runs_near_limits<V: ChartValue>(
    values: &[V],
    upper: &[Decimal],
    lower: &[Decimal],
) -> Result<Vec<bool>> {
    ensure_aligned(values.len(), upper, "upper limits")?;
    ensure_aligned(values.len(), lower, "lower limits")?;

    let signs: Vec<i32> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.observed()
                .map_or(0, |x| Proximity::classify(x, lower[i], upper[i]).sign())
        })
        .collect();

    let mut flags = vec![false; values.len()];
    for (start, window) in signs.windows(WINDOW).enumerate() {
        if window.iter().sum::<i32>().abs() < MIN_NEAR_LIMIT {
            continue;
        }
        for j in start..start + WINDOW {
            if values[j].observed().is_some() {
                flags[j] = true;
            }
        }
    }

    log::trace!(
        "runs near limits: {} of {} flagged",
        flags.iter().filter(|&&f| f).count(),
        flags.len()
    );
    Ok(flags)
}
