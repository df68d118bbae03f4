//! Constant central lines over the baseline window

use rust_decimal::Decimal;
use std::ops::Range;
use xmr_core::{location, round_reported, Error, Result, Statistic};

/// X central line value over `values[window]`, rounded for reporting.
pub fn x_center(values: &[Decimal], window: Range<usize>, statistic: Statistic) -> Result<Decimal> {
    let baseline = values
        .get(window.clone())
        .ok_or_else(|| Error::invalid_window(window.start, window.end, values.len()))?;
    location(statistic, baseline).map(round_reported)
}

/// Moving-range central line value over the ranges inside `window`.
///
/// Only ranges whose two endpoints both lie in the window count, i.e.
/// `moving_ranges[start + 1..end]`; the leading sentinel never does.
///
/// # Errors
///
/// [`Error::InsufficientData`] when the window holds fewer than two observations.
pub fn mr_center(
    moving_ranges: &[Option<Decimal>],
    window: Range<usize>,
    statistic: Statistic,
) -> Result<Decimal> {
    let ranges: Vec<Decimal> = moving_ranges
        .get(window.start + 1..window.end)
        .unwrap_or(&[])
        .iter()
        .flatten()
        .copied()
        .collect();

    if ranges.is_empty() {
        return Err(Error::empty_input(2, window.len()));
    }
    location(statistic, &ranges).map(round_reported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moving_range::moving_ranges;
    use std::str::FromStr;

    fn decs(values: &[&str]) -> Vec<Decimal> {
        values.iter().map(|s| Decimal::from_str(s).unwrap()).collect()
    }

    #[test]
    fn test_average_centers() {
        let values = decs(&["1", "10", "100", "50"]);
        let mr = moving_ranges(&values).unwrap();
        assert_eq!(x_center(&values, 0..4, Statistic::Average).unwrap().to_string(), "40.250");
        assert_eq!(mr_center(&mr, 0..4, Statistic::Average).unwrap().to_string(), "49.667");
    }

    #[test]
    fn test_median_centers() {
        let values = decs(&[
            "2.5", "2.3", "16.3", "6.3", "7.6", "16.3", "7.1", "7.8", "7.8", "9.9", "10.5", "-4.8",
        ]);
        let mr = moving_ranges(&values).unwrap();
        assert_eq!(x_center(&values, 0..12, Statistic::Median).unwrap().to_string(), "7.700");
        assert_eq!(mr_center(&mr, 0..12, Statistic::Median).unwrap().to_string(), "2.100");
    }

    #[test]
    fn test_subset_window() {
        let values = decs(&["1", "3", "5", "100"]);
        let mr = moving_ranges(&values).unwrap();
        assert_eq!(x_center(&values, 0..3, Statistic::Average).unwrap(), Decimal::from(3));
        // ranges 2 and 2; the jump to 100 lies outside the window
        assert_eq!(mr_center(&mr, 0..3, Statistic::Average).unwrap(), Decimal::from(2));
        // window [1, 3) holds one range, |5 - 3|
        assert_eq!(mr_center(&mr, 1..3, Statistic::Average).unwrap(), Decimal::from(2));
    }

    #[test]
    fn test_too_small_windows() {
        let values = decs(&["1", "3"]);
        let mr = moving_ranges(&values).unwrap();
        assert!(x_center(&values, 1..1, Statistic::Average).is_err());
        assert!(matches!(
            mr_center(&mr, 1..2, Statistic::Average),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(mr_center(&mr, 2..2, Statistic::Median).is_err());
    }

    #[test]
    fn test_baseline_sum_overflow() {
        let values = decs(&["50000000000000000000000000000", "50000000000000000000000000000"]);
        assert!(matches!(
            x_center(&values, 0..2, Statistic::Average),
            Err(Error::ArithmeticOverflow(_))
        ));
        // ranges of 0 stay well inside the decimal range
        let mr = moving_ranges(&values).unwrap();
        assert_eq!(mr_center(&mr, 0..2, Statistic::Average).unwrap(), Decimal::ZERO);
    }
}
