//! Rounding of reported values
//!
//! Every reported derived value is rounded on its own to
//! [`REPORTED_DECIMAL_PLACES`] using round-half-to-even. Intermediate
//! products are never rounded, so chained identities such as
//! `upper - central == central - lower` may be off by a thousandth.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on reported values
pub const REPORTED_DECIMAL_PLACES: u32 = 3;

/// Round a derived value for reporting.
#[inline]
pub fn round_reported(value: Decimal) -> Decimal {
    let mut rounded = value
        .round_dp_with_strategy(REPORTED_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    // fixed scale so 4 reports as 4.000
    rounded.rescale(REPORTED_DECIMAL_PLACES);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_even() {
        assert_eq!(round_reported(d("8.1165")), d("8.116"));
        assert_eq!(round_reported(d("14.0715")), d("14.072"));
        assert_eq!(round_reported(d("0.8625")), d("0.862"));
        assert_eq!(round_reported(d("-91.86422")), d("-91.864"));
    }

    #[test]
    fn test_fixed_scale() {
        assert_eq!(round_reported(d("4")).to_string(), "4.000");
        assert_eq!(round_reported(d("13.7")).to_string(), "13.700");
    }
}
