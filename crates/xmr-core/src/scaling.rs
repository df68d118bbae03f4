//! Scaling factors and the statistic that selects them
//!
//! The constants convert an average or median moving range into the width of
//! the natural process limits and the upper range limit. They come from
//! Wheeler, *Making Sense of Data*, and are process-wide read-only data.

use crate::error::Error;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Location statistic used for a central line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Arithmetic mean
    #[default]
    Average,
    /// Statistical median
    Median,
}

impl Statistic {
    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Average => "average",
            Statistic::Median => "median",
        }
    }

    /// Scaling factors for limits derived from this moving-range statistic
    pub const fn scaling_factors(self) -> ScalingFactors {
        match self {
            Statistic::Average => AVERAGE_FACTORS,
            Statistic::Median => MEDIAN_FACTORS,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "mean" => Ok(Statistic::Average),
            "median" => Ok(Statistic::Median),
            other => Err(Error::InvalidParameter(format!(
                "statistic must be 'average' or 'median', got '{other}'"
            ))),
        }
    }
}

/// Pair of scaling factors for one statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingFactors {
    /// Multiplier from moving-range central line to natural process limit width
    pub limits: Decimal,
    /// Multiplier from moving-range central line to upper range limit
    pub ranges: Decimal,
}

/// Factors for average moving ranges (2.660, 3.268)
pub const AVERAGE_FACTORS: ScalingFactors = ScalingFactors {
    limits: Decimal::from_parts(2660, 0, 0, false, 3),
    ranges: Decimal::from_parts(3268, 0, 0, false, 3),
};

/// Factors for median moving ranges (3.145, 3.865)
pub const MEDIAN_FACTORS: ScalingFactors = ScalingFactors {
    limits: Decimal::from_parts(3145, 0, 0, false, 3),
    ranges: Decimal::from_parts(3865, 0, 0, false, 3),
};
