//! Central line strategies
//!
//! A series picks exactly one strategy at construction. Every strategy
//! answers the same questions through [`ProcessLines`], so the rules and the
//! exporters never need to know which one is in force.

use crate::config::Shape;
use crate::limits::ConstantLimits;
use crate::trend::TrendingLimits;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use xmr_core::{round_reported, Error, Result, Statistic};

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Per-index lines of an XmR chart
///
/// `n` is the series length; every method returns exactly `n` values, or
/// [`Error::ArithmeticOverflow`] when a line leaves the decimal range.
pub trait ProcessLines {
    /// X central line
    fn x_central_line(&self, n: usize) -> Result<Vec<Decimal>>;

    /// Moving-range central line
    fn mr_central_line(&self, n: usize) -> Result<Vec<Decimal>>;

    /// Upper natural process limit
    fn upper_limit(&self, n: usize) -> Result<Vec<Decimal>>;

    /// Lower natural process limit
    fn lower_limit(&self, n: usize) -> Result<Vec<Decimal>>;

    /// Upper range limit of the moving-range chart
    fn upper_range_limit(&self, n: usize) -> Result<Vec<Decimal>>;

    /// Halfway between the central line and the upper limit.
    ///
    /// About 85% of the values of a predictable process fall between the
    /// two halfway lines.
    fn upper_halfway_line(&self, n: usize) -> Result<Vec<Decimal>> {
        self.x_central_line(n)?
            .into_iter()
            .zip(self.upper_limit(n)?)
            .map(|(cl, upper)| halfway(cl, upper, "upper halfway line"))
            .collect()
    }

    /// Halfway between the lower limit and the central line
    fn lower_halfway_line(&self, n: usize) -> Result<Vec<Decimal>> {
        self.lower_limit(n)?
            .into_iter()
            .zip(self.x_central_line(n)?)
            .map(|(lower, cl)| halfway(lower, cl, "lower halfway line"))
            .collect()
    }
}

/// `from + (to - from) / 2`, rounded for reporting
fn halfway(from: Decimal, to: Decimal, context: &str) -> Result<Decimal> {
    to.checked_sub(from)
        .and_then(|span| (span * HALF).checked_add(from))
        .map(round_reported)
        .ok_or_else(|| Error::overflow(context))
}

/// Closed set of central line strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CentralLineStrategy {
    /// Mean of the baseline, broadcast
    ConstantAverage,
    /// Median of the baseline, broadcast
    ConstantMedian,
    /// Line through the baseline half-averages; the band width comes from
    /// the constant strategy with the given statistic
    Trending(Statistic),
}

impl CentralLineStrategy {
    /// Select the strategy for an X statistic and a line shape
    pub fn select(x_statistic: Statistic, shape: Shape) -> Self {
        match (shape, x_statistic) {
            (Shape::Constant, Statistic::Average) => Self::ConstantAverage,
            (Shape::Constant, Statistic::Median) => Self::ConstantMedian,
            (Shape::Trending, statistic) => Self::Trending(statistic),
        }
    }

    /// Statistic of the constant X central line
    pub fn x_statistic(&self) -> Statistic {
        match self {
            Self::ConstantAverage => Statistic::Average,
            Self::ConstantMedian => Statistic::Median,
            Self::Trending(statistic) => *statistic,
        }
    }

    /// Shape of the X central line
    pub fn shape(&self) -> Shape {
        match self {
            Self::Trending(_) => Shape::Trending,
            _ => Shape::Constant,
        }
    }

    /// Whether the central line follows a trend
    pub fn is_trending(&self) -> bool {
        matches!(self, Self::Trending(_))
    }
}

impl fmt::Display for CentralLineStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantAverage => write!(f, "constant average"),
            Self::ConstantMedian => write!(f, "constant median"),
            Self::Trending(statistic) => write!(f, "trending ({statistic} band)"),
        }
    }
}

/// Lines resolved for one series under its strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedLines {
    /// Constant strategies
    Constant(ConstantLimits),
    /// Trending strategy
    Trending(TrendingLimits),
}

impl ResolvedLines {
    /// Constant-mode limits; for a trending chart, the ones its band width comes from
    pub fn constant_limits(&self) -> &ConstantLimits {
        match self {
            Self::Constant(limits) => limits,
            Self::Trending(trending) => &trending.base,
        }
    }

    /// Slope of the central line, `None` for constant lines
    pub fn slope(&self) -> Option<Decimal> {
        match self {
            Self::Constant(_) => None,
            Self::Trending(trending) => Some(trending.trend.slope()),
        }
    }
}

impl ProcessLines for ResolvedLines {
    fn x_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        match self {
            Self::Constant(lines) => lines.x_central_line(n),
            Self::Trending(lines) => lines.x_central_line(n),
        }
    }

    fn mr_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        match self {
            Self::Constant(lines) => lines.mr_central_line(n),
            Self::Trending(lines) => lines.mr_central_line(n),
        }
    }

    fn upper_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        match self {
            Self::Constant(lines) => lines.upper_limit(n),
            Self::Trending(lines) => lines.upper_limit(n),
        }
    }

    fn lower_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        match self {
            Self::Constant(lines) => lines.lower_limit(n),
            Self::Trending(lines) => lines.lower_limit(n),
        }
    }

    fn upper_range_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        match self {
            Self::Constant(lines) => lines.upper_range_limit(n),
            Self::Trending(lines) => lines.upper_range_limit(n),
        }
    }
}
