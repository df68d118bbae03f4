//! Control-limit calculator
//!
//! Limits come from the rounded central line values and the scaling factors
//! of the moving-range statistic. Each reported limit is rounded on its own.
//! The lower natural process limit is not clamped: callers that need a floor
//! apply it explicitly.

use crate::strategy::ProcessLines;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use xmr_core::{round_reported, Error, Result, Statistic};

/// Scalar limits of a constant-line chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantLimits {
    /// X central line
    pub x_center: Decimal,
    /// Moving-range central line
    pub mr_center: Decimal,
    /// Upper natural process limit
    pub upper_natural_process_limit: Decimal,
    /// Lower natural process limit, possibly negative
    pub lower_natural_process_limit: Decimal,
    /// Upper range limit
    pub upper_range_limit: Decimal,
    /// Statistic the moving-range central line was computed with
    pub mr_statistic: Statistic,
}

impl ConstantLimits {
    /// Derive the limits from the two central line values.
    ///
    /// # Errors
    ///
    /// [`Error::ArithmeticOverflow`] when a limit leaves the decimal range.
    pub fn from_centers(
        x_center: Decimal,
        mr_center: Decimal,
        mr_statistic: Statistic,
    ) -> Result<Self> {
        let factors = mr_statistic.scaling_factors();
        let half_width = factors
            .limits
            .checked_mul(mr_center)
            .ok_or_else(|| Error::overflow("natural process limit width"))?;
        let upper = x_center
            .checked_add(half_width)
            .ok_or_else(|| Error::overflow("upper natural process limit"))?;
        let lower = x_center
            .checked_sub(half_width)
            .ok_or_else(|| Error::overflow("lower natural process limit"))?;
        let range_limit = factors
            .ranges
            .checked_mul(mr_center)
            .ok_or_else(|| Error::overflow("upper range limit"))?;

        Ok(Self {
            x_center,
            mr_center,
            upper_natural_process_limit: round_reported(upper),
            lower_natural_process_limit: round_reported(lower),
            upper_range_limit: round_reported(range_limit),
            mr_statistic,
        })
    }

    /// Distance from the central line up to the upper limit
    pub fn upper_offset(&self) -> Result<Decimal> {
        self.upper_natural_process_limit
            .checked_sub(self.x_center)
            .ok_or_else(|| Error::overflow("upper limit offset"))
    }

    /// Distance from the lower limit up to the central line
    pub fn lower_offset(&self) -> Result<Decimal> {
        self.x_center
            .checked_sub(self.lower_natural_process_limit)
            .ok_or_else(|| Error::overflow("lower limit offset"))
    }
}

impl ProcessLines for ConstantLimits {
    fn x_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        Ok(vec![self.x_center; n])
    }

    fn mr_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        Ok(vec![self.mr_center; n])
    }

    fn upper_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        Ok(vec![self.upper_natural_process_limit; n])
    }

    fn lower_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        Ok(vec![self.lower_natural_process_limit; n])
    }

    fn upper_range_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        Ok(vec![self.upper_range_limit; n])
    }
}
