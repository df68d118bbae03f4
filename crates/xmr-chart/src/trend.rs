//! Trending central lines
//!
//! The baseline window is split into two halves of `len / 2` observations
//! (the first from the window start, the second ending at the window end).
//! The slope is the difference of the half-averages divided by the half
//! length, and the line passes through the first half-average at the middle
//! of the first half. Limits keep the constant-mode band width and follow
//! the line.
//!
//! Reference: Wheeler, *Making Sense of Data*, ch. 12 "Charts for Each Region".

use crate::limits::ConstantLimits;
use crate::strategy::ProcessLines;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use xmr_core::{mean, Error, Result};

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Straight central line fitted to the baseline half-averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendLine {
    anchor: usize,
    anchor_value: Decimal,
    slope: Decimal,
}

impl TrendLine {
    /// Fit the line to `values[window]`.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientDataForTrend`] when the window holds fewer than
    ///   two observations
    /// - [`Error::ArithmeticOverflow`] when a half-average or the difference
    ///   between them leaves the decimal range
    pub fn fit(values: &[Decimal], window: Range<usize>) -> Result<Self> {
        let baseline = values
            .get(window.clone())
            .ok_or_else(|| Error::invalid_window(window.start, window.end, values.len()))?;

        let half = baseline.len() / 2;
        if half == 0 {
            return Err(Error::InsufficientDataForTrend {
                window_len: baseline.len(),
            });
        }

        let first = mean(&baseline[..half])?;
        let second = mean(&baseline[baseline.len() - half..])?;
        let rise = second
            .checked_sub(first)
            .ok_or_else(|| Error::overflow("trend slope"))?;
        let slope = rise / Decimal::from(half);

        // With an even half length the true midpoint falls between two
        // indices; anchor on the later one, half a step along the line.
        let anchor = window.start + half / 2;
        let anchor_value = if half % 2 == 1 {
            first
        } else {
            first
                .checked_add(HALF * slope)
                .ok_or_else(|| Error::overflow("trend anchor"))?
        };

        log::debug!(
            "trend fitted over [{}, {}): half={half}, slope={slope}, anchor {anchor}={anchor_value}",
            window.start,
            window.end
        );

        Ok(Self {
            anchor,
            anchor_value,
            slope,
        })
    }

    /// Change of the central line per index step
    pub fn slope(&self) -> Decimal {
        self.slope
    }

    /// Index the line is anchored at
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Central line value at the anchor
    pub fn anchor_value(&self) -> Decimal {
        self.anchor_value
    }

    /// Central line values at indices `0..n`.
    ///
    /// Built by stepping out from the anchor, so consecutive values differ
    /// by exactly the slope.
    ///
    /// # Errors
    ///
    /// [`Error::ArithmeticOverflow`] when the line leaves the decimal range
    /// before index `n`.
    pub fn line(&self, n: usize) -> Result<Vec<Decimal>> {
        let len = n.max(self.anchor + 1);
        let mut line = vec![Decimal::ZERO; len];

        line[self.anchor] = self.anchor_value;
        for i in (0..self.anchor).rev() {
            line[i] = line[i + 1]
                .checked_sub(self.slope)
                .ok_or_else(|| Error::overflow(&format!("trending central line at {i}")))?;
        }
        for i in self.anchor + 1..len {
            line[i] = line[i - 1]
                .checked_add(self.slope)
                .ok_or_else(|| Error::overflow(&format!("trending central line at {i}")))?;
        }

        line.truncate(n);
        Ok(line)
    }
}

/// Trending lines: the constant-mode band carried along a [`TrendLine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingLimits {
    /// Constant-mode limits the band width is taken from
    pub base: ConstantLimits,
    /// Fitted central line
    pub trend: TrendLine,
}

impl TrendingLimits {
    /// Combine constant-mode limits with a fitted line
    pub fn new(base: ConstantLimits, trend: TrendLine) -> Self {
        Self { base, trend }
    }
}

impl ProcessLines for TrendingLimits {
    fn x_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        self.trend.line(n)
    }

    fn mr_central_line(&self, n: usize) -> Result<Vec<Decimal>> {
        self.base.mr_central_line(n)
    }

    fn upper_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        let offset = self.base.upper_offset()?;
        self.trend
            .line(n)?
            .into_iter()
            .map(|cl| {
                cl.checked_add(offset)
                    .ok_or_else(|| Error::overflow("trending upper limit"))
            })
            .collect()
    }

    fn lower_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        let offset = self.base.lower_offset()?;
        self.trend
            .line(n)?
            .into_iter()
            .map(|cl| {
                cl.checked_sub(offset)
                    .ok_or_else(|| Error::overflow("trending lower limit"))
            })
            .collect()
    }

    fn upper_range_limit(&self, n: usize) -> Result<Vec<Decimal>> {
        self.base.upper_range_limit(n)
    }
}
