//! The XmR series: one fixed sequence of observations and everything derived from it

use crate::central_line::{mr_center, x_center};
use crate::config::ChartConfig;
use crate::limits::ConstantLimits;
use crate::moving_range;
use crate::strategy::{CentralLineStrategy, ProcessLines, ResolvedLines};
use crate::trend::{TrendLine, TrendingLimits};
use rust_decimal::Decimal;
use std::ops::Range;
use std::sync::OnceLock;
use xmr_core::{mean, normalize_observations, Error, NumericInput, Result, Statistic};
use xmr_rules::{
    points_beyond_limits, runs_about_central_line, runs_near_limits, SignalReport,
};

/// Caller-supplied limits for Rule 1 on the X chart
///
/// A set bound replaces the computed limit at every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitOverrides {
    /// Replaces the upper natural process limit
    pub upper: Option<Decimal>,
    /// Replaces the lower natural process limit
    pub lower: Option<Decimal>,
}

impl LimitOverrides {
    /// No overrides: use the computed limits
    pub fn none() -> Self {
        Self::default()
    }

    /// Override the upper limit
    pub fn with_upper(mut self, upper: Decimal) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Override the lower limit
    pub fn with_lower(mut self, lower: Decimal) -> Self {
        self.lower = Some(lower);
        self
    }
}

/// An XmR series
///
/// Observations are fixed at construction. Moving ranges and the resolved
/// lines are derived at most once, on first use, and shared by every query
/// afterwards.
#[derive(Debug, Clone)]
pub struct Series {
    values: Vec<Decimal>,
    window: Range<usize>,
    strategy: CentralLineStrategy,
    mr_statistic: Statistic,
    moving_ranges: OnceLock<Vec<Option<Decimal>>>,
    lines: OnceLock<ResolvedLines>,
}

impl Series {
    /// Series with the default configuration: averages, constant lines,
    /// whole-series baseline
    pub fn new(values: Vec<Decimal>) -> Self {
        let config = ChartConfig::default();
        Self {
            window: 0..values.len(),
            strategy: config.strategy(),
            mr_statistic: config.effective_moving_range(),
            values,
            moving_ranges: OnceLock::new(),
            lines: OnceLock::new(),
        }
    }

    /// Series with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWindow`] when the baseline window does not fit the series
    /// - [`Error::InsufficientDataForTrend`] when a trending line is requested
    ///   over a window too short to split into two halves
    pub fn with_config(values: Vec<Decimal>, config: &ChartConfig) -> Result<Self> {
        let window = config.resolve_window(values.len())?;
        let strategy = config.strategy();

        if strategy.is_trending() && !values.is_empty() && window.len() / 2 == 0 {
            return Err(Error::InsufficientDataForTrend {
                window_len: window.len(),
            });
        }

        Ok(Self {
            values,
            window,
            strategy,
            mr_statistic: config.effective_moving_range(),
            moving_ranges: OnceLock::new(),
            lines: OnceLock::new(),
        })
    }

    /// Normalize raw input and build a series from it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidNumericInput`] for an unparsable or absent element,
    /// plus everything [`Series::with_config`] reports.
    pub fn from_inputs<I, T>(inputs: I, config: &ChartConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<NumericInput>,
    {
        Self::with_config(normalize_observations(inputs)?, config)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The observations
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Baseline window the lines are computed from
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Central line strategy in force
    pub fn strategy(&self) -> CentralLineStrategy {
        self.strategy
    }

    /// Statistic of the X central line
    pub fn x_statistic(&self) -> Statistic {
        self.strategy.x_statistic()
    }

    /// Statistic of the moving-range central line, after the median rule
    pub fn mr_statistic(&self) -> Statistic {
        self.mr_statistic
    }

    /// Moving ranges, aligned with the observations.
    ///
    /// Index 0 is `None`.
    ///
    /// # Errors
    ///
    /// [`Error::ArithmeticOverflow`] when two successive observations are
    /// further apart than a decimal can hold.
    pub fn moving_ranges(&self) -> Result<&[Option<Decimal>]> {
        if let Some(ranges) = self.moving_ranges.get() {
            return Ok(ranges.as_slice());
        }
        log::debug!("deriving moving ranges for {} observations", self.values.len());
        let derived = moving_range::moving_ranges(&self.values)?;
        Ok(self.moving_ranges.get_or_init(|| derived).as_slice())
    }

    fn lines(&self) -> Result<&ResolvedLines> {
        if let Some(lines) = self.lines.get() {
            return Ok(lines);
        }
        let resolved = self.resolve_lines()?;
        Ok(self.lines.get_or_init(|| resolved))
    }

    fn resolve_lines(&self) -> Result<ResolvedLines> {
        let x = x_center(&self.values, self.window(), self.x_statistic())?;
        let mr = mr_center(self.moving_ranges()?, self.window(), self.mr_statistic)?;
        let base = ConstantLimits::from_centers(x, mr, self.mr_statistic)?;

        log::debug!(
            "baseline [{}, {}) resolved: x={x} ({}), mr={mr} ({}), strategy {}",
            self.window.start,
            self.window.end,
            self.x_statistic(),
            self.mr_statistic,
            self.strategy
        );

        Ok(match self.strategy {
            CentralLineStrategy::ConstantAverage | CentralLineStrategy::ConstantMedian => {
                ResolvedLines::Constant(base)
            }
            CentralLineStrategy::Trending(_) => {
                let trend = TrendLine::fit(&self.values, self.window())?;
                ResolvedLines::Trending(TrendingLimits::new(base, trend))
            }
        })
    }

    fn project<F>(&self, line: F) -> Result<Vec<Decimal>>
    where
        F: FnOnce(&ResolvedLines, usize) -> Result<Vec<Decimal>>,
    {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        line(self.lines()?, self.len())
    }

    /// X central line at every index
    pub fn x_central_line(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::x_central_line)
    }

    /// Moving-range central line at every index
    pub fn mr_central_line(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::mr_central_line)
    }

    /// Upper range limit at every index
    pub fn upper_range_limit(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::upper_range_limit)
    }

    /// Upper natural process limit at every index
    pub fn upper_natural_process_limit(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::upper_limit)
    }

    /// Lower natural process limit at every index, possibly negative
    pub fn lower_natural_process_limit(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::lower_limit)
    }

    /// Lower natural process limit raised to at least `floor`
    pub fn lower_natural_process_limit_with_floor(&self, floor: Decimal) -> Result<Vec<Decimal>> {
        Ok(self
            .lower_natural_process_limit()?
            .into_iter()
            .map(|limit| limit.max(floor))
            .collect())
    }

    /// Halfway line between the X central line and the upper limit
    pub fn upper_halfway_line(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::upper_halfway_line)
    }

    /// Halfway line between the lower limit and the X central line
    pub fn lower_halfway_line(&self) -> Result<Vec<Decimal>> {
        self.project(ResolvedLines::lower_halfway_line)
    }

    /// Slope of a trending central line; `None` for constant lines and empty series
    pub fn slope(&self) -> Result<Option<Decimal>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(self.lines()?.slope())
    }

    /// Scalar limits of the baseline; for a trending series, the ones its
    /// band width is taken from. `None` for an empty series.
    pub fn constant_limits(&self) -> Result<Option<ConstantLimits>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(*self.lines()?.constant_limits()))
    }

    /// Trailing moving average of `points` observations.
    ///
    /// The first `points - 1` entries are `None`. Values are not rounded.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `points` is zero.
    pub fn x_moving_average(&self, points: usize) -> Result<Vec<Option<Decimal>>> {
        if points == 0 {
            return Err(Error::InvalidParameter(
                "moving average needs at least one point".to_string(),
            ));
        }

        let mut result = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            if i + 1 < points {
                result.push(None);
            } else {
                result.push(Some(mean(&self.values[i + 1 - points..=i])?));
            }
        }
        Ok(result)
    }

    /// Rule 1 on the X chart: points strictly outside the natural process limits.
    ///
    /// A bound set in `overrides` replaces the computed limit at every index.
    pub fn rule_1_x_beyond_limits(&self, overrides: LimitOverrides) -> Result<Vec<bool>> {
        let n = self.len();
        let upper = match overrides.upper {
            Some(limit) => vec![limit; n],
            None => self.upper_natural_process_limit()?,
        };
        let lower = match overrides.lower {
            Some(limit) => vec![limit; n],
            None => self.lower_natural_process_limit()?,
        };
        points_beyond_limits(&self.values, &upper, Some(&lower))
    }

    /// Rule 1 on the mR chart: moving ranges above the upper range limit
    pub fn rule_1_mr_beyond_limit(&self) -> Result<Vec<bool>> {
        let url = self.upper_range_limit()?;
        points_beyond_limits(self.moving_ranges()?, &url, None)
    }

    /// Rule 2: eight or more successive values on one side of the central line
    pub fn rule_2_runs_about_central_line(&self) -> Result<Vec<bool>> {
        let central = self.x_central_line()?;
        runs_about_central_line(&self.values, &central)
    }

    /// Rule 3: three of four successive values in the outer quarter of the band
    pub fn rule_3_runs_near_limits(&self) -> Result<Vec<bool>> {
        let upper = self.upper_natural_process_limit()?;
        let lower = self.lower_natural_process_limit()?;
        runs_near_limits(&self.values, &upper, &lower)
    }

    /// Run every rule with the computed limits
    pub fn signals(&self) -> Result<SignalReport> {
        Ok(SignalReport {
            x_beyond_limits: self.rule_1_x_beyond_limits(LimitOverrides::none())?,
            mr_beyond_limit: self.rule_1_mr_beyond_limit()?,
            runs_about_central_line: self.rule_2_runs_about_central_line()?,
            runs_near_limits: self.rule_3_runs_near_limits()?,
        })
    }
}

impl From<Vec<Decimal>> for Series {
    fn from(values: Vec<Decimal>) -> Self {
        Self::new(values)
    }
}
