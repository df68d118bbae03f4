//! Configuration types for building a series

use crate::strategy::CentralLineStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use xmr_core::{Error, Result, Statistic};

/// Shape of the X central line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// One value at every index
    #[default]
    Constant,
    /// Straight line through the baseline half-averages
    Trending,
}

impl Shape {
    /// Get the name of this shape
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Trending => "trending",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" => Ok(Self::Constant),
            "trending" => Ok(Self::Trending),
            other => Err(Error::InvalidParameter(format!(
                "shape must be 'constant' or 'trending', got '{other}'"
            ))),
        }
    }
}

/// Index window `[start, end)` of the observations that seed the limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaselineWindow {
    /// First index used (inclusive)
    pub start: usize,
    /// One past the last index used; `None` runs to the end of the series
    #[serde(default)]
    pub end: Option<usize>,
}

impl BaselineWindow {
    /// Create a window `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Create a window from `start` to the end of the series
    pub fn starting_at(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Resolve against a series of `len` observations.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWindow`] when `start > end` or `end > len`.
    pub fn resolve(&self, len: usize) -> Result<Range<usize>> {
        let end = self.end.unwrap_or(len);
        if self.start > end || end > len {
            return Err(Error::invalid_window(self.start, end, len));
        }
        Ok(self.start..end)
    }
}

/// Everything that selects how a series computes its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Statistic for the X central line
    pub x_central_line: Statistic,
    /// Statistic for the moving-range central line
    pub moving_range: Statistic,
    /// Constant or trending X central line
    pub shape: Shape,
    /// Baseline window; the whole series when `None`
    pub baseline: Option<BaselineWindow>,
}

impl ChartConfig {
    /// Default configuration: averages, constant lines, whole-series baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X central line statistic
    pub fn with_x_central_line(mut self, statistic: Statistic) -> Self {
        self.x_central_line = statistic;
        self
    }

    /// Set the moving-range statistic
    pub fn with_moving_range(mut self, statistic: Statistic) -> Self {
        self.moving_range = statistic;
        self
    }

    /// Set the central line shape
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Restrict the baseline to `[start, end)`
    pub fn with_baseline(mut self, start: usize, end: usize) -> Self {
        self.baseline = Some(BaselineWindow::new(start, end));
        self
    }

    /// Set the baseline window
    pub fn with_baseline_window(mut self, window: BaselineWindow) -> Self {
        self.baseline = Some(window);
        self
    }

    /// Moving-range statistic actually in force.
    ///
    /// Median-based natural process limits are only valid when both central
    /// lines use the median, so a median X line forces a median moving range.
    pub fn effective_moving_range(&self) -> Statistic {
        match self.x_central_line {
            Statistic::Median => Statistic::Median,
            Statistic::Average => self.moving_range,
        }
    }

    /// Central line strategy selected by this configuration
    pub fn strategy(&self) -> CentralLineStrategy {
        CentralLineStrategy::select(self.x_central_line, self.shape)
    }

    /// Resolve the baseline window for a series of `len` observations
    pub fn resolve_window(&self, len: usize) -> Result<Range<usize>> {
        self.baseline.unwrap_or_default().resolve(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_forces_median_ranges() {
        let config = ChartConfig::new()
            .with_x_central_line(Statistic::Median)
            .with_moving_range(Statistic::Average);
        assert_eq!(config.effective_moving_range(), Statistic::Median);

        let config = ChartConfig::new().with_moving_range(Statistic::Median);
        assert_eq!(config.effective_moving_range(), Statistic::Median);
        assert_eq!(config.x_central_line, Statistic::Average);

        assert_eq!(ChartConfig::new().effective_moving_range(), Statistic::Average);
    }

    #[test]
    fn test_window_resolution() {
        assert_eq!(ChartConfig::new().resolve_window(5).unwrap(), 0..5);
        assert_eq!(ChartConfig::new().resolve_window(0).unwrap(), 0..0);
        assert_eq!(BaselineWindow::new(1, 3).resolve(5).unwrap(), 1..3);
        assert_eq!(BaselineWindow::starting_at(2).resolve(5).unwrap(), 2..5);
        assert_eq!(BaselineWindow::new(2, 2).resolve(5).unwrap(), 2..2);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(matches!(
            BaselineWindow::new(3, 1).resolve(5),
            Err(Error::InvalidWindow { start: 3, end: 1, len: 5 })
        ));
        assert!(BaselineWindow::new(0, 6).resolve(5).is_err());
        assert!(BaselineWindow::starting_at(6).resolve(5).is_err());
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!("Trending".parse::<Shape>().unwrap(), Shape::Trending);
        assert_eq!(Shape::default(), Shape::Constant);
        assert!("curved".parse::<Shape>().is_err());
        assert_eq!(Shape::Trending.to_string(), "trending");
    }

    #[test]
    fn test_config_from_json() {
        let config: ChartConfig = serde_json::from_str(
            r#"{"x_central_line": "median", "shape": "trending", "baseline": {"start": 0, "end": 16}}"#,
        )
        .unwrap();
        assert_eq!(config.x_central_line, Statistic::Median);
        assert_eq!(config.moving_range, Statistic::Average);
        assert_eq!(config.effective_moving_range(), Statistic::Median);
        assert_eq!(config.shape, Shape::Trending);
        assert_eq!(config.baseline, Some(BaselineWindow::new(0, 16)));

        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
    }
}
