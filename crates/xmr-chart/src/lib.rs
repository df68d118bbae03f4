//! XmR series analysis
//!
//! A [`Series`] owns a fixed sequence of exact observations and answers every
//! question an XmR chart asks of it: moving ranges, central lines, natural
//! process limits, the upper range limit and the detection rules.
//!
//! # Central line strategies
//!
//! The [`ChartConfig`] picks one [`CentralLineStrategy`]:
//!
//! - **Constant average**: mean of the baseline window
//! - **Constant median**: median of the baseline window; the moving-range line
//!   then uses the median as well
//! - **Trending**: a straight line through the half-averages of the baseline,
//!   carrying the constant-mode band along it
//!
//! Lines are computed from the baseline window and projected over the whole
//! series. Every reported value is rounded to three decimals.
//!
//! # Example
//!
//! ```rust
//! use xmr_chart::{ChartConfig, Series, Shape};
//! use xmr_core::normalize_observations;
//!
//! let values = normalize_observations(vec![3, 4, 5]).unwrap();
//! let series = Series::new(values);
//! assert_eq!(series.x_central_line().unwrap()[0].to_string(), "4.000");
//! assert_eq!(series.upper_natural_process_limit().unwrap()[0].to_string(), "6.660");
//!
//! let config = ChartConfig::new().with_shape(Shape::Trending);
//! let trending = Series::from_inputs(vec![1, 2, 3, 4, 5, 6], &config).unwrap();
//! assert_eq!(trending.slope().unwrap(), Some(xmr_core::Decimal::ONE));
//! ```

pub mod central_line;
pub mod config;
pub mod limits;
pub mod moving_range;
pub mod series;
pub mod strategy;
pub mod trend;

pub use config::{BaselineWindow, ChartConfig, Shape};
pub use limits::ConstantLimits;
pub use moving_range::moving_ranges;
pub use series::{LimitOverrides, Series};
pub use strategy::{CentralLineStrategy, ProcessLines, ResolvedLines};
pub use trend::{TrendLine, TrendingLimits};
