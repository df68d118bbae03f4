//! Individuals and moving range (XmR) process behaviour charts
//!
//! This crate re-exports the xmr-stats workspace:
//!
//! - [`xmr_core`]: errors, exact decimal normalization, rounding and scaling factors
//! - [`xmr_rules`]: the detection scans
//! - [`xmr_chart`]: [`Series`](xmr_chart::Series) with its central lines, limits and rules
//! - [`xmr_export`]: record, JSON and CSV export
//!
//! # Example
//!
//! ```rust
//! use xmr_stats::prelude::*;
//!
//! let series = Series::from_inputs(vec![1, 10, 100, 50], &ChartConfig::default()).unwrap();
//! let limits = series.constant_limits().unwrap().unwrap();
//! assert_eq!(limits.upper_natural_process_limit.to_string(), "172.364");
//! assert_eq!(limits.lower_natural_process_limit.to_string(), "-91.864");
//!
//! let report = series.signals().unwrap();
//! assert!(!report.any());
//! ```

// Re-export workspace crates
pub use xmr_chart;
pub use xmr_core;
pub use xmr_export;
pub use xmr_rules;

/// Commonly used types
pub mod prelude {
    pub use xmr_chart::{
        BaselineWindow, CentralLineStrategy, ChartConfig, ConstantLimits, LimitOverrides,
        ProcessLines, Series, Shape,
    };
    pub use xmr_core::{normalize, normalize_observations, Decimal, NumericInput, Statistic};
    pub use xmr_export::{to_csv, write_csv, ChartRecord, ExportOptions};
    pub use xmr_rules::{RuleKind, SignalReport};
}
