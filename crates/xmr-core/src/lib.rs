//! Core types for XmR process behaviour charts
//!
//! This crate holds the pieces every other xmr-stats crate leans on:
//!
//! - [`error`] - the shared error taxonomy and `Result` alias
//! - [`numeric`] - conversion of integers, floats and numeric text to exact decimals
//! - [`rounding`] - the 3-decimal, round-half-to-even reporting convention
//! - [`scaling`] - the average/median scaling-factor table
//! - [`stats`] - mean and median over decimals
//!
//! # Example
//!
//! ```rust
//! use xmr_core::{normalize_observations, Statistic};
//!
//! let values = normalize_observations(vec![3, 4, 5]).unwrap();
//! let factors = Statistic::Average.scaling_factors();
//! assert_eq!(values.len(), 3);
//! assert_eq!(factors.limits.to_string(), "2.660");
//! ```

pub mod error;
pub mod numeric;
pub mod rounding;
pub mod scaling;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{normalize, normalize_observations, NumericInput};
pub use rounding::{round_reported, REPORTED_DECIMAL_PLACES};
pub use scaling::{ScalingFactors, Statistic, AVERAGE_FACTORS, MEDIAN_FACTORS};
pub use stats::{location, mean, median};

pub use rust_decimal::Decimal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
