//! Export of XmR series
//!
//! The chart crates produce sequences; this crate turns them into things
//! other programs read:
//!
//! - [`ChartRecord`]: every line of both charts under prefixed keys, with a
//!   tabular `Display` and JSON serialization
//! - [`to_csv`] / [`write_csv`]: one row per observation
//!
//! ```rust
//! use xmr_chart::Series;
//! use xmr_core::normalize_observations;
//! use xmr_export::{to_csv, ChartRecord, ExportOptions};
//!
//! let series = Series::new(normalize_observations(vec![3, 4, 5]).unwrap());
//! let record = ChartRecord::from_series(&series, ExportOptions::new()).unwrap();
//! assert!(record.to_string().starts_with("x_values : [3, 4, 5]"));
//! assert!(to_csv(&series).unwrap().starts_with("x_values,x_unpl"));
//! ```

mod error;
pub mod record;
pub mod table;

pub use error::{Error, Result};
pub use record::{ChartRecord, Column, ExportOptions, MovingRangeRecord, XChartRecord};
pub use table::{to_csv, write_csv, CSV_HEADER};
