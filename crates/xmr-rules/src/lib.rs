//! Detection rules for XmR charts
//!
//! Each rule is an independent scan over a plotted sequence and the lines
//! aligned with it, returning one boolean flag per point. Scans are pure:
//! they may be run in any order and any number of times.
//!
//! # Rules
//!
//! - **Rule 1** ([`points_beyond_limits`]): a point outside the limits
//! - **Rule 2** ([`runs_about_central_line`]): eight successive points on one
//!   side of the central line
//! - **Rule 3** ([`runs_near_limits`]): three of four successive points in
//!   the outer quarter of the band on the same side
//!
//! The moving-range chart starts with an absent point; every scan leaves it
//! unflagged and out of its counting.
//!
//! ## Usage
//!
//! ```rust
//! use xmr_rules::runs_about_central_line;
//! use xmr_core::Decimal;
//!
//! let values: Vec<Decimal> = (0..8).map(|_| Decimal::from(5)).collect();
//! let central = vec![Decimal::from(4); 8];
//! let flags = runs_about_central_line(&values, &central).unwrap();
//! assert!(flags.iter().all(|&f| f));
//! ```

pub mod beyond_limits;
pub mod near_limits;
pub mod runs;
pub mod traits;
pub mod types;

pub use beyond_limits::points_beyond_limits;
pub use near_limits::{runs_near_limits, Proximity};
pub use runs::{runs_about_central_line, RUN_LENGTH};
pub use traits::ChartValue;
pub use types::{RuleKind, SignalReport};
