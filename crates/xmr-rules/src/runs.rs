//! Rule 2: runs about the central line
//!
//! Eight successive values on the same side of the central line indicate an
//! assignable cause with a *weak* but sustained effect.

use crate::traits::{ensure_aligned, ChartValue};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use xmr_core::Result;

/// Run length at which a run becomes a signal
pub const RUN_LENGTH: usize = 8;

/// Side of the central line a run is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
}

/// Signed run counter over the series.
///
/// Points equal to the central line and absent points leave the run as it
/// is; they are not members of it.
#[derive(Debug, Default)]
struct RunTracker {
    side: Option<Side>,
    members: Vec<usize>,
}

impl RunTracker {
    /// Extend or restart the run with the point at `index`.
    fn push(&mut self, index: usize, side: Side) {
        if self.side != Some(side) {
            self.side = Some(side);
            self.members.clear();
        }
        self.members.push(index);
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

/// Flag every member of a run of at least [`RUN_LENGTH`] points on one side
/// of the central line.
///
/// When a run first reaches eight points all eight are flagged; every further
/// point of the same run is flagged as it arrives.
///
/// The flags mark the run's members, not the eight indices ending at the
/// point that completes the run. A point on the central line inside a run is
/// skipped, so the first member flagged lies one index further back for each
/// such point.
///
/// # Errors
///
/// Fails when `central` is not aligned with `values`.
pub fn runs_about_central_line<V: ChartValue>(
    values: &[V],
    central: &[Decimal],
) -> Result<Vec<bool>> {
    ensure_aligned(values.len(), central, "central line")?;

    let mut flags = vec![false; values.len()];
    let mut run = RunTracker::default();

    for (i, (v, cl)) in values.iter().zip(central).enumerate() {
        let Some(x) = v.observed() else {
            continue;
        };
        let side = match x.cmp(cl) {
            Ordering::Greater => Side::Above,
            Ordering::Less => Side::Below,
            Ordering::Equal => continue,
        };
        run.push(i, side);

        match run.len().cmp(&RUN_LENGTH) {
            Ordering::Equal => {
                for &j in &run.members {
                    flags[j] = true;
                }
            }
            Ordering::Greater => flags[i] = true,
            Ordering::Less => {}
        }
    }

    log::trace!(
        "runs about central line: {} of {} flagged",
        flags.iter().filter(|&&f| f).count(),
        flags.len()
    );
    Ok(flags)
}
