//! Property-based tests for the detection scans

use proptest::prelude::*;
use xmr_core::Decimal;
use xmr_rules::{points_beyond_limits, runs_about_central_line, runs_near_limits, RUN_LENGTH};

fn decs(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

proptest! {
    // Property: a single run of n points flags all of them iff n >= 8
    #[test]
    fn prop_run_flagging(n in 1usize..30, above in any::<bool>()) {
        let v = if above { 5 } else { -5 };
        let values = decs(&vec![v; n]);
        let flags = runs_about_central_line(&values, &decs(&vec![0; n])).unwrap();
        prop_assert_eq!(flags.len(), n);
        prop_assert!(flags.iter().all(|&f| f == (n >= RUN_LENGTH)));
    }

    // Property: every scan returns one flag per input point
    #[test]
    fn prop_flag_lengths(values in prop::collection::vec(-100i64..100, 0..80)) {
        let n = values.len();
        let values = decs(&values);
        let upper = decs(&vec![50; n]);
        let lower = decs(&vec![-50; n]);
        let central = decs(&vec![0; n]);

        let beyond = points_beyond_limits(&values, &upper, Some(lower.as_slice())).unwrap();
        prop_assert_eq!(beyond.len(), n);
        prop_assert_eq!(runs_about_central_line(&values, &central).unwrap().len(), n);
        prop_assert_eq!(runs_near_limits(&values, &upper, &lower).unwrap().len(), n);
    }

    // Property: values inside the closed band are never flagged by rule 1
    #[test]
    fn prop_inside_band_quiet(values in prop::collection::vec(-50i64..=50, 0..80)) {
        let n = values.len();
        let values = decs(&values);
        let (upper, lower) = (decs(&vec![50; n]), decs(&vec![-50; n]));
        let flags = points_beyond_limits(&values, &upper, Some(lower.as_slice())).unwrap();
        prop_assert!(flags.iter().all(|&f| !f));
    }

    // Property: scans are deterministic
    #[test]
    fn prop_idempotent(values in prop::collection::vec(-100i64..100, 0..80)) {
        let n = values.len();
        let values = decs(&values);
        let upper = decs(&vec![60; n]);
        let lower = decs(&vec![-60; n]);
        let first = runs_near_limits(&values, &upper, &lower).unwrap();
        let second = runs_near_limits(&values, &upper, &lower).unwrap();
        prop_assert_eq!(first, second);
    }
}
