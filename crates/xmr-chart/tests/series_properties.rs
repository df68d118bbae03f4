//! Property-based tests for series derivations

use proptest::prelude::*;
use xmr_chart::{ChartConfig, LimitOverrides, Series, Shape};
use xmr_core::{Decimal, Statistic};

fn decs(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

fn statistic() -> impl Strategy<Value = Statistic> {
    prop_oneof![Just(Statistic::Average), Just(Statistic::Median)]
}

proptest! {
    // Property: mr[k] == |x[k] - x[k-1]| for k >= 1, with a leading sentinel
    #[test]
    fn prop_moving_range_round_trip(values in prop::collection::vec(-10_000i64..10_000, 0..60)) {
        let series = Series::new(decs(&values));
        let mr = series.moving_ranges().unwrap();
        prop_assert_eq!(mr.len(), values.len());
        if !values.is_empty() {
            prop_assert_eq!(mr[0], None);
        }
        for k in 1..values.len() {
            prop_assert_eq!(mr[k], Some(Decimal::from((values[k] - values[k - 1]).abs())));
        }
    }

    // Property: constant lines broadcast one value over the whole series
    #[test]
    fn prop_constant_broadcast(
        values in prop::collection::vec(-1000i64..1000, 2..60),
        x_stat in statistic(),
        mr_stat in statistic(),
    ) {
        let config = ChartConfig::new()
            .with_x_central_line(x_stat)
            .with_moving_range(mr_stat);
        let series = Series::with_config(decs(&values), &config).unwrap();

        for line in [
            series.x_central_line().unwrap(),
            series.mr_central_line().unwrap(),
            series.upper_natural_process_limit().unwrap(),
            series.lower_natural_process_limit().unwrap(),
            series.upper_range_limit().unwrap(),
        ] {
            prop_assert_eq!(line.len(), values.len());
            prop_assert!(line.iter().all(|&v| v == line[0]));
        }
    }

    // Property: repeated queries on one series agree
    #[test]
    fn prop_idempotent(
        values in prop::collection::vec(-1000i64..1000, 2..60),
        trending in any::<bool>(),
    ) {
        let shape = if trending { Shape::Trending } else { Shape::Constant };
        let config = ChartConfig::new().with_shape(shape);
        let series = Series::with_config(decs(&values), &config).unwrap();

        prop_assert_eq!(series.x_central_line().unwrap(), series.x_central_line().unwrap());
        prop_assert_eq!(series.lower_halfway_line().unwrap(), series.lower_halfway_line().unwrap());
        prop_assert_eq!(series.signals().unwrap(), series.signals().unwrap());
        prop_assert_eq!(
            series.rule_1_x_beyond_limits(LimitOverrides::none()).unwrap(),
            series.signals().unwrap().x_beyond_limits
        );
    }

    // Property: a trending band keeps the width of the constant band
    #[test]
    fn prop_trending_band_width(values in prop::collection::vec(-1000i64..1000, 2..60)) {
        let config = ChartConfig::new().with_shape(Shape::Trending);
        let series = Series::with_config(decs(&values), &config).unwrap();
        let base = series.constant_limits().unwrap().unwrap();

        let cl = series.x_central_line().unwrap();
        let upper = series.upper_natural_process_limit().unwrap();
        let lower = series.lower_natural_process_limit().unwrap();
        // long repeating slopes may lose the last of 28 digits
        let tolerance = Decimal::new(1, 20);
        let (above, below) = (base.upper_offset().unwrap(), base.lower_offset().unwrap());
        for i in 0..values.len() {
            prop_assert!((upper[i] - cl[i] - above).abs() < tolerance);
            prop_assert!((cl[i] - lower[i] - below).abs() < tolerance);
        }
    }

    // Property: every rule yields one flag per observation
    #[test]
    fn prop_signal_lengths(values in prop::collection::vec(-1000i64..1000, 2..60)) {
        let series = Series::new(decs(&values));
        let report = series.signals().unwrap();
        prop_assert_eq!(report.x_beyond_limits.len(), values.len());
        prop_assert_eq!(report.mr_beyond_limit.len(), values.len());
        prop_assert_eq!(report.runs_about_central_line.len(), values.len());
        prop_assert_eq!(report.runs_near_limits.len(), values.len());
        prop_assert!(report.mr_beyond_limit.first() == Some(&false));
    }
}
