//! CSV export
//!
//! One header row, then one row per observation. The moving-range sentinel
//! is written as an empty field.

use crate::error::Result;
use crate::record::{ChartRecord, ExportOptions};
use csv::{Terminator, WriterBuilder};
use rust_decimal::Decimal;
use std::io;
use xmr_chart::Series;

/// Column names, in row order
pub const CSV_HEADER: [&str; 7] = [
    "x_values", "x_unpl", "x_cl", "x_lnpl", "mr_values", "mr_url", "mr_cl",
];

fn field(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Table rows of a record, excluding the header
pub fn rows(record: &ChartRecord) -> Vec<[String; 7]> {
    (0..record.x.values.len())
        .map(|i| {
            [
                field(record.x.values.get(i).copied()),
                field(record.x.unpl.get(i).copied()),
                field(record.x.cl.get(i).copied()),
                field(record.x.lnpl.get(i).copied()),
                field(record.mr.values.get(i).copied().flatten()),
                field(record.mr.url.get(i).copied()),
                field(record.mr.cl.get(i).copied()),
            ]
        })
        .collect()
}

/// Write the series as CSV to `writer`.
///
/// Rows end in `\r\n`.
pub fn write_csv<W: io::Write>(series: &Series, writer: W) -> Result<()> {
    let record = ChartRecord::from_series(series, ExportOptions::default())?;

    let mut table = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    table.write_record(CSV_HEADER)?;
    for row in rows(&record) {
        table.write_record(&row)?;
    }
    table.flush()?;
    Ok(())
}

/// Render the series as a CSV string
pub fn to_csv(series: &Series) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(series, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[i64]) -> Series {
        Series::new(values.iter().map(|&v| Decimal::from(v)).collect())
    }

    #[test]
    fn test_csv() {
        let csv = to_csv(&series(&[3, 4, 5])).unwrap();
        let expected = "x_values,x_unpl,x_cl,x_lnpl,mr_values,mr_url,mr_cl\r\n\
                        3,6.660,4.000,1.340,,3.268,1.000\r\n\
                        4,6.660,4.000,1.340,1,3.268,1.000\r\n\
                        5,6.660,4.000,1.340,1,3.268,1.000\r\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_empty_series_writes_header_only() {
        let csv = to_csv(&series(&[])).unwrap();
        assert_eq!(csv, "x_values,x_unpl,x_cl,x_lnpl,mr_values,mr_url,mr_cl\r\n");
    }

    #[test]
    fn test_negative_limits() {
        let csv = to_csv(&series(&[1, 10, 100, 50])).unwrap();
        let second = csv.lines().nth(1).unwrap();
        assert_eq!(second, "1,172.364,40.250,-91.864,,162.312,49.667");
    }

    #[test]
    fn test_failing_series() {
        // a single observation has no moving range to seed the limits
        assert!(to_csv(&series(&[7])).is_err());
    }
}
