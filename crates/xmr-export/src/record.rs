//! Record export of a series
//!
//! A [`ChartRecord`] groups the X chart fields and the mR chart fields of one
//! series. Flattened, every field sits under a prefixed key (`x_values`,
//! `x_unpl`, ..., `mr_cl`), which is what the JSON writer and the tabular
//! `Display` use.

use crate::error::Result;
use rust_decimal::Decimal;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use xmr_chart::Series;

/// What to include beyond the fixed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Add `x_unpl_mid` and `x_lnpl_mid`
    pub include_halfway_lines: bool,
    /// Add `x_moving_average` over this many points
    pub moving_average_points: Option<usize>,
    /// Raise the exported lower limit to at least this value
    pub lnpl_floor: Option<Decimal>,
}

impl ExportOptions {
    /// Fixed fields only
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the halfway lines
    pub fn with_halfway_lines(mut self) -> Self {
        self.include_halfway_lines = true;
        self
    }

    /// Include a trailing moving average of `points` observations
    pub fn with_moving_average(mut self, points: usize) -> Self {
        self.moving_average_points = Some(points);
        self
    }

    /// Floor the exported lower natural process limit
    pub fn with_lnpl_floor(mut self, floor: Decimal) -> Self {
        self.lnpl_floor = Some(floor);
        self
    }
}

/// X chart fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XChartRecord {
    pub values: Vec<Decimal>,
    pub unpl: Vec<Decimal>,
    pub unpl_mid: Option<Vec<Decimal>>,
    pub cl: Vec<Decimal>,
    pub lnpl_mid: Option<Vec<Decimal>>,
    pub lnpl: Vec<Decimal>,
    pub moving_average: Option<Vec<Option<Decimal>>>,
}

/// mR chart fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovingRangeRecord {
    pub values: Vec<Option<Decimal>>,
    pub url: Vec<Decimal>,
    pub cl: Vec<Decimal>,
}

/// One exported column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column<'a> {
    /// Every entry present
    Values(&'a [Decimal]),
    /// Entries that may be absent
    Optional(&'a [Option<Decimal>]),
}

impl Column<'_> {
    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            Column::Values(values) => values.len(),
            Column::Optional(values) => values.len(),
        }
    }

    /// Whether the column has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `index`, `None` when absent or out of range
    pub fn get(&self, index: usize) -> Option<Decimal> {
        match self {
            Column::Values(values) => values.get(index).copied(),
            Column::Optional(values) => values.get(index).copied().flatten(),
        }
    }
}

impl Serialize for Column<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Column::Values(values) => values.serialize(serializer),
            Column::Optional(values) => values.serialize(serializer),
        }
    }
}

impl fmt::Display for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get(i) {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "None")?,
            }
        }
        write!(f, "]")
    }
}

/// Both charts of one series
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartRecord {
    pub x: XChartRecord,
    pub mr: MovingRangeRecord,
}

impl ChartRecord {
    /// Collect every exported line of `series`.
    ///
    /// # Errors
    ///
    /// Whatever the series reports for its lines.
    pub fn from_series(series: &Series, options: ExportOptions) -> Result<Self> {
        let lnpl = match options.lnpl_floor {
            Some(floor) => series.lower_natural_process_limit_with_floor(floor)?,
            None => series.lower_natural_process_limit()?,
        };

        let (unpl_mid, lnpl_mid) = if options.include_halfway_lines {
            (
                Some(series.upper_halfway_line()?),
                Some(series.lower_halfway_line()?),
            )
        } else {
            (None, None)
        };

        let moving_average = options
            .moving_average_points
            .map(|points| series.x_moving_average(points))
            .transpose()?;

        Ok(Self {
            x: XChartRecord {
                values: series.values().to_vec(),
                unpl: series.upper_natural_process_limit()?,
                unpl_mid,
                cl: series.x_central_line()?,
                lnpl_mid,
                lnpl,
                moving_average,
            },
            mr: MovingRangeRecord {
                values: series.moving_ranges()?.to_vec(),
                url: series.upper_range_limit()?,
                cl: series.mr_central_line()?,
            },
        })
    }

    /// Prefixed keys and columns, X chart first
    pub fn fields(&self) -> Vec<(&'static str, Column<'_>)> {
        let mut fields = vec![
            ("x_values", Column::Values(&self.x.values)),
            ("x_unpl", Column::Values(&self.x.unpl)),
        ];
        if let Some(mid) = &self.x.unpl_mid {
            fields.push(("x_unpl_mid", Column::Values(mid)));
        }
        fields.push(("x_cl", Column::Values(&self.x.cl)));
        if let Some(mid) = &self.x.lnpl_mid {
            fields.push(("x_lnpl_mid", Column::Values(mid)));
        }
        fields.push(("x_lnpl", Column::Values(&self.x.lnpl)));
        if let Some(average) = &self.x.moving_average {
            fields.push(("x_moving_average", Column::Optional(average)));
        }
        fields.push(("mr_values", Column::Optional(&self.mr.values)));
        fields.push(("mr_url", Column::Values(&self.mr.url)));
        fields.push(("mr_cl", Column::Values(&self.mr.cl)));
        fields
    }

    /// Column stored under `key`
    pub fn field(&self, key: &str) -> Option<Column<'_>> {
        self.fields()
            .into_iter()
            .find_map(|(k, column)| (k == key).then_some(column))
    }

    /// Serialize as a JSON object keyed by the prefixed names.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed variant of [`ChartRecord::to_json`]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ChartRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, column) in &fields {
            map.serialize_entry(key, column)?;
        }
        map.end()
    }
}

impl fmt::Display for ChartRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, column) in self.fields() {
            writeln!(f, "{key:<9}: {column}")?;
        }
        Ok(())
    }
}
