//! Numeric input normalization
//!
//! Repeated differencing and averaging in binary floating point drifts away
//! from the published reference values, so every observation is converted to
//! an exact [`Decimal`] before any derived computation runs.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// One raw input element before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// Integer count
    Int(i64),
    /// Binary floating point measurement
    Float(f64),
    /// Numeric text, plain or scientific notation
    Text(String),
    /// Already exact value
    Decimal(Decimal),
    /// Placeholder for a missing value
    Absent,
}

impl NumericInput {
    /// Convert this element to an exact decimal.
    ///
    /// `index` is only used to label the error.
    pub fn to_decimal(&self, index: usize) -> Result<Option<Decimal>> {
        match self {
            NumericInput::Int(v) => Ok(Some(Decimal::from(*v))),
            NumericInput::Float(v) => float_to_decimal(*v)
                .map(Some)
                .ok_or_else(|| Error::invalid_numeric(index, v.to_string())),
            NumericInput::Text(s) => parse_text(s)
                .map(Some)
                .ok_or_else(|| Error::invalid_numeric(index, s.as_str())),
            NumericInput::Decimal(d) => Ok(Some(*d)),
            NumericInput::Absent => Ok(None),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Int(v) => write!(f, "{v}"),
            NumericInput::Float(v) => write!(f, "{v}"),
            NumericInput::Text(s) => write!(f, "{s}"),
            NumericInput::Decimal(d) => write!(f, "{d}"),
            NumericInput::Absent => write!(f, "None"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(v: $t) -> Self {
                    NumericInput::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        NumericInput::Float(v)
    }
}

impl From<f32> for NumericInput {
    fn from(v: f32) -> Self {
        NumericInput::Float(f64::from(v))
    }
}

impl From<Decimal> for NumericInput {
    fn from(v: Decimal) -> Self {
        NumericInput::Decimal(v)
    }
}

impl From<&str> for NumericInput {
    fn from(v: &str) -> Self {
        NumericInput::Text(v.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(v: String) -> Self {
        NumericInput::Text(v)
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(NumericInput::Absent, Into::into)
    }
}

/// Normalize heterogeneous input, keeping absent markers in place.
pub fn normalize<I, T>(values: I) -> Result<Vec<Option<Decimal>>>
where
    I: IntoIterator<Item = T>,
    T: Into<NumericInput>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.into().to_decimal(i))
        .collect()
}

/// Normalize input that must hold a value at every position.
///
/// Absent markers are rejected with [`Error::InvalidNumericInput`].
pub fn normalize_observations<I, T>(values: I) -> Result<Vec<Decimal>>
where
    I: IntoIterator<Item = T>,
    T: Into<NumericInput>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.into()
                .to_decimal(i)?
                .ok_or_else(|| Error::invalid_numeric(i, "None"))
        })
        .collect()
}

// The shortest round-trip text of an f64 is what a person typed, so 2.3
// becomes exactly 2.3 rather than 2.29999999999999982236431605997495353221893310546875.
fn float_to_decimal(v: f64) -> Option<Decimal> {
    if !v.is_finite() {
        return None;
    }
    Decimal::from_str(&v.to_string()).ok()
}

fn parse_text(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mixed_inputs() {
        let inputs = vec![
            NumericInput::Int(3),
            NumericInput::Float(2.3),
            NumericInput::Text(" 1.25 ".to_string()),
            NumericInput::Text("1e3".to_string()),
            NumericInput::Absent,
        ];
        let result = normalize(inputs).unwrap();
        assert_eq!(
            result,
            vec![Some(d("3")), Some(d("2.3")), Some(d("1.25")), Some(d("1000")), None]
        );
    }

    #[test]
    fn test_float_keeps_short_form() {
        let result = normalize_observations(vec![0.1, 16.3, -4.8]).unwrap();
        assert_eq!(result, vec![d("0.1"), d("16.3"), d("-4.8")]);
    }

    #[test]
    fn test_option_inputs() {
        let result = normalize(vec![Some(1), None, Some(3)]).unwrap();
        assert_eq!(result, vec![Some(d("1")), None, Some(d("3"))]);
    }

    #[test]
    fn test_rejects_garbage_text() {
        let err = normalize(vec!["1", "two", "3"]).unwrap_err();
        match err {
            Error::InvalidNumericInput { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, "two");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(normalize(vec![1.0, f64::NAN]).is_err());
        assert!(normalize(vec![f64::INFINITY]).is_err());
        assert!(normalize(vec![""]).is_err());
    }

    #[test]
    fn test_observations_reject_absent() {
        let err = normalize_observations(vec![Some(1), None]).unwrap_err();
        assert!(matches!(err, Error::InvalidNumericInput { index: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        let result = normalize(Vec::<i64>::new()).unwrap();
        assert!(result.is_empty());
    }
}
