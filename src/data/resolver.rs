//! Column Resolver & Cleaner Module
//! Validates the two selected columns, coerces them to numbers, drops rows
//! with missing values and reinterprets `time` columns as epoch timestamps.

use chrono::{DateTime, Utc};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Column '{0}' not found in CSV file")]
    ColumnNotFound(String),
    #[error("Could not convert column '{column}' to numeric: {source}")]
    ConversionError {
        column: String,
        source: PolarsError,
    },
    #[error("No valid numeric data to plot after conversion and cleaning")]
    NoValidData,
    #[error("Column '{0}' is not numeric or datetime after conversion")]
    InvalidColumnType(String),
}

/// A cleaned plot axis: either plain numbers or epoch-derived instants.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanedSeries {
    Numeric(Vec<f64>),
    Timestamp(Vec<DateTime<Utc>>),
}

impl CleanedSeries {
    pub fn len(&self) -> usize {
        match self {
            CleanedSeries::Numeric(values) => values.len(),
            CleanedSeries::Timestamp(instants) => instants.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, CleanedSeries::Timestamp(_))
    }
}

/// Resolve and clean the two selected columns of `df`.
///
/// Rows where either value fails numeric coercion are dropped (order
/// preserved). A column named "time" in any case is then reinterpreted as
/// whole seconds since the Unix epoch; if that conversion is not possible
/// the column stays numeric and a warning is logged.
pub fn clean_and_resolve(
    df: &DataFrame,
    name_x: &str,
    name_y: &str,
) -> Result<(CleanedSeries, CleanedSeries), ResolveError> {
    let col_x = df
        .column(name_x)
        .map_err(|_| ResolveError::ColumnNotFound(name_x.to_string()))?;
    let col_y = df
        .column(name_y)
        .map_err(|_| ResolveError::ColumnNotFound(name_y.to_string()))?;

    let raw_x = coerce_numeric(col_x, name_x)?;
    let raw_y = coerce_numeric(col_y, name_y)?;

    // Keep only positions where both sides survived coercion.
    let (xs, ys): (Vec<f64>, Vec<f64>) = raw_x
        .into_iter()
        .zip(raw_y)
        .filter_map(|(x, y)| Some((x?, y?)))
        .unzip();

    if xs.is_empty() {
        return Err(ResolveError::NoValidData);
    }
    log::debug!("{} of {} rows survived cleaning", xs.len(), df.height());

    let series_x = reinterpret_epoch(name_x, xs);
    let series_y = reinterpret_epoch(name_y, ys);

    validate_series(&series_x, name_x)?;
    validate_series(&series_y, name_y)?;

    Ok((series_x, series_y))
}

/// Best-effort numeric coercion of one column. Entries that cannot be parsed
/// become `None` rather than failing the operation; NaN counts as missing.
fn coerce_numeric(column: &Column, name: &str) -> Result<Vec<Option<f64>>, ResolveError> {
    let cast = column
        .cast(&DataType::Float64)
        .map_err(|source| ResolveError::ConversionError {
            column: name.to_string(),
            source,
        })?;
    let ca = cast.f64().map_err(|source| ResolveError::ConversionError {
        column: name.to_string(),
        source,
    })?;

    let mut values = Vec::with_capacity(ca.len());
    for i in 0..ca.len() {
        values.push(ca.get(i).filter(|v| !v.is_nan()));
    }
    Ok(values)
}

/// Reinterpret a cleaned column named "time" as seconds since the Unix epoch.
/// Falls back to the plain numbers when the conversion cannot be performed.
fn reinterpret_epoch(name: &str, values: Vec<f64>) -> CleanedSeries {
    if !name.eq_ignore_ascii_case("time") {
        return CleanedSeries::Numeric(values);
    }

    match epoch_to_datetime(&values) {
        Some(instants) => CleanedSeries::Timestamp(instants),
        None => {
            log::warn!("column '{name}' could not be read as epoch seconds, plotting raw values");
            CleanedSeries::Numeric(values)
        }
    }
}

/// Convert epoch seconds to UTC instants. Fractional seconds are truncated
/// toward zero; negative values are valid pre-1970 instants. `None` when any
/// value is non-finite or outside chrono's representable range.
fn epoch_to_datetime(values: &[f64]) -> Option<Vec<DateTime<Utc>>> {
    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return None;
            }
            DateTime::from_timestamp(v.trunc() as i64, 0)
        })
        .collect()
}

/// Final invariant check: a cleaned series must be entirely numeric
/// (NaN-free) or entirely timestamps.
fn validate_series(series: &CleanedSeries, name: &str) -> Result<(), ResolveError> {
    match series {
        CleanedSeries::Numeric(values) if values.iter().any(|v| v.is_nan()) => {
            Err(ResolveError::InvalidColumnType(name.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn unparseable_rows_are_dropped_pairwise() {
        let df = table(vec![
            Column::new("reading".into(), vec!["1", "2", "abc", "4"]),
            Column::new("level".into(), vec![10.0, 20.0, 30.0, 40.0]),
        ]);

        let (x, y) = clean_and_resolve(&df, "reading", "level").unwrap();

        assert_eq!(x, CleanedSeries::Numeric(vec![1.0, 2.0, 4.0]));
        assert_eq!(y, CleanedSeries::Numeric(vec![10.0, 20.0, 40.0]));
    }

    #[test]
    fn nulls_on_either_side_drop_the_row() {
        let df = table(vec![
            Column::new("a".into(), vec![Some(1.0), None, Some(3.0), Some(4.0)]),
            Column::new("b".into(), vec![Some(5.0), Some(6.0), None, Some(8.0)]),
        ]);

        let (x, y) = clean_and_resolve(&df, "a", "b").unwrap();

        assert_eq!(x.len(), y.len());
        assert_eq!(x, CleanedSeries::Numeric(vec![1.0, 4.0]));
        assert_eq!(y, CleanedSeries::Numeric(vec![5.0, 8.0]));
    }

    #[test]
    fn cleaned_lengths_never_exceed_input() {
        let df = table(vec![
            Column::new("a".into(), vec!["1", "x", "3"]),
            Column::new("b".into(), vec!["y", "2", "3"]),
        ]);

        let (x, y) = clean_and_resolve(&df, "a", "b").unwrap();

        assert_eq!(x.len(), y.len());
        assert!(!x.is_empty() && x.len() <= df.height());
        assert_eq!(x, CleanedSeries::Numeric(vec![3.0]));
    }

    #[test]
    fn missing_column_is_rejected() {
        let df = table(vec![Column::new("a".into(), vec![1.0, 2.0])]);
        let shape = df.shape();

        let err = clean_and_resolve(&df, "a", "nope").unwrap_err();

        assert!(matches!(err, ResolveError::ColumnNotFound(name) if name == "nope"));
        assert_eq!(df.shape(), shape);
    }

    #[test]
    fn all_invalid_rows_fail() {
        let df = table(vec![
            Column::new("a".into(), vec!["x", "y"]),
            Column::new("b".into(), vec!["p", "q"]),
        ]);

        let err = clean_and_resolve(&df, "a", "b").unwrap_err();
        assert!(matches!(err, ResolveError::NoValidData));
    }

    #[test]
    fn time_column_becomes_timestamps() {
        let df = table(vec![
            Column::new("time".into(), vec![0i64, 86400]),
            Column::new("value".into(), vec![1.0, 2.0]),
        ]);

        let (x, y) = clean_and_resolve(&df, "time", "value").unwrap();

        let CleanedSeries::Timestamp(instants) = x else {
            panic!("x should be a timestamp series");
        };
        assert_eq!(instants[0], DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(instants[1].timestamp() - instants[0].timestamp(), 86400);
        assert!(!y.is_timestamp());
    }

    #[test]
    fn time_name_match_is_case_insensitive() {
        let df = table(vec![
            Column::new("Time".into(), vec![0i64, 60]),
            Column::new("TIME".into(), vec![120i64, 180]),
        ]);

        let (x, y) = clean_and_resolve(&df, "Time", "TIME").unwrap();

        assert!(x.is_timestamp());
        assert!(y.is_timestamp());
    }

    #[test]
    fn out_of_range_epoch_falls_back_to_numeric() {
        let df = table(vec![
            Column::new("time".into(), vec![0.0, 1e30]),
            Column::new("value".into(), vec![1.0, 2.0]),
        ]);

        let (x, _) = clean_and_resolve(&df, "time", "value").unwrap();

        assert_eq!(x, CleanedSeries::Numeric(vec![0.0, 1e30]));
    }

    #[test]
    fn negative_epoch_is_a_valid_instant() {
        let df = table(vec![
            Column::new("time".into(), vec![-86400i64, 0]),
            Column::new("value".into(), vec![1.0, 2.0]),
        ]);

        let (x, _) = clean_and_resolve(&df, "time", "value").unwrap();

        let CleanedSeries::Timestamp(instants) = x else {
            panic!("negative epochs should still convert");
        };
        assert_eq!(instants[0].timestamp(), -86400);
    }

    #[test]
    fn fractional_epoch_truncates_toward_zero() {
        let df = table(vec![
            Column::new("time".into(), vec![1.9, 60.5]),
            Column::new("value".into(), vec![1.0, 2.0]),
        ]);

        let (x, _) = clean_and_resolve(&df, "time", "value").unwrap();

        let CleanedSeries::Timestamp(instants) = x else {
            panic!("fractional epochs should convert");
        };
        assert_eq!(instants[0].timestamp(), 1);
        assert_eq!(instants[1].timestamp(), 60);
    }

    #[test]
    fn validate_rejects_nan_in_numeric_series() {
        let series = CleanedSeries::Numeric(vec![1.0, f64::NAN]);

        let err = validate_series(&series, "broken").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidColumnType(name) if name == "broken"));
    }
}
