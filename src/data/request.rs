//! Plot Request Module
//! Validates a plot request and assembles the chart payload.

use polars::prelude::DataFrame;
use thiserror::Error;

use crate::charts::ChartData;
use crate::data::resolver::{self, ResolveError};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Please select a CSV file first")]
    NoFileSelected,
    #[error("Please select columns for both X and Y axes")]
    NoColumnsSelected,
    #[error("Please select different columns for X and Y axes")]
    SameColumnSelected,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Validate the request against the loaded table and build the chart data.
///
/// Checks run before any table access: a file must be loaded, both columns
/// must be chosen and they must differ.
pub fn build_chart_data(
    df: Option<&DataFrame>,
    name_x: &str,
    name_y: &str,
) -> Result<ChartData, RequestError> {
    let Some(df) = df else {
        return Err(RequestError::NoFileSelected);
    };
    if name_x.is_empty() || name_y.is_empty() {
        return Err(RequestError::NoColumnsSelected);
    }
    if name_x == name_y {
        return Err(RequestError::SameColumnSelected);
    }

    let (series_x, series_y) = resolver::clean_and_resolve(df, name_x, name_y)?;

    if series_x.len() != series_y.len() {
        return Err(RequestError::Unexpected(format!(
            "cleaned series lengths differ: {} vs {}",
            series_x.len(),
            series_y.len()
        )));
    }

    Ok(ChartData {
        title: format!("{name_y} vs {name_x}"),
        x_label: name_x.to_string(),
        y_label: name_y.to_string(),
        series_x,
        series_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resolver::CleanedSeries;
    use polars::prelude::*;

    fn sample_df() -> DataFrame {
        DataFrame::new(vec![
            Column::new("time".into(), vec![0i64, 60, 120]),
            Column::new("level".into(), vec![1.5, 2.5, 3.5]),
        ])
        .unwrap()
    }

    #[test]
    fn no_file_is_rejected() {
        let err = build_chart_data(None, "a", "b").unwrap_err();
        assert!(matches!(err, RequestError::NoFileSelected));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let df = sample_df();
        let err = build_chart_data(Some(&df), "", "level").unwrap_err();
        assert!(matches!(err, RequestError::NoColumnsSelected));
    }

    #[test]
    fn same_column_is_rejected_before_resolution() {
        // A name absent from the table: the duplicate check must fire first.
        let df = sample_df();
        let err = build_chart_data(Some(&df), "nope", "nope").unwrap_err();
        assert!(matches!(err, RequestError::SameColumnSelected));
    }

    #[test]
    fn resolver_errors_pass_through() {
        let df = sample_df();
        let err = build_chart_data(Some(&df), "time", "missing").unwrap_err();
        assert!(matches!(
            err,
            RequestError::Resolve(ResolveError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn chart_data_carries_title_and_labels() {
        let df = sample_df();
        let chart = build_chart_data(Some(&df), "time", "level").unwrap();

        assert_eq!(chart.title, "level vs time");
        assert_eq!(chart.x_label, "time");
        assert_eq!(chart.y_label, "level");
        assert!(chart.series_x.is_timestamp());
        assert_eq!(chart.series_y, CleanedSeries::Numeric(vec![1.5, 2.5, 3.5]));
        assert_eq!(chart.series_x.len(), chart.series_y.len());
    }
}
