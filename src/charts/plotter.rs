//! Chart Plotter Module
//! Draws the X-Y line chart using egui_plot.

use chrono::DateTime;
use egui::Color32;
use egui_plot::{GridMark, Line, Plot, PlotPoints, Points};
use std::ops::RangeInclusive;

use crate::data::CleanedSeries;

/// Series color (fresh green).
pub const SERIES_COLOR: Color32 = Color32::from_rgb(46, 204, 113);

/// Chart payload for a single plot request.
#[derive(Clone, Debug)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_x: CleanedSeries,
    pub series_y: CleanedSeries,
}

/// Creates the interactive line chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the line chart with point markers.
    /// Timestamp axes get date-aware tick labels.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &ChartData) {
        let xs = Self::axis_values(&chart.series_x);
        let ys = Self::axis_values(&chart.series_y);

        let mut plot = Plot::new("column_plot")
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false);

        if chart.series_x.is_timestamp() {
            plot = plot.x_axis_formatter(Self::date_axis_formatter);
        }
        if chart.series_y.is_timestamp() {
            plot = plot.y_axis_formatter(Self::date_axis_formatter);
        }

        plot.show(ui, |plot_ui| {
            let line_points: PlotPoints = xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| [x, y])
                .collect();
            plot_ui.line(
                Line::new(line_points)
                    .color(SERIES_COLOR)
                    .width(1.5)
                    .name(&chart.y_label),
            );

            let markers: PlotPoints = xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| [x, y])
                .collect();
            plot_ui.points(Points::new(markers).radius(3.0).color(SERIES_COLOR));
        });
    }

    /// Plot-space values for one axis. Timestamps plot as epoch seconds and
    /// rely on the axis formatter for display.
    fn axis_values(series: &CleanedSeries) -> Vec<f64> {
        match series {
            CleanedSeries::Numeric(values) => values.clone(),
            CleanedSeries::Timestamp(instants) => {
                instants.iter().map(|dt| dt.timestamp() as f64).collect()
            }
        }
    }

    /// Tick formatter for epoch-second axes. Granularity follows the visible
    /// range: dates when zoomed out, time of day when zoomed in.
    fn date_axis_formatter(mark: GridMark, range: &RangeInclusive<f64>) -> String {
        let Some(dt) = DateTime::from_timestamp(mark.value as i64, 0) else {
            return String::new();
        };

        let span = range.end() - range.start();
        if span > 3.0 * 86_400.0 {
            dt.format("%Y-%m-%d").to_string()
        } else if span > 86_400.0 {
            dt.format("%m-%d %H:%M").to_string()
        } else {
            dt.format("%H:%M:%S").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn timestamps_plot_as_epoch_seconds() {
        let instants = vec![
            DateTime::from_timestamp(0, 0).unwrap(),
            DateTime::from_timestamp(86_400, 0).unwrap(),
        ];
        let series = CleanedSeries::Timestamp(instants);

        assert_eq!(ChartPlotter::axis_values(&series), vec![0.0, 86_400.0]);
    }

    #[test]
    fn numeric_values_pass_through() {
        let series = CleanedSeries::Numeric(vec![1.0, 2.5]);
        assert_eq!(ChartPlotter::axis_values(&series), vec![1.0, 2.5]);
    }

    #[test]
    fn formatter_picks_granularity_from_range() {
        let mark = |value| GridMark {
            value,
            step_size: 1.0,
        };
        let day: DateTime<Utc> = DateTime::from_timestamp(86_400, 0).unwrap();

        let wide = ChartPlotter::date_axis_formatter(mark(86_400.0), &(0.0..=864_000.0));
        assert_eq!(wide, day.format("%Y-%m-%d").to_string());

        let narrow = ChartPlotter::date_axis_formatter(mark(3_600.0), &(0.0..=7_200.0));
        assert_eq!(narrow, "01:00:00");
    }
}
