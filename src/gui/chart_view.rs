//! Chart View Widget
//! Central panel showing the current chart, or an empty-state hint.

use crate::charts::{ChartData, ChartPlotter};
use egui::RichText;

/// Central chart display area. Holds at most one chart at a time.
pub struct ChartView {
    chart: Option<ChartData>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self { chart: None }
    }
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed chart.
    pub fn set_chart(&mut self, chart: ChartData) {
        self.chart = Some(chart);
    }

    /// Drop the displayed chart (on new file selection).
    pub fn clear(&mut self) {
        self.chart = None;
    }

    /// Draw the chart view
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(chart) = &self.chart else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Open a CSV file and press Plot").size(18.0));
            });
            return;
        };

        ui.vertical(|ui| {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&chart.title).size(18.0).strong());
            });
            ui.add_space(8.0);
            ChartPlotter::draw_line_chart(ui, chart);
        });
    }
}
