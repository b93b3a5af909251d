//! Main Application Window
//! Side control panel plus central chart view; synchronous button handlers.

use crate::data::{build_chart_data, DataLoader};
use crate::gui::{ChartView, ControlPanel, ControlPanelAction};
use egui::SidePanel;

/// Main application window.
pub struct PlotterApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    chart_view: ChartView,
}

impl PlotterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            chart_view: ChartView::new(),
        }
    }

    /// Handle CSV file selection.
    fn handle_open_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return; // user cancelled
        };

        self.chart_view.clear();

        match self.loader.load_csv(&path) {
            Ok(_) => {
                let columns = self.loader.get_columns();
                let rows = self.loader.get_row_count();
                self.control_panel.settings.csv_path = self.loader.get_file_path().cloned();
                self.control_panel
                    .set_status(&format!("Loaded {} rows, {} columns", rows, columns.len()));
                self.control_panel.update_columns(columns);
            }
            Err(e) => {
                self.control_panel.set_status("Error loading CSV");
                Self::show_error(&e.to_string());
            }
        }
    }

    /// Handle a plot request.
    fn handle_plot(&mut self) {
        let settings = self.control_panel.settings.clone();
        let result = build_chart_data(
            self.loader.get_dataframe(),
            &settings.column_x,
            &settings.column_y,
        );

        match result {
            Ok(chart) => {
                self.control_panel
                    .set_status(&format!("Plotted {} points", chart.series_x.len()));
                self.chart_view.set_chart(chart);
            }
            Err(e) => {
                self.control_panel.set_status("Error");
                Self::show_error(&e.to_string());
            }
        }
    }

    /// Modal error dialog. The application stays alive and usable.
    fn show_error(message: &str) {
        log::error!("{message}");
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::OpenCsv => self.handle_open_csv(),
                        ControlPanelAction::Plot => self.handle_plot(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart View
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_view.show(ui);
        });
    }
}
