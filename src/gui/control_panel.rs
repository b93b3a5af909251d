//! Control Panel Widget
//! Left side panel with file selection and the two column dropdowns.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User settings for the current plot request.
#[derive(Default, Clone)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    pub column_x: String,
    pub column_y: String,
}

/// Left side control panel with file selection and plot controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub columns: Vec<String>,
    pub status: String,
    pub plot_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            columns: Vec::new(),
            status: "Ready".to_string(),
            plot_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update available columns after CSV load. Defaults the selection to
    /// the first two columns of the file.
    pub fn update_columns(&mut self, columns: Vec<String>) {
        self.settings.column_x = columns.first().cloned().unwrap_or_default();
        self.settings.column_y = columns.get(1).cloned().unwrap_or_default();
        self.plot_enabled = !columns.is_empty();
        self.columns = columns;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 CSV Column Plotter")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Open CSV File").clicked() {
                            action = ControlPanelAction::OpenCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Column Selection Section =====
        ui.label(RichText::new("🔧 Columns").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 110.0;
        let combo_width = 150.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Select X Column:"));
            ComboBox::from_id_salt("column_x")
                .width(combo_width)
                .selected_text(&self.settings.column_x)
                .show_ui(ui, |ui| {
                    for col in &self.columns {
                        if ui
                            .selectable_label(self.settings.column_x == *col, col)
                            .clicked()
                        {
                            self.settings.column_x = col.clone();
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Select Y Column:"));
            ComboBox::from_id_salt("column_y")
                .width(combo_width)
                .selected_text(&self.settings.column_y)
                .show_ui(ui, |ui| {
                    for col in &self.columns {
                        if ui
                            .selectable_label(self.settings.column_y == *col, col)
                            .clicked()
                        {
                            self.settings.column_y = col.clone();
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Button =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.plot_enabled, |ui| {
                let button = egui::Button::new(RichText::new("▶ Plot").size(16.0))
                    .min_size(egui::vec2(180.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Plot;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    OpenCsv,
    Plot,
}
