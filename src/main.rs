//! CSV Column Plotter
//!
//! A Rust application for picking two columns of a CSV file and rendering
//! them as an X-Y line chart. Columns named `time` are read as epoch seconds
//! and drawn on a date axis.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::PlotterApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("CSV Column Plotter"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CSV Column Plotter",
        options,
        Box::new(|cc| Ok(Box::new(PlotterApp::new(cc)))),
    )
}
