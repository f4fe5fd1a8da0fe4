mod app;
mod color;
mod config;
mod dashboard;
mod data;
mod state;
mod ui;

use app::DashboardApp;
use config::WindowConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let window = WindowConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window.inner_size)
            .with_min_inner_size(window.min_inner_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        window.title,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::default()))),
    )
}
