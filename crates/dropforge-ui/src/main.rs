#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod theme;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("DropForge")
            .with_inner_size([540.0, 660.0])
            .with_min_inner_size([440.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DropForge",
        native_options,
        Box::new(|cc| Ok(Box::new(app::DropForgeApp::new(cc)))),
    )
}
