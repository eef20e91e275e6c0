#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::Path;

use raster_paint::{AppConfig, PaintApp};

fn load_icon(path: &Path) -> Option<egui::IconData> {
    match image::open(path) {
        Ok(icon) => {
            let rgba = icon.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(err) => {
            log::warn!("Could not load window icon {}: {}", path.display(), err);
            None
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match AppConfig::load_from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Falling back to the default configuration: {}", err);
            AppConfig::default()
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Raster Paint")
        .with_inner_size(config.window_size)
        .with_min_inner_size([480.0, 360.0])
        .with_maximized(config.start_maximized)
        .with_drag_and_drop(true);
    if let Some(icon) = config.icon_path.as_deref().and_then(load_icon) {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Raster Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
