#![deny(missing_docs)]

//! Entry point for the drying-time prediction dashboard.
use std::path::PathBuf;

use eframe::egui;
use floradry::config;
use floradry::egui_app::controller::DashboardController;
use floradry::egui_app::ui::{APP_TITLE, DashboardApp, LaunchError, MIN_VIEWPORT_SIZE};
use floradry::logging::{self, Component};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init(Component::Dashboard) {
        eprintln!("Logging disabled: {err}");
    }

    let config_path = config_path_from_args(std::env::args().skip(1));
    let launch = initialize(config_path);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(build_app(launch))),
    )?;
    Ok(())
}

/// Load config and the scaler artifact once for the whole session.
fn initialize(config_path: Option<PathBuf>) -> Result<DashboardController, String> {
    let config = config::load(config_path.as_deref()).map_err(|err| {
        tracing::error!("Failed to load config: {err}");
        format!("Failed to load config: {err}")
    })?;
    DashboardController::initialize(&config).map_err(|err| {
        tracing::error!("Error loading model/scaler: {err}");
        err.to_string()
    })
}

fn build_app(launch: Result<DashboardController, String>) -> Box<dyn eframe::App> {
    match launch {
        Ok(controller) => Box::new(DashboardApp::new(controller)),
        Err(message) => Box::new(LaunchError::new(message)),
    }
}

/// Pick up `--config <file>`; other arguments are ignored.
fn config_path_from_args(args: impl Iterator<Item = String>) -> Option<PathBuf> {
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(value));
        }
    }
    None
}
