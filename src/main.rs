//! Gridplan
//!
//! A local-first desktop drag-and-drop weekly schedule editor with
//! spreadsheet and HTML export.

mod app;
mod components;
mod constants;
mod core;
mod grid;
mod hotkeys;
mod logging;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    if let Err(err) = logging::init_logging(logging::default_log_level(), std::path::Path::new("logs")) {
        eprintln!("logging unavailable: {err}");
    }

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Gridplan Schedule Editor")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
